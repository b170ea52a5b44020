//! Consistency report over a descriptor.
//!
//! The generator stays the authority on whether a build fails. This report only points
//! at drift a human would want to see before handing the descriptor over: nav and
//! sidebar disagreeing, a malformed base path, duplicated links and the like.

use std::collections::HashSet;
use std::fmt;

use crate::model::{is_external, is_http_url, SiteConfig};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// All findings for one descriptor, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    /// True when nothing rises to an error.
    pub fn is_clean(&self) -> bool {
        !self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

/// Check a descriptor.
pub fn check(config: &SiteConfig) -> Report {
    let mut findings = Vec::new();

    check_base(&config.base, &mut findings);
    check_nav_entries(config, &mut findings);

    let nav = config.nav_links();
    let sidebar = config.sidebar_links();

    check_duplicates("nav", &nav, &mut findings);
    check_duplicates("sidebar", &sidebar, &mut findings);
    check_drift(&nav, &sidebar, &mut findings);

    for group in &config.theme_config.sidebar {
        if group.items.is_empty() {
            findings.push(Finding::warning(format!(
                "sidebar group '{}' has no entries",
                group.text
            )));
        }
    }

    for social in &config.theme_config.social_links {
        if !is_http_url(&social.link) {
            findings.push(Finding::error(format!(
                "{} social link '{}' is not an absolute http(s) URL",
                social.icon, social.link
            )));
        }
    }

    Report { findings }
}

fn check_base(base: &str, findings: &mut Vec<Finding>) {
    if base.is_empty() {
        findings.push(Finding::error("base path is empty"));
    } else if !base.starts_with('/') || !base.ends_with('/') {
        findings.push(Finding::error(format!(
            "base path '{}' must start and end with '/'",
            base
        )));
    }
}

fn check_nav_entries(config: &SiteConfig, findings: &mut Vec<Finding>) {
    for item in &config.theme_config.nav {
        if item.link.is_none() && item.items.is_empty() {
            findings.push(Finding::error(format!(
                "nav entry '{}' has neither a link nor nested items",
                item.text
            )));
        }
    }
}

fn check_duplicates(section: &str, links: &[(&str, &str)], findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for (text, link) in links {
        if !seen.insert(*link) {
            findings.push(Finding::warning(format!(
                "{} links '{}' more than once (again under '{}')",
                section, link, text
            )));
        }
    }
}

/// Site-relative links present in one list but not the other.
fn check_drift(nav: &[(&str, &str)], sidebar: &[(&str, &str)], findings: &mut Vec<Finding>) {
    let nav_set: HashSet<&str> = nav.iter().map(|(_, link)| *link).collect();
    let sidebar_set: HashSet<&str> = sidebar.iter().map(|(_, link)| *link).collect();

    for (text, link) in sidebar {
        if !is_external(link) && !nav_set.contains(link) {
            findings.push(Finding::warning(format!(
                "sidebar entry '{}' ({}) is missing from nav",
                text, link
            )));
        }
    }

    for (text, link) in nav {
        if !is_external(link) && !sidebar_set.contains(link) {
            findings.push(Finding::warning(format!(
                "nav entry '{}' ({}) is missing from sidebar",
                text, link
            )));
        }
    }
}
