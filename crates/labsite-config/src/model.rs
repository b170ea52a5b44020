//! Descriptor types in the shape the static-site generator expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A navigation entry.
///
/// Either a plain link or a dropdown carrying nested `items`. Field names match the
/// generator's schema, so the serialized form can be handed over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label
    pub text: String,

    /// Target path, site-relative or absolute URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Nested entries for dropdown menus
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// Create a plain link entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: Vec::new(),
        }
    }

    /// Create a dropdown entry.
    pub fn group(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items,
        }
    }

    /// All `(text, link)` pairs under this entry, depth-first in declaration order.
    pub fn links(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        if let Some(link) = &self.link {
            out.push((&self.text, link));
        }
        for child in &self.items {
            child.collect_links(out);
        }
    }
}

/// A titled sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading
    pub text: String,

    /// Entries belonging to the group
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

/// Icons the generator ships for the social links block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Discord,
    Facebook,
    Github,
    Instagram,
    Linkedin,
    Mastodon,
    Npm,
    Slack,
    Twitter,
    X,
    Youtube,
}

impl SocialIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialIcon::Discord => "discord",
            SocialIcon::Facebook => "facebook",
            SocialIcon::Github => "github",
            SocialIcon::Instagram => "instagram",
            SocialIcon::Linkedin => "linkedin",
            SocialIcon::Mastodon => "mastodon",
            SocialIcon::Npm => "npm",
            SocialIcon::Slack => "slack",
            SocialIcon::Twitter => "twitter",
            SocialIcon::X => "x",
            SocialIcon::Youtube => "youtube",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An icon link rendered in the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Theme section: nav bar, sidebar and social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default)]
    pub nav: Vec<NavItem>,

    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,

    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// Root site descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title shown in the nav bar
    pub title: String,

    /// URL prefix the site is served under
    #[serde(default = "default_base")]
    pub base: String,

    /// Meta description
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub theme_config: ThemeConfig,
}

fn default_base() -> String {
    "/".to_string()
}

impl SiteConfig {
    /// Resolve a declared link to the URL the generator will serve it at.
    ///
    /// Absolute URLs pass through untouched; site-relative links get `base` prepended.
    pub fn route(&self, link: &str) -> String {
        if is_external(link) {
            return link.to_string();
        }

        let base = self.base.trim_end_matches('/');
        let path = link.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Every link declared in the nav bar, in render order.
    pub fn nav_links(&self) -> Vec<(&str, &str)> {
        self.theme_config.nav.iter().flat_map(NavItem::links).collect()
    }

    /// Every link declared in the sidebar, in render order.
    pub fn sidebar_links(&self) -> Vec<(&str, &str)> {
        self.theme_config
            .sidebar
            .iter()
            .flat_map(|group| group.items.iter().flat_map(NavItem::links))
            .collect()
    }
}

/// Whether a link points off-site: any URI scheme (`mailto:`, `https:`) or a
/// protocol-relative `//host` prefix.
pub fn is_external(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }

    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '.' | '-')
        }),
        _ => false,
    }
}

/// Whether a link is an absolute `http(s)` URL.
pub fn is_http_url(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
