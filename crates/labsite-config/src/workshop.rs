//! Built-in descriptor for the Copilot Studio extensibility workshop.

use crate::model::{NavItem, SidebarGroup, SiteConfig, SocialIcon, SocialLink, ThemeConfig};

/// Number of labs, the last of which is the bonus lab.
pub const LAB_COUNT: usize = 5;

/// Project sub-path the site is published under.
pub const BASE: &str = "/scs25-copilot-studio-extensibility/";

/// Source repository, linked from the nav bar.
pub const REPOSITORY: &str = "https://github.com/microsoft/scs25-copilot-studio-extensibility";

pub const TITLE: &str = "Copilot Studio Extensibility Labs";

pub const DESCRIPTION: &str = "Hands-on labs for extending Microsoft Copilot Studio";

pub const RESOURCES_LINK: &str = "/resources";

/// Path of lab `n` (1-based), e.g. `/lab-03/`.
pub fn lab_link(n: usize) -> String {
    format!("/lab-{:02}/", n)
}

fn lab_title(n: usize) -> String {
    if n == LAB_COUNT {
        format!("Lab {:02} (Bonus)", n)
    } else {
        format!("Lab {:02}", n)
    }
}

/// Lab entries shared by the nav bar and the sidebar, so the two never drift.
fn labs() -> Vec<NavItem> {
    (1..=LAB_COUNT)
        .map(|n| NavItem::link(lab_title(n), lab_link(n)))
        .collect()
}

fn resources() -> NavItem {
    NavItem::link("Resources", RESOURCES_LINK)
}

/// Build the workshop descriptor.
///
/// Every call returns a fresh value; nothing here depends on time or environment.
pub fn workshop() -> SiteConfig {
    let mut nav = labs();
    nav.push(resources());

    SiteConfig {
        title: TITLE.to_string(),
        base: BASE.to_string(),
        description: DESCRIPTION.to_string(),
        theme_config: ThemeConfig {
            nav,
            sidebar: vec![
                SidebarGroup::new("Labs", labs()),
                SidebarGroup::new("Resources", vec![resources()]),
            ],
            social_links: vec![SocialLink {
                icon: SocialIcon::Github,
                link: REPOSITORY.to_string(),
            }],
        },
    }
}
