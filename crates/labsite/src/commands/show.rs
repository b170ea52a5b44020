//! Print the navigation tree.

use std::fmt::{self, Write};
use std::path::Path;

use anyhow::Result;
use labsite_config::{load_or_default, NavItem, SiteConfig};

/// Run the show command.
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path)?;
    let mut out = String::new();
    render_tree(&mut out, &config)?;
    print!("{}", out);
    Ok(())
}

/// Indented view of the nav bar, sidebar and social links with resolved routes.
pub fn render_tree(out: &mut impl Write, config: &SiteConfig) -> fmt::Result {
    writeln!(out, "{} ({})", config.title, config.base)?;

    writeln!(out, "nav:")?;
    for item in &config.theme_config.nav {
        push_item(out, config, item, 1)?;
    }

    writeln!(out, "sidebar:")?;
    for group in &config.theme_config.sidebar {
        writeln!(out, "  {}", group.text)?;
        for item in &group.items {
            push_item(out, config, item, 2)?;
        }
    }

    writeln!(out, "social:")?;
    for social in &config.theme_config.social_links {
        writeln!(out, "  {} -> {}", social.icon, social.link)?;
    }

    Ok(())
}

fn push_item(
    out: &mut impl Write,
    config: &SiteConfig,
    item: &NavItem,
    depth: usize,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match &item.link {
        Some(link) => writeln!(out, "{}{} -> {}", indent, item.text, config.route(link))?,
        None => writeln!(out, "{}{}", indent, item.text)?,
    }
    for child in &item.items {
        push_item(out, config, child, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labsite_config::workshop;

    fn tree(config: &SiteConfig) -> String {
        let mut out = String::new();
        render_tree(&mut out, config).unwrap();
        out
    }

    #[test]
    fn renders_workshop_tree() {
        let tree = tree(&workshop());
        let lines: Vec<&str> = tree.lines().collect();

        assert_eq!(
            lines[0],
            "Copilot Studio Extensibility Labs (/scs25-copilot-studio-extensibility/)"
        );
        assert_eq!(lines[1], "nav:");
        assert_eq!(
            lines[2],
            "  Lab 01 -> /scs25-copilot-studio-extensibility/lab-01/"
        );
        assert!(tree.contains("  Lab 05 (Bonus) -> /scs25-copilot-studio-extensibility/lab-05/"));
        assert!(tree.contains("  Labs\n    Lab 01 -> "));
        assert!(tree.contains(
            "  github -> https://github.com/microsoft/scs25-copilot-studio-extensibility"
        ));
    }

    #[test]
    fn nests_dropdown_items() {
        let mut config = workshop();
        config.theme_config.nav = vec![NavItem::group(
            "More",
            vec![
                NavItem::link("Resources", "/resources"),
                NavItem::link("Contact", "mailto:labs@example.com"),
            ],
        )];

        let tree = tree(&config);

        assert!(tree.contains(
            "nav:\n  More\n    Resources -> /scs25-copilot-studio-extensibility/resources\n    Contact -> mailto:labs@example.com\n"
        ));
    }
}
