//! Navigation descriptor for the workshop lab documentation site.
//!
//! This crate models the configuration a static-site generator consumes to render the
//! nav bar, sidebar and social links, ships the built-in workshop descriptor, and
//! provides loading, checking and emission.

pub mod check;
pub mod emit;
pub mod loader;
pub mod model;
pub mod workshop;

pub use check::{check, Finding, Report, Severity};
pub use emit::{EmitError, Format};
pub use loader::{load, load_or_default, to_toml, ConfigError};
pub use model::{NavItem, SidebarGroup, SiteConfig, SocialIcon, SocialLink, ThemeConfig};
pub use workshop::workshop;
