//! CLI subcommands.

pub mod check;
pub mod emit;
pub mod init;
pub mod show;
