//! CLI subcommands.

pub mod audit;
pub mod init;
pub mod list;
pub mod render;
pub mod show;
