//! CLI subcommand implementations.

pub mod info;
pub mod search;
pub mod show;
pub mod themes;
