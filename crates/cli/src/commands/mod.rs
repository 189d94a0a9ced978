//! CLI subcommands.

pub mod orders;
pub mod seed;
