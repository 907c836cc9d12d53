//! CLI module for ionosim.
//!
//! All bootstrap logic lives here rather than in main.rs so the full
//! launch sequence can be exercised in tests against mock runtime and
//! solver implementations.

mod args;
mod commands;
mod output;

pub use args::Invocation;
pub use commands::run_cli;
pub use output::{print_config_review, print_help};
