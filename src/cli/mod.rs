//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{wants_usage, Cli};
pub use output::{
    format_configuration, format_patch_report, format_unpatch_all_report, format_unpatch_report,
};
