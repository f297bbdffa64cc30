//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    empty_message, format_entry_detail, format_entry_list, format_export_status,
    format_import_report, format_relative_time, format_result_status, format_suggestions,
    format_tag_counts,
};
