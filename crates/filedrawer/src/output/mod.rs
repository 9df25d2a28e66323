//! Output sinks for simulation results.
//!
//! - **Terminal** (`terminal`): colored human-readable summary
//! - **JSON** (`json`): machine-readable report
//! - **CSV** (`csv`): one row per trial for interval plots

pub mod csv;
pub mod json;
pub mod terminal;

pub use csv::{write_rows_csv, write_rows_csv_file, ROW_HEADER};
pub use json::{to_json, to_json_pretty, write_json_file};
pub use terminal::{format_report, format_row_table, is_verbose};
