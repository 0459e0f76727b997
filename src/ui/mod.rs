//! Operator-facing output.
//!
//! - `formatter` - String builders and the `display_*` functions that print them
//!
//! Questions live in `prompt`; this module only reports.

pub mod formatter;

pub use formatter::{
    display_error, display_failure_details, display_header, display_skipped, display_status,
    display_step, display_step_output, display_success, display_success_report, display_warning,
    format_failure_details, format_header, format_step, format_success_report,
};
