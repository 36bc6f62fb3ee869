//! Use case orchestration for mergesignal.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;
mod snapshot;
mod validate;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::render_markdown;
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use snapshot::parse_pull_snapshot;
pub use validate::{SetSummary, ValidateOutput, format_validation, run_validate};

pub use mergesignal_settings::Behavior;
