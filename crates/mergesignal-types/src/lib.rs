//! Stable DTOs and IDs used across the mergesignal workspace.
//!
//! This crate is intentionally boring:
//! - the match mode shared by config and reports
//! - the pull request snapshot accepted on input
//! - data types for the emitted report
//! - stable string IDs for signals, tags and behaviors
//! - explain registry for configuration guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod mode;
pub mod pull;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use mode::MatchMode;
pub use pull::{PullSnapshotV1, SCHEMA_PULL_V1};
pub use receipt::{
    PullMeta, ReportEnvelope, SCHEMA_REPORT_V1, TagEvaluation, ToolMeta, Verdict,
};
