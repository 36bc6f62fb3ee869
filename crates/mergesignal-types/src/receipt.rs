use crate::MatchMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for mergesignal reports.
pub const SCHEMA_REPORT_V1: &str = "mergesignal.report.v1";

/// Outcome of deciding one behavior for one pull request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The behavior should run (e.g. the pull request may be merged).
    Proceed,
    /// The behavior should not run; `reason` says which signal decided it.
    Skip,
    /// Evaluation did not complete (config, snapshot, or accessor failure).
    Error,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Proceed => "proceed",
            Verdict::Skip => "skip",
            Verdict::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PullMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One signal set (`trigger` or `ignore`) as it was evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TagEvaluation {
    pub tag: String,
    pub mode: MatchMode,

    /// False when the set carries no values; such sets are never evaluated.
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    /// Behavior the verdict applies to (`merge`, `update`).
    pub behavior: String,

    #[serde(default)]
    pub pull: PullMeta,

    pub verdict: Verdict,
    pub reason: String,

    #[serde(default)]
    pub evaluations: Vec<TagEvaluation>,
}
