use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for pull request snapshots.
pub const SCHEMA_PULL_V1: &str = "mergesignal.pull.v1";

/// Point-in-time snapshot of the pull request fields signals read.
///
/// Hosts that already talk to a forge API serialize what they fetched into this shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PullSnapshotV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub body: String,

    /// Comment bodies, oldest first.
    #[serde(default)]
    pub comments: Vec<String>,

    #[serde(default)]
    pub labels: Vec<String>,

    /// Target branch the pull request merges into.
    pub base: String,

    /// Source branch; carried for reports, never matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,

    /// Login of the account that opened the pull request.
    pub creator: String,
}
