use mergesignal_types::MatchMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `mergesignal.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MergesignalConfigV1 {
    /// Optional schema string for tooling (`mergesignal.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Signals deciding whether a pull request is merged.
    #[serde(default)]
    pub merge: BehaviorConfig,

    /// Signals deciding whether a pull request branch is kept up to date.
    #[serde(default)]
    pub update: BehaviorConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BehaviorConfig {
    /// Pull requests matching these signals are candidates.
    #[serde(default)]
    pub trigger: SignalsConfig,

    /// Pull requests matching these signals are skipped, even when triggered.
    #[serde(default)]
    pub ignore: SignalsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SignalsConfig {
    #[serde(default)]
    pub label: LabelConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comment_substrings: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pr_body_substrings: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,

    /// Regular expressions matched against the whole target branch name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branch_patterns: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<String>,

    /// `one` (default) or `all`.
    #[serde(default, rename = "match")]
    pub mode: MatchMode,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelConfig {
    /// `one` (default) or `all`, independent of the enclosing signal set.
    #[serde(default, rename = "match")]
    pub mode: MatchMode,

    /// Label names, compared case-insensitively.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}
