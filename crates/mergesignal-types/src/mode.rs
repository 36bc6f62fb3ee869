use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the outcomes of several signals combine.
///
/// Serialized as `one` / `all`; `any` is accepted on input as an alias of `one`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum MatchMode {
    /// Any single configured signal matching is enough.
    #[default]
    #[serde(rename = "one", alias = "any")]
    Any,
    /// Every configured signal must match; unconfigured signals are skipped.
    #[serde(rename = "all")]
    All,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Any => "one",
            MatchMode::All => "all",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
