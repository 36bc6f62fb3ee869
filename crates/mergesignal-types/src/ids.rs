//! Stable identifiers for signals, tags, and behaviors.
//!
//! Signal IDs are a dotted namespace matching the configuration key they read.

// Signals, in evaluation order.
pub const SIGNAL_LABEL: &str = "signal.label";
pub const SIGNAL_COMMENTS: &str = "signal.comments";
pub const SIGNAL_COMMENT_SUBSTRINGS: &str = "signal.comment_substrings";
pub const SIGNAL_PR_BODY_SUBSTRINGS: &str = "signal.pr_body_substrings";
pub const SIGNAL_BRANCHES: &str = "signal.branches";
pub const SIGNAL_CREATORS: &str = "signal.creators";

// Aggregation modes
pub const MATCH_ONE: &str = "match.one";
pub const MATCH_ALL: &str = "match.all";

// Tags: which side of a behavior a signal set configures.
pub const TAG_TRIGGER: &str = "trigger";
pub const TAG_IGNORE: &str = "ignore";

// Behaviors
pub const BEHAVIOR_MERGE: &str = "merge";
pub const BEHAVIOR_UPDATE: &str = "update";
