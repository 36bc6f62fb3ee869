//! One [`Signal`] per condition kind, evaluated in [`ORDERED`] sequence.

use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;

mod branches;
mod comment_substrings;
mod comments;
mod creators;
mod label;
mod pr_body_substrings;

pub use branches::Branches;
pub use comment_substrings::CommentSubstrings;
pub use comments::Comments;
pub use creators::Creators;
pub use label::Label;
pub use pr_body_substrings::PrBodySubstrings;

/// Result of evaluating a single signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Matched(String),
    /// Configured, evaluated, and not satisfied.
    NotMatched(String),
    /// No values configured for this signal; it takes no part in aggregation.
    NotConfigured,
}

impl Outcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }
}

/// A condition kind that can be checked against a pull request.
pub trait Signal: Sync {
    /// Stable ID from `mergesignal_types::ids`.
    fn id(&self) -> &'static str;

    /// `tag` names the behavior side (`trigger`, `ignore`) and only appears in reasons.
    fn evaluate(
        &self,
        signals: &SignalSet,
        pull: &dyn PullContext,
        tag: &str,
    ) -> Result<Outcome, SignalError>;
}

/// Evaluation order. Under match-one, earlier signals take priority for the reason.
pub static ORDERED: &[&dyn Signal] = &[
    &Label,
    &Comments,
    &CommentSubstrings,
    &PrBodySubstrings,
    &Branches,
    &Creators,
];
