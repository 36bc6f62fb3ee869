use super::{Outcome, Signal};
use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use mergesignal_types::ids;

/// Body or any comment containing a configured substring.
pub struct CommentSubstrings;

impl Signal for CommentSubstrings {
    fn id(&self) -> &'static str {
        ids::SIGNAL_COMMENT_SUBSTRINGS
    }

    fn evaluate(
        &self,
        signals: &SignalSet,
        pull: &dyn PullContext,
        tag: &str,
    ) -> Result<Outcome, SignalError> {
        let body = pull.body();
        let comments = pull.comments().map_err(SignalError::Comments)?;

        if signals.comment_substrings.is_empty() {
            return Ok(Outcome::NotConfigured);
        }

        for needle in &signals.comment_substrings {
            if body.contains(needle.as_str()) {
                return Ok(Outcome::Matched(format!(
                    "pull request body matches a {tag} substring: {needle:?}"
                )));
            }
            if comments.iter().any(|c| c.contains(needle.as_str())) {
                return Ok(Outcome::Matched(format!(
                    "pull request comment matches a {tag} substring: {needle:?}"
                )));
            }
        }

        Ok(Outcome::NotMatched(format!(
            "pull request body and comments do not contain a {tag} substring"
        )))
    }
}
