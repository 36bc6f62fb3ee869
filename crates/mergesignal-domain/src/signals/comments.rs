use super::{Outcome, Signal};
use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use mergesignal_types::ids;

/// Body or a single comment equal to a configured string.
pub struct Comments;

impl Signal for Comments {
    fn id(&self) -> &'static str {
        ids::SIGNAL_COMMENTS
    }

    fn evaluate(
        &self,
        signals: &SignalSet,
        pull: &dyn PullContext,
        tag: &str,
    ) -> Result<Outcome, SignalError> {
        let body = pull.body();
        let comments = pull.comments().map_err(SignalError::Comments)?;

        if signals.comments.is_empty() {
            return Ok(Outcome::NotConfigured);
        }

        for wanted in &signals.comments {
            if body == wanted {
                return Ok(Outcome::Matched(format!(
                    "pull request body is a {tag} comment: {wanted:?}"
                )));
            }
            if comments.iter().any(|c| c == wanted) {
                return Ok(Outcome::Matched(format!(
                    "pull request has a {tag} comment: {wanted:?}"
                )));
            }
        }

        Ok(Outcome::NotMatched(format!(
            "pull request does not have a {tag} comment"
        )))
    }
}
