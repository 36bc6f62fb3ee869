use super::{Outcome, Signal};
use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use mergesignal_types::ids;

/// Body containing a configured substring. Comments are not read.
pub struct PrBodySubstrings;

impl Signal for PrBodySubstrings {
    fn id(&self) -> &'static str {
        ids::SIGNAL_PR_BODY_SUBSTRINGS
    }

    fn evaluate(
        &self,
        signals: &SignalSet,
        pull: &dyn PullContext,
        tag: &str,
    ) -> Result<Outcome, SignalError> {
        if signals.pr_body_substrings.is_empty() {
            return Ok(Outcome::NotConfigured);
        }

        let body = pull.body();
        match signals
            .pr_body_substrings
            .iter()
            .find(|needle| body.contains(needle.as_str()))
        {
            Some(needle) => Ok(Outcome::Matched(format!(
                "pull request body matches a {tag} substring: {needle:?}"
            ))),
            None => Ok(Outcome::NotMatched(format!(
                "pull request body does not contain a {tag} substring"
            ))),
        }
    }
}
