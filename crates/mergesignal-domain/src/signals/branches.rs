use super::{Outcome, Signal};
use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use mergesignal_types::ids;

/// Target branch, by exact name first and then by full-match pattern.
pub struct Branches;

impl Signal for Branches {
    fn id(&self) -> &'static str {
        ids::SIGNAL_BRANCHES
    }

    fn evaluate(
        &self,
        signals: &SignalSet,
        pull: &dyn PullContext,
        tag: &str,
    ) -> Result<Outcome, SignalError> {
        if signals.branches.is_empty() && signals.branch_patterns.is_empty() {
            return Ok(Outcome::NotConfigured);
        }

        let (target, _) = pull.branches();

        if let Some(branch) = signals.branches.iter().find(|b| *b == target) {
            return Ok(Outcome::Matched(format!(
                "pull request target is a {tag} branch: {branch:?}"
            )));
        }

        if let Some(pattern) = signals
            .branch_patterns
            .iter()
            .find(|p| p.is_full_match(target))
        {
            return Ok(Outcome::Matched(format!(
                "pull request target branch ({target:?}) matches {tag} pattern: {:?}",
                pattern.as_str()
            )));
        }

        Ok(Outcome::NotMatched(format!(
            "pull request target branch ({target:?}) is not a {tag} branch"
        )))
    }
}
