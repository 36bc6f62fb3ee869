use super::{Outcome, Signal};
use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use mergesignal_types::ids;

/// Author login, compared exactly.
pub struct Creators;

impl Signal for Creators {
    fn id(&self) -> &'static str {
        ids::SIGNAL_CREATORS
    }

    fn evaluate(
        &self,
        signals: &SignalSet,
        pull: &dyn PullContext,
        tag: &str,
    ) -> Result<Outcome, SignalError> {
        if signals.creators.is_empty() {
            return Ok(Outcome::NotConfigured);
        }

        let creator = pull.creator();
        if signals.creators.iter().any(|c| c == creator) {
            Ok(Outcome::Matched(format!(
                "pull request creator {creator:?} is a {tag} creator"
            )))
        } else {
            Ok(Outcome::NotMatched(format!(
                "pull request creator {creator:?} is not a {tag} creator"
            )))
        }
    }
}
