use super::{Outcome, Signal};
use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use mergesignal_types::{MatchMode, ids};

/// Labels on the pull request, compared case-insensitively.
pub struct Label;

impl Signal for Label {
    fn id(&self) -> &'static str {
        ids::SIGNAL_LABEL
    }

    fn evaluate(
        &self,
        signals: &SignalSet,
        pull: &dyn PullContext,
        tag: &str,
    ) -> Result<Outcome, SignalError> {
        let labels = pull.labels().map_err(SignalError::Labels)?;

        let required = &signals.label.values;
        if required.is_empty() {
            return Ok(Outcome::NotConfigured);
        }

        let present = |value: &str| labels.iter().any(|l| fold_eq(l, value));

        match signals.label.mode {
            MatchMode::All => {
                if let Some(missing) = required.iter().find(|v| !present(v.as_str())) {
                    return Ok(Outcome::NotMatched(format!(
                        "pull request is missing a {tag} label: {missing:?}"
                    )));
                }
                Ok(Outcome::Matched(format!(
                    "pull request has all {tag} labels: {required:?}"
                )))
            }
            MatchMode::Any => match required.iter().find(|v| present(v.as_str())) {
                Some(found) => Ok(Outcome::Matched(format!(
                    "pull request has a {tag} label: {found:?}"
                ))),
                None => Ok(Outcome::NotMatched(format!(
                    "pull request does not have any {tag} label"
                ))),
            },
        }
    }
}

/// Case-insensitive comparison under Unicode lowercasing.
fn fold_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
