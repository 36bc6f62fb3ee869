//! Trigger/ignore decision for one behavior (merge, update).
//!
//! Ignore is checked first; a matching ignore set always wins. Without any trigger
//! configured, every pull request that is not ignored proceeds.

use crate::engine::{Evaluation, evaluate_enabled};
use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use mergesignal_types::ids;

/// The two signal sets configured for a behavior.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BehaviorSignals {
    pub trigger: SignalSet,
    pub ignore: SignalSet,
}

impl BehaviorSignals {
    pub fn enabled(&self) -> bool {
        self.trigger.enabled() || self.ignore.enabled()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed { reason: String },
    Skip { reason: String },
}

impl Decision {
    pub fn proceeds(&self) -> bool {
        matches!(self, Decision::Proceed { .. })
    }

    pub fn reason(&self) -> &str {
        match self {
            Decision::Proceed { reason } | Decision::Skip { reason } => reason,
        }
    }
}

/// How one tagged signal set took part in a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagTrace {
    pub tag: &'static str,
    /// `None` when the set was disabled or evaluation stopped before reaching it.
    pub evaluation: Option<Evaluation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionTrace {
    pub decision: Decision,
    /// Always `[ignore, trigger]`.
    pub tags: Vec<TagTrace>,
}

pub fn decide(
    signals: &BehaviorSignals,
    pull: &dyn PullContext,
) -> Result<DecisionTrace, SignalError> {
    let ignore = evaluate_enabled(&signals.ignore, pull, ids::TAG_IGNORE)?;
    if let Some(eval) = ignore.as_ref().filter(|e| e.matched) {
        return Ok(DecisionTrace {
            decision: Decision::Skip {
                reason: eval.reason.clone(),
            },
            tags: vec![
                TagTrace {
                    tag: ids::TAG_IGNORE,
                    evaluation: ignore.clone(),
                },
                TagTrace {
                    tag: ids::TAG_TRIGGER,
                    evaluation: None,
                },
            ],
        });
    }

    let trigger = evaluate_enabled(&signals.trigger, pull, ids::TAG_TRIGGER)?;
    let decision = match &trigger {
        Some(eval) if eval.matched => Decision::Proceed {
            reason: eval.reason.clone(),
        },
        Some(eval) => Decision::Skip {
            reason: eval.reason.clone(),
        },
        None => Decision::Proceed {
            reason: "no trigger signals configured; pull request is not ignored".to_string(),
        },
    };

    Ok(DecisionTrace {
        decision,
        tags: vec![
            TagTrace {
                tag: ids::TAG_IGNORE,
                evaluation: ignore,
            },
            TagTrace {
                tag: ids::TAG_TRIGGER,
                evaluation: trigger,
            },
        ],
    })
}
