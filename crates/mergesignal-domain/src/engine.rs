use crate::error::SignalError;
use crate::model::SignalSet;
use crate::pull::PullContext;
use crate::signals::{ORDERED, Outcome};
use mergesignal_types::MatchMode;

/// Aggregate result of evaluating a signal set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub matched: bool,
    pub reason: String,
}

impl Evaluation {
    fn matched(reason: String) -> Self {
        Self {
            matched: true,
            reason,
        }
    }

    fn not_matched(reason: String) -> Self {
        Self {
            matched: false,
            reason,
        }
    }
}

/// Decide whether `pull` satisfies `signals`.
///
/// `tag` names the behavior side (`trigger`, `ignore`) and appears in the reason.
/// Accessor failures abort immediately, whatever the mode.
///
/// A disabled set vacuously matches under [`MatchMode::All`]; hosts should check
/// [`SignalSet::enabled`] first or call [`evaluate_enabled`].
pub fn evaluate(
    signals: &SignalSet,
    pull: &dyn PullContext,
    tag: &str,
) -> Result<Evaluation, SignalError> {
    match signals.mode {
        MatchMode::Any => matches_one(signals, pull, tag),
        MatchMode::All => matches_all(signals, pull, tag),
    }
}

/// Like [`evaluate`], but returns `None` without touching `pull` when the set is disabled.
pub fn evaluate_enabled(
    signals: &SignalSet,
    pull: &dyn PullContext,
    tag: &str,
) -> Result<Option<Evaluation>, SignalError> {
    if !signals.enabled() {
        return Ok(None);
    }
    evaluate(signals, pull, tag).map(Some)
}

fn matches_one(
    signals: &SignalSet,
    pull: &dyn PullContext,
    tag: &str,
) -> Result<Evaluation, SignalError> {
    for signal in ORDERED {
        if let Outcome::Matched(reason) = signal.evaluate(signals, pull, tag)? {
            return Ok(Evaluation::matched(reason));
        }
    }

    Ok(Evaluation::not_matched(format!(
        "pull request does not match the {tag}"
    )))
}

fn matches_all(
    signals: &SignalSet,
    pull: &dyn PullContext,
    tag: &str,
) -> Result<Evaluation, SignalError> {
    for signal in ORDERED {
        if let Outcome::NotMatched(reason) = signal.evaluate(signals, pull, tag)? {
            return Ok(Evaluation::not_matched(reason));
        }
    }

    Ok(Evaluation::matched(format!(
        "pull request matches the {tag}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BranchPattern, LabelSignals};
    use crate::test_support::{FailingPull, FakePull, strings};
    use std::error::Error as _;

    const TAG: &str = "trigger";

    #[test]
    fn scenario_label_match_one() {
        let signals = SignalSet {
            label: LabelSignals {
                mode: MatchMode::Any,
                values: strings(&["automerge"]),
            },
            ..SignalSet::default()
        };
        let pull = FakePull::new().with_labels(&["automerge", "needs-review"]);

        let eval = evaluate(&signals, &pull, TAG).expect("evaluate");
        assert!(eval.matched);
        assert!(eval.reason.contains("\"automerge\""), "{}", eval.reason);
    }

    #[test]
    fn scenario_branch_and_creator_match_all() {
        let signals = SignalSet {
            branches: strings(&["main"]),
            creators: strings(&["bot-x"]),
            mode: MatchMode::All,
            ..SignalSet::default()
        };
        let pull = FakePull::new().with_base("main").with_creator("bot-x");

        let eval = evaluate(&signals, &pull, TAG).expect("evaluate");
        assert_eq!(
            eval,
            Evaluation {
                matched: true,
                reason: "pull request matches the trigger".to_string(),
            }
        );
    }

    #[test]
    fn scenario_match_all_reports_failing_creator() {
        let signals = SignalSet {
            branches: strings(&["main"]),
            creators: strings(&["bot-x"]),
            mode: MatchMode::All,
            ..SignalSet::default()
        };
        let pull = FakePull::new().with_base("main").with_creator("human-y");

        let eval = evaluate(&signals, &pull, TAG).expect("evaluate");
        assert!(!eval.matched);
        assert_eq!(
            eval.reason,
            "pull request creator \"human-y\" is not a trigger creator"
        );
    }

    #[test]
    fn scenario_label_listing_failure_aborts_in_every_mode() {
        for mode in [MatchMode::Any, MatchMode::All] {
            let signals = SignalSet {
                label: LabelSignals {
                    mode: MatchMode::Any,
                    values: strings(&["automerge"]),
                },
                creators: strings(&["bot-x"]),
                mode,
                ..SignalSet::default()
            };
            let pull = FailingPull::labels("502 Bad Gateway");

            let err = evaluate(&signals, &pull, TAG).expect_err("labels fail");
            assert!(matches!(err, SignalError::Labels(_)));
            assert_eq!(err.to_string(), "unable to list pull request labels");
            assert_eq!(err.reason(), "unable to list pull request labels");
            assert_eq!(
                err.source().map(|s| s.to_string()).as_deref(),
                Some("502 Bad Gateway")
            );
        }
    }

    #[test]
    fn comment_listing_failure_aborts_after_labels_pass() {
        let signals = SignalSet {
            comments: strings(&["/merge"]),
            ..SignalSet::default()
        };
        let pull = FailingPull::comments("connection reset");

        let err = evaluate(&signals, &pull, TAG).expect_err("comments fail");
        assert!(matches!(err, SignalError::Comments(_)));
        assert_eq!(err.pull_error().to_string(), "connection reset");
    }

    #[test]
    fn listing_failure_wins_over_a_later_match() {
        let signals = SignalSet {
            creators: strings(&["bot-x"]),
            ..SignalSet::default()
        };
        let mut pull = FailingPull::labels("boom");
        pull.inner = pull.inner.with_creator("bot-x");

        assert!(evaluate(&signals, &pull, TAG).is_err());
    }

    fn label_then_comments(mode: MatchMode) -> SignalSet {
        SignalSet {
            label: LabelSignals {
                mode: MatchMode::Any,
                values: strings(&["ready"]),
            },
            comments: strings(&["/merge"]),
            mode,
            ..SignalSet::default()
        }
    }

    #[test]
    fn match_one_stops_before_a_later_listing_failure() {
        let mut pull = FailingPull::comments("boom");
        pull.inner = pull.inner.with_labels(&["ready"]);

        let eval = evaluate(&label_then_comments(MatchMode::Any), &pull, TAG)
            .expect("comments are never listed");
        assert_eq!(
            eval,
            Evaluation {
                matched: true,
                reason: "pull request has a trigger label: \"ready\"".to_string(),
            }
        );
    }

    #[test]
    fn match_all_stops_at_first_failure_before_a_later_listing_failure() {
        let mut pull = FailingPull::comments("boom");
        pull.inner = pull.inner.with_labels(&["wip"]);

        let eval = evaluate(&label_then_comments(MatchMode::All), &pull, TAG)
            .expect("comments are never listed");
        assert_eq!(
            eval,
            Evaluation {
                matched: false,
                reason: "pull request does not have any trigger label".to_string(),
            }
        );
    }

    #[test]
    fn match_one_reports_first_signal_in_order() {
        let signals = SignalSet {
            branches: strings(&["main"]),
            creators: strings(&["bot-x"]),
            comment_substrings: strings(&["ship it"]),
            ..SignalSet::default()
        };
        let pull = FakePull::new()
            .with_base("main")
            .with_creator("bot-x")
            .with_comments(&["please ship it"]);

        let eval = evaluate(&signals, &pull, TAG).expect("evaluate");
        assert!(eval.matched);
        assert_eq!(
            eval.reason,
            "pull request comment matches a trigger substring: \"ship it\""
        );
    }

    #[test]
    fn match_one_without_any_match_uses_generic_reason() {
        let signals = SignalSet {
            creators: strings(&["bot-x"]),
            branches: strings(&["main"]),
            ..SignalSet::default()
        };
        let pull = FakePull::new().with_base("develop").with_creator("human-y");

        let eval = evaluate(&signals, &pull, "ignore").expect("evaluate");
        assert_eq!(
            eval,
            Evaluation {
                matched: false,
                reason: "pull request does not match the ignore".to_string(),
            }
        );
    }

    #[test]
    fn match_all_skips_unconfigured_signals() {
        let signals = SignalSet {
            branch_patterns: vec![BranchPattern::new("release/.*").expect("valid pattern")],
            mode: MatchMode::All,
            ..SignalSet::default()
        };
        let pull = FakePull::new().with_base("release/2.0");

        let eval = evaluate(&signals, &pull, TAG).expect("evaluate");
        assert!(eval.matched);
    }

    #[test]
    fn match_all_reports_first_failing_signal() {
        let signals = SignalSet {
            label: LabelSignals {
                mode: MatchMode::Any,
                values: strings(&["ready"]),
            },
            creators: strings(&["bot-x"]),
            mode: MatchMode::All,
            ..SignalSet::default()
        };
        let pull = FakePull::new().with_creator("human-y");

        let eval = evaluate(&signals, &pull, TAG).expect("evaluate");
        assert!(!eval.matched);
        assert_eq!(eval.reason, "pull request does not have any trigger label");
    }

    #[test]
    fn disabled_set_vacuously_matches_under_match_all() {
        let signals = SignalSet {
            mode: MatchMode::All,
            ..SignalSet::default()
        };
        assert!(!signals.enabled());

        let eval = evaluate(&signals, &FakePull::new(), TAG).expect("evaluate");
        assert!(eval.matched);
        assert_eq!(eval.reason, "pull request matches the trigger");
    }

    #[test]
    fn disabled_set_never_matches_under_match_one() {
        let eval = evaluate(&SignalSet::default(), &FakePull::new(), TAG).expect("evaluate");
        assert!(!eval.matched);
    }

    #[test]
    fn evaluate_enabled_skips_disabled_sets_without_reading_the_pull() {
        let signals = SignalSet {
            mode: MatchMode::All,
            ..SignalSet::default()
        };
        let pull = FailingPull::labels("must not be called");

        let eval = evaluate_enabled(&signals, &pull, TAG).expect("no accessor call");
        assert!(eval.is_none());
    }

    #[test]
    fn evaluate_enabled_evaluates_enabled_sets() {
        let signals = SignalSet {
            creators: strings(&["bot-x"]),
            ..SignalSet::default()
        };
        let pull = FakePull::new().with_creator("bot-x");

        let eval = evaluate_enabled(&signals, &pull, TAG)
            .expect("evaluate")
            .expect("enabled");
        assert!(eval.matched);
    }
}
