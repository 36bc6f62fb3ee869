//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - monotonicity of match-one and match-all aggregation
//! - label case folding and creator case sensitivity
//! - the enabled gate

use crate::engine::{evaluate, evaluate_enabled};
use crate::model::{BranchPattern, LabelSignals, SignalSet};
use crate::test_support::FakePull;
use mergesignal_types::MatchMode;
use proptest::prelude::*;

const TAG: &str = "trigger";

// ============================================================================
// Strategies
// ============================================================================

/// Small alphabet so configured values and pull fields collide often.
fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{1,3}").unwrap()
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 0..3)
}

fn arb_mode() -> impl Strategy<Value = MatchMode> {
    prop_oneof![Just(MatchMode::Any), Just(MatchMode::All)]
}

fn arb_patterns() -> impl Strategy<Value = Vec<BranchPattern>> {
    prop::collection::vec(
        prop_oneof![
            Just("a.*".to_string()),
            Just("[ab]+".to_string()),
            Just("c|ab".to_string()),
            arb_word(),
        ],
        0..2,
    )
    .prop_map(|ps| {
        ps.iter()
            .map(|p| BranchPattern::new(p).expect("strategy patterns are valid"))
            .collect()
    })
}

fn arb_signal_set() -> impl Strategy<Value = SignalSet> {
    (
        (arb_mode(), arb_words()),
        arb_words(),
        arb_words(),
        arb_words(),
        arb_words(),
        arb_patterns(),
        arb_words(),
        arb_mode(),
    )
        .prop_map(
            |(
                (label_mode, label_values),
                comment_substrings,
                comments,
                pr_body_substrings,
                branches,
                branch_patterns,
                creators,
                mode,
            )| SignalSet {
                label: LabelSignals {
                    mode: label_mode,
                    values: label_values,
                },
                comment_substrings,
                comments,
                pr_body_substrings,
                branches,
                branch_patterns,
                creators,
                mode,
            },
        )
}

fn arb_pull() -> impl Strategy<Value = FakePull> {
    (arb_word(), arb_words(), arb_words(), arb_word(), arb_word()).prop_map(
        |(body, comments, labels, base, creator)| FakePull {
            body,
            comments,
            labels,
            base,
            head: "feature".to_string(),
            creator,
        },
    )
}

/// Index of one signal's configuration; branches and patterns form a single signal.
fn arb_signal_index() -> impl Strategy<Value = usize> {
    0usize..6
}

fn clear_signal(set: &mut SignalSet, index: usize) {
    match index {
        0 => set.label.values.clear(),
        1 => set.comments.clear(),
        2 => set.comment_substrings.clear(),
        3 => set.pr_body_substrings.clear(),
        4 => {
            set.branches.clear();
            set.branch_patterns.clear();
        }
        _ => set.creators.clear(),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(set in arb_signal_set(), pull in arb_pull()) {
        let a = evaluate(&set, &pull, TAG).expect("fake pull never fails");
        let b = evaluate(&set, &pull, TAG).expect("fake pull never fails");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn match_one_stays_matched_when_a_satisfied_condition_is_added(
        mut set in arb_signal_set(),
        pull in arb_pull(),
        group in 0usize..7,
    ) {
        set.mode = MatchMode::Any;
        let before = evaluate(&set, &pull, TAG).expect("evaluate");

        // Each addition is satisfied by construction.
        match group {
            0 => {
                set.label.mode = MatchMode::Any;
                set.label.values.push(pull.labels.first().cloned().unwrap_or_default());
            }
            1 => set.comment_substrings.push(pull.body.clone()),
            2 => set.comments.push(pull.body.clone()),
            3 => set.pr_body_substrings.push(pull.body.clone()),
            4 => set.branches.push(pull.base.clone()),
            5 => set.branch_patterns.push(BranchPattern::new(".*").expect("valid")),
            _ => set.creators.push(pull.creator.clone()),
        }
        let after = evaluate(&set, &pull, TAG).expect("evaluate");

        if before.matched {
            prop_assert!(after.matched);
        }
        // A label addition is only satisfied when the pull has a label.
        if group != 0 || !pull.labels.is_empty() {
            prop_assert!(after.matched, "added condition should match: {}", after.reason);
        }
    }

    #[test]
    fn match_one_stays_matched_when_values_are_added(
        mut set in arb_signal_set(),
        pull in arb_pull(),
        extra in arb_word(),
        group in 1usize..7,
    ) {
        set.mode = MatchMode::Any;
        let before = evaluate(&set, &pull, TAG).expect("evaluate");

        match group {
            1 => set.comment_substrings.push(extra),
            2 => set.comments.push(extra),
            3 => set.pr_body_substrings.push(extra),
            4 => set.branches.push(extra),
            5 => set.branch_patterns.push(BranchPattern::new(&extra).expect("letters are a valid pattern")),
            _ => set.creators.push(extra),
        }

        if before.matched {
            prop_assert!(evaluate(&set, &pull, TAG).expect("evaluate").matched);
        }
    }

    #[test]
    fn match_all_never_loses_a_match_when_a_signal_is_unconfigured(
        mut set in arb_signal_set(),
        pull in arb_pull(),
        index in arb_signal_index(),
    ) {
        set.mode = MatchMode::All;
        let before = evaluate(&set, &pull, TAG).expect("evaluate");
        clear_signal(&mut set, index);
        let after = evaluate(&set, &pull, TAG).expect("evaluate");

        if before.matched {
            prop_assert!(after.matched, "lost match after clearing signal {}: {}", index, after.reason);
        }
    }

    #[test]
    fn match_all_label_requirements_shrink_monotonically(
        mut values in prop::collection::vec(arb_word(), 1..4),
        pull in arb_pull(),
    ) {
        let mut set = SignalSet {
            label: LabelSignals { mode: MatchMode::All, values: values.clone() },
            mode: MatchMode::All,
            ..SignalSet::default()
        };
        let before = evaluate(&set, &pull, TAG).expect("evaluate");
        values.pop();
        set.label.values = values;
        let after = evaluate(&set, &pull, TAG).expect("evaluate");

        if before.matched {
            prop_assert!(after.matched);
        }
    }

    #[test]
    fn label_matching_ignores_case(value in arb_word()) {
        let set = SignalSet {
            label: LabelSignals { mode: MatchMode::Any, values: vec![value.clone()] },
            ..SignalSet::default()
        };
        let upper = FakePull { labels: vec![value.to_uppercase()], ..FakePull::new() };
        let lower = FakePull { labels: vec![value.to_lowercase()], ..FakePull::new() };

        prop_assert!(evaluate(&set, &upper, TAG).expect("evaluate").matched);
        prop_assert!(evaluate(&set, &lower, TAG).expect("evaluate").matched);
    }

    #[test]
    fn creator_matching_respects_case(value in "[a-z]{1,6}") {
        let set = SignalSet { creators: vec![value.clone()], ..SignalSet::default() };
        let pull = FakePull { creator: value.to_uppercase(), ..FakePull::new() };

        prop_assert!(!evaluate(&set, &pull, TAG).expect("evaluate").matched);
    }

    #[test]
    fn disabled_sets_are_never_evaluated(mode in arb_mode(), label_mode in arb_mode(), pull in arb_pull()) {
        let set = SignalSet {
            label: LabelSignals { mode: label_mode, values: Vec::new() },
            mode,
            ..SignalSet::default()
        };
        prop_assert!(evaluate_enabled(&set, &pull, TAG).expect("evaluate").is_none());
    }
}
