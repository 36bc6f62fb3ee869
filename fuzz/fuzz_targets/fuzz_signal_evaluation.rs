//! Fuzz target for signal evaluation.
//!
//! Goal: evaluating any signal set against any pull request should **never panic**,
//! and must give the same answer twice.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_signal_evaluation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mergesignal_domain::{BranchPattern, LabelSignals, SignalSet, evaluate};
use mergesignal_types::{MatchMode, PullSnapshotV1};

#[derive(Arbitrary, Debug)]
struct EvalInput {
    match_all: bool,
    label_match_all: bool,
    labels: Vec<String>,
    comments: Vec<String>,
    comment_substrings: Vec<String>,
    pr_body_substrings: Vec<String>,
    branches: Vec<String>,
    branch_patterns: Vec<String>,
    creators: Vec<String>,
    pull_body: String,
    pull_comments: Vec<String>,
    pull_labels: Vec<String>,
    pull_base: String,
    pull_creator: String,
}

fn mode(all: bool) -> MatchMode {
    if all { MatchMode::All } else { MatchMode::Any }
}

fuzz_target!(|input: EvalInput| {
    // Keep regex compilation cheap
    if input.branch_patterns.len() > 8 || input.branch_patterns.iter().any(|p| p.len() > 128) {
        return;
    }

    let branch_patterns = input
        .branch_patterns
        .iter()
        .filter_map(|p| BranchPattern::new(p).ok())
        .collect();

    let signals = SignalSet {
        label: LabelSignals {
            mode: mode(input.label_match_all),
            values: input.labels,
        },
        comment_substrings: input.comment_substrings,
        comments: input.comments,
        pr_body_substrings: input.pr_body_substrings,
        branches: input.branches,
        branch_patterns,
        creators: input.creators,
        mode: mode(input.match_all),
    };

    let pull = PullSnapshotV1 {
        body: input.pull_body,
        comments: input.pull_comments,
        labels: input.pull_labels,
        base: input.pull_base,
        creator: input.pull_creator,
        ..PullSnapshotV1::default()
    };

    let first = evaluate(&signals, &pull, "trigger");
    let second = evaluate(&signals, &pull, "trigger");
    assert_eq!(first.ok(), second.ok());
});
