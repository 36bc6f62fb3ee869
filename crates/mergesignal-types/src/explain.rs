//! Explain registry for signals and match modes.
//!
//! Maps signal IDs and mode IDs to human-readable explanations with configuration guidance.

use crate::ids;

/// Explanation entry for a signal or match mode.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short name of the signal/mode.
    pub title: &'static str,
    /// What the signal inspects and how it decides.
    pub description: &'static str,
    /// How to configure it.
    pub usage: &'static str,
    /// A configuration and a pull request it matches.
    pub examples: ExamplePair,
}

/// Configuration example with a pull request that satisfies it.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// `mergesignal.toml` fragment.
    pub config: &'static str,
    /// Description of a matching pull request.
    pub matching: &'static str,
}

/// Look up an explanation by signal ID or mode ID.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::SIGNAL_LABEL => Some(explain_label()),
        ids::SIGNAL_COMMENTS => Some(explain_comments()),
        ids::SIGNAL_COMMENT_SUBSTRINGS => Some(explain_comment_substrings()),
        ids::SIGNAL_PR_BODY_SUBSTRINGS => Some(explain_pr_body_substrings()),
        ids::SIGNAL_BRANCHES => Some(explain_branches()),
        ids::SIGNAL_CREATORS => Some(explain_creators()),

        ids::MATCH_ONE => Some(explain_match_one()),
        ids::MATCH_ALL => Some(explain_match_all()),

        _ => None,
    }
}

/// List all known signal IDs, in evaluation order.
pub fn all_signal_ids() -> &'static [&'static str] {
    &[
        ids::SIGNAL_LABEL,
        ids::SIGNAL_COMMENTS,
        ids::SIGNAL_COMMENT_SUBSTRINGS,
        ids::SIGNAL_PR_BODY_SUBSTRINGS,
        ids::SIGNAL_BRANCHES,
        ids::SIGNAL_CREATORS,
    ]
}

/// List all known match mode IDs.
pub fn all_mode_ids() -> &'static [&'static str] {
    &[ids::MATCH_ONE, ids::MATCH_ALL]
}

fn explain_label() -> Explanation {
    Explanation {
        title: "Label Signal",
        description: "\
Matches on the labels currently applied to the pull request.

Comparison is case-insensitive: `Automerge` matches a label named `automerge`.
The label signal has its own `match` mode, independent of the signal set:
- `one` (default): any configured label present is enough
- `all`: every configured label must be present",
        usage: "\
Set `label.values` to the labels to look for, and `label.match` to `all`
when several labels are required together.",
        examples: ExamplePair {
            config: r#"[merge.trigger]
label = { match = "all", values = ["automerge", "approved"] }"#,
            matching: "A pull request labelled `AutoMerge`, `approved` and `backend`.",
        },
    }
}

fn explain_comments() -> Explanation {
    Explanation {
        title: "Exact Comment Signal",
        description: "\
Matches when the pull request body, or any single comment, is exactly equal
to one of the configured strings. Whitespace and case are significant.",
        usage: "\
List the exact comment texts under `comments`. Use `comment_substrings`
instead when the keyword may appear inside a longer comment.",
        examples: ExamplePair {
            config: r#"[merge.trigger]
comments = ["/merge"]"#,
            matching: "A pull request with a comment whose entire text is `/merge`.",
        },
    }
}

fn explain_comment_substrings() -> Explanation {
    Explanation {
        title: "Comment Substring Signal",
        description: "\
Matches when the pull request body or any comment contains one of the
configured substrings. The body is checked before the comments.",
        usage: "\
List the substrings under `comment_substrings`. Matching is case-sensitive.",
        examples: ExamplePair {
            config: r#"[merge.trigger]
comment_substrings = ["==MERGE_WHEN_READY=="]"#,
            matching: "A comment reading `LGTM ==MERGE_WHEN_READY==`.",
        },
    }
}

fn explain_pr_body_substrings() -> Explanation {
    Explanation {
        title: "Pull Request Body Substring Signal",
        description: "\
Matches when the pull request body contains one of the configured substrings.
Comments are not inspected.",
        usage: "\
List the substrings under `pr_body_substrings`. Matching is case-sensitive.",
        examples: ExamplePair {
            config: r#"[merge.ignore]
pr_body_substrings = ["[do not merge]"]"#,
            matching: "A pull request whose description ends with `[do not merge]`.",
        },
    }
}

fn explain_branches() -> Explanation {
    Explanation {
        title: "Target Branch Signal",
        description: "\
Matches on the branch the pull request targets.

`branches` are compared exactly. `branch_patterns` are regular expressions
that must match the whole branch name: `release/.*` matches `release/1.0`
but neither `pre-release/1.0` nor `release/1.0/hotfix`, because `.` never
matches `/`. Write the separator out (`release/.*/.*`) to reach deeper
branches. Exact names are checked before patterns.",
        usage: "\
List exact names under `branches` and regular expressions under
`branch_patterns`. Malformed patterns are rejected when the configuration
is loaded.",
        examples: ExamplePair {
            config: r#"[merge.trigger]
branches = ["main"]
branch_patterns = ["release/v[0-9]+"]"#,
            matching: "A pull request targeting `release/v2`.",
        },
    }
}

fn explain_creators() -> Explanation {
    Explanation {
        title: "Creator Signal",
        description: "\
Matches on the login of the account that opened the pull request.
Comparison is exact and case-sensitive.",
        usage: "\
List logins under `creators`, including any `[bot]` suffix.",
        examples: ExamplePair {
            config: r#"[merge.trigger]
creators = ["dependabot[bot]"]"#,
            matching: "A pull request opened by `dependabot[bot]`.",
        },
    }
}

fn explain_match_one() -> Explanation {
    Explanation {
        title: "Match One",
        description: "\
The signal set matches as soon as one configured signal matches. Signals are
evaluated in a fixed order (label, comments, comment substrings, body
substrings, branches, creators) and the first match provides the reason.",
        usage: "\
This is the default. Write `match = \"one\"` to make it explicit.",
        examples: ExamplePair {
            config: r#"[merge.trigger]
match = "one"
label = { values = ["automerge"] }
creators = ["renovate[bot]"]"#,
            matching: "A pull request opened by `renovate[bot]` without any label.",
        },
    }
}

fn explain_match_all() -> Explanation {
    Explanation {
        title: "Match All",
        description: "\
The signal set matches only when every configured signal matches. Signals
with no configured values are skipped. The first signal that fails provides
the reason.

A set with no configured values at all is disabled and is never evaluated.",
        usage: "\
Write `match = \"all\"` on the signal set.",
        examples: ExamplePair {
            config: r#"[merge.trigger]
match = "all"
branches = ["main"]
creators = ["dependabot[bot]"]"#,
            matching: "A pull request opened by `dependabot[bot]` targeting `main`.",
        },
    }
}
