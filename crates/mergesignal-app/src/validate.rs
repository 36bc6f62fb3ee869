//! The `validate` use case: check a config file without evaluating a pull request.

use anyhow::Context;
use mergesignal_domain::SignalSet;
use mergesignal_settings::{Behavior, BehaviorConfig, SignalsConfig};
use mergesignal_types::{MatchMode, ids};
use tracing::debug;

/// What one resolved signal set will look at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetSummary {
    /// `<behavior>.<tag>`, e.g. `merge.trigger`.
    pub scope: String,
    pub enabled: bool,
    pub mode: MatchMode,
    /// Configured signal IDs, in evaluation order.
    pub signals: Vec<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidateOutput {
    pub sets: Vec<SetSummary>,
    pub warnings: Vec<String>,
}

/// Parse and resolve `config_text`, then summarize every signal set.
///
/// Hard errors (bad TOML, bad branch pattern, unknown schema) are returned as `Err`;
/// suspicious but valid settings become warnings.
pub fn run_validate(config_text: &str) -> anyhow::Result<ValidateOutput> {
    let cfg = mergesignal_settings::parse_config_toml(config_text).context("parse config")?;

    let mut warnings = Vec::new();
    for (behavior, bc) in [(Behavior::Merge, &cfg.merge), (Behavior::Update, &cfg.update)] {
        collect_warnings(behavior, bc, &mut warnings);
    }

    let resolved = mergesignal_settings::resolve_config(cfg).context("resolve config")?;

    let mut sets = Vec::new();
    for behavior in [Behavior::Merge, Behavior::Update] {
        let signals = resolved.behavior(behavior);
        for (tag, set) in [
            (ids::TAG_TRIGGER, &signals.trigger),
            (ids::TAG_IGNORE, &signals.ignore),
        ] {
            let summary = summarize(format!("{}.{tag}", behavior.as_str()), set);
            debug!(scope = %summary.scope, enabled = summary.enabled, "validated signal set");
            sets.push(summary);
        }
    }

    Ok(ValidateOutput { sets, warnings })
}

fn summarize(scope: String, set: &SignalSet) -> SetSummary {
    let configured = [
        (ids::SIGNAL_LABEL, !set.label.values.is_empty()),
        (ids::SIGNAL_COMMENTS, !set.comments.is_empty()),
        (ids::SIGNAL_COMMENT_SUBSTRINGS, !set.comment_substrings.is_empty()),
        (ids::SIGNAL_PR_BODY_SUBSTRINGS, !set.pr_body_substrings.is_empty()),
        (
            ids::SIGNAL_BRANCHES,
            !set.branches.is_empty() || !set.branch_patterns.is_empty(),
        ),
        (ids::SIGNAL_CREATORS, !set.creators.is_empty()),
    ];

    SetSummary {
        scope,
        enabled: set.enabled(),
        mode: set.mode,
        signals: configured
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(id, _)| id)
            .collect(),
    }
}

fn collect_warnings(behavior: Behavior, cfg: &BehaviorConfig, warnings: &mut Vec<String>) {
    let b = behavior.as_str();
    for (tag, sc) in [(ids::TAG_TRIGGER, &cfg.trigger), (ids::TAG_IGNORE, &cfg.ignore)] {
        for (key, values) in value_lists(sc) {
            if values.iter().any(|v| v.is_empty()) {
                warnings.push(format!(
                    "{b}.{tag}.{key} contains an empty value, which matches every pull request"
                ));
            }
        }
    }

    let has_trigger = value_lists(&cfg.trigger).iter().any(|(_, v)| !v.is_empty());
    let has_ignore = value_lists(&cfg.ignore).iter().any(|(_, v)| !v.is_empty());
    if has_ignore && !has_trigger {
        warnings.push(format!(
            "{b} has ignore signals but no trigger; every pull request that is not ignored proceeds"
        ));
    }
}

fn value_lists(sc: &SignalsConfig) -> [(&'static str, &[String]); 7] {
    [
        ("label.values", sc.label.values.as_slice()),
        ("comments", sc.comments.as_slice()),
        ("comment_substrings", sc.comment_substrings.as_slice()),
        ("pr_body_substrings", sc.pr_body_substrings.as_slice()),
        ("branches", sc.branches.as_slice()),
        ("branch_patterns", sc.branch_patterns.as_slice()),
        ("creators", sc.creators.as_slice()),
    ]
}

/// Format a validation summary for terminal display.
pub fn format_validation(out: &ValidateOutput) -> String {
    let mut s = String::new();
    for set in &out.sets {
        if set.enabled {
            s.push_str(&format!(
                "{} (match {}): {}\n",
                set.scope,
                set.mode,
                set.signals.join(", ")
            ));
        } else {
            s.push_str(&format!("{}: not configured\n", set.scope));
        }
    }
    for w in &out.warnings {
        s.push_str(&format!("warning: {w}\n"));
    }
    s
}
