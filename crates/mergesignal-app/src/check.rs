//! The `check` use case: decide one behavior for one pull request and produce a report.

use anyhow::Context;
use mergesignal_domain::{BehaviorSignals, Decision, DecisionTrace, SignalSet, decide};
use mergesignal_settings::{Behavior, MergesignalConfigV1, ResolvedConfig};
use mergesignal_types::{
    PullMeta, ReportEnvelope, SCHEMA_REPORT_V1, TagEvaluation, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::snapshot::parse_pull_snapshot;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Pull request snapshot (JSON).
    pub pull_text: &'a str,
    /// Behavior to decide.
    pub behavior: Behavior,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The domain decision behind the report's verdict.
    pub decision: Decision,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config and snapshot, evaluate signals, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Empty config is allowed; every behavior is then unconfigured.
    let cfg = if input.config_text.trim().is_empty() {
        MergesignalConfigV1::default()
    } else {
        mergesignal_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = mergesignal_settings::resolve_config(cfg).context("resolve config")?;

    let pull = parse_pull_snapshot(input.pull_text)?;

    let behavior = input.behavior.as_str();
    let signals = resolved.behavior(input.behavior);
    if !signals.enabled() {
        warn!(behavior, "no signals configured; every pull request proceeds");
    }

    let trace = decide(signals, &pull).context("evaluate signals")?;
    for t in &trace.tags {
        match &t.evaluation {
            Some(eval) => debug!(
                behavior,
                tag = t.tag,
                matched = eval.matched,
                reason = %eval.reason,
                "evaluated signal set"
            ),
            None => debug!(behavior, tag = t.tag, "signal set not evaluated"),
        }
    }

    let verdict = if trace.decision.proceeds() {
        Verdict::Proceed
    } else {
        Verdict::Skip
    };
    info!(
        behavior,
        pull = ?pull.number,
        verdict = verdict.as_str(),
        reason = %trace.decision.reason(),
        "decided"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        behavior: behavior.to_string(),
        pull: PullMeta {
            number: pull.number,
            title: pull.title.clone(),
        },
        verdict,
        reason: trace.decision.reason().to_string(),
        evaluations: tag_evaluations(signals, &trace),
    };

    Ok(CheckOutput {
        report,
        decision: trace.decision,
        resolved_config: resolved,
    })
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "mergesignal".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn tag_evaluations(signals: &BehaviorSignals, trace: &DecisionTrace) -> Vec<TagEvaluation> {
    trace
        .tags
        .iter()
        .map(|t| {
            let set = tagged_set(signals, t.tag);
            TagEvaluation {
                tag: t.tag.to_string(),
                mode: set.mode,
                enabled: set.enabled(),
                matched: t.evaluation.as_ref().map(|e| e.matched),
                reason: t.evaluation.as_ref().map(|e| e.reason.clone()),
            }
        })
        .collect()
}

fn tagged_set<'a>(signals: &'a BehaviorSignals, tag: &str) -> &'a SignalSet {
    if tag == ids::TAG_IGNORE {
        &signals.ignore
    } else {
        &signals.trigger
    }
}

/// Map verdict to exit code: 0 = proceed, 2 = skip, 1 = error.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Proceed => 0,
        Verdict::Skip => 2,
        Verdict::Error => 1,
    }
}
