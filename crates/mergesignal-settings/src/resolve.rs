use crate::SCHEMA_CONFIG_V1;
use crate::model::{BehaviorConfig, MergesignalConfigV1, SignalsConfig};
use anyhow::Context;
use mergesignal_domain::{BehaviorSignals, BranchPattern, LabelSignals, SignalSet};
use mergesignal_types::ids;

/// Which automation a set of signals decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Merge,
    Update,
}

impl Behavior {
    pub fn parse(v: &str) -> anyhow::Result<Self> {
        match v {
            ids::BEHAVIOR_MERGE => Ok(Behavior::Merge),
            ids::BEHAVIOR_UPDATE => Ok(Behavior::Update),
            other => anyhow::bail!("unknown behavior: {other} (expected 'merge' or 'update')"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Merge => ids::BEHAVIOR_MERGE,
            Behavior::Update => ids::BEHAVIOR_UPDATE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ResolvedConfig {
    pub merge: BehaviorSignals,
    pub update: BehaviorSignals,
}

impl ResolvedConfig {
    pub fn behavior(&self, behavior: Behavior) -> &BehaviorSignals {
        match behavior {
            Behavior::Merge => &self.merge,
            Behavior::Update => &self.update,
        }
    }
}

pub fn resolve_config(cfg: MergesignalConfigV1) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    Ok(ResolvedConfig {
        merge: resolve_behavior(Behavior::Merge, &cfg.merge)?,
        update: resolve_behavior(Behavior::Update, &cfg.update)?,
    })
}

fn resolve_behavior(
    behavior: Behavior,
    cfg: &BehaviorConfig,
) -> anyhow::Result<BehaviorSignals> {
    let scope = |tag: &str| format!("{}.{tag}", behavior.as_str());
    Ok(BehaviorSignals {
        trigger: resolve_signals(&scope(ids::TAG_TRIGGER), &cfg.trigger)?,
        ignore: resolve_signals(&scope(ids::TAG_IGNORE), &cfg.ignore)?,
    })
}

fn resolve_signals(scope: &str, cfg: &SignalsConfig) -> anyhow::Result<SignalSet> {
    Ok(SignalSet {
        label: LabelSignals {
            mode: cfg.label.mode,
            values: cfg.label.values.clone(),
        },
        comment_substrings: cfg.comment_substrings.clone(),
        comments: cfg.comments.clone(),
        pr_body_substrings: cfg.pr_body_substrings.clone(),
        branches: cfg.branches.clone(),
        branch_patterns: compile_branch_patterns(scope, &cfg.branch_patterns)?,
        creators: cfg.creators.clone(),
        mode: cfg.mode,
    })
}

fn compile_branch_patterns(scope: &str, patterns: &[String]) -> anyhow::Result<Vec<BranchPattern>> {
    patterns
        .iter()
        .map(|p| {
            BranchPattern::new(p)
                .with_context(|| format!("invalid branch pattern for {scope}: {p}"))
        })
        .collect()
}
