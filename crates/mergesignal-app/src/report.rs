use anyhow::Context;
use mergesignal_render::{RenderableReport, RenderableTag, RenderableVerdict};
use mergesignal_types::{PullMeta, ReportEnvelope, SCHEMA_REPORT_V1, Verdict};
use time::OffsetDateTime;

use crate::check::tool_meta;

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse mergesignal v1 report")
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport {
        behavior: report.behavior.clone(),
        pull_number: report.pull.number,
        pull_title: report.pull.title.clone(),
        verdict: match report.verdict {
            Verdict::Proceed => RenderableVerdict::Proceed,
            Verdict::Skip => RenderableVerdict::Skip,
            Verdict::Error => RenderableVerdict::Error,
        },
        reason: report.reason.clone(),
        tags: report
            .evaluations
            .iter()
            .map(|e| RenderableTag {
                tag: e.tag.clone(),
                mode: e.mode.as_str().to_string(),
                enabled: e.enabled,
                matched: e.matched,
                reason: e.reason.clone(),
            })
            .collect(),
    }
}

/// Report written when the check could not complete; `message` carries the error chain.
pub fn runtime_error_report(behavior: &str, message: &str) -> ReportEnvelope {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        behavior: behavior.to_string(),
        pull: PullMeta::default(),
        verdict: Verdict::Error,
        reason: message.to_string(),
        evaluations: Vec::new(),
    }
}
