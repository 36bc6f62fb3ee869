//! Render use cases: Markdown from in-memory reports.

use mergesignal_types::ReportEnvelope;

use crate::report::to_renderable;

pub fn render_markdown(report: &ReportEnvelope) -> String {
    mergesignal_render::render_markdown(&to_renderable(report))
}
