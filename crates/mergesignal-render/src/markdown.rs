use crate::{RenderableReport, RenderableTag, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Mergesignal report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Proceed => "PROCEED",
        RenderableVerdict::Skip => "SKIP",
        RenderableVerdict::Error => "ERROR",
    };

    out.push_str(&format!("- Behavior: `{}`\n", report.behavior));
    match (report.pull_number, report.pull_title.as_deref()) {
        (Some(n), Some(t)) => out.push_str(&format!("- Pull request: #{} {}\n", n, t)),
        (Some(n), None) => out.push_str(&format!("- Pull request: #{}\n", n)),
        (None, Some(t)) => out.push_str(&format!("- Pull request: {}\n", t)),
        (None, None) => {}
    }
    out.push_str(&format!(
        "- Verdict: **{}**\n- Reason: {}\n\n",
        verdict, report.reason
    ));

    if report.tags.is_empty() {
        out.push_str("No signal sets evaluated.\n");
        return out;
    }

    out.push_str("## Signal sets\n\n");
    out.push_str("| Tag | Mode | Result | Reason |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for t in &report.tags {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            t.tag,
            t.mode,
            result_label(t),
            t.reason.as_deref().map(escape_cell).unwrap_or_else(|| "-".to_string())
        ));
    }

    out
}

fn result_label(tag: &RenderableTag) -> &'static str {
    match (tag.enabled, tag.matched) {
        (false, _) => "not configured",
        (true, Some(true)) => "matched",
        (true, Some(false)) => "not matched",
        (true, None) => "not evaluated",
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
