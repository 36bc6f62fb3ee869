//! The `explain` use case: look up signal and match mode documentation.

use mergesignal_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available signal and mode IDs.
    NotFound {
        identifier: String,
        available_signal_ids: &'static [&'static str],
        available_mode_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a signal ID or mode ID.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_signal_ids: explain::all_signal_ids(),
            available_mode_ids: explain::all_mode_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Configuration\n");
    out.push_str("-------------\n");
    out.push_str(exp.usage);
    out.push_str("\n\n");
    out.push_str("Example\n");
    out.push_str("-------\n\n");
    out.push_str("```toml\n");
    out.push_str(exp.examples.config);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("Matches: ");
    out.push_str(exp.examples.matching);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    signal_ids: &[&'static str],
    mode_ids: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown signal or match mode: {}\n\n", identifier));
    out.push_str("Available signals:\n");
    for id in signal_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable match modes:\n");
    for id in mode_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
