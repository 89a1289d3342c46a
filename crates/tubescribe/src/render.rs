//! Terminal rendering of pipeline outcomes.

use tubescribe_error::JsonError;
use tubescribe_pipeline::{ConversationHistory, PipelineOutcome, PipelineResult};

/// Shown when a topic is entered without an API key.
pub const MISSING_KEY_WARNING: &str = "Please enter your OpenAI API key before searching.";

fn section(out: &mut String, heading: &str, underline: char, body: &str) {
    out.push_str(heading);
    out.push('\n');
    out.extend(std::iter::repeat_n(underline, heading.chars().count()));
    out.push('\n');
    out.push_str(body);
    out.push_str("\n\n");
}

fn history_body(history: &ConversationHistory) -> String {
    if history.is_empty() {
        "(empty)".to_string()
    } else {
        history.transcript()
    }
}

/// Human-readable rendering: title and script first, then the title
/// history, script history and research panels.
///
/// A disabled outcome renders as [`MISSING_KEY_WARNING`].
pub fn render_human(outcome: &PipelineOutcome) -> String {
    let Some(result) = outcome.result() else {
        return MISSING_KEY_WARNING.to_string();
    };

    let mut out = String::new();
    if !result.title().is_empty() {
        section(&mut out, "Title", '=', result.title());
    }
    if !result.script().is_empty() {
        section(&mut out, "Script", '=', result.script());
    }
    section(&mut out, "Title History", '-', &history_body(result.title_history()));
    section(&mut out, "Script History", '-', &history_body(result.script_history()));
    section(&mut out, "Wikipedia Research", '-', result.research_text());

    out.trim_end().to_string()
}

/// Pretty JSON rendering of the whole outcome.
///
/// # Errors
///
/// Returns a [`JsonError`] if serialization fails.
pub fn render_json(outcome: &PipelineOutcome) -> Result<String, JsonError> {
    serde_json::to_string_pretty(outcome)
        .map_err(|e| JsonError::new(format!("Failed to serialize outcome: {}", e)))
}

/// One `warning:` line per failed stage.
pub fn failure_lines(result: &PipelineResult) -> Vec<String> {
    result
        .failures()
        .iter()
        .map(|f| format!("warning: {} stage: {}", f.stage(), f.message()))
        .collect()
}
