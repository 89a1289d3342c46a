//! Single-topic command handler.

use super::OutputFormat;
use tracing::info;
use tubescribe::{
    ApiAccess, LiveSession, MISSING_KEY_WARNING, PipelineOutcome, TubescribeResult,
    failure_lines, render_human, render_json,
};

/// Runs `topic` through `session` and prints the outcome.
///
/// A blank topic does nothing. Without a key the missing-key warning is
/// printed instead and no request is sent.
pub async fn handle_topic(
    session: &mut LiveSession,
    topic: &str,
    access: &ApiAccess,
    format: OutputFormat,
) -> TubescribeResult<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Ok(());
    }

    let outcome = session.run(topic, access).await;
    match &outcome {
        PipelineOutcome::Disabled => {
            eprintln!("{}", MISSING_KEY_WARNING);
            if format == OutputFormat::Json {
                println!("{}", render_json(&outcome)?);
            }
        }
        PipelineOutcome::Completed(result) => {
            for line in failure_lines(result) {
                eprintln!("{}", line);
            }
            match format {
                OutputFormat::Human => println!("{}", render_human(&outcome)),
                OutputFormat::Json => println!("{}", render_json(&outcome)?),
            }
            info!(failures = result.failures().len(), "Topic processed");
        }
    }

    Ok(())
}

/// The `run` command: one topic, one fresh session.
pub async fn run_once(
    mut session: LiveSession,
    topic: &str,
    access: &ApiAccess,
    format: OutputFormat,
) -> TubescribeResult<()> {
    handle_topic(&mut session, topic, access, format).await
}
