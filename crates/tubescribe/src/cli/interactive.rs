//! Line-by-line topic loop sharing one session.

use super::{OutputFormat, handle_topic};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;
use tubescribe::{ApiAccess, IoError, LiveSession, TubescribeResult};

fn is_exit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "exit" | "quit")
}

/// Reads topics from stdin until EOF, `exit` or `quit`.
///
/// Blank lines are skipped. Histories accumulate across topics because the
/// same session serves every line.
pub async fn run_interactive(
    mut session: LiveSession,
    access: &ApiAccess,
    format: OutputFormat,
) -> TubescribeResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stderr = tokio::io::stderr();

    loop {
        if format == OutputFormat::Human {
            stderr
                .write_all(b"topic> ")
                .await
                .map_err(|e| IoError::new(format!("Failed to write prompt: {}", e)))?;
            stderr
                .flush()
                .await
                .map_err(|e| IoError::new(format!("Failed to write prompt: {}", e)))?;
        }

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| IoError::new(format!("Failed to read stdin: {}", e)))?
        else {
            break;
        };

        let topic = line.trim();
        if topic.is_empty() {
            continue;
        }
        if is_exit(topic) {
            break;
        }

        handle_topic(&mut session, topic, access, format).await?;
    }

    debug!(
        titles = session.title_generator().history().len(),
        scripts = session.script_generator().history().len(),
        "Interactive session finished"
    );
    Ok(())
}
