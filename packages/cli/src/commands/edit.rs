use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use mindmap_editor::{EditorConfig, NodeOpOutcome};
use mindmap_workspace::{dispatch, parse_line, spawn_session, GraphUpdate, Reply};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::{debug, info, warn};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Start from this outline file instead of an empty outline
    #[arg(short, long)]
    pub initial: Option<PathBuf>,
}

/// Run an edit session over stdin/stdout, one JSON message per line
pub fn edit(args: EditArgs, cwd: &Path, config: &Config) -> Result<()> {
    let initial = match &args.initial {
        Some(path) => {
            let path = cwd.join(path);
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => String::new(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_session(
        initial,
        &config.editor,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    ))
}

/// Serve one session: read client messages from `input`, write graph updates to `output`.
///
/// Ends on a `shutdown` message or end of input.
pub async fn run_session<R, W>(initial: String, config: &EditorConfig, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let handle = spawn_session(initial, config)?;
    let mut updates = handle.subscribe();
    let mut lines = input.lines();
    let mut closed = false;
    info!("Edit session ready");

    write_update(&mut output, &handle.snapshot().await?).await?;

    loop {
        tokio::select! {
            biased;

            update = updates.recv() => match update {
                Ok(update) => write_update(&mut output, &update).await?,
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "Dropped graph updates"),
                Err(RecvError::Closed) => break,
            },
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };
                let message = match parse_line(&line) {
                    Ok(Some(message)) => message,
                    Ok(None) => continue,
                    Err(e) => {
                        warn!(error = %e, "Ignoring client message");
                        continue;
                    }
                };

                match dispatch(&handle, message).await? {
                    Reply::None => {}
                    Reply::Snapshot(update) => {
                        // Changes queued before the snapshot go out first
                        flush_updates(&mut updates, &mut output).await?;
                        write_update(&mut output, &update).await?;
                    }
                    Reply::NodeOperation(NodeOpOutcome::NoOp(reason)) => {
                        debug!(?reason, "Node operation had no effect");
                    }
                    Reply::NodeOperation(NodeOpOutcome::Applied(_)) => {}
                    Reply::Closed => {
                        closed = true;
                        break;
                    }
                }
            }
        }
    }

    if !closed {
        handle.shutdown().await?;
    }
    flush_updates(&mut updates, &mut output).await?;
    info!("Edit session finished");
    Ok(())
}

async fn flush_updates<W: AsyncWrite + Unpin>(
    updates: &mut tokio::sync::broadcast::Receiver<GraphUpdate>,
    output: &mut W,
) -> Result<()> {
    loop {
        match updates.try_recv() {
            Ok(update) => write_update(output, &update).await?,
            Err(TryRecvError::Lagged(skipped)) => warn!(skipped, "Dropped graph updates"),
            Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(()),
        }
    }
}

async fn write_update<W: AsyncWrite + Unpin>(output: &mut W, update: &GraphUpdate) -> Result<()> {
    let mut line = update.to_json()?;
    line.push('\n');
    output.write_all(line.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(input: &str) -> Vec<GraphUpdate> {
        let mut output = Vec::new();
        run_session(
            "Root".to_string(),
            &EditorConfig::default(),
            input.as_bytes(),
            &mut output,
        )
        .await
        .unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_session_over_lines() {
        let input = concat!(
            r#"{"type":"textChanged","text":"Root\n\tIdea"}"#,
            "\n",
            r#"{"type":"snapshot"}"#,
            "\n",
            r#"{"type":"shutdown"}"#,
            "\n",
        );
        let updates = run(input).await;

        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].version, 0);
        assert_eq!(updates[0].outline, "Root");
        assert_eq!(updates[1].version, 1);
        assert_eq!(updates[2].outline, "Root\n\tIdea");
        assert_eq!(updates[2].nodes.len(), 2);
        // Typing has not been committed yet
        assert!(!updates[2].can_undo);
    }

    #[tokio::test]
    async fn test_bad_lines_are_skipped() {
        let input = concat!(
            "garbage\n",
            "\n",
            r#"{"type":"nodeOperation","nodeId":"node-0","direction":"undo"}"#,
            "\n",
            r#"{"type":"snapshot"}"#,
            "\n",
        );
        let updates = run(input).await;

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].outline, "Root");
        assert_eq!(updates[1].version, 0);
    }
}
