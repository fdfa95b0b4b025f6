use std::io::Write;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::events::{Flow, SessionEvent, handle_event};
use crate::state::Session;

/// Read-eval-print loop. Ends on `:q`, end of input or cancellation.
pub async fn run<W: Write>(
    session: &mut Session,
    lines: AsyncReceiver<String>,
    cancel: CancellationToken,
    out: &mut W,
) -> anyhow::Result<()> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => match line {
                Ok(line) => line,
                Err(_) => break,
            },
        };

        let Some(event) = SessionEvent::parse(&line) else {
            continue;
        };

        let flow = tokio::select! {
            _ = cancel.cancelled() => break,
            flow = handle_event(session, event, out) => flow?,
        };
        if flow == Flow::Quit {
            break;
        }
    }

    writeln!(out)?;
    tracing::info!("Session ended with {} vocabulary items", session.vocabulary().len());
    Ok(())
}
