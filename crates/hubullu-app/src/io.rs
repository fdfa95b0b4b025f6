use std::io::BufRead;
use std::thread;

use kanal::{AsyncReceiver, Sender};

/// Forward stdin lines to the async session.
///
/// Runs on a plain thread rather than `spawn_blocking`: a read blocked on the
/// terminal must not keep the runtime from shutting down. The channel closes
/// at end of input.
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::unbounded::<String>();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        forward_lines(stdin.lock(), &tx);
        tracing::debug!("Input reader stopping");
    });

    rx.to_async()
}

/// Send every line of `reader` until end of input or until the receiver is gone.
///
/// Bytes that are not UTF-8 are replaced rather than ending the session.
pub fn forward_lines<R: BufRead>(mut reader: R, tx: &Sender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if std::str::from_utf8(&buf).is_err() {
            tracing::warn!("Input line is not valid UTF-8: {}", line.trim_end());
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if tx.send(line).is_err() {
            break;
        }
    }
}
