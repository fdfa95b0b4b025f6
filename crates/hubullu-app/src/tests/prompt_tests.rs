use std::time::Duration;

use tempfile::TempDir;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::{finnish, session_in};
use crate::prompt;

#[tokio::test]
async fn test_prompt_session_flow() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = session_in(temp_dir.path(), vec![finnish()]);
    let (tx, rx) = kanal::unbounded_async::<String>();

    for line in ["Baum", "", "1", "5", ":quit"] {
        tx.send(line.to_string()).await.unwrap();
    }

    let mut out = Vec::new();
    timeout(
        Duration::from_secs(2),
        prompt::run(&mut session, rx, CancellationToken::new(), &mut out),
    )
    .await
    .expect("prompt should stop at :quit")
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("> table:\n[1] puu"));
    assert!(output.contains("> saved\n"));
    assert!(output.contains("out of range"));
    assert!(output.ends_with("> \n"));
    assert_eq!(session.vocabulary().len(), 1);
    drop(tx);
}

#[tokio::test]
async fn test_prompt_stops_when_input_closes() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = session_in(temp_dir.path(), vec![finnish()]);
    let (tx, rx) = kanal::unbounded_async::<String>();
    drop(tx);

    let mut out = Vec::new();
    timeout(
        Duration::from_secs(2),
        prompt::run(&mut session, rx, CancellationToken::new(), &mut out),
    )
    .await
    .expect("prompt should stop at end of input")
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "> \n");
}

#[tokio::test]
async fn test_prompt_stops_on_quit_command() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = session_in(temp_dir.path(), vec![finnish()]);
    let (tx, rx) = kanal::unbounded_async::<String>();

    tx.send(":q".to_string()).await.unwrap();
    tx.send("Baum".to_string()).await.unwrap();

    let mut out = Vec::new();
    prompt::run(&mut session, rx, CancellationToken::new(), &mut out)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "> \n");
    assert!(session.displayed().is_empty());
    drop(tx);
}

#[tokio::test]
async fn test_prompt_stops_on_cancellation() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = session_in(temp_dir.path(), vec![finnish()]);
    let (tx, rx) = kanal::unbounded_async::<String>();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut out = Vec::new();
    timeout(
        Duration::from_secs(2),
        prompt::run(&mut session, rx, cancel, &mut out),
    )
    .await
    .expect("cancelled prompt should return")
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "> \n");
    drop(tx);
}
