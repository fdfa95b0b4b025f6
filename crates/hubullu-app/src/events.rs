use std::io::Write;

use crate::state::Session;

pub mod lookup;
pub mod select;

use lookup::handle_lookup;
use select::handle_selection;

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Lookup(String),
    /// 1-based index into the last displayed results
    Select(i64),
    Quit,
}

impl SessionEvent {
    /// `None` for blank lines
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line == ":q" || line == ":quit" {
            return Some(SessionEvent::Quit);
        }
        match line.parse::<i64>() {
            Ok(number) => Some(SessionEvent::Select(number)),
            Err(_) => Some(SessionEvent::Lookup(line.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn handle_event<W: Write>(
    session: &mut Session,
    event: SessionEvent,
    out: &mut W,
) -> anyhow::Result<Flow> {
    tracing::debug!("handling {:?}", event);
    match event {
        SessionEvent::Lookup(word) => handle_lookup(session, &word, out).await?,
        SessionEvent::Select(number) => handle_selection(session, number, out)?,
        SessionEvent::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
