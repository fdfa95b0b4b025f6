use std::io::Write;

use hubullu_core::lookup_all;

use crate::state::Session;

pub async fn handle_lookup<W: Write>(
    session: &mut Session,
    word: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    tracing::info!("Looking up '{}'", word);
    let results = lookup_all(word, session.translators()).await;

    let mut displayed = Vec::new();
    for result in results {
        match result.items {
            Ok(items) => {
                writeln!(out, "{}:", result.source)?;
                if items.is_empty() {
                    writeln!(out, "no translations found")?;
                }
                for item in items {
                    let line = session.renderer().item(displayed.len() + 1, &item, word);
                    writeln!(out, "{line}")?;
                    displayed.push(item);
                }
            }
            Err(e) => writeln!(out, "{}: lookup failed: {e}", result.source)?,
        }
        writeln!(out)?;
    }

    tracing::debug!("Displaying {} items", displayed.len());
    session.set_displayed(displayed);
    Ok(())
}
