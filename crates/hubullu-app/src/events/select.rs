use std::io::Write;

use crate::state::Session;

pub fn handle_selection<W: Write>(
    session: &mut Session,
    number: i64,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(item) = session.displayed_item(number).cloned() else {
        writeln!(out, "out of range\n")?;
        return Ok(());
    };

    match session.accept(item) {
        Ok(path) => {
            tracing::info!("Saved vocabulary to {}", path.display());
            writeln!(out, "saved\n")?;
        }
        Err(e) => {
            tracing::error!("Failed to save vocabulary: {e}");
            writeln!(out, "saving failed: {e}\n")?;
        }
    }
    Ok(())
}
