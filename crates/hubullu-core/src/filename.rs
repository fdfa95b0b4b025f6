use std::collections::HashSet;

use chrono::NaiveDateTime;

pub const VOCABULARY_EXTENSION: &str = "json";

/// Pick a vocabulary filename for `timestamp` that is not in `existing`.
///
/// The base name is `vocab_YYMMDD-HHMMSS`; on collision `_1`, `_2`, ... is
/// appended until a free name is found.
pub fn synthesize_filename(timestamp: NaiveDateTime, existing: &HashSet<String>) -> String {
    let base = timestamp.format("vocab_%y%m%d-%H%M%S").to_string();

    let first = format!("{base}.{VOCABULARY_EXTENSION}");
    if !existing.contains(&first) {
        return first;
    }

    (1u32..)
        .map(|suffix| format!("{base}_{suffix}.{VOCABULARY_EXTENSION}"))
        .find(|name| !existing.contains(name))
        .unwrap_or(first)
}
