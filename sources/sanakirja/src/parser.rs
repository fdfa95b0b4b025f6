use std::sync::LazyLock;

use hubullu_translator::Translation;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table#translations tr").expect("valid row selector"));
static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid header selector"));
static DATA_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid cell selector"));

/// Trailing ` {m}` style annotation on a translation
static GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \{([^}]+)\}").expect("valid grammar regex"));

const TEXT_HEADER: &str = "Käännös";
const CONTEXT_HEADER: &str = "Konteksti";

/// Extract translations from a Sanakirja.org search result page.
///
/// A page without a results table yields no translations.
pub fn parse_translations(html: &str) -> Vec<Translation> {
    let document = Html::parse_document(html);

    let mut text_column = None;
    let mut context_column = None;
    let mut translations = Vec::new();

    for row in document.select(&ROW) {
        if has_class(&row, "th_class") {
            // Data rows start with a numbering cell that has no header
            for (i, header) in row.select(&HEADER_CELL).enumerate() {
                match cell_text(&header).as_str() {
                    TEXT_HEADER => text_column = Some(i + 1),
                    CONTEXT_HEADER => context_column = Some(i + 1),
                    _ => {}
                }
            }
            continue;
        }
        if has_class(&row, "group_name") {
            continue;
        }

        let cells: Vec<ElementRef> = row.select(&DATA_CELL).collect();
        let mut translation = Translation::default();

        if let Some(cell) = text_column.and_then(|i| cells.get(i)) {
            let (text, grammar) = split_grammar(&cell_text(cell));
            translation = Translation::new(text);
            if let Some(grammar) = grammar {
                translation = translation.with_grammar(grammar);
            }
        }
        if let Some(cell) = context_column.and_then(|i| cells.get(i)) {
            translation = translation.with_context(cell_text(cell));
        }

        translations.push(translation);
    }

    tracing::debug!("Parsed {} translations", translations.len());
    translations
}

fn has_class(row: &ElementRef, class: &str) -> bool {
    row.value().classes().any(|c| c == class)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn split_grammar(text: &str) -> (String, Option<String>) {
    let grammar = GRAMMAR
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    let text = GRAMMAR.replace_all(text, "").trim().to_string();
    (text, grammar)
}
