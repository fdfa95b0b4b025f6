use std::sync::Arc;

use hubullu_translator::{TranslateError, Translation, Translator};
use tokio::task::JoinSet;

use crate::types::Item;

/// Items produced by one translation source
#[derive(Debug)]
pub struct SourceResult {
    pub source: String,
    pub items: Result<Vec<Item>, TranslateError>,
}

/// Translate `word` and attach backtranslations to every candidate.
///
/// Fails only if the primary lookup fails. Backtranslations are fetched
/// concurrently, one task per candidate with non-empty text, and the
/// returned items keep the order the source produced the candidates in.
pub async fn create_items(
    word: &str,
    translator: Arc<dyn Translator>,
) -> Result<Vec<Item>, TranslateError> {
    let translations = translator.translate(word).await?;
    tracing::debug!(
        "{}: {} candidates for '{}'",
        translator.name(),
        translations.len(),
        word
    );

    let mut items: Vec<Item> = translations
        .into_iter()
        .map(|translation| Item::new(word, translation))
        .collect();

    let mut tasks = JoinSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.translation.text.is_empty() {
            continue;
        }
        let text = item.translation.text.clone();
        let translator = Arc::clone(&translator);
        tasks.spawn(async move { (index, backtranslate(translator.as_ref(), &text).await) });
    }

    // Each task owns exactly one slot
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, backtranslations)) => items[index].backtranslations = backtranslations,
            Err(e) => tracing::warn!("backtranslation task failed: {e}"),
        }
    }

    Ok(items)
}

/// Best-effort reverse lookup of a candidate translation.
///
/// Errors collapse into an empty result: a missing backtranslation only
/// makes the output less informative and must never abort a lookup.
pub async fn backtranslate(translator: &dyn Translator, text: &str) -> Vec<Translation> {
    match translator.translate(text).await {
        Ok(translations) => translations,
        Err(e) => {
            tracing::debug!("{}: backtranslation of '{}' failed: {e}", translator.name(), text);
            Vec::new()
        }
    }
}

/// Run [`create_items`] against every source, in registration order.
///
/// Sources are independent; one failing does not affect the others.
pub async fn lookup_all(word: &str, translators: &[Arc<dyn Translator>]) -> Vec<SourceResult> {
    let mut results = Vec::with_capacity(translators.len());
    for translator in translators {
        let items = create_items(word, Arc::clone(translator)).await;
        if let Err(e) = &items {
            tracing::warn!("{}: lookup of '{}' failed: {e}", translator.name(), word);
        }
        results.push(SourceResult {
            source: translator.name().to_string(),
            items,
        });
    }
    results
}
