use std::path::PathBuf;
use std::sync::Arc;

use hubullu_core::{Item, Vocabulary, VocabularyError};
use hubullu_translator::Translator;

use crate::render::Renderer;

/// Everything one interactive session owns
pub struct Session {
    vocabulary: Vocabulary,
    translators: Vec<Arc<dyn Translator>>,
    /// Where a vocabulary without a bound file gets saved
    vocab_dir: PathBuf,
    /// Items of the last lookup, numbered from 1 across all sources
    displayed: Vec<Item>,
    renderer: Renderer,
}

impl Session {
    pub fn new(
        vocabulary: Vocabulary,
        translators: Vec<Arc<dyn Translator>>,
        vocab_dir: PathBuf,
        renderer: Renderer,
    ) -> Self {
        Self {
            vocabulary,
            translators,
            vocab_dir,
            displayed: Vec::new(),
            renderer,
        }
    }

    pub fn translators(&self) -> &[Arc<dyn Translator>] {
        &self.translators
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn displayed(&self) -> &[Item] {
        &self.displayed
    }

    pub fn set_displayed(&mut self, items: Vec<Item>) {
        self.displayed = items;
    }

    /// Item shown as `[number]` by the last lookup
    pub fn displayed_item(&self, number: i64) -> Option<&Item> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.displayed.get(index)
    }

    /// Append to the vocabulary and persist it.
    ///
    /// The item stays in memory even when saving fails.
    pub fn accept(&mut self, item: Item) -> Result<PathBuf, VocabularyError> {
        self.vocabulary.add(item);
        self.vocabulary.save_in(&self.vocab_dir)
    }
}
