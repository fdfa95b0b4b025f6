mod cli_tests;
mod prompt_tests;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use hubullu_core::Vocabulary;
use hubullu_translator::{TranslateError, Translation, Translator};

use crate::render::Renderer;
use crate::state::Session;

/// Dictionary backed translator; unknown words fail like an unreachable upstream
pub(crate) struct TableTranslator {
    name: String,
    table: HashMap<String, Vec<Translation>>,
}

impl TableTranslator {
    pub(crate) fn new(name: &str, entries: &[(&str, &[&str])]) -> Self {
        let table = entries
            .iter()
            .map(|(word, texts)| {
                let translations = texts.iter().map(|t| Translation::new(*t)).collect();
                (word.to_string(), translations)
            })
            .collect();
        Self {
            name: name.to_string(),
            table,
        }
    }
}

#[async_trait]
impl Translator for TableTranslator {
    async fn translate(&self, word: &str) -> Result<Vec<Translation>, TranslateError> {
        self.table
            .get(word)
            .cloned()
            .ok_or_else(|| TranslateError::InvalidResponse(format!("no entry for {word}")))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub(crate) fn finnish() -> Arc<dyn Translator> {
    Arc::new(TableTranslator::new(
        "table",
        &[
            ("Baum", &["puu", "runko"]),
            ("puu", &["Baum", "Holz"]),
            ("runko", &["Stamm"]),
        ],
    ))
}

pub(crate) fn session_in(dir: &Path, translators: Vec<Arc<dyn Translator>>) -> Session {
    Session::new(
        Vocabulary::new(),
        translators,
        dir.to_path_buf(),
        Renderer::new(false, 5),
    )
}
