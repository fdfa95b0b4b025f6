use async_trait::async_trait;
use hubullu_translator::{Language, TranslateError, Translation, Translator};
use reqwest::StatusCode;

use crate::languages::language_id;
use crate::parser::parse_translations;

pub const DEFAULT_BASE_URL: &str = "https://www.sanakirja.org";

/// Scrapes Sanakirja.org for translations.
///
/// Sanakirja.org searches the opposite direction by itself when a word has
/// no results in the requested one.
#[derive(Clone)]
pub struct SanakirjaTranslator {
    client: reqwest::Client,
    search_url: String,
    source_id: u8,
    target_id: u8,
}

impl SanakirjaTranslator {
    pub fn new(client: reqwest::Client, base_url: &str, source: Language, target: Language) -> Self {
        Self {
            client,
            search_url: format!("{}/search.php", base_url.trim_end_matches('/')),
            source_id: language_id(source),
            target_id: language_id(target),
        }
    }

    /// Build from user supplied language names or codes
    pub fn from_codes(
        client: reqwest::Client,
        base_url: &str,
        source: &str,
        target: &str,
    ) -> Result<Self, TranslateError> {
        let source: Language = source.parse()?;
        let target: Language = target.parse()?;
        Ok(Self::new(client, base_url, source, target))
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl Translator for SanakirjaTranslator {
    async fn translate(&self, word: &str) -> Result<Vec<Translation>, TranslateError> {
        let query = [
            ("l", self.source_id.to_string()),
            ("l2", self.target_id.to_string()),
            ("q", word.to_string()),
        ];

        let response = self
            .client
            .get(&self.search_url)
            .query(&query)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(TranslateError::UnexpectedStatus {
                url: response.url().to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to read response body: {}", e))
        })?;

        tracing::debug!("Sanakirja.org answered {} bytes for '{}'", body.len(), word);
        Ok(parse_translations(&body))
    }

    fn name(&self) -> &str {
        "Sanakirja.org"
    }
}
