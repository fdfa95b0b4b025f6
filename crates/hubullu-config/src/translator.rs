use serde::{Deserialize, Serialize};

use crate::Vars;

fn default_sanakirja_url() -> String {
    "https://www.sanakirja.org".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Language code or English name, e.g. `de` or `german`
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    #[serde(default = "default_sanakirja_url")]
    pub sanakirja_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_lang: None,
            target_lang: None,
            sanakirja_url: default_sanakirja_url(),
        }
    }
}

impl TranslatorConfig {
    pub(crate) fn from_vars(vars: &Vars) -> Self {
        Self {
            source_lang: vars("HUBULLU_SOURCE_LANG"),
            target_lang: vars("HUBULLU_TARGET_LANG"),
            sanakirja_url: vars("HUBULLU_SANAKIRJA_URL").unwrap_or_else(default_sanakirja_url),
        }
    }
}
