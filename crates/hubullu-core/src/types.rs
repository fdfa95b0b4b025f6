use hubullu_translator::Translation;
use serde::{Deserialize, Deserializer, Serialize};

/// One translation of a word together with what that translation translates back to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub word: String,
    pub translation: Translation,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub backtranslations: Vec<Translation>,
}

impl Item {
    pub fn new(word: impl Into<String>, translation: Translation) -> Self {
        Self {
            word: word.into(),
            translation,
            backtranslations: Vec::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Translation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Translation>>::deserialize(deserializer)?.unwrap_or_default())
}
