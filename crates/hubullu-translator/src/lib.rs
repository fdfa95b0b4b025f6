use serde::{Deserialize, Deserializer, Serialize};

pub mod language;

pub use language::Language;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Look up candidate translations of `word`, in the order the source returns them
    async fn translate(&self, word: &str) -> Result<Vec<Translation>, TranslateError>;

    /// Human readable label of the source, used for display only
    fn name(&self) -> &str;
}

/// One candidate rendering of a word.
///
/// Annotations are either absent or non-empty; the builders are the only way
/// to set them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    context: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    grammar: Option<String>,
}

impl Translation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
            grammar: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = non_empty(context.into());
        self
    }

    pub fn with_grammar(mut self, grammar: impl Into<String>) -> Self {
        self.grammar = non_empty(grammar.into());
        self
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn grammar(&self) -> Option<&str> {
        self.grammar.as_deref()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Older vocabulary files store absent annotations as `""`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(non_empty))
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("language {0} not supported")]
    UnsupportedLanguage(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{url} responded with status code {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_annotations_are_not_serialized() {
        let json = serde_json::to_string(&Translation::new("koe").with_context("ark")).unwrap();
        assert_eq!(json, r#"{"text":"koe","context":"ark"}"#);
    }

    #[test]
    fn empty_annotations_deserialize_as_none() {
        let trl: Translation =
            serde_json::from_str(r#"{"text":"Test","context":"","grammar":"m"}"#).unwrap();
        assert_eq!(trl, Translation::new("Test").with_grammar("m"));

        let trl: Translation = serde_json::from_str(r#"{"text":"Test","context":null}"#).unwrap();
        assert_eq!(trl.context(), None);
        assert_eq!(trl.grammar(), None);
    }

    #[test]
    fn builders_drop_empty_values() {
        let trl = Translation::new("x").with_context("").with_grammar("");
        assert_eq!(trl, Translation::new("x"));
    }
}
