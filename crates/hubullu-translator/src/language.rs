use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TranslateError;

/// Languages known to the bundled translation sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    Bulgarian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Japanese,
    Latin,
    Latvian,
    Lithuanian,
    Norwegian,
    Polish,
    Portuguese,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 24] = [
        Language::Bulgarian,
        Language::Czech,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Esperanto,
        Language::Estonian,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Hungarian,
        Language::Italian,
        Language::Japanese,
        Language::Latin,
        Language::Latvian,
        Language::Lithuanian,
        Language::Norwegian,
        Language::Polish,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
        Language::Turkish,
    ];

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::Bulgarian => "bg",
            Language::Czech => "cs",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Esperanto => "eo",
            Language::Estonian => "et",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::German => "de",
            Language::Greek => "el",
            Language::Hungarian => "hu",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Latin => "la",
            Language::Latvian => "lv",
            Language::Lithuanian => "lt",
            Language::Norwegian => "no",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
            Language::Turkish => "tr",
        }
    }

    /// English name
    pub fn name(self) -> &'static str {
        match self {
            Language::Bulgarian => "Bulgarian",
            Language::Czech => "Czech",
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::English => "English",
            Language::Esperanto => "Esperanto",
            Language::Estonian => "Estonian",
            Language::Finnish => "Finnish",
            Language::French => "French",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::Hungarian => "Hungarian",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Latin => "Latin",
            Language::Latvian => "Latvian",
            Language::Lithuanian => "Lithuanian",
            Language::Norwegian => "Norwegian",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swedish => "Swedish",
            Language::Turkish => "Turkish",
        }
    }
}

impl FromStr for Language {
    type Err = TranslateError;

    /// Accepts a code (`de`) or an English name (`german`), case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        // "nb" is the code most systems report for Norwegian
        if needle.eq_ignore_ascii_case("nb") {
            return Ok(Language::Norwegian);
        }
        Language::ALL
            .into_iter()
            .find(|lang| {
                needle.eq_ignore_ascii_case(lang.code()) || needle.eq_ignore_ascii_case(lang.name())
            })
            .ok_or_else(|| TranslateError::UnsupportedLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = TranslateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
        assert_eq!("FI".parse::<Language>().unwrap(), Language::Finnish);
        assert_eq!("finnish".parse::<Language>().unwrap(), Language::Finnish);
        assert_eq!(" Swedish ".parse::<Language>().unwrap(), Language::Swedish);
        assert_eq!("nb".parse::<Language>().unwrap(), Language::Norwegian);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedLanguage(ref l) if l == "klingon"));
        assert_eq!(err.to_string(), "language klingon not supported");
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::German).unwrap(), r#""de""#);
        let lang: Language = serde_json::from_str(r#""ja""#).unwrap();
        assert_eq!(lang, Language::Japanese);
    }
}
