use std::path::PathBuf;

use clap::Parser;
use hubullu_config::Config;
use hubullu_translator::Translator;

use crate::{Cli, build_translators};

#[test]
fn test_flags_override_config() {
    let mut config = Config::default();
    config.translator.source_lang = Some("sv".to_string());
    config.translator.target_lang = Some("en".to_string());

    let cli = Cli::try_parse_from(["hubullu", "de", "fi", "-v", "words.json", "--no-color"]).unwrap();
    let config = cli.apply(config);

    assert_eq!(config.language_pair().unwrap(), ("de", "fi"));
    assert_eq!(config.vocabulary.file, Some(PathBuf::from("words.json")));
    assert!(!config.ui.color);
}

#[test]
fn test_languages_fall_back_to_config() {
    let mut config = Config::default();
    config.translator.source_lang = Some("german".to_string());
    config.translator.target_lang = Some("finnish".to_string());

    let cli = Cli::try_parse_from(["hubullu"]).unwrap();
    let config = cli.apply(config);

    assert_eq!(config.language_pair().unwrap(), ("german", "finnish"));
    assert!(config.ui.color);
}

#[test]
fn test_unsupported_language_is_fatal() {
    let mut config = Config::default();
    config.translator.source_lang = Some("de".to_string());
    config.translator.target_lang = Some("tlh".to_string());

    let err = build_translators(&config).err().expect("tlh is not supported");
    assert_eq!(err.to_string(), "language tlh not supported");
}

#[test]
fn test_builds_sanakirja_source() {
    let mut config = Config::default();
    config.translator.source_lang = Some("de".to_string());
    config.translator.target_lang = Some("fi".to_string());

    let translators = build_translators(&config).unwrap();

    assert_eq!(translators.len(), 1);
    assert_eq!(translators[0].name(), "Sanakirja.org");
}
