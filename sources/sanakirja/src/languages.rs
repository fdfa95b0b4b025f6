use hubullu_translator::Language;

/// Numeric language id used in Sanakirja.org search URLs
pub fn language_id(language: Language) -> u8 {
    match language {
        Language::Bulgarian => 1,
        Language::Estonian => 2,
        Language::English => 3,
        Language::Spanish => 4,
        Language::Esperanto => 5,
        Language::Italian => 6,
        Language::Greek => 7,
        Language::Latin => 8,
        Language::Latvian => 9,
        Language::Lithuanian => 10,
        Language::Norwegian => 11,
        Language::Portuguese => 12,
        Language::Polish => 13,
        Language::French => 14,
        Language::Swedish => 15,
        Language::German => 16,
        Language::Finnish => 17,
        Language::Danish => 18,
        Language::Czech => 19,
        Language::Turkish => 20,
        Language::Hungarian => 21,
        Language::Russian => 22,
        Language::Dutch => 23,
        Language::Japanese => 24,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_contiguous() {
        let mut ids: Vec<u8> = Language::ALL.into_iter().map(language_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=24).collect::<Vec<u8>>());
    }

    #[test]
    fn known_ids() {
        assert_eq!(language_id(Language::German), 16);
        assert_eq!(language_id(Language::Finnish), 17);
    }
}
