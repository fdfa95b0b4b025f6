use colored::Colorize;
use hubullu_core::Item;
use hubullu_translator::Translation;
use unicode_normalization::UnicodeNormalization;

/// Terminal formatting of lookup results
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    max_backtranslations: usize,
}

impl Renderer {
    pub fn new(color: bool, max_backtranslations: usize) -> Self {
        Self {
            color,
            max_backtranslations,
        }
    }

    /// `[n] text <grammar> (context) → back1, back2`
    pub fn item(&self, number: usize, item: &Item, word: &str) -> String {
        let backtranslations = item
            .backtranslations
            .iter()
            .take(self.max_backtranslations)
            .map(|back| self.backtranslation(back, word))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "[{number}] {} → {backtranslations}",
            self.translation(&item.translation)
        )
    }

    pub fn translation(&self, translation: &Translation) -> String {
        let mut result = if self.color {
            translation.text.bold().to_string()
        } else {
            translation.text.clone()
        };
        if let Some(grammar) = translation.grammar() {
            result.push_str(&format!(" <{grammar}>"));
        }
        if let Some(context) = translation.context() {
            result.push_str(&format!(" ({context})"));
        }
        result
    }

    /// Backtranslations that lead back to the query word are highlighted
    fn backtranslation(&self, back: &Translation, word: &str) -> String {
        if !self.color {
            return back.text.clone();
        }
        let text = back.text.blue();
        if same_word(&back.text, word) {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Case-insensitive comparison after Unicode normalization
pub fn same_word(a: &str, b: &str) -> bool {
    let normalize = |s: &str| s.trim().nfc().collect::<String>().to_lowercase();
    normalize(a) == normalize(b)
}
