pub mod filename;
pub mod lookup;
pub mod types;
pub mod vocabulary;

pub use lookup::{SourceResult, backtranslate, create_items, lookup_all};
pub use types::Item;
pub use vocabulary::{Vocabulary, VocabularyError};
