pub mod languages;
pub mod parser;
pub mod translator;

pub use parser::parse_translations;
pub use translator::SanakirjaTranslator;
