use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Vars;

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// File to load and save; a fresh timestamped file is used when unset
    pub file: Option<PathBuf>,
    /// Where timestamped files are created
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            file: None,
            directory: default_directory(),
        }
    }
}

impl VocabularyConfig {
    pub(crate) fn from_vars(vars: &Vars) -> Self {
        Self {
            file: vars("HUBULLU_VOCAB_FILE").map(PathBuf::from),
            directory: vars("HUBULLU_VOCAB_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_directory),
        }
    }
}
