use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::filename::synthesize_filename;
use crate::types::Item;

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize vocabulary: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl VocabularyError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// On-disk shape. The filename is never part of the payload.
#[derive(Serialize)]
struct VocabularyFile<'a> {
    items: &'a [Item],
}

#[derive(Deserialize)]
struct StoredVocabulary {
    #[serde(default)]
    items: Option<Vec<Item>>,
}

/// Ordered, append-only collection of accepted lookups
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    filename: Option<PathBuf>,
    items: Vec<Item>,
}

impl Vocabulary {
    /// Empty vocabulary with no file bound yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a vocabulary from `path`.
    ///
    /// A missing file is created empty so the name is reserved, and an empty
    /// vocabulary bound to it is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                File::create(path).map_err(|e| VocabularyError::io(path, e))?;
                tracing::info!("Created new vocabulary file {}", path.display());
                return Ok(Self::bound_to(path, Vec::new()));
            }
            Err(e) => return Err(VocabularyError::io(path, e)),
        };

        // A reserved file that was never saved to
        if content.trim().is_empty() {
            tracing::debug!("Vocabulary file {} is empty", path.display());
            return Ok(Self::bound_to(path, Vec::new()));
        }

        let stored: StoredVocabulary =
            serde_json::from_str(&content).map_err(|source| VocabularyError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let items = stored.items.unwrap_or_default();

        tracing::info!("Loaded {} items from {}", items.len(), path.display());
        Ok(Self::bound_to(path, items))
    }

    fn bound_to(path: &Path, items: Vec<Item>) -> Self {
        Self {
            filename: Some(path.to_path_buf()),
            items,
        }
    }

    /// Append an item. No I/O happens until [`Vocabulary::save`].
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Save to the bound file, picking a fresh name in the working directory if none is bound
    pub fn save(&mut self) -> Result<PathBuf, VocabularyError> {
        self.save_in(Path::new("."))
    }

    /// Save to the bound file, picking a fresh name in `dir` if none is bound.
    ///
    /// On failure the in-memory items are left untouched.
    pub fn save_in(&mut self, dir: &Path) -> Result<PathBuf, VocabularyError> {
        let path = match &self.filename {
            Some(path) => path.clone(),
            None => {
                let path = dir.join(unused_filename_in(dir)?);
                tracing::debug!("Picked vocabulary filename {}", path.display());
                self.filename.insert(path).clone()
            }
        };

        let content = serde_json::to_string_pretty(&VocabularyFile { items: &self.items })?;
        write_replacing(&path, content.as_bytes())?;

        tracing::debug!("Saved {} items to {}", self.items.len(), path.display());
        Ok(path)
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn unused_filename_in(dir: &Path) -> Result<String, VocabularyError> {
    let existing = fs::read_dir(dir)
        .map_err(|e| VocabularyError::io(dir, e))?
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect::<HashSet<_>>();

    Ok(synthesize_filename(Local::now().naive_local(), &existing))
}

/// Write through a temporary sibling file and rename it over `path`.
///
/// The temporary file is removed again if any step fails.
fn write_replacing(path: &Path, content: &[u8]) -> Result<(), VocabularyError> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let result = write_synced(&temp_path, content)
        .and_then(|()| fs::rename(&temp_path, path))
        .map_err(|e| VocabularyError::io(path, e));

    if result.is_err() && temp_path.is_file() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
