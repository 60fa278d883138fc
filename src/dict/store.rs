use crate::error::{AssistError, Result};
use crate::tree;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// One language's translation dictionary and its source file
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Language code derived from the file stem (`en.json` -> "en")
    pub language: String,
    /// The file this dictionary was loaded from
    pub file: PathBuf,
    /// The parsed translation tree (a JSON object at the root)
    pub tree: Value,
}

impl Dictionary {
    /// Serialize the tree back to its source file with 2-space indentation
    /// and a trailing newline. Untouched keys keep their order; new keys
    /// sit at the end of their sub-tree.
    pub fn write(&self) -> Result<()> {
        let mut out = serde_json::to_string_pretty(&self.tree)
            .map_err(|e| AssistError::write_failed(&self.file, e.to_string()))?;
        out.push('\n');
        fs::write(&self.file, out).map_err(|e| AssistError::write_failed(&self.file, e.to_string()))
    }
}

/// All dictionaries discovered in one resolution session, in discovery order
#[derive(Debug, Clone, Default)]
pub struct DictionarySet {
    dictionaries: Vec<Dictionary>,
}

impl DictionarySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dictionary> {
        self.dictionaries.iter()
    }

    /// Register a parsed tree under the language code taken from the file
    /// stem. At most one dictionary per language: the first file claiming a
    /// stem wins and later ones are ignored.
    pub fn insert_file(&mut self, file: &Path, tree: Value) -> bool {
        let language = match file.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => return false,
        };
        if self.get(&language).is_some() {
            return false;
        }
        self.dictionaries.push(Dictionary {
            language,
            file: file.to_path_buf(),
            tree,
        });
        true
    }

    pub fn get(&self, language: &str) -> Option<&Dictionary> {
        self.dictionaries.iter().find(|d| d.language == language)
    }

    pub fn get_mut(&mut self, language: &str) -> Option<&mut Dictionary> {
        self.dictionaries.iter_mut().find(|d| d.language == language)
    }

    pub fn languages(&self) -> Vec<&str> {
        self.dictionaries.iter().map(|d| d.language.as_str()).collect()
    }

    /// The reference dictionary: "en" if loaded, else the first discovered.
    /// Completion and classification resolve keys against this tree.
    pub fn reference(&self) -> Option<&Dictionary> {
        self.get("en").or_else(|| self.dictionaries.first())
    }

    /// Insert a new leaf into one language's tree. Refuses paths that are
    /// already occupied (leaf or sub-tree) with `PathAlreadyExists`; the
    /// caller persists via [`Dictionary::write`].
    pub fn add_key(&mut self, language: &str, key: &str, value: &str) -> Result<()> {
        match self.get_mut(language) {
            Some(dict) => tree::insert(&mut dict.tree, key, Value::String(value.to_string())),
            None => Err(AssistError::Generic(format!(
                "no dictionary loaded for language '{}'",
                language
            ))),
        }
    }
}
