use crate::config::section_vocabulary;
use crate::dict::scan::FileResolver;
use crate::dict::store::DictionarySet;
use crate::error::{AssistError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads per-language translation trees from a project.
///
/// Two passes: conventional file locations first, then a heuristic scan of
/// every workspace JSON file when the conventions yield nothing. Malformed
/// files are skipped, never fatal; only a total absence of qualifying files
/// is an error.
pub struct DictionaryLoader {
    verbose: bool,
    extra_sections: Vec<String>,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryLoader {
    pub fn new() -> Self {
        Self {
            verbose: false,
            extra_sections: Vec::new(),
        }
    }

    /// Set verbose mode for per-file skip warnings on stderr
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Add project-specific section names to the scan vocabulary
    pub fn set_extra_sections(&mut self, sections: Vec<String>) {
        self.extra_sections = sections;
    }

    /// Load a [`DictionarySet`] through the given resolver.
    pub fn load(&self, resolver: &dyn FileResolver) -> Result<DictionarySet> {
        let mut set = DictionarySet::new();

        // Pass 1: conventional locations, in order
        for path in resolver.candidate_locations() {
            match parse_dictionary_file(&path) {
                Ok(tree) => {
                    set.insert_file(&path, tree);
                }
                Err(e) => self.warn_skip(&path, &e),
            }
        }

        // Pass 2: heuristic scan, only when the conventions yielded nothing
        if set.is_empty() {
            for path in resolver.enumerate_json_files() {
                match parse_dictionary_file(&path) {
                    Ok(tree) => {
                        if self.looks_like_dictionary(&tree) {
                            set.insert_file(&path, tree);
                        }
                    }
                    Err(e) => self.warn_skip(&path, &e),
                }
            }
        }

        if set.is_empty() {
            return Err(AssistError::no_dictionaries(resolver.searched_paths()));
        }
        Ok(set)
    }

    /// Structural heuristic for the fallback scan: at least one top-level
    /// value is itself an object, and at least one top-level key is in the
    /// section vocabulary.
    fn looks_like_dictionary(&self, tree: &Value) -> bool {
        let map = match tree.as_object() {
            Some(map) => map,
            None => return false,
        };

        let has_nested = map.values().any(|v| v.is_object());
        if !has_nested {
            return false;
        }

        map.keys().any(|k| {
            section_vocabulary().contains(&k.as_str())
                || self.extra_sections.iter().any(|s| s == k)
        })
    }

    fn warn_skip(&self, path: &Path, err: &AssistError) {
        if !self.verbose {
            return;
        }
        use colored::Colorize;
        eprintln!(
            "{}: skipped {}: {}",
            "Warning".yellow(),
            path.display(),
            err
        );
    }
}

/// Read and parse one JSON dictionary file. Comments are stripped first so
/// JSONC dictionaries parse too; the document root must be an object.
pub fn parse_dictionary_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| AssistError::json_parse(path, format!("Failed to read file: {}", e)))?;

    let cleaned = strip_json_comments(&content);

    let root: Value = serde_json::from_str(&cleaned)
        .map_err(|e| AssistError::json_parse(path, format!("Invalid JSON syntax: {}", e)))?;

    if !root.is_object() {
        return Err(AssistError::json_parse(
            path,
            "Document root is not an object",
        ));
    }
    Ok(root)
}

/// Strip single-line (//) and multi-line (/* */) comments from JSON,
/// preserving newlines so any reported line numbers stay meaningful.
fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(ch) = chars.next() {
        if escape_next {
            result.push(ch);
            escape_next = false;
            continue;
        }

        if ch == '\\' && in_string {
            result.push(ch);
            escape_next = true;
            continue;
        }

        if ch == '"' {
            in_string = !in_string;
            result.push(ch);
            continue;
        }

        if !in_string && ch == '/' {
            if let Some(&next_ch) = chars.peek() {
                if next_ch == '/' {
                    chars.next();
                    for c in chars.by_ref() {
                        if c == '\n' {
                            result.push('\n');
                            break;
                        }
                    }
                    continue;
                } else if next_ch == '*' {
                    chars.next();
                    let mut prev = ' ';
                    for c in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        if c == '\n' {
                            result.push('\n');
                        }
                        prev = c;
                    }
                    continue;
                }
            }
        }

        result.push(ch);
    }

    result
}
