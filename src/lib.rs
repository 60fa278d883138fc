pub mod classify;
pub mod complete;
pub mod config;
pub mod dict;
pub mod error;
pub mod tree;

use std::path::PathBuf;

// Re-export commonly used types
pub use classify::{suggest_key, Classifier, RejectReason, Verdict};
pub use complete::{complete, Candidate, CandidateKind, Completion};
pub use dict::{Dictionary, DictionaryLoader, DictionarySet, FileResolver, ProjectScanner};
pub use error::{AssistError, Result};
pub use tree::{flatten, FlatEntry};

/// Query parameters for resolving one key across all languages
#[derive(Debug, Clone)]
pub struct LookupQuery {
    pub key: String,
    pub base_dir: Option<PathBuf>,
    pub exclude_patterns: Vec<String>,
    pub verbose: bool,
}

impl LookupQuery {
    pub fn new(key: String) -> Self {
        Self {
            key,
            base_dir: None,
            exclude_patterns: Vec::new(),
            verbose: false,
        }
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclude_patterns = exclusions;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// One language's value for a resolved key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageValue {
    pub language: String,
    pub file: PathBuf,
    pub value: String,
}

/// Result of a cross-language key lookup. An empty `values` list means the
/// key exists in no loaded dictionary, which is a normal outcome.
#[derive(Debug)]
pub struct LookupResult {
    pub key: String,
    pub values: Vec<LanguageValue>,
}

/// Query parameters for dot-path completion
#[derive(Debug, Clone)]
pub struct CompletionQuery {
    pub partial: String,
    pub base_dir: Option<PathBuf>,
    pub exclude_patterns: Vec<String>,
    pub verbose: bool,
}

impl CompletionQuery {
    pub fn new(partial: String) -> Self {
        Self {
            partial,
            base_dir: None,
            exclude_patterns: Vec::new(),
            verbose: false,
        }
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclude_patterns = exclusions;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Query parameters for classifying a literal string found in markup
#[derive(Debug, Clone)]
pub struct ClassifyQuery {
    pub text: String,
    pub base_dir: Option<PathBuf>,
    pub exclude_patterns: Vec<String>,
    pub extra_deny_list: Vec<String>,
    pub notable_phrases: Vec<String>,
    pub verbose: bool,
}

impl ClassifyQuery {
    pub fn new(text: String) -> Self {
        Self {
            text,
            base_dir: None,
            exclude_patterns: Vec::new(),
            extra_deny_list: Vec::new(),
            notable_phrases: Vec::new(),
            verbose: false,
        }
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclude_patterns = exclusions;
        self
    }

    pub fn with_deny_list(mut self, extra: Vec<String>) -> Self {
        self.extra_deny_list = extra;
        self
    }

    pub fn with_notable_phrases(mut self, phrases: Vec<String>) -> Self {
        self.notable_phrases = phrases;
        self
    }
}

/// Query parameters for inserting a new key into one or more languages
#[derive(Debug, Clone)]
pub struct AddKeyQuery {
    pub key: String,
    /// (language, value) pairs to insert, attempted independently
    pub values: Vec<(String, String)>,
    pub base_dir: Option<PathBuf>,
    pub exclude_patterns: Vec<String>,
    pub verbose: bool,
}

impl AddKeyQuery {
    pub fn new(key: String, values: Vec<(String, String)>) -> Self {
        Self {
            key,
            values,
            base_dir: None,
            exclude_patterns: Vec::new(),
            verbose: false,
        }
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclude_patterns = exclusions;
        self
    }
}

/// Per-language outcome of an add-key operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddStatus {
    /// Key inserted and dictionary written back
    Added,
    /// Path already occupied; dictionary not modified
    AlreadyExists,
    /// No dictionary loaded for the requested language
    UnknownLanguage,
    /// Insert or write failed with the given message
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub language: String,
    pub file: Option<PathBuf>,
    pub status: AddStatus,
}

#[derive(Debug)]
pub struct AddKeyReport {
    pub key: String,
    pub outcomes: Vec<AddOutcome>,
}

fn load_set(
    base_dir: Option<PathBuf>,
    exclusions: Vec<String>,
    verbose: bool,
) -> Result<DictionarySet> {
    let base = base_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let scanner = ProjectScanner::new(base).with_exclusions(exclusions);
    let mut loader = DictionaryLoader::new();
    loader.set_verbose(verbose);
    loader.load(&scanner)
}

/// Resolve a key in every loaded language.
///
/// This function:
/// 1. Loads the project's dictionaries (conventional locations, then scan)
/// 2. Resolves the dot-path against each language's tree
/// 3. Returns one value per language where the key names a leaf
#[must_use = "this function returns a Result that should be handled"]
pub fn run_lookup(query: LookupQuery) -> Result<LookupResult> {
    let set = load_set(
        query.base_dir.clone(),
        query.exclude_patterns.clone(),
        query.verbose,
    )?;

    let mut values = Vec::new();
    for dict in set.iter() {
        if let Some(value) = tree::get_str(&dict.tree, &query.key) {
            values.push(LanguageValue {
                language: dict.language.clone(),
                file: dict.file.clone(),
                value: value.to_string(),
            });
        }
    }

    Ok(LookupResult {
        key: query.key,
        values,
    })
}

/// Complete a partial dot-path against the reference language.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_completion(query: CompletionQuery) -> Result<Completion> {
    let set = load_set(
        query.base_dir.clone(),
        query.exclude_patterns.clone(),
        query.verbose,
    )?;

    // load() guarantees a non-empty set, so a reference tree exists
    let entries = match set.reference() {
        Some(dict) => flatten(&dict.tree),
        None => Vec::new(),
    };

    Ok(complete(&query.partial, &entries))
}

/// Classify a literal string from markup against the project's dictionaries.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_classification(query: ClassifyQuery) -> Result<Verdict> {
    let set = load_set(
        query.base_dir.clone(),
        query.exclude_patterns.clone(),
        query.verbose,
    )?;

    let classifier = Classifier::new()
        .with_deny_list(query.extra_deny_list.clone())
        .with_notable_phrases(query.notable_phrases.clone());

    Ok(classifier.classify(&query.text, &set))
}

/// Insert a key into each requested language and write the files back.
///
/// Languages are attempted independently: a write failure for one file is
/// reported in that language's outcome and never prevents the others.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_add_key(query: AddKeyQuery) -> Result<AddKeyReport> {
    let mut set = load_set(
        query.base_dir.clone(),
        query.exclude_patterns.clone(),
        query.verbose,
    )?;

    let mut outcomes = Vec::new();
    for (language, value) in &query.values {
        let outcome = match set.get_mut(language) {
            None => AddOutcome {
                language: language.clone(),
                file: None,
                status: AddStatus::UnknownLanguage,
            },
            Some(dict) => {
                let status = match tree::insert(
                    &mut dict.tree,
                    &query.key,
                    serde_json::Value::String(value.clone()),
                ) {
                    Err(AssistError::PathAlreadyExists { .. }) => AddStatus::AlreadyExists,
                    Err(e) => AddStatus::Failed(e.to_string()),
                    Ok(()) => match dict.write() {
                        Ok(()) => AddStatus::Added,
                        Err(e) => AddStatus::Failed(e.to_string()),
                    },
                };
                AddOutcome {
                    language: language.clone(),
                    file: Some(dict.file.clone()),
                    status,
                }
            }
        };
        outcomes.push(outcome);
    }

    Ok(AddKeyReport {
        key: query.key,
        outcomes,
    })
}
