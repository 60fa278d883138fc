use crate::config::{detect_project_type, dictionary_dirs, scan_exclusions};
use std::path::PathBuf;
use walkdir::WalkDir;

/// File-resolver collaborator: supplies the conventional dictionary
/// locations to probe and, as a fallback, an enumeration of every JSON file
/// in the workspace. Hosts with their own file index implement this
/// themselves; [`ProjectScanner`] is the filesystem default.
pub trait FileResolver {
    /// Ordered list of conventional dictionary file paths, probed first.
    fn candidate_locations(&self) -> Vec<PathBuf>;

    /// Every JSON file in the workspace, for the heuristic fallback scan.
    fn enumerate_json_files(&self) -> Vec<PathBuf>;

    /// Human-readable summary of the probed locations, for error messages.
    fn searched_paths(&self) -> String;
}

/// Default filesystem resolver over a project directory
pub struct ProjectScanner {
    base_dir: PathBuf,
    exclusions: Vec<String>,
}

impl ProjectScanner {
    pub fn new(base_dir: PathBuf) -> Self {
        let project_type = detect_project_type(&base_dir);
        let exclusions = scan_exclusions(project_type)
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            base_dir,
            exclusions,
        }
    }

    /// Add extra directory or file names to skip during the fallback scan
    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions.extend(exclusions);
        self
    }

    /// The conventional dictionary directories that exist under this project
    fn existing_dictionary_dirs(&self) -> Vec<PathBuf> {
        let project_type = detect_project_type(&self.base_dir);
        dictionary_dirs(project_type)
            .iter()
            .map(|d| self.base_dir.join(d))
            .filter(|p| p.is_dir())
            .collect()
    }
}

impl FileResolver for ProjectScanner {
    fn candidate_locations(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        for dir in self.existing_dictionary_dirs() {
            let mut files: Vec<PathBuf> = match std::fs::read_dir(&dir) {
                Ok(entries) => entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .filter(|p| {
                        p.is_file() && p.extension().map(|e| e == "json").unwrap_or(false)
                    })
                    .collect(),
                Err(_) => continue,
            };
            // read_dir order is platform-dependent
            files.sort();
            candidates.extend(files);
        }
        candidates
    }

    fn enumerate_json_files(&self) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.base_dir).into_iter();
        walker
            .filter_entry(|e| {
                if is_ignored(e) {
                    return false;
                }
                let name = e.file_name().to_string_lossy();
                !self.exclusions.iter().any(|excl| name == excl.as_str())
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| p.extension().map(|e| e == "json").unwrap_or(false))
            .collect()
    }

    fn searched_paths(&self) -> String {
        let project_type = detect_project_type(&self.base_dir);
        let mut parts: Vec<&str> = dictionary_dirs(project_type);
        parts.push("**/*.json");
        parts.join(", ")
    }
}

fn is_ignored(entry: &walkdir::DirEntry) -> bool {
    // Always allow the root directory of the scan
    if entry.depth() == 0 {
        return false;
    }

    entry
        .file_name()
        .to_str()
        .map(|s| {
            s.starts_with('.') // Hidden files/dirs
                || s == "node_modules"
                || s == "target"
                || s == "dist"
                || s == "build"
                || s == "vendor"
        })
        .unwrap_or(false)
}
