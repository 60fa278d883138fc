use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Node,
    Ruby,
    Python,
    Rust,
    Generic,
}

pub fn detect_project_type(base_dir: &Path) -> ProjectType {
    if base_dir.join("package.json").exists() {
        ProjectType::Node
    } else if base_dir.join("Gemfile").exists() {
        ProjectType::Ruby
    } else if base_dir.join("requirements.txt").exists()
        || base_dir.join("pyproject.toml").exists()
    {
        ProjectType::Python
    } else if base_dir.join("Cargo.toml").exists() {
        ProjectType::Rust
    } else {
        ProjectType::Generic
    }
}

/// Conventional directories holding per-language dictionaries (`en.json`,
/// `nl.json`, ...), probed in order during the first load pass.
pub fn dictionary_dirs(project_type: ProjectType) -> Vec<&'static str> {
    let mut dirs = vec!["messages", "locales", "i18n", "lang", "translations"];

    match project_type {
        ProjectType::Node => {
            dirs.extend_from_slice(&[
                "public/locales",
                "src/locales",
                "src/i18n",
                "src/messages",
                "app/i18n",
            ]);
        }
        ProjectType::Ruby => {
            dirs.extend_from_slice(&["config/locales"]);
        }
        ProjectType::Python => {
            dirs.extend_from_slice(&["locale"]);
        }
        ProjectType::Rust | ProjectType::Generic => {}
    }

    dirs
}

/// Directory names skipped by the fallback workspace scan.
pub fn scan_exclusions(project_type: ProjectType) -> Vec<&'static str> {
    let mut exclusions = vec![".git", ".svn", ".idea", ".vscode"];

    match project_type {
        ProjectType::Node => {
            exclusions.extend_from_slice(&[
                "node_modules",
                "dist",
                "build",
                "coverage",
                ".next",
                ".nuxt",
            ]);
        }
        ProjectType::Ruby => {
            exclusions.extend_from_slice(&["vendor", ".bundle", "log", "tmp"]);
        }
        ProjectType::Python => {
            exclusions.extend_from_slice(&["venv", ".venv", "__pycache__", ".pytest_cache"]);
        }
        ProjectType::Rust => {
            exclusions.extend_from_slice(&["target"]);
        }
        ProjectType::Generic => {
            exclusions.extend_from_slice(&["node_modules", "vendor", "dist", "build", "target"]);
        }
    }

    exclusions
}
