pub mod locations;
pub mod vocabulary;

pub use locations::{detect_project_type, dictionary_dirs, scan_exclusions, ProjectType};
pub use vocabulary::{default_deny_list, default_notable_phrases, section_vocabulary};
