pub mod flatten;
pub mod path;

pub use flatten::{flatten, FlatEntry};
pub use path::{get, get_str, insert, set};
