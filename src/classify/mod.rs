pub mod classifier;
pub mod suggest;

pub use classifier::{Classifier, RejectReason, Verdict};
pub use suggest::suggest_key;
