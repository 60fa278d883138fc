pub mod engine;

pub use engine::{complete, Candidate, CandidateKind, Completion};
