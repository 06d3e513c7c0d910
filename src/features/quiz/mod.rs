pub mod scoring;

pub use scoring::{QUIZ_DURATION_SECONDS, ScoringEngine, Tally};
