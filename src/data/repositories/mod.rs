pub mod results;
pub mod vocab;

pub use results::ResultRepository;
pub use vocab::{ImportSummary, InsertOutcome, VocabRepository};
