pub mod errors;
pub mod quiz;
pub mod vocab;
