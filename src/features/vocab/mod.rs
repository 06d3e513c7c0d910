pub mod parser;

pub use parser::{canon, normalize_pos, parse_bulk, parse_line};
