pub mod engine;
pub mod parser;

// Re-export main types
pub use engine::TextRecognizer;
pub use parser::{clean_int, clean_name, clean_time, is_valid_name};
