pub mod anchor;
pub mod config;
pub mod grid;
pub mod ocr;
pub mod preprocessing;
pub mod scanner;
