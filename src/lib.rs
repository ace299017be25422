//! Extracts per-player statistics (name, kills, assists, damage, survival
//! time) from battle-royale match results screenshots.
//!
//! The pipeline rescales the screenshot to a canonical width, locates the
//! stats table by its column headers, projects a fixed calibration grid from
//! that anchor, runs the injected recognition engine over each cell, and
//! cleans every recognized field into its typed form. The recognition engine
//! itself is an external capability: callers construct it once at startup and
//! hand it to the [`Scanner`] behind the [`TextRecognizer`] trait.

pub mod error;
pub mod models;
pub mod services;

pub use error::ScanError;
pub use models::layout::ScoreboardLayout;
pub use models::player::{ExtractionResult, PlayerRecord};
pub use models::roi::{Anchor, Roi};
pub use models::text_box::TextBox;
pub use services::ocr::engine::TextRecognizer;
pub use services::scanner::Scanner;
