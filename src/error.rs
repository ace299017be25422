use thiserror::Error;

/// Errors that cross the scanner boundary.
///
/// Per-cell recognition failures never surface here; they degrade to empty
/// fields inside the pipeline, and rows without a usable name are silently
/// dropped. A scan aborts only when the input cannot be decoded or something
/// genuinely unexpected happens during orchestration.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input bytes are not a decodable image.
    #[error("invalid image: {0}")]
    Decode(#[from] image::ImageError),

    /// Unexpected failure during orchestration.
    #[error("internal scanner error: {0}")]
    Internal(String),
}
