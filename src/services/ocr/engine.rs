use crate::models::text_box::TextBox;
use image::DynamicImage;

/// Text recognition engine - abstraction over the model-backed OCR service.
///
/// Implementations hold the loaded model, which is expensive to construct:
/// callers build one at process startup and share it across every cell and
/// every request (typically as `Arc<dyn TextRecognizer>`). The pipeline adds
/// no locking of its own; an implementation must either be internally
/// thread-safe or have its callers serialize access.
pub trait TextRecognizer: Send + Sync {
    /// Recognize all text boxes in the given image.
    ///
    /// When `allowlist` is set, recognition is constrained to those
    /// characters; the pipeline passes the digit set for numeric cells.
    fn recognize(
        &self,
        image: &DynamicImage,
        allowlist: Option<&str>,
    ) -> Result<Vec<TextBox>, String>;
}
