use crate::error::ScanError;
use crate::models::layout::ScoreboardLayout;
use crate::models::player::{ExtractionResult, PlayerRecord};
use crate::models::roi::Roi;
use crate::services::anchor;
use crate::services::config::LayoutManager;
use crate::services::grid;
use crate::services::ocr::engine::TextRecognizer;
use crate::services::ocr::parser::{clean_int, clean_name, clean_time, is_valid_name};
use crate::services::preprocessing::Preprocessor;
use image::{DynamicImage, GenericImageView};
use std::sync::Arc;
use tracing::{debug, warn};

const DIGIT_ALLOWLIST: &str = "0123456789";

/// Scoreboard scanner: one screenshot in, an ordered list of player rows out.
///
/// Holds the shared recognition engine and the layout calibration. A scan is
/// a single synchronous blocking pass - no retries, no caching, no internal
/// parallelism; the same `Scanner` serves every request for the lifetime of
/// the process.
pub struct Scanner {
    recognizer: Arc<dyn TextRecognizer>,
    layout: ScoreboardLayout,
    preprocessor: Preprocessor,
}

impl Scanner {
    /// Build a scanner with the default 1920-wide calibration.
    pub fn new(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self::with_layout(recognizer, ScoreboardLayout::default())
    }

    /// Build a scanner with explicit layout calibration.
    pub fn with_layout(recognizer: Arc<dyn TextRecognizer>, layout: ScoreboardLayout) -> Self {
        let preprocessor = Preprocessor::new(layout.canonical_width);
        Self {
            recognizer,
            layout,
            preprocessor,
        }
    }

    /// Build a scanner with the persisted layout calibration, falling back
    /// to defaults when none has been saved.
    pub fn from_saved_layout(recognizer: Arc<dyn TextRecognizer>) -> Result<Self, ScanError> {
        let layout = LayoutManager::new()
            .and_then(|manager| manager.load())
            .map_err(ScanError::Internal)?;
        Ok(Self::with_layout(recognizer, layout))
    }

    /// Extract player records from an encoded screenshot.
    ///
    /// Sequence: normalize to the canonical width, locate the table anchor,
    /// project the cell grid, recognize and clean every cell, assemble one
    /// record per row. Rows whose cleaned name is empty or a single
    /// character are dropped silently - the only validity gate. Only an
    /// undecodable input fails the scan; recognition trouble degrades to
    /// zeroed or defaulted fields.
    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractionResult, ScanError> {
        let img = self.preprocessor.normalize(bytes)?;

        let anchor = anchor::locate(&img, self.recognizer.as_ref(), &self.layout);
        debug!(x = anchor.x, y = anchor.y, "anchor located");

        let mut players = Vec::new();
        for (row, cells) in grid::cell_regions(&self.layout, &anchor).iter().enumerate() {
            let record = PlayerRecord {
                name: clean_name(&self.ocr_cell(&img, &cells.name, false)),
                kills: clean_int(&self.ocr_cell(&img, &cells.kills, true)),
                assists: clean_int(&self.ocr_cell(&img, &cells.assists, true)),
                damage: clean_int(&self.ocr_cell(&img, &cells.damage, true)),
                survival: clean_time(&self.ocr_cell(&img, &cells.survival, false)),
            };

            if is_valid_name(&record.name) {
                players.push(record);
            } else {
                warn!(row, "dropping row without a usable name");
            }
        }

        Ok(ExtractionResult { players })
    }

    /// Recognize one cell. Every local failure collapses to an empty string:
    /// out-of-bounds regions, preprocessing trouble, recognizer errors. A
    /// blank field never aborts the row.
    fn ocr_cell(&self, image: &DynamicImage, region: &Roi, digits_only: bool) -> String {
        let (width, height) = image.dimensions();
        let Some(clipped) = region.clip_to(width, height) else {
            return String::new();
        };

        let crop = image.crop_imm(
            clipped.x as u32,
            clipped.y as u32,
            clipped.width,
            clipped.height,
        );
        let prepared = self.preprocessor.prepare_cell(&crop);

        let allowlist = digits_only.then_some(DIGIT_ALLOWLIST);
        match self.recognizer.recognize(&prepared, allowlist) {
            Ok(boxes) => boxes
                .iter()
                .map(|b| b.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Err(e) => {
                debug!("cell recognition failed: {}", e);
                String::new()
            }
        }
    }
}
