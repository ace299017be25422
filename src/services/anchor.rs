use crate::models::layout::ScoreboardLayout;
use crate::models::roi::Anchor;
use crate::models::text_box::TextBox;
use crate::services::ocr::engine::TextRecognizer;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

/// Locate the top-left origin of the stats table.
///
/// Runs the recognizer over the header band at the top of the normalized
/// image and derives the origin of the first name cell from the "NAME" and
/// "DMG"/"DAMAGE" column headers. This is the layout-coupled, brittle step
/// of the pipeline and the primary source of extraction error; when the
/// band yields nothing usable, the calibrated default origin applies so
/// extraction still runs.
pub fn locate(
    image: &DynamicImage,
    recognizer: &dyn TextRecognizer,
    layout: &ScoreboardLayout,
) -> Anchor {
    let (width, height) = image.dimensions();
    let band = image.crop_imm(0, 0, width, layout.header_band_height.min(height));

    let boxes = match recognizer.recognize(&band, None) {
        Ok(boxes) => boxes,
        Err(e) => {
            debug!("header band recognition failed, falling back to default anchor: {}", e);
            Vec::new()
        }
    };

    anchor_from_boxes(&boxes, layout)
}

/// Derive the anchor from recognized header boxes.
///
/// Priority order:
/// 1. name header found: y = box bottom + padding, x = box left
/// 2. only damage header found: same y, x back-calculated by the calibrated
///    name-to-damage column distance
/// 3. neither found: the default origin
///
/// Matching is case-insensitive on whitespace-stripped text; the damage
/// header also matches its abbreviated "DMG" form. A negative derived x is
/// clamped to the configured floor.
pub fn anchor_from_boxes(boxes: &[TextBox], layout: &ScoreboardLayout) -> Anchor {
    let mut name_box = None;
    let mut damage_box = None;

    for b in boxes {
        let label: String = b.text.to_uppercase().split_whitespace().collect();
        if label.contains("NAME") {
            name_box = Some(b);
        }
        if label.contains("DMG") || label.contains("DAMAGE") {
            damage_box = Some(b);
        }
    }

    let (mut x, y) = if let Some(b) = name_box {
        debug!("anchor from name header");
        (
            b.left_x() as i32,
            b.bottom_y() as i32 + layout.anchor_padding,
        )
    } else if let Some(b) = damage_box {
        debug!("anchor back-calculated from damage header");
        (
            b.left_x() as i32 - layout.name_to_damage_offset,
            b.bottom_y() as i32 + layout.anchor_padding,
        )
    } else {
        debug!("no header recognized, using default anchor");
        (layout.default_anchor_x, layout.default_anchor_y)
    };

    if x < 0 {
        x = layout.min_anchor_x;
    }

    Anchor { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScoreboardLayout {
        ScoreboardLayout::default()
    }

    #[test]
    fn test_anchor_from_name_header() {
        let boxes = vec![TextBox::from_rect(210.0, 300.0, 120.0, 40.0, "Name")];
        let anchor = anchor_from_boxes(&boxes, &layout());
        assert_eq!(anchor, Anchor { x: 210, y: 340 + 20 });
    }

    #[test]
    fn test_anchor_matching_ignores_case_and_spaces() {
        let boxes = vec![TextBox::from_rect(180.0, 280.0, 160.0, 30.0, " pLaYeR n a m e ")];
        let anchor = anchor_from_boxes(&boxes, &layout());
        assert_eq!(anchor, Anchor { x: 180, y: 310 + 20 });
    }

    #[test]
    fn test_anchor_back_calculated_from_damage_header() {
        let boxes = vec![TextBox::from_rect(1000.0, 310.0, 90.0, 35.0, "DMG")];
        let anchor = anchor_from_boxes(&boxes, &layout());
        assert_eq!(anchor, Anchor { x: 1000 - 900, y: 345 + 20 });
    }

    #[test]
    fn test_anchor_accepts_full_damage_label() {
        let boxes = vec![TextBox::from_rect(1050.0, 310.0, 130.0, 35.0, "Damage")];
        let anchor = anchor_from_boxes(&boxes, &layout());
        assert_eq!(anchor.x, 150);
    }

    #[test]
    fn test_name_header_wins_over_damage_header() {
        let boxes = vec![
            TextBox::from_rect(1000.0, 310.0, 90.0, 35.0, "DMG"),
            TextBox::from_rect(210.0, 300.0, 120.0, 40.0, "NAME"),
        ];
        let anchor = anchor_from_boxes(&boxes, &layout());
        assert_eq!(anchor.x, 210);
    }

    #[test]
    fn test_anchor_defaults_when_no_header_found() {
        let boxes = vec![TextBox::from_rect(400.0, 100.0, 200.0, 40.0, "MATCH RESULTS")];
        let anchor = anchor_from_boxes(&boxes, &layout());
        assert_eq!(anchor, Anchor { x: 100, y: 360 });

        let anchor = anchor_from_boxes(&[], &layout());
        assert_eq!(anchor, Anchor { x: 100, y: 360 });
    }

    #[test]
    fn test_negative_x_clamped_to_floor() {
        // Damage header far left: back-calculation would go negative
        let boxes = vec![TextBox::from_rect(300.0, 310.0, 90.0, 35.0, "DMG")];
        let anchor = anchor_from_boxes(&boxes, &layout());
        assert_eq!(anchor.x, 50);
    }
}
