use serde::{Deserialize, Serialize};

/// One recognized text box with its bounding polygon.
///
/// Recognizers report four corner points per box
/// `[[x1,y1], [x2,y2], [x3,y3], [x4,y4]]` plus a confidence score. The
/// pipeline consumes only the text and the axis-aligned extent of the
/// polygon; the score is carried through for callers that want to filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextBox {
    #[serde(rename = "box")]
    pub bbox: Vec<[f64; 2]>,
    pub text: String,
    pub score: f64,
}

impl TextBox {
    pub fn new(bbox: Vec<[f64; 2]>, text: impl Into<String>, score: f64) -> Self {
        Self {
            bbox,
            text: text.into(),
            score,
        }
    }

    /// Convenience constructor for an axis-aligned box.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64, text: impl Into<String>) -> Self {
        Self::new(
            vec![
                [x, y],
                [x + width, y],
                [x + width, y + height],
                [x, y + height],
            ],
            text,
            1.0,
        )
    }

    /// Axis-aligned bounds as (x_min, y_min, x_max, y_max)
    pub fn bbox_rect(&self) -> (f64, f64, f64, f64) {
        let xs = self.bbox.iter().map(|p| p[0]);
        let ys = self.bbox.iter().map(|p| p[1]);

        let x_min = xs.clone().fold(f64::INFINITY, f64::min);
        let x_max = xs.fold(f64::NEG_INFINITY, f64::max);
        let y_min = ys.clone().fold(f64::INFINITY, f64::min);
        let y_max = ys.fold(f64::NEG_INFINITY, f64::max);

        (x_min, y_min, x_max, y_max)
    }

    /// Leftmost x-coordinate of the polygon
    pub fn left_x(&self) -> f64 {
        self.bbox_rect().0
    }

    /// Lowest edge of the polygon (max y, image coordinates)
    pub fn bottom_y(&self) -> f64 {
        self.bbox_rect().3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rect_corners() {
        let b = TextBox::from_rect(10.0, 20.0, 100.0, 30.0, "NAME");
        assert_eq!(b.bbox.len(), 4);
        assert_eq!(b.bbox[0], [10.0, 20.0]);
        assert_eq!(b.bbox[2], [110.0, 50.0]);
        assert_eq!(b.text, "NAME");
    }

    #[test]
    fn test_bbox_rect_from_skewed_polygon() {
        // Slightly rotated quad; extent must cover all corners
        let b = TextBox::new(
            vec![[12.0, 18.0], [110.0, 22.0], [108.0, 52.0], [10.0, 48.0]],
            "DMG",
            0.93,
        );
        let (x_min, y_min, x_max, y_max) = b.bbox_rect();
        assert_eq!(x_min, 10.0);
        assert_eq!(y_min, 18.0);
        assert_eq!(x_max, 110.0);
        assert_eq!(y_max, 52.0);
        assert_eq!(b.left_x(), 10.0);
        assert_eq!(b.bottom_y(), 52.0);
    }
}
