use serde::{Deserialize, Serialize};

/// Rectangular region within an image, in pixel coordinates.
///
/// Regions projected from the grid may extend past the image edges; callers
/// intersect them with the image bounds via [`Roi::clip_to`] before cropping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Roi {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Roi {
    /// Create a new region from origin and size
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn x2(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    pub fn y2(&self) -> i32 {
        self.y + self.height as i32
    }

    /// A region is usable only with positive extent in both dimensions
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Intersect the region with an image of the given dimensions.
    ///
    /// Returns `None` when the region lies entirely outside the image, so an
    /// out-of-bounds cell degrades to an empty crop instead of panicking.
    pub fn clip_to(&self, image_width: u32, image_height: u32) -> Option<Roi> {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = self.x2().min(image_width as i32);
        let y2 = self.y2().min(image_height as i32);

        if x2 <= x1 || y2 <= y1 {
            return None;
        }

        Some(Roi::new(x1, y1, (x2 - x1) as u32, (y2 - y1) as u32))
    }
}

/// Pixel origin of the stats table's first name cell.
///
/// Derived once per image by the anchor locator and consumed by the grid
/// extractor; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_creation() {
        let roi = Roi::new(100, 100, 200, 150);
        assert_eq!(roi.x, 100);
        assert_eq!(roi.y, 100);
        assert_eq!(roi.width, 200);
        assert_eq!(roi.height, 150);
    }

    #[test]
    fn test_roi_edges() {
        let roi = Roi::new(100, 200, 300, 400);
        assert_eq!(roi.x2(), 400);
        assert_eq!(roi.y2(), 600);
    }

    #[test]
    fn test_roi_validation() {
        assert!(Roi::new(0, 0, 100, 100).is_valid());
        assert!(!Roi::new(0, 0, 0, 100).is_valid());
        assert!(!Roi::new(0, 0, 100, 0).is_valid());
    }

    #[test]
    fn test_clip_fully_inside() {
        let roi = Roi::new(10, 20, 50, 40);
        let clipped = roi.clip_to(1920, 1080).unwrap();
        assert_eq!(clipped, roi);
    }

    #[test]
    fn test_clip_past_right_and_bottom() {
        let roi = Roi::new(1800, 1000, 200, 200);
        let clipped = roi.clip_to(1920, 1080).unwrap();
        assert_eq!(clipped, Roi::new(1800, 1000, 120, 80));
    }

    #[test]
    fn test_clip_negative_origin() {
        let roi = Roi::new(-30, -10, 100, 50);
        let clipped = roi.clip_to(1920, 1080).unwrap();
        assert_eq!(clipped, Roi::new(0, 0, 70, 40));
    }

    #[test]
    fn test_clip_fully_outside() {
        let below = Roi::new(100, 2000, 100, 100);
        assert!(below.clip_to(1920, 1080).is_none());

        let left = Roi::new(-500, 100, 100, 100);
        assert!(left.clip_to(1920, 1080).is_none());
    }

    #[test]
    fn test_roi_serialization() {
        let roi = Roi::new(100, 200, 300, 400);
        let json = serde_json::to_string(&roi).unwrap();
        let deserialized: Roi = serde_json::from_str(&json).unwrap();
        assert_eq!(roi, deserialized);
    }
}
