use serde::{Deserialize, Serialize};

/// One column of the stats grid: horizontal offset from the anchor plus a
/// fixed width, both tuned to the canonical resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColumnSpec {
    pub offset: i32,
    pub width: u32,
}

/// Calibration data for one scoreboard layout.
///
/// The extraction grid is a coordinate-offset heuristic coupled to a single
/// UI layout and resolution, so every constant of that heuristic lives here
/// as data: supporting a new layout or resolution means shipping a different
/// layout file, not changing code. Defaults describe the 1920-wide
/// battle-royale results screen the scanner was calibrated against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreboardLayout {
    /// Width every input image is rescaled to before extraction.
    pub canonical_width: u32,
    /// Header labels are only searched within this many rows from the top.
    pub header_band_height: u32,
    /// Vertical padding between a header's bottom edge and the first row.
    pub anchor_padding: i32,
    /// Origin used when neither header label is recognized.
    pub default_anchor_x: i32,
    pub default_anchor_y: i32,
    /// Floor applied when a derived anchor x comes out negative.
    pub min_anchor_x: i32,
    /// Horizontal distance from the damage header back to the name header.
    /// Empirical constant, valid for this layout only.
    pub name_to_damage_offset: i32,
    pub name_column: ColumnSpec,
    pub kills_column: ColumnSpec,
    pub assists_column: ColumnSpec,
    pub damage_column: ColumnSpec,
    pub survival_column: ColumnSpec,
    /// Vertical distance between consecutive row origins.
    pub row_height: i32,
    /// Crops are shrunk below full row height by this much so they do not
    /// bleed into the next row.
    pub row_gap: u32,
    /// Fixed number of player rows on the results screen.
    pub roster_size: u32,
}

impl Default for ScoreboardLayout {
    fn default() -> Self {
        Self {
            canonical_width: 1920,
            header_band_height: 600,
            anchor_padding: 20,
            default_anchor_x: 100,
            default_anchor_y: 360,
            min_anchor_x: 50,
            name_to_damage_offset: 900,
            name_column: ColumnSpec {
                offset: 0,
                width: 450,
            },
            kills_column: ColumnSpec {
                offset: 600,
                width: 120,
            },
            assists_column: ColumnSpec {
                offset: 750,
                width: 120,
            },
            damage_column: ColumnSpec {
                offset: 880,
                width: 200,
            },
            survival_column: ColumnSpec {
                offset: 1300,
                width: 200,
            },
            row_height: 100,
            row_gap: 15,
            roster_size: 4,
        }
    }
}

impl ScoreboardLayout {
    /// Height of one cell crop (row height minus the inter-row gap).
    pub fn cell_height(&self) -> u32 {
        (self.row_height.max(0) as u32).saturating_sub(self.row_gap)
    }
}
