use crate::models::layout::{ColumnSpec, ScoreboardLayout};
use crate::models::roi::{Anchor, Roi};

/// Cell regions for one player row, in table column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCells {
    pub name: Roi,
    pub kills: Roi,
    pub assists: Roi,
    pub damage: Roi,
    pub survival: Roi,
}

/// Project the fixed grid from the anchor: one [`RowCells`] per roster slot,
/// top to bottom. Row i starts at `anchor.y + i * row_height`; each cell is
/// shrunk below full row height by the configured gap. Regions are not
/// clipped here - callers intersect them with the image bounds at crop time,
/// and fully out-of-bounds cells simply recognize as empty.
pub fn cell_regions(layout: &ScoreboardLayout, anchor: &Anchor) -> Vec<RowCells> {
    let cell_height = layout.cell_height();

    (0..layout.roster_size)
        .map(|i| {
            let y = anchor.y + i as i32 * layout.row_height;
            let cell =
                |col: &ColumnSpec| Roi::new(anchor.x + col.offset, y, col.width, cell_height);

            RowCells {
                name: cell(&layout.name_column),
                kills: cell(&layout.kills_column),
                assists: cell(&layout.assists_column),
                damage: cell(&layout.damage_column),
                survival: cell(&layout.survival_column),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_roster_slot() {
        let layout = ScoreboardLayout::default();
        let rows = cell_regions(&layout, &Anchor { x: 100, y: 360 });
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_first_row_columns() {
        let layout = ScoreboardLayout::default();
        let rows = cell_regions(&layout, &Anchor { x: 100, y: 360 });

        assert_eq!(rows[0].name, Roi::new(100, 360, 450, 85));
        assert_eq!(rows[0].kills, Roi::new(700, 360, 120, 85));
        assert_eq!(rows[0].assists, Roi::new(850, 360, 120, 85));
        assert_eq!(rows[0].damage, Roi::new(980, 360, 200, 85));
        assert_eq!(rows[0].survival, Roi::new(1400, 360, 200, 85));
    }

    #[test]
    fn test_rows_advance_by_row_height() {
        let layout = ScoreboardLayout::default();
        let rows = cell_regions(&layout, &Anchor { x: 100, y: 360 });

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.name.y, 360 + i as i32 * 100);
            // Cell height stays shy of the next row
            assert!(row.name.y2() < 360 + (i as i32 + 1) * 100);
        }
    }

    #[test]
    fn test_grid_follows_anchor() {
        let layout = ScoreboardLayout::default();
        let shifted = cell_regions(&layout, &Anchor { x: 250, y: 500 });
        assert_eq!(shifted[0].name.x, 250);
        assert_eq!(shifted[0].kills.x, 850);
        assert_eq!(shifted[0].name.y, 500);
    }

    #[test]
    fn test_lower_rows_may_exceed_image_bounds() {
        // The grid itself is unclipped; clipping happens at crop time
        let layout = ScoreboardLayout::default();
        let rows = cell_regions(&layout, &Anchor { x: 100, y: 1000 });
        let last = rows.last().unwrap();
        assert!(last.name.y2() > 1080);
        assert!(last.name.clip_to(1920, 1080).is_none());
    }
}
