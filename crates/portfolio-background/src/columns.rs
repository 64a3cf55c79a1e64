//! Per-column falling-trail offsets

/// Vertical trail offsets, one per glyph column
///
/// Each entry is the row index a column's trail has fallen to. The grid is
/// sized once, when the renderer is created, from the surface width at that
/// moment; later surface resizes do not change the column count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnTrails {
    offsets: Vec<u32>,
}

impl ColumnTrails {
    /// Allocate trails for a surface of the given width, all starting at row 1
    pub fn for_width(surface_width: u32, cell_size: u32) -> Self {
        let count = if cell_size == 0 {
            0
        } else {
            (surface_width / cell_size) as usize
        };
        Self {
            offsets: vec![1; count],
        }
    }

    /// Number of columns
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check whether there are no columns
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Current row offset of column `index`
    #[inline]
    pub fn offset(&self, index: usize) -> u32 {
        self.offsets[index]
    }

    /// All offsets, in column order
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Restart a column's trail from the top
    #[inline]
    pub(crate) fn restart(&mut self, index: usize) {
        self.offsets[index] = 0;
    }

    /// Advance a column's trail by one row
    #[inline]
    pub(crate) fn advance(&mut self, index: usize) {
        self.offsets[index] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trails_sized_from_width() {
        let trails = ColumnTrails::for_width(140, 14);
        assert_eq!(trails.len(), 10);

        let trails = ColumnTrails::for_width(139, 14);
        assert_eq!(trails.len(), 9);

        let trails = ColumnTrails::for_width(0, 14);
        assert!(trails.is_empty());
    }

    #[test]
    fn test_trails_start_at_one() {
        let trails = ColumnTrails::for_width(140, 14);
        assert!(trails.offsets().iter().all(|&offset| offset == 1));
    }

    #[test]
    fn test_trails_zero_cell_size() {
        let trails = ColumnTrails::for_width(1920, 0);
        assert!(trails.is_empty());
    }

    #[test]
    fn test_restart_then_advance() {
        let mut trails = ColumnTrails::for_width(28, 14);
        trails.advance(0);
        trails.advance(0);
        assert_eq!(trails.offset(0), 3);

        trails.restart(0);
        assert_eq!(trails.offset(0), 0);
        trails.advance(0);
        assert_eq!(trails.offset(0), 1);

        // Other columns are untouched
        assert_eq!(trails.offset(1), 1);
    }
}
