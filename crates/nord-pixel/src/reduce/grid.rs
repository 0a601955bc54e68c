//! Grid of per-block colors.

use crate::color::Rgb;
use crate::palette::Palette;

/// One color per block, `blocks_x x blocks_y`, row-major.
///
/// Produced by [`reduce`](super::reduce), snapped to a palette with
/// [`quantize`](Self::quantize), and consumed by the reconstructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    colors: Vec<Rgb>,
    blocks_x: u32,
    blocks_y: u32,
}

impl BlockGrid {
    /// Wrap row-major block colors.
    ///
    /// Returns `None` if `colors.len() != blocks_x * blocks_y`.
    pub fn new(colors: Vec<Rgb>, blocks_x: u32, blocks_y: u32) -> Option<Self> {
        if colors.len() != blocks_x as usize * blocks_y as usize {
            return None;
        }
        Some(Self {
            colors,
            blocks_x,
            blocks_y,
        })
    }

    /// Row-major colors whose length the caller has already matched.
    pub(crate) fn from_parts(colors: Vec<Rgb>, blocks_x: u32, blocks_y: u32) -> Self {
        debug_assert_eq!(colors.len(), blocks_x as usize * blocks_y as usize);
        Self {
            colors,
            blocks_x,
            blocks_y,
        }
    }

    /// A grid with at least one zero dimension.
    pub(crate) fn empty(blocks_x: u32, blocks_y: u32) -> Self {
        debug_assert!(blocks_x == 0 || blocks_y == 0);
        Self {
            colors: Vec::new(),
            blocks_x,
            blocks_y,
        }
    }

    /// Number of block columns.
    #[inline]
    pub fn blocks_x(&self) -> u32 {
        self.blocks_x
    }

    /// Number of block rows.
    #[inline]
    pub fn blocks_y(&self) -> u32 {
        self.blocks_y
    }

    /// True when the grid holds no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Block colors in row-major order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color of the block in column `col`, row `row`.
    #[inline]
    pub fn get(&self, col: u32, row: u32) -> Option<Rgb> {
        if col >= self.blocks_x || row >= self.blocks_y {
            return None;
        }
        Some(self.colors[row as usize * self.blocks_x as usize + col as usize])
    }

    /// Iterate `(col, row, color)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let blocks_x = self.blocks_x.max(1);
        self.colors.iter().enumerate().map(move |(i, &color)| {
            let i = i as u32;
            (i % blocks_x, i / blocks_x, color)
        })
    }

    /// A new grid with every block snapped to its nearest palette color.
    pub fn quantize(&self, palette: &Palette) -> Self {
        Self {
            colors: self.colors.iter().map(|&c| palette.nearest(c)).collect(),
            blocks_x: self.blocks_x,
            blocks_y: self.blocks_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_length_check() {
        assert!(BlockGrid::new(vec![Rgb::default(); 6], 3, 2).is_some());
        assert!(BlockGrid::new(vec![Rgb::default(); 5], 3, 2).is_none());
    }

    #[test]
    fn test_get_row_major() {
        let colors = (0..6).map(|i| Rgb::new(i, 0, 0)).collect();
        let grid = BlockGrid::new(colors, 3, 2).unwrap();
        assert_eq!(grid.get(0, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(grid.get(2, 0), Some(Rgb::new(2, 0, 0)));
        assert_eq!(grid.get(0, 1), Some(Rgb::new(3, 0, 0)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_iter_positions() {
        let colors = (0..6).map(|i| Rgb::new(i, 0, 0)).collect();
        let grid = BlockGrid::new(colors, 3, 2).unwrap();
        let cells: Vec<_> = grid.iter().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_quantize_leaves_original_untouched() {
        let grid = BlockGrid::new(vec![Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)], 2, 1).unwrap();
        let quantized = grid.quantize(&Palette::nord());

        assert_eq!(grid.get(0, 0), Some(Rgb::new(255, 255, 255)));
        assert_eq!(quantized.get(0, 0), Some(Rgb::new(129, 161, 193)));
        assert_eq!(quantized.get(1, 0), Some(Rgb::new(46, 52, 64)));
    }

    #[test]
    fn test_quantize_is_idempotent() {
        let palette = Palette::nord();
        let grid = BlockGrid::new(palette.colors().to_vec(), 3, 2).unwrap();
        assert_eq!(grid.quantize(&palette), grid);
    }

    #[test]
    fn test_empty_grid() {
        let grid = BlockGrid::empty(0, 4);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
        assert_eq!(grid.get(0, 0), None);
    }
}
