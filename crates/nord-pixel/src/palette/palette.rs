//! Palette struct with nearest-color matching.
//!
//! A palette is an ordered, non-empty list of colors. Order only matters for
//! tie-breaking: when two entries are equally close to a color, the one that
//! comes first wins.

use super::error::PaletteError;
use crate::color::Rgb;

/// The Nord "Polar Night" and "Frost" blues, darkest first.
pub const NORD_COLORS: [Rgb; 6] = [
    Rgb::new(46, 52, 64),    // nord0, polar night (darkest)
    Rgb::new(59, 66, 82),    // nord1, polar night
    Rgb::new(67, 76, 94),    // nord2, polar night
    Rgb::new(76, 86, 106),   // nord3, polar night (brightest)
    Rgb::new(94, 129, 172),  // nord10, frost blue
    Rgb::new(129, 161, 193), // nord9, frost light blue
];

/// An ordered set of colors that block colors are snapped to.
///
/// # Example
///
/// ```
/// use nord_pixel::{Palette, Rgb};
///
/// let palette = Palette::nord();
/// assert_eq!(palette.len(), 6);
/// assert_eq!(palette.darkest(), Rgb::new(46, 52, 64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use nord_pixel::{Palette, Rgb};
    ///
    /// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert!(Palette::new(&[]).is_err());
    /// ```
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The six-entry Nord palette built from [`NORD_COLORS`].
    pub fn nord() -> Self {
        Self {
            colors: NORD_COLORS.to_vec(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false`: empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns true if `color` is exactly one of the palette entries.
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// The entry with the smallest channel sum, first in order on ties.
    ///
    /// Used as the background color for gap mode.
    pub fn darkest(&self) -> Rgb {
        let mut best = self.colors[0];
        for &color in &self.colors[1..] {
            if color.channel_sum() < best.channel_sum() {
                best = color;
            }
        }
        best
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Returns `(index, squared_distance)`. Distance is the squared Euclidean
    /// distance over the raw channels. Only a strictly smaller distance
    /// replaces the current best, so exact ties resolve to the earliest entry.
    ///
    /// # Example
    ///
    /// ```
    /// use nord_pixel::{Palette, Rgb};
    ///
    /// let palette = Palette::nord();
    /// let (idx, dist) = palette.nearest_index(Rgb::new(46, 52, 64));
    /// assert_eq!((idx, dist), (0, 0));
    /// ```
    #[inline]
    pub fn nearest_index(&self, color: Rgb) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Find the palette color closest to `color`.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> Rgb {
        let (idx, _) = self.nearest_index(color);
        self.colors[idx]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::nord()
    }
}

/// Snap `color` to its nearest entry in `palette`.
///
/// Shorthand for [`Palette::nearest`].
#[inline]
pub fn nearest(color: Rgb, palette: &Palette) -> Rgb {
    palette.nearest(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_palette_basic_construction() {
        let colors = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let palette = Palette::new(&colors).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(1), Some(Rgb::new(255, 255, 255)));
        assert_eq!(palette.get(2), None);
    }

    #[test]
    fn test_palette_empty_error() {
        let result = Palette::new(&[]);
        assert!(matches!(result, Err(PaletteError::Empty)));
    }

    #[test]
    fn test_nord_palette_order() {
        let palette = Palette::nord();
        assert_eq!(palette.colors(), &NORD_COLORS);
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_darkest_is_nord0() {
        assert_eq!(Palette::nord().darkest(), Rgb::new(46, 52, 64));
    }

    #[test]
    fn test_darkest_not_first() {
        let palette = Palette::new(&[Rgb::new(200, 200, 200), Rgb::new(10, 10, 10)]).unwrap();
        assert_eq!(palette.darkest(), Rgb::new(10, 10, 10));
    }

    #[test]
    fn test_darkest_tie_prefers_first() {
        let palette = Palette::new(&[Rgb::new(30, 0, 0), Rgb::new(0, 0, 30)]).unwrap();
        assert_eq!(palette.darkest(), Rgb::new(30, 0, 0));
    }

    #[test]
    fn test_nearest_exact_match() {
        let palette = Palette::nord();
        for (i, &color) in NORD_COLORS.iter().enumerate() {
            assert_eq!(palette.nearest_index(color), (i, 0));
        }
    }

    #[test]
    fn test_nearest_pure_red() {
        // Distances to (255,0,0): 50481, 49496, 49956, 50673, 72146, 79046
        let palette = Palette::nord();
        let (idx, dist) = palette.nearest_index(Rgb::new(255, 0, 0));
        assert_eq!(idx, 1);
        assert_eq!(dist, 49496);
        assert_eq!(nearest(Rgb::new(255, 0, 0), &palette), Rgb::new(59, 66, 82));
    }

    #[test]
    fn test_nearest_white_is_light_blue() {
        let palette = Palette::nord();
        assert_eq!(
            palette.nearest(Rgb::new(255, 255, 255)),
            Rgb::new(129, 161, 193)
        );
    }

    #[test]
    fn test_nearest_black_is_darkest() {
        let palette = Palette::nord();
        assert_eq!(palette.nearest(Rgb::new(0, 0, 0)), Rgb::new(46, 52, 64));
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        // (5,5,5) is at distance 75 from both entries
        let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(10, 10, 10)]).unwrap();
        assert_eq!(palette.nearest_index(Rgb::new(5, 5, 5)), (0, 75));

        let reversed = Palette::new(&[Rgb::new(10, 10, 10), Rgb::new(0, 0, 0)]).unwrap();
        assert_eq!(reversed.nearest_index(Rgb::new(5, 5, 5)), (0, 75));
        assert_eq!(reversed.nearest(Rgb::new(5, 5, 5)), Rgb::new(10, 10, 10));
    }

    #[test]
    fn test_nearest_single_entry() {
        let palette = Palette::new(&[Rgb::new(1, 2, 3)]).unwrap();
        assert_eq!(palette.nearest(Rgb::new(250, 250, 250)), Rgb::new(1, 2, 3));
    }

    fn any_rgb() -> impl Strategy<Value = Rgb> {
        any::<[u8; 3]>().prop_map(Rgb::from)
    }

    proptest! {
        #[test]
        fn test_nearest_is_minimal_and_first_on_tie(color in any_rgb()) {
            let palette = Palette::nord();
            let (idx, dist) = palette.nearest_index(color);
            prop_assert_eq!(palette.nearest(color), palette.colors()[idx]);

            for (j, &other) in palette.colors().iter().enumerate() {
                let d = color.distance_squared(other);
                prop_assert!(d >= dist, "{} closer to entry {} than chosen {}", color, j, idx);
                if d == dist {
                    prop_assert!(idx <= j, "tie for {} must resolve to first entry", color);
                }
            }
        }

        #[test]
        fn test_nearest_over_arbitrary_palettes(
            colors in prop::collection::vec(any_rgb(), 1..8),
            color in any_rgb(),
        ) {
            let palette = Palette::new(&colors).unwrap();
            let (idx, dist) = palette.nearest_index(color);

            let first_minimum = colors
                .iter()
                .position(|&c| c.distance_squared(color) == dist);
            prop_assert_eq!(first_minimum, Some(idx));
            prop_assert!(colors.iter().all(|&c| c.distance_squared(color) >= dist));
        }
    }
}
