//! Ordered, labelled palette with nearest-color matching.
//!
//! This module provides the core `Palette` type. Entry order is significant:
//! it decides which of two equidistant colors wins a match, and it is the
//! numbering downstream renderers print next to each dot.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use super::rank::rank_indices;
use crate::color::{DistanceMetric, Rgb};

/// A palette color with its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// The color a dot of this entry is painted with
    pub color: Rgb,
    /// Name shown in legends, e.g. "neon yellow"
    pub label: String,
}

impl PaletteEntry {
    /// Create a new entry.
    pub fn new(color: Rgb, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

/// An ordered sequence of uniquely colored, uniquely labelled entries.
///
/// An empty palette is valid. Matching against it always yields no entry,
/// which the allocator reports as a shortage.
///
/// # Example
///
/// ```
/// use dot_quota::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&[
///     ("#000000", "black"),
///     ("#ffffff", "white"),
/// ]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest(Rgb::new(30, 30, 30)), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    // Cached for the per-sample matching loop
    colors: Vec<Rgb>,
    metric: DistanceMetric,
}

impl Palette {
    /// Create a palette from entries, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - two entries share a color ([`PaletteError::DuplicateColor`])
    /// - two entries share a label ([`PaletteError::DuplicateLabel`])
    /// - a label is blank ([`PaletteError::EmptyLabel`])
    ///
    /// The reported index is the position of the second occurrence.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        {
            let mut seen_colors = HashSet::new();
            let mut seen_labels = HashSet::new();
            for (index, entry) in entries.iter().enumerate() {
                if entry.label.trim().is_empty() {
                    return Err(PaletteError::EmptyLabel { index });
                }
                if !seen_colors.insert(entry.color) {
                    return Err(PaletteError::DuplicateColor { index });
                }
                if !seen_labels.insert(entry.label.as_str()) {
                    return Err(PaletteError::DuplicateLabel { index });
                }
            }
        }

        let colors = entries.iter().map(|e| e.color).collect();
        Ok(Self {
            entries,
            colors,
            metric: DistanceMetric::default(),
        })
    }

    /// Create a palette from `(hex color, label)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use dot_quota::Palette;
    ///
    /// let palette = Palette::from_hex(&[("#0d910d", "green"), ("#e3573b", "red")]).unwrap();
    /// assert_eq!(palette.entry(1).label, "red");
    /// ```
    pub fn from_hex(pairs: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let entries = pairs
            .iter()
            .map(|&(hex, label)| {
                Rgb::from_str(hex)
                    .map(|color| PaletteEntry::new(color, label))
                    .map_err(PaletteError::ParseColor)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(entries)
    }

    /// Override the distance metric used for matching.
    ///
    /// Defaults to [`DistanceMetric::ChannelSum`].
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The distance metric used for matching.
    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Get the entry at `idx`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&PaletteEntry> {
        self.entries.get(idx)
    }

    /// All entries in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Position of `color` in the palette, if present.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Palette indices ordered by distance to `target`, closest first.
    ///
    /// Ties keep palette order. See [`crate::rank()`].
    pub fn rank(&self, target: Rgb) -> Vec<usize> {
        rank_indices(self.metric, target, &self.colors)
    }

    /// Index of the closest entry to `target`, or `None` for an empty palette.
    ///
    /// Equivalent to `self.rank(target).first()` without sorting: a strict
    /// `<` comparison keeps the earliest of several equidistant entries.
    #[inline]
    pub fn nearest(&self, target: Rgb) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, &color) in self.colors.iter().enumerate() {
            let dist = self.metric.distance(target, color);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
            if dist == 0 {
                break;
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    fn six_colors() -> Palette {
        Palette::from_hex(&[
            ("#000000", "black"),
            ("#ffffff", "white"),
            ("#ff0000", "red"),
            ("#00ff00", "green"),
            ("#0000ff", "blue"),
            ("#ffff00", "yellow"),
        ])
        .unwrap()
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = six_colors();
        assert_eq!(palette.len(), 6);
        assert!(!palette.is_empty());
        assert_eq!(palette.entry(2).label, "red");
        assert_eq!(palette.entry(2).color, Rgb::new(255, 0, 0));
        assert_eq!(palette.colors().len(), 6);
        assert!(palette.get(6).is_none());
    }

    #[test]
    fn test_empty_palette_is_valid() {
        let palette = Palette::new(Vec::new()).unwrap();
        assert!(palette.is_empty());
        assert_eq!(palette.nearest(Rgb::new(1, 2, 3)), None);
        assert!(palette.rank(Rgb::new(1, 2, 3)).is_empty());
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let result = Palette::from_hex(&[("#ff0000", "red"), ("#00ff00", "green"), ("#F00", "also red")]);
        assert_eq!(result, Err(PaletteError::DuplicateColor { index: 2 }));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let result = Palette::from_hex(&[("#ff0000", "red"), ("#ee0000", "red")]);
        assert_eq!(result, Err(PaletteError::DuplicateLabel { index: 1 }));
    }

    #[test]
    fn test_blank_label_rejected() {
        let result = Palette::from_hex(&[("#ff0000", "red"), ("#00ff00", "  ")]);
        assert_eq!(result, Err(PaletteError::EmptyLabel { index: 1 }));
    }

    #[test]
    fn test_from_hex_invalid_hex() {
        let result = Palette::from_hex(&[("#ZZZZZZ", "bad")]);
        assert!(matches!(
            result,
            Err(PaletteError::ParseColor(ParseColorError::InvalidHex(_)))
        ));
    }

    #[test]
    fn test_nearest_exact_match() {
        let palette = six_colors();
        for (i, entry) in palette.entries().iter().enumerate() {
            // Under channel sum red, green and blue are all 255 away from
            // black, so only check that an exact color matches itself or an
            // earlier entry at distance 0.
            let idx = palette.nearest(entry.color).unwrap();
            assert!(idx <= i);
            assert_eq!(palette.distance_metric().distance(entry.color, palette.entry(idx).color), 0);
        }
    }

    #[test]
    fn test_nearest_manhattan_exact_match() {
        let palette = six_colors().with_distance_metric(DistanceMetric::Manhattan);
        for (i, entry) in palette.entries().iter().enumerate() {
            assert_eq!(palette.nearest(entry.color), Some(i));
        }
    }

    #[test]
    fn test_nearest_agrees_with_rank() {
        let palette = Palette::from_hex(&[
            ("#a52a2a", "brown"),
            ("#22bad0", "cyan"),
            ("#008000", "green"),
            ("#808080", "grey"),
            ("#404040", "dark grey"),
        ])
        .unwrap();
        for metric in [DistanceMetric::ChannelSum, DistanceMetric::Manhattan] {
            let palette = palette.clone().with_distance_metric(metric);
            for v in (0..=255u8).step_by(15) {
                for target in [Rgb::new(v, 0, 0), Rgb::new(v, v, v), Rgb::new(0, v, 255 - v)] {
                    assert_eq!(
                        palette.nearest(target),
                        palette.rank(target).first().copied(),
                        "{metric:?} disagreement for {target}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_nearest_tie_prefers_first_entry() {
        // Both entries are 10 away from the target under either metric
        let palette = Palette::from_hex(&[("#829696", "above"), ("#6e9696", "below")]).unwrap();
        let target = Rgb::new(0x78, 0x96, 0x96);
        assert_eq!(palette.nearest(target), Some(0));

        let swapped = Palette::from_hex(&[("#6e9696", "below"), ("#829696", "above")]).unwrap();
        assert_eq!(swapped.nearest(target), Some(0));
    }

    #[test]
    fn test_index_of() {
        let palette = six_colors();
        assert_eq!(palette.index_of(Rgb::new(0, 0, 255)), Some(4));
        assert_eq!(palette.index_of(Rgb::new(1, 2, 3)), None);
    }
}
