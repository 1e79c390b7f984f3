//! AllocationResult: per-sample assignments plus usage and shortage counts.

use crate::color::Rgb;
use crate::palette::Palette;
use crate::sample::Sample;

/// One allocated sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dot {
    /// Column of the source pixel
    pub x: u32,
    /// Row of the source pixel
    pub y: u32,
    /// Color of the source pixel
    pub source: Rgb,
    /// Assigned palette index, or `None` if the wanted color ran out
    pub entry: Option<usize>,
}

impl Dot {
    pub(crate) fn new(sample: Sample, entry: Option<usize>) -> Self {
        Self {
            x: sample.x,
            y: sample.y,
            source: sample.color,
            entry,
        }
    }

    /// Returns true if the dot received a palette color.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.entry.is_some()
    }
}

/// Per-entry totals, in palette order. See [`AllocationResult::summary()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    /// Palette position (0-based)
    pub index: usize,
    /// Entry label, as in the palette
    pub label: String,
    /// Entry color
    pub color: Rgb,
    /// Dots painted with this entry
    pub used: usize,
    /// Samples that wanted this entry after it ran out
    pub missing: usize,
    /// Supply left over
    pub remaining: usize,
}

/// The outcome of one allocation run.
///
/// Holds exactly one [`Dot`] per input sample, in processing order, plus
/// usage and shortage counts indexed by palette position. The result is
/// immutable once produced.
///
/// For every entry `usage(i) + remaining(i) == quota()` and
/// `usage(i) <= quota()`. Across the whole run
/// `total_used() + total_missing() == dots().len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult {
    dots: Vec<Dot>,
    usage: Vec<usize>,
    shortage: Vec<usize>,
    // Samples refused because the palette was empty: no entry to blame
    unattributed_shortage: usize,
    quota: u32,
}

impl AllocationResult {
    pub(crate) fn new(
        dots: Vec<Dot>,
        usage: Vec<usize>,
        shortage: Vec<usize>,
        unattributed_shortage: usize,
        quota: u32,
    ) -> Self {
        debug_assert_eq!(usage.len(), shortage.len());
        Self {
            dots,
            usage,
            shortage,
            unattributed_shortage,
            quota,
        }
    }

    /// All dots, in the order the samples were processed.
    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// The per-entry quota this run was configured with.
    #[inline]
    pub fn quota(&self) -> u32 {
        self.quota
    }

    /// Number of palette entries the run was made against.
    #[inline]
    pub fn palette_len(&self) -> usize {
        self.usage.len()
    }

    /// Dots assigned to entry `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[inline]
    pub fn usage(&self, idx: usize) -> usize {
        self.usage[idx]
    }

    /// Samples refused because entry `idx` was exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[inline]
    pub fn shortage(&self, idx: usize) -> usize {
        self.shortage[idx]
    }

    /// Supply of entry `idx` left unused.
    #[inline]
    pub fn remaining(&self, idx: usize) -> usize {
        self.quota as usize - self.usage[idx]
    }

    /// Usage for every entry, in palette order.
    #[inline]
    pub fn usage_counts(&self) -> &[usize] {
        &self.usage
    }

    /// Shortage for every entry, in palette order.
    #[inline]
    pub fn shortage_counts(&self) -> &[usize] {
        &self.shortage
    }

    /// Samples refused without a wanted entry (only with an empty palette).
    #[inline]
    pub fn unattributed_shortage(&self) -> usize {
        self.unattributed_shortage
    }

    /// Total assigned dots.
    pub fn total_used(&self) -> usize {
        self.usage.iter().sum()
    }

    /// Total unassigned dots, attributed or not.
    pub fn total_missing(&self) -> usize {
        self.shortage.iter().sum::<usize>() + self.unattributed_shortage
    }

    /// Iterate over the dots that received no color.
    pub fn unassigned(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter().filter(|d| d.entry.is_none())
    }

    /// Per-entry totals joined with the palette labels.
    ///
    /// `palette` must be the palette the run was made against.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the palette length matches.
    pub fn summary(&self, palette: &Palette) -> Vec<EntrySummary> {
        debug_assert_eq!(palette.len(), self.usage.len());
        palette
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntrySummary {
                index,
                label: entry.label.clone(),
                color: entry.color,
                used: self.usage[index],
                missing: self.shortage[index],
                remaining: self.remaining(index),
            })
            .collect()
    }
}
