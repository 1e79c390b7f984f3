//! Greedy single-pass allocation against a per-color supply.

use crate::palette::Palette;
use crate::sample::Sample;

use super::{AllocateError, AllocationResult, Dot};

/// Assigns samples to their nearest palette entry while supply lasts.
///
/// Every palette entry starts with `quota` units. Samples are consumed in
/// the order given: each one asks for its single nearest entry, takes a unit
/// if any is left, and otherwise stays unassigned and counts as a shortage
/// against that entry. There is no fallback to the second nearest color and
/// no backtracking.
///
/// # Example
///
/// ```
/// use dot_quota::{Palette, QuotaAllocator, Rgb, Sample};
///
/// let palette = Palette::from_hex(&[("#000000", "black")]).unwrap();
/// let allocator = QuotaAllocator::new(&palette, 1).unwrap();
///
/// let samples = [
///     Sample::new(0, 0, Rgb::new(1, 1, 1)),
///     Sample::new(1, 0, Rgb::new(2, 2, 2)),
/// ];
/// let result = allocator.allocate(&samples);
///
/// assert_eq!(result.dots()[0].entry, Some(0));
/// assert_eq!(result.dots()[1].entry, None);
/// assert_eq!(result.shortage(0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuotaAllocator<'a> {
    palette: &'a Palette,
    quota: u32,
}

impl<'a> QuotaAllocator<'a> {
    /// Create an allocator with `quota` units per palette entry.
    ///
    /// # Errors
    ///
    /// Returns [`AllocateError::InvalidQuota`] if `quota` is 0.
    pub fn new(palette: &'a Palette, quota: u32) -> Result<Self, AllocateError> {
        if quota == 0 {
            return Err(AllocateError::InvalidQuota { quota });
        }
        Ok(Self { palette, quota })
    }

    /// The palette being allocated from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        self.palette
    }

    /// Dots available per palette entry.
    #[inline]
    pub fn quota(&self) -> u32 {
        self.quota
    }

    /// Run one allocation over `samples`, in the order given.
    ///
    /// Each call starts from full supply; the allocator itself holds no
    /// counters between runs.
    pub fn allocate(&self, samples: &[Sample]) -> AllocationResult {
        let n = self.palette.len();
        let quota = self.quota as usize;
        let mut usage = vec![0usize; n];
        let mut shortage = vec![0usize; n];
        let mut unattributed = 0usize;
        let mut dots = Vec::with_capacity(samples.len());

        for &sample in samples {
            let entry = match self.palette.nearest(sample.color) {
                Some(idx) if usage[idx] < quota => {
                    usage[idx] += 1;
                    Some(idx)
                }
                Some(idx) => {
                    shortage[idx] += 1;
                    None
                }
                None => {
                    unattributed += 1;
                    None
                }
            };
            dots.push(Dot::new(sample, entry));
        }

        AllocationResult::new(dots, usage, shortage, unattributed, self.quota)
    }
}

/// Allocate `samples` against `palette` with `quota` units per entry.
///
/// Shorthand for [`QuotaAllocator::new`] followed by
/// [`QuotaAllocator::allocate`].
pub fn allocate(
    samples: &[Sample],
    palette: &Palette,
    quota: u32,
) -> Result<AllocationResult, AllocateError> {
    Ok(QuotaAllocator::new(palette, quota)?.allocate(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{DistanceMetric, Rgb};

    fn bw() -> Palette {
        Palette::from_hex(&[("#000000", "black"), ("#ffffff", "white")]).unwrap()
    }

    fn gray(x: u32, v: u8) -> Sample {
        Sample::new(x, 0, Rgb::new(v, v, v))
    }

    #[test]
    fn test_zero_quota_rejected() {
        let palette = bw();
        let err = QuotaAllocator::new(&palette, 0).unwrap_err();
        assert_eq!(err, AllocateError::InvalidQuota { quota: 0 });
        assert!(allocate(&[gray(0, 0)], &palette, 0).is_err());
    }

    #[test]
    fn test_assigns_nearest_while_supply_lasts() {
        let palette = bw();
        let samples = [gray(0, 10), gray(1, 240), gray(2, 20), gray(3, 30)];
        let result = allocate(&samples, &palette, 2).unwrap();

        let entries: Vec<Option<usize>> = result.dots().iter().map(|d| d.entry).collect();
        assert_eq!(entries, vec![Some(0), Some(1), Some(0), None]);
        assert_eq!(result.usage_counts(), &[2, 1]);
        assert_eq!(result.shortage_counts(), &[1, 0]);
        assert_eq!(result.remaining(0), 0);
        assert_eq!(result.remaining(1), 1);
    }

    #[test]
    fn test_no_fallback_to_second_nearest() {
        // White has plenty left, but the dark sample still goes unassigned
        let palette = bw();
        let samples = [gray(0, 0), gray(1, 1)];
        let result = allocate(&samples, &palette, 1).unwrap();

        assert_eq!(result.dots()[1].entry, None);
        assert_eq!(result.usage(1), 0);
        assert_eq!(result.shortage(0), 1);
    }

    #[test]
    fn test_dots_keep_sample_coordinates_and_order() {
        let palette = bw();
        let samples = [
            Sample::new(5, 7, Rgb::new(1, 2, 3)),
            Sample::new(0, 1, Rgb::new(200, 200, 200)),
        ];
        let result = allocate(&samples, &palette, 5).unwrap();
        let dots = result.dots();

        assert_eq!((dots[0].x, dots[0].y, dots[0].source), (5, 7, Rgb::new(1, 2, 3)));
        assert_eq!((dots[1].x, dots[1].y), (0, 1));
        assert!(dots.iter().all(|d| d.is_assigned()));
    }

    #[test]
    fn test_empty_palette_reports_unattributed_shortage() {
        let palette = Palette::new(Vec::new()).unwrap();
        let samples = [gray(0, 0), gray(1, 128)];
        let result = allocate(&samples, &palette, 3).unwrap();

        assert_eq!(result.palette_len(), 0);
        assert_eq!(result.unassigned().count(), 2);
        assert_eq!(result.unattributed_shortage(), 2);
        assert_eq!(result.total_missing(), 2);
        assert_eq!(result.total_used(), 0);
    }

    #[test]
    fn test_empty_samples() {
        let palette = bw();
        let result = allocate(&[], &palette, 4).unwrap();
        assert!(result.dots().is_empty());
        assert_eq!(result.usage_counts(), &[0, 0]);
        assert_eq!(result.remaining(0), 4);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        // Both entries are 5 away from the target
        let palette = Palette::from_hex(&[("#0a0000", "a"), ("#00000a", "b")]).unwrap();
        let result = allocate(&[Sample::new(0, 0, Rgb::new(0, 5, 0))], &palette, 1).unwrap();
        assert_eq!(result.dots()[0].entry, Some(0));
    }

    #[test]
    fn test_allocator_follows_palette_metric() {
        // Channel sums: target 100, red 100, gray 102. Manhattan: red 200, gray 134.
        let target = Rgb::new(0, 100, 0);
        let palette = Palette::from_hex(&[("#640000", "red"), ("#222222", "gray")]).unwrap();
        let sample = [Sample::new(0, 0, target)];

        let by_sum = allocate(&sample, &palette, 1).unwrap();
        assert_eq!(by_sum.dots()[0].entry, Some(0));

        let palette = palette.with_distance_metric(DistanceMetric::Manhattan);
        let by_l1 = allocate(&sample, &palette, 1).unwrap();
        assert_eq!(by_l1.dots()[0].entry, Some(1));
    }

    #[test]
    fn test_summary_joins_labels() {
        let palette = bw();
        let samples = [gray(0, 0), gray(1, 0), gray(2, 255)];
        let result = allocate(&samples, &palette, 1).unwrap();
        let summary = result.summary(&palette);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].label, "black");
        assert_eq!((summary[0].used, summary[0].missing, summary[0].remaining), (1, 1, 0));
        assert_eq!(summary[1].color, Rgb::new(255, 255, 255));
        assert_eq!((summary[1].used, summary[1].missing, summary[1].remaining), (1, 0, 0));
    }
}
