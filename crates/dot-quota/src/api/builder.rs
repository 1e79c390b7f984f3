//! DotPlanner builder -- the primary entry point for the crate.
//!
//! [`DotPlanner`] ties shuffling and quota allocation together behind a
//! fluent configuration API.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::allocate::{AllocationResult, QuotaAllocator};
use crate::color::Rgb;
use crate::palette::Palette;
use crate::sample::{samples_from_pixels, shuffle, shuffle_with_rng, Sample};

/// Dots available per palette color unless configured otherwise.
///
/// Three packs of 260 stickers each.
pub const DEFAULT_QUOTA: u32 = 260 * 3;

/// High-level planner turning samples into an [`AllocationResult`].
///
/// # Design
///
/// - Constructor requires [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`plan()`](Self::plan) takes `&self` so the planner is **reusable**
///   across multiple images
/// - The quota is validated on every `plan()` call, before any shuffling
///
/// Shuffling is on by default. Without a seed every call draws a fresh
/// permutation from the thread RNG; with [`seed()`](Self::seed) the same
/// input always produces the same plan.
///
/// # Example
///
/// ```
/// use dot_quota::{DotPlanner, Palette, Rgb, Sample};
///
/// let palette = Palette::from_hex(&[("#000000", "black")]).unwrap();
/// let planner = DotPlanner::new(palette).quota(2).seed(7);
///
/// let samples: Vec<Sample> = (0..3).map(|x| Sample::new(x, 0, Rgb::new(0, 0, 0))).collect();
/// let plan = planner.plan(&samples).unwrap();
///
/// assert_eq!(plan.usage(0), 2);
/// assert_eq!(plan.shortage(0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DotPlanner {
    palette: Palette,
    quota: u32,
    shuffle: bool,
    seed: Option<u64>,
}

impl DotPlanner {
    /// Create a planner for the given palette.
    ///
    /// Defaults: quota [`DEFAULT_QUOTA`], shuffling enabled, unseeded.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            quota: DEFAULT_QUOTA,
            shuffle: true,
            seed: None,
        }
    }

    /// Set the number of dots available per palette color.
    #[inline]
    pub fn quota(mut self, quota: u32) -> Self {
        self.quota = quota;
        self
    }

    /// Enable or disable shuffling.
    ///
    /// With shuffling off, samples are allocated in the order given, so the
    /// first samples get first pick of every color.
    #[inline]
    pub fn shuffle(mut self, enabled: bool) -> Self {
        self.shuffle = enabled;
        self
    }

    /// Seed the shuffle for reproducible plans.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The palette this planner allocates from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Plan the given samples.
    ///
    /// 1. Validate the quota
    /// 2. Shuffle (unless disabled)
    /// 3. Allocate in the resulting order
    ///
    /// The returned dots follow the processing order, not the input order.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Allocate`](super::PlanError::Allocate) if the
    /// quota is zero. No samples are processed in that case.
    pub fn plan(&self, samples: &[Sample]) -> Result<AllocationResult, super::PlanError> {
        let allocator = QuotaAllocator::new(&self.palette, self.quota)?;

        if !self.shuffle {
            return Ok(allocator.allocate(samples));
        }

        let order = match self.seed {
            Some(seed) => shuffle_with_rng(samples, &mut StdRng::seed_from_u64(seed)),
            None => shuffle(samples),
        };
        Ok(allocator.allocate(&order))
    }

    /// Plan a row-major pixel buffer of `width * height` colors.
    ///
    /// Convenience wrapper around [`samples_from_pixels()`] and
    /// [`plan()`](Self::plan).
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Sample`](super::PlanError::Sample) if `pixels`
    /// does not hold exactly `width * height` colors, otherwise the errors of
    /// [`plan()`](Self::plan).
    pub fn plan_pixels(
        &self,
        pixels: &[Rgb],
        width: u32,
        height: u32,
    ) -> Result<AllocationResult, super::PlanError> {
        self.plan(&samples_from_pixels(width, height, pixels)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocate::AllocateError;
    use crate::api::PlanError;
    use crate::sample::SampleError;

    fn bw() -> Palette {
        Palette::from_hex(&[("#000000", "black"), ("#ffffff", "white")]).unwrap()
    }

    /// Helper: a 4x4 image, dark on the left half, light on the right.
    fn split_4x4() -> Vec<Rgb> {
        (0..16)
            .map(|i| {
                if i % 4 < 2 {
                    Rgb::new(20, 20, 20)
                } else {
                    Rgb::new(230, 230, 230)
                }
            })
            .collect()
    }

    #[test]
    fn test_new_defaults() {
        let planner = DotPlanner::new(bw());
        assert_eq!(planner.quota, DEFAULT_QUOTA);
        assert_eq!(planner.quota, 780);
        assert!(planner.shuffle);
        assert_eq!(planner.seed, None);
    }

    #[test]
    fn test_builder_chaining() {
        let planner = DotPlanner::new(bw()).quota(5).shuffle(false).seed(9);
        assert_eq!(planner.quota, 5);
        assert!(!planner.shuffle);
        assert_eq!(planner.seed, Some(9));
        assert_eq!(planner.palette().len(), 2);
    }

    #[test]
    fn test_zero_quota_is_plan_error() {
        let planner = DotPlanner::new(bw()).quota(0);
        let err = planner.plan_pixels(&split_4x4(), 4, 4).unwrap_err();
        assert_eq!(err, PlanError::Allocate(AllocateError::InvalidQuota { quota: 0 }));
    }

    #[test]
    fn test_mismatched_pixel_buffer_is_plan_error() {
        let planner = DotPlanner::new(bw()).quota(10);
        let err = planner.plan_pixels(&split_4x4(), 4, 3).unwrap_err();
        assert_eq!(
            err,
            PlanError::Sample(SampleError::PixelCountMismatch {
                width: 4,
                height: 3,
                actual: 16
            })
        );
    }

    #[test]
    fn test_unshuffled_plan_keeps_input_order() {
        let planner = DotPlanner::new(bw()).quota(100).shuffle(false);
        let result = planner.plan_pixels(&split_4x4(), 4, 4).unwrap();

        let coords: Vec<(u32, u32)> = result.dots().iter().map(|d| (d.x, d.y)).collect();
        let expected: Vec<(u32, u32)> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        assert_eq!(coords, expected);
        assert_eq!(result.usage_counts(), &[8, 8]);
    }

    #[test]
    fn test_seeded_plan_is_reusable_and_reproducible() {
        let planner = DotPlanner::new(bw()).quota(3).seed(42);
        let pixels = split_4x4();

        let first = planner.plan_pixels(&pixels, 4, 4).unwrap();
        let second = planner.plan_pixels(&pixels, 4, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffled_plan_covers_every_sample_once() {
        let planner = DotPlanner::new(bw()).quota(3);
        let result = planner.plan_pixels(&split_4x4(), 4, 4).unwrap();

        let mut coords: Vec<(u32, u32)> = result.dots().iter().map(|d| (d.y, d.x)).collect();
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), 16);
        assert_eq!(result.usage_counts(), &[3, 3]);
        assert_eq!(result.shortage_counts(), &[5, 5]);
    }
}
