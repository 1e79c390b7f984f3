//! Channel-space distance between colors.

use super::rgb::Rgb;

/// Largest possible distance between two colors under either metric (255 * 3).
pub const MAX_DISTANCE: u32 = 255 * 3;

/// Distance metric for palette color matching.
///
/// Both metrics work directly on 8-bit channel values and return an
/// integer in `0..=MAX_DISTANCE`. Neither attempts perceptual accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Absolute difference of the channel sums: `|(r1+g1+b1) - (r2+g2+b2)|`.
    ///
    /// Per-channel differences are summed with their signs before the
    /// absolute value is taken, so this compares overall channel intensity.
    /// It is symmetric and satisfies the triangle inequality, but distinct
    /// colors with the same channel sum are at distance 0 and resolve by
    /// palette order.
    #[default]
    ChannelSum,

    /// Sum of absolute per-channel differences (L1 norm):
    /// `|r1-r2| + |g1-g2| + |b1-b2|`.
    ///
    /// Zero only for equal colors.
    Manhattan,
}

impl DistanceMetric {
    /// Distance between `a` and `b` under this metric.
    #[inline]
    pub fn distance(self, a: Rgb, b: Rgb) -> u32 {
        match self {
            DistanceMetric::ChannelSum => distance(a, b),
            DistanceMetric::Manhattan => manhattan_distance(a, b),
        }
    }
}

/// Default color distance: absolute difference of channel sums.
///
/// This is [`DistanceMetric::ChannelSum`], the metric used by [`crate::rank()`]
/// and by palettes unless overridden.
///
/// # Example
///
/// ```
/// use dot_quota::{distance, Rgb, MAX_DISTANCE};
///
/// let black = Rgb::new(0, 0, 0);
/// let white = Rgb::new(255, 255, 255);
/// assert_eq!(distance(black, white), MAX_DISTANCE);
/// ```
#[inline]
pub fn distance(a: Rgb, b: Rgb) -> u32 {
    channel_sum(a).abs_diff(channel_sum(b))
}

/// Sum of absolute per-channel differences between two colors.
#[inline]
pub fn manhattan_distance(a: Rgb, b: Rgb) -> u32 {
    a.r.abs_diff(b.r) as u32 + a.g.abs_diff(b.g) as u32 + a.b.abs_diff(b.b) as u32
}

#[inline]
fn channel_sum(c: Rgb) -> u32 {
    c.r as u32 + c.g as u32 + c.b as u32
}
