//! Stable nearest-color ordering.

use crate::color::{DistanceMetric, Rgb};

/// Order `palette` by ascending distance to `target`, closest first.
///
/// The sort is stable: when two palette colors are equidistant from the
/// target, they keep their relative order from the input. Allocation relies
/// on this to make tie resolution predictable. An empty palette yields an
/// empty result, and duplicate colors are passed through as separate entries.
///
/// # Example
///
/// ```
/// use dot_quota::{rank, Rgb};
///
/// let target: Rgb = "#53dde6".parse().unwrap();
/// let palette: Vec<Rgb> = ["#A52A2A", "#22BAD0", "#008000"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let ranked: Vec<String> = rank(target, &palette).iter().map(|c| c.to_hex()).collect();
/// assert_eq!(ranked, ["#22bad0", "#a52a2a", "#008000"]);
/// ```
pub fn rank(target: Rgb, palette: &[Rgb]) -> Vec<Rgb> {
    rank_by(DistanceMetric::default(), target, palette)
}

/// Like [`rank()`], with an explicit distance metric.
pub fn rank_by(metric: DistanceMetric, target: Rgb, palette: &[Rgb]) -> Vec<Rgb> {
    let mut ranked = palette.to_vec();
    // sort_by_key is stable: equidistant colors keep palette order
    ranked.sort_by_key(|&color| metric.distance(target, color));
    ranked
}

/// Like [`rank_by()`], but returns positions into `palette` instead of colors.
pub fn rank_indices(metric: DistanceMetric, target: Rgb, palette: &[Rgb]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..palette.len()).collect();
    order.sort_by_key(|&i| metric.distance(target, palette[i]));
    order
}
