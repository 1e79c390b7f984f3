//! Randomized processing order.
//!
//! In raster order, a large uniform region would exhaust its color before the
//! rest of the image is even visited, so the shortage would show up as one
//! solid band. Processing samples in uniformly random order spreads missing
//! dots evenly across the image instead.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Sample;

/// Return the samples in uniformly random order.
///
/// Uses a Fisher-Yates shuffle driven by the thread-local RNG. Every
/// permutation is equally likely; callers must not depend on any specific
/// one.
pub fn shuffle(samples: &[Sample]) -> Vec<Sample> {
    shuffle_with_rng(samples, &mut rand::thread_rng())
}

/// Like [`shuffle()`], but draws from the given RNG.
///
/// Pass a seeded generator (e.g. `StdRng::seed_from_u64`) to reproduce a
/// plan exactly.
///
/// # Example
///
/// ```
/// use dot_quota::{shuffle_with_rng, Rgb, Sample};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let samples: Vec<Sample> = (0..10).map(|x| Sample::new(x, 0, Rgb::new(0, 0, 0))).collect();
/// let a = shuffle_with_rng(&samples, &mut StdRng::seed_from_u64(7));
/// let b = shuffle_with_rng(&samples, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffle_with_rng<R: Rng + ?Sized>(samples: &[Sample], rng: &mut R) -> Vec<Sample> {
    let mut shuffled = samples.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
