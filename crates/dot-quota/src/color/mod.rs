//! Color type and distance metric
//!
//! Colors are plain 8-bit sRGB triples. No color space conversion happens
//! anywhere in this crate: matching is done directly on channel values,
//! using one of the two integer metrics of [`DistanceMetric`].
//!
//! # Example
//!
//! ```
//! use dot_quota::{distance, Rgb};
//!
//! let black = Rgb::new(0, 0, 0);
//! let magenta: Rgb = "#FF00FF".parse().unwrap();
//!
//! assert_eq!(distance(black, magenta), 510);
//! ```

mod distance;
mod rgb;

pub use distance::{distance, manhattan_distance, DistanceMetric, MAX_DISTANCE};
pub use rgb::Rgb;
