//! dot-quota: nearest-color matching under a per-color supply quota
//!
//! This library turns a list of pixel samples into a paint-by-dots plan.
//! Every sample is matched to the closest color of a fixed palette, and each
//! palette color can only be handed out a limited number of times. Samples
//! whose nearest color has run out are left unassigned and counted as a
//! shortage against the color they wanted.
//!
//! # Quick Start
//!
//! The [`DotPlanner`] builder is the primary entry point:
//!
//! ```
//! use dot_quota::{DotPlanner, Palette, Rgb, Sample};
//!
//! let palette = Palette::from_hex(&[("#000000", "black"), ("#ffffff", "white")]).unwrap();
//! let samples = vec![
//!     Sample::new(0, 0, Rgb::new(10, 10, 10)),
//!     Sample::new(1, 0, Rgb::new(250, 250, 250)),
//! ];
//!
//! let plan = DotPlanner::new(palette).quota(10).plan(&samples).unwrap();
//! assert_eq!(plan.dots().len(), 2);
//! assert_eq!(plan.total_used(), 2);
//! ```
//!
//! # Building Blocks
//!
//! The planner is a thin shell around four pieces that can be used on
//! their own:
//!
//! - [`distance()`]: integer distance between two [`Rgb`] colors (see [`DistanceMetric`])
//! - [`rank()`] / [`Palette::rank()`]: palette ordered by distance, stable on ties
//! - [`QuotaAllocator`]: greedy single-pass assignment with usage and shortage
//! - [`shuffle()`]: uniform random permutation of the samples
//!
//! ```text
//! samples ──> shuffle ──> QuotaAllocator ──> AllocationResult
//!                              │
//!                              └─ per sample: Palette::nearest
//!                                    └─ per entry: distance
//! ```
//!
//! # Allocation Policy
//!
//! Allocation is greedy and never backtracks. Only the single nearest
//! palette entry is tried; when its supply is exhausted the sample is not
//! redirected to the second nearest color. Because the first samples to be
//! processed win, the input order matters, which is why the planner shuffles
//! by default: in raster order a large uniform region would drain a popular
//! color and leave a visible band of missing dots elsewhere.
//!
//! Ties between equidistant palette colors always resolve to the entry that
//! comes first in the palette, so a fixed sample order produces a fixed
//! result.

pub mod allocate;
pub mod api;
pub mod color;
pub mod palette;
pub mod sample;


pub use allocate::{allocate, AllocateError, AllocationResult, Dot, EntrySummary, QuotaAllocator};
pub use api::{DotPlanner, PlanError, DEFAULT_QUOTA};
pub use color::{distance, manhattan_distance, DistanceMetric, Rgb, MAX_DISTANCE};
pub use palette::{rank, rank_by, Palette, PaletteEntry, PaletteError, ParseColorError};
pub use sample::{samples_from_pixels, shuffle, shuffle_with_rng, Sample, SampleError};
