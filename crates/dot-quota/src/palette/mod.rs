//! Palette types and nearest-color ranking
//!
//! This module provides the ordered, labelled [`Palette`], the stable
//! [`rank()`] ordering, and the error types for parsing and validation.

mod error;
mod palette;
mod rank;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PaletteEntry};
pub use rank::{rank, rank_by, rank_indices};
