//! Dotterizer - paint by dots
//!
//! Turns a PNG into a printable sticker template for a fixed supply of
//! colored dot stickers. Planning lives in the `dot-quota` crate; this
//! library exposes the file, template and rendering layers for the CLI
//! and integration tests.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
