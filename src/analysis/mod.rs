//! Numeric core behind the CLI tools
//!
//! - Mean color (per-channel first-order statistic)
//! - Co-occurrence matrix construction (second-order gray-level histogram)
//! - Texture features derived from the matrix (contrast, correlation, energy)

pub mod color;
pub mod cooccurrence;
pub mod features;
