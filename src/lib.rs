//! ImgStat - image mean-color and texture statistics
//!
//! A pure Rust library for simple image statistics: per-channel mean
//! color and gray-level co-occurrence matrix (GLCM) texture descriptors
//! (contrast, correlation, energy).

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Statistics core (mean color, co-occurrence matrix, texture features)
pub mod analysis;
/// Core data structures (Glcm, MeanColor, TextureFeatures)
pub mod models;
/// Image loading shared by the CLI binaries and tests
pub mod tools;
/// Utility functions (grayscale conversion)
pub mod utils;

pub use models::{GRAY_LEVELS, Glcm, MeanColor, TextureFeatures};

pub use analysis::color::mean_color;
use analysis::cooccurrence::glcm;
use analysis::features::texture_features;
use utils::grayscale::rgb_to_grayscale;

/// Compute GLCM texture features for an RGB image
///
/// # Arguments
/// * `rgb` - Raw RGB bytes (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `distance` - Co-occurrence offset length in pixels
/// * `angle` - Offset direction in degrees (0 = horizontal, 90 = vertical)
///
/// # Returns
/// Contrast, correlation and energy of the normalized co-occurrence matrix
pub fn analyze_texture(
    rgb: &[u8],
    width: usize,
    height: usize,
    distance: usize,
    angle: u32,
) -> TextureFeatures {
    // Step 1: Convert to grayscale
    let gray = rgb_to_grayscale(rgb, width, height);

    // Step 2: Build the normalized co-occurrence matrix
    let matrix = glcm(&gray, width, height, distance, angle);

    // Step 3: Reduce the matrix to scalar descriptors
    texture_features(&matrix)
}
