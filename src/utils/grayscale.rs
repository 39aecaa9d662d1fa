/// Convert RGB images to grayscale
/// Y = 0.3*R + 0.59*G + 0.11*B, truncated towards zero

/// Luma weight for the red channel
pub const WEIGHT_R: f64 = 0.3;
/// Luma weight for the green channel
pub const WEIGHT_G: f64 = 0.59;
/// Luma weight for the blue channel
pub const WEIGHT_B: f64 = 0.11;

fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (WEIGHT_R * r as f64 + WEIGHT_G * g as f64 + WEIGHT_B * b as f64) as u8
}

/// Convert an RGB image to grayscale
///
/// Produces one luminance byte per pixel, row-major. The caller
/// guarantees `rgb` holds exactly `width * height` pixels of 3 bytes
/// each; the conversion does not validate the buffer length.
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = Vec::with_capacity(pixel_count);

    for i in 0..pixel_count {
        let idx = i * 3;
        gray.push(luminance(rgb[idx], rgb[idx + 1], rgb[idx + 2]));
    }

    gray
}

// ============== Parallel Processing with Rayon ==============

use rayon::prelude::*;

/// Convert RGB to grayscale using parallel processing
/// Processes rows in parallel for multi-core speedup
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut gray = vec![0u8; pixel_count];

    // Process rows in parallel
    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        for x in 0..width {
            let idx = row_start + x * 3;
            row[x] = luminance(rgb[idx], rgb[idx + 1], rgb[idx + 2]);
        }
    });

    gray
}
