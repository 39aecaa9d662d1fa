use crate::models::MeanColor;

/// Compute the per-channel mean of an RGB image
///
/// Channel totals accumulate in 64-bit integers before the final
/// division. An image with zero pixels reports zero means.
pub fn mean_color(rgb: &[u8], width: usize, height: usize) -> MeanColor {
    let pixel_count = width * height;
    if pixel_count == 0 {
        return MeanColor {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
        };
    }

    let mut total_red: u64 = 0;
    let mut total_green: u64 = 0;
    let mut total_blue: u64 = 0;
    for pixel in rgb.chunks_exact(3).take(pixel_count) {
        total_red += pixel[0] as u64;
        total_green += pixel[1] as u64;
        total_blue += pixel[2] as u64;
    }

    MeanColor {
        red: total_red as f64 / pixel_count as f64,
        green: total_green as f64 / pixel_count as f64,
        blue: total_blue as f64 / pixel_count as f64,
    }
}
