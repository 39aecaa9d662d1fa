use crate::models::Glcm;

/// Map an angle in degrees to a pixel offset of the given length.
///
/// Angles other than 0 and 90 yield a zero offset, which pairs every
/// pixel with itself.
fn offset_for_angle(distance: isize, angle: u32) -> (isize, isize) {
    match angle {
        0 => (distance, 0),   // Horizontal
        90 => (0, -distance), // Vertical
        _ => (0, 0),
    }
}

/// Build a normalized gray-level co-occurrence matrix
///
/// Scans every pixel in row-major order and counts the gray-level pair
/// it forms with the pixel at `(x + dx, y + dy)`. Pairs whose offset
/// position falls outside the image are skipped. The counts are then
/// normalized to sum to 1.0; an image with no valid pair at all (e.g.
/// narrower than a horizontal offset) produces the all-zero matrix.
///
/// # Arguments
/// * `gray` - Grayscale bytes (1 byte per pixel, row-major)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `distance` - Offset length in pixels
/// * `angle` - Offset direction in degrees (0 = horizontal, 90 = vertical)
pub fn glcm(gray: &[u8], width: usize, height: usize, distance: usize, angle: u32) -> Glcm {
    let (dx, dy) = offset_for_angle(distance as isize, angle);
    let mut matrix = Glcm::new();

    for y in 0..height {
        for x in 0..width {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || nx >= width as isize || ny < 0 || ny >= height as isize {
                continue;
            }

            let current = gray[y * width + x] as usize;
            let neighbor = gray[ny as usize * width + nx as usize] as usize;
            matrix.increment(current, neighbor);
        }
    }

    matrix.normalize();
    matrix
}
