//! Shared helpers for the CLI binaries and integration tests.

use std::path::Path;

/// Load an image as RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

#[cfg(test)]
mod tests {
    use super::load_rgb;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn write_temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before UNIX epoch")
            .as_nanos();
        let sequence = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!("imgstat_{name}_{nanos}_{sequence}.ppm"));
        fs::write(&path, contents).expect("failed to write temp image file");
        path
    }

    #[test]
    fn load_rgb_reads_binary_ppm() {
        // 2x2 P6 image: black, white / white, black
        let mut ppm = b"P6\n2 2\n255\n".to_vec();
        ppm.extend_from_slice(&[0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0]);
        let path = write_temp_file("p6", &ppm);

        let (pixels, width, height) = load_rgb(&path).expect("failed to load PPM");
        assert_eq!((width, height), (2, 2));
        assert_eq!(
            pixels,
            vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0]
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_rgb_rejects_missing_file() {
        let mut path = std::env::temp_dir();
        path.push("imgstat_no_such_image.ppm");
        assert!(load_rgb(&path).is_err());
    }

    #[test]
    fn load_rgb_rejects_truncated_ppm() {
        // Header promises 2x2 pixels but the payload holds only one
        let mut ppm = b"P6\n2 2\n255\n".to_vec();
        ppm.extend_from_slice(&[0, 0, 0]);
        let path = write_temp_file("truncated", &ppm);

        assert!(load_rgb(&path).is_err());
        let _ = fs::remove_file(path);
    }
}
