use crate::models::{GRAY_LEVELS, Glcm, TextureFeatures};

/// Reduce a normalized co-occurrence matrix to scalar texture descriptors
///
/// The mean and standard deviation are marginal statistics over the
/// first (row) index. Correlation terms are skipped while the standard
/// deviation is zero, so a matrix with all its mass on one row reports
/// a correlation of 0. The all-zero degenerate matrix reports 0 for
/// every descriptor.
pub fn texture_features(matrix: &Glcm) -> TextureFeatures {
    // Row-index weighted mean of the joint distribution
    let mut mean = 0.0;
    for i in 0..GRAY_LEVELS {
        for j in 0..GRAY_LEVELS {
            mean += i as f64 * matrix.get(i, j);
        }
    }

    // Standard deviation around that mean, again over the row index
    let mut variance = 0.0;
    for i in 0..GRAY_LEVELS {
        for j in 0..GRAY_LEVELS {
            let di = i as f64 - mean;
            variance += matrix.get(i, j) * di * di;
        }
    }
    let std = variance.sqrt();

    let mut contrast = 0.0;
    let mut correlation = 0.0;
    let mut energy = 0.0;
    for i in 0..GRAY_LEVELS {
        for j in 0..GRAY_LEVELS {
            let p = matrix.get(i, j);
            let d = i as f64 - j as f64;
            contrast += d * d * p;
            if std != 0.0 {
                correlation += (i as f64 - mean) * (j as f64 - mean) * p / (std * std);
            }
            energy += p * p;
        }
    }

    TextureFeatures {
        contrast,
        correlation,
        energy,
    }
}
