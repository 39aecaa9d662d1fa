/// Per-channel mean color of an RGB image.
#[derive(Debug, Clone, Copy)]
pub struct MeanColor {
    /// Mean value of the red channel.
    pub red: f64,
    /// Mean value of the green channel.
    pub green: f64,
    /// Mean value of the blue channel.
    pub blue: f64,
}

/// Scalar texture descriptors derived from a normalized co-occurrence matrix.
#[derive(Debug, Clone, Copy)]
pub struct TextureFeatures {
    /// Local intensity variation, weighted by squared gray-level distance.
    pub contrast: f64,
    /// Linear dependency between the gray levels of paired pixels.
    pub correlation: f64,
    /// Sum of squared matrix entries (angular second moment).
    pub energy: f64,
}
