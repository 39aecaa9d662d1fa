pub mod glcm;
pub mod report;

pub use glcm::{GRAY_LEVELS, Glcm};
pub use report::{MeanColor, TextureFeatures};
