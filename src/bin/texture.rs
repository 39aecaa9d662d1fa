use clap::Parser;
use imgstat::analyze_texture;
use imgstat::tools::load_rgb;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "texture", version, about = "GLCM texture features of an image")]
struct Cli {
    /// Path to the image to analyze
    #[arg(long)]
    image: PathBuf,
    /// Co-occurrence offset length in pixels
    #[arg(long, default_value_t = 1)]
    distance: usize,
    /// Co-occurrence direction in degrees (0 = horizontal, 90 = vertical)
    #[arg(long, default_value_t = 0)]
    angle: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (pixels, width, height) = match load_rgb(&cli.image) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", cli.image.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let features = analyze_texture(&pixels, width, height, cli.distance, cli.angle);
    println!("Texture Features:");
    println!("Contrast: {}", features.contrast);
    println!("Correlation: {}", features.correlation);
    println!("Energy: {}", features.energy);
    ExitCode::SUCCESS
}
