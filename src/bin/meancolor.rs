use clap::Parser;
use imgstat::mean_color;
use imgstat::tools::load_rgb;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "meancolor", version, about = "Per-channel mean color of an image")]
struct Cli {
    /// Path to the image to analyze
    #[arg(long)]
    image: PathBuf,
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

    let mean = mean_color(&pixels, width, height);
    println!(
        "Mean colors - Red: {:.2}, Green: {:.2}, Blue: {:.2}",
        mean.red, mean.green, mean.blue
    );
    ExitCode::SUCCESS
}
