//! CLI for running the skin analysis pipeline over a photo.
//!
//! The landmark file is a JSON array of normalized points as exported by a
//! FaceMesh tracker: `[{"x": 0.51, "y": 0.43}, ...]` with at least 468 entries.
//!
//! Usage:
//!   glowcam <image> --landmarks face.json            # Human-readable report
//!   glowcam <image> --landmarks face.json --json     # JSON report
//!   glowcam <image> --landmarks face.json -o out.json

use clap::Parser;
use glowcam::{
    classify, recommendations, ClassifierConfig, FaceLandmarks, Point, Rgb, RgbFrame,
    SamplerConfig, SkinReport,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "glowcam")]
#[command(author, version, about = "Skin analysis from a photo and tracked landmarks", long_about = None)]
struct Args {
    /// Input image file
    #[arg(required = true)]
    image: PathBuf,

    /// JSON file with normalized facial landmarks
    #[arg(short, long)]
    landmarks: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.verbose {
        eprintln!("Loading image {:?}...", args.image);
    }
    let img = image::open(&args.image)?.to_rgb8();
    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    let frame = RgbFrame::new(pixels, width, height)?;

    if args.verbose {
        eprintln!("Loading landmarks {:?}...", args.landmarks);
    }
    let points: Vec<Point> = serde_json::from_str(&fs::read_to_string(&args.landmarks)?)?;
    let face = FaceLandmarks::new(points)?;

    if args.verbose {
        eprintln!(
            "Analyzing {}x{} frame with {} landmarks...",
            width,
            height,
            face.num_landmarks()
        );
    }

    let stats = glowcam::sample_regions(&frame, &face, &SamplerConfig::default());
    let profile = classify(&stats, &ClassifierConfig::default());
    let recs = recommendations(&profile);
    let report = SkinReport::new(&stats, &profile, recs);

    let rendered = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.to_string()
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}
