//! # og-image CLI
//!
//! Writes `public/og-image.png` (600x600px) from `public/icons/mia-logo.png`.
//!
//! ## Usage
//!
//! Run from the frontend root:
//!
//! ```bash
//! og-image
//!
//! # Show pipeline steps
//! RUST_LOG=debug og-image
//! ```

use clap::Parser;

use og_image::{AssetPaths, OgImageConfig, OgImageError, generate};

/// Generate the Open Graph link preview image
#[derive(Parser, Debug)]
#[command(name = "og-image")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), OgImageError> {
    let _cli = Cli::parse();

    let root = std::env::current_dir()?;
    let paths = AssetPaths::under(&root);
    let report = generate(&OgImageConfig::MIA, &paths)?;

    println!("{}", report);
    Ok(())
}
