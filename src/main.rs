// ABOUTME: Main entry point for the gsd-deck program.
// ABOUTME: Builds the framework deck and writes it out as a PPTX file.

use clap::Parser;
use gsd_deck::{build_deck, utils, write_pptx, Config};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to write the generated presentation
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let output = cli.output.unwrap_or_else(|| config.output_path.clone());

    match generate(&config, &output) {
        Ok(slide_count) => {
            println!("Presentation saved to: {}", output.display());
            println!("Total slides: {}", slide_count);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn generate(config: &Config, output: &Path) -> gsd_deck::Result<usize> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        utils::validate_directory_writable(parent)?;
    }

    let prs = build_deck(&config.title);
    write_pptx(&prs, output)?;
    Ok(prs.slide_count())
}
