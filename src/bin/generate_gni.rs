use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mtcbuild::manifest::{ManifestGenerator, SOURCE_EXTENSION};

#[derive(Parser)]
#[command(name = "generate-gni")]
#[command(about = "Scan a directory tree for .cpp sources and write a sources.gni listing")]
struct Cli {
    /// Root directory to scan; the listing is written at <root>/sources.gni
    root: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let generator = ManifestGenerator::new(&cli.root, SOURCE_EXTENSION);
    generator.write_manifest()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("Caused by: {}", err);
            source = err.source();
        }

        std::process::exit(1);
    }
}
