use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mtcbuild::publish::publish_library;
use mtcbuild::BuildVariant;

#[derive(Parser)]
#[command(name = "copy-lib")]
#[command(about = "Copy a built library into the shared 10-common/lib tree under a new name")]
struct Cli {
    /// Path to the built library (file or directory)
    source: PathBuf,

    /// Destination descriptor; only its file-name component is used as the output name
    dest: PathBuf,

    /// Build variant: `debug` selects the debug subfolder, anything else release
    variant: String,
}

fn run(cli: Cli) -> Result<()> {
    publish_library(&cli.source, &cli.dest, BuildVariant::from_arg(&cli.variant))
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
