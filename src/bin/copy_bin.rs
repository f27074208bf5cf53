use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mtcbuild::publish::publish_binary;
use mtcbuild::BuildVariant;

#[derive(Parser)]
#[command(name = "copy-bin")]
#[command(about = "Copy a built binary into the shared 10-common/version/bin tree")]
struct Cli {
    /// Path to the built binary (file or directory)
    source: PathBuf,

    /// Build variant: `debug` selects the debug subfolder, anything else release
    variant: String,
}

fn run(cli: Cli) -> Result<()> {
    publish_binary(&cli.source, BuildVariant::from_arg(&cli.variant))
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
