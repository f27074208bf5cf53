//! Generated source listings for the downstream GN build.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name of the generated listing, written at the scanned root.
pub const MANIFEST_FILE: &str = "sources.gni";

/// Extension of the source files the downstream build consumes.
pub const SOURCE_EXTENSION: &str = "cpp";

pub struct ManifestGenerator {
    root: PathBuf,
    extension: String,
}

impl ManifestGenerator {
    pub fn new(root: impl AsRef<Path>, extension: &str) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: extension.to_string(),
        }
    }

    /// Discover every matching source file under the root, in traversal
    /// order. Symlinks are not followed; hidden directories are not skipped.
    pub fn discover_sources(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(anyhow!(
                "Source root is not a directory: {}",
                self.root.display()
            ));
        }

        let mut sources = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry
                .with_context(|| format!("Failed to walk {}", self.root.display()))?;
            let path = entry.path();
            if path.is_file()
                && path
                    .extension()
                    .map_or(false, |ext| ext == self.extension.as_str())
            {
                sources.push(path.to_path_buf());
            }
        }

        Ok(sources)
    }

    /// Write the listing at `<root>/sources.gni`, overwriting any previous
    /// one, and return its path.
    pub fn write_manifest(&self) -> Result<PathBuf> {
        let sources = self.discover_sources()?;
        let manifest_path = self.root.join(MANIFEST_FILE);

        fs::write(&manifest_path, render_manifest(&sources)).with_context(|| {
            format!("Failed to write manifest to {}", manifest_path.display())
        })?;

        println!(
            "Generated {} ({} sources)",
            manifest_path.display(),
            sources.len()
        );

        Ok(manifest_path)
    }
}

/// Render the GN fragment: one quoted forward-slash path per line, bracketed
/// by the `all_sources` assignment.
fn render_manifest(sources: &[PathBuf]) -> String {
    let mut out = String::from("all_sources = [\n");
    for path in sources {
        out.push_str(&format!("\"{}\",\n", to_posix(path)));
    }
    out.push_str("]\n");
    out
}

/// Forward-slash rendering of a path, regardless of host separator.
fn to_posix(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
