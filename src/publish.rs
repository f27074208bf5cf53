//! Artifact publication into the shared `10-common` tree.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::{publish_dir, BIN_SUBTREE, LIB_SUBTREE};
use crate::variant::BuildVariant;

/// Publish a built binary into `<shared root>/10-common/version/bin/<variant>/`.
///
/// A file source is copied under its own name, overwriting any previous
/// publication. A directory source is copied as a whole subtree and fails if
/// the subtree was published before.
pub fn publish_binary(source: &Path, variant: BuildVariant) -> Result<()> {
    println!("flag: {}", variant.as_str());

    let source = fs::canonicalize(source)
        .with_context(|| format!("Failed to resolve source path: {}", source.display()))?;
    let dest_dir = publish_dir(&source, BIN_SUBTREE, variant)?;

    copy_artifact(&source, &dest_dir, None)?;

    println!("Copied {} to {}", source.display(), dest_dir.display());
    Ok(())
}

/// Publish a built library into
/// `<shared root>/10-common/lib/locallib/linux64/<variant>/`.
///
/// Only the file-name component of `dest_descriptor` is used; it names the
/// published file. Directory sources go through the plain tree copy and the
/// output name is ignored for them.
pub fn publish_library(
    source: &Path,
    dest_descriptor: &Path,
    variant: BuildVariant,
) -> Result<()> {
    let out_name = dest_descriptor
        .file_name()
        .ok_or_else(|| {
            anyhow!(
                "Destination descriptor has no file name: {}",
                dest_descriptor.display()
            )
        })?
        .to_os_string();

    let source = fs::canonicalize(source)
        .with_context(|| format!("Failed to resolve source path: {}", source.display()))?;
    let dest_dir = publish_dir(&source, LIB_SUBTREE, variant)?;

    if !source.is_dir() {
        let dest_file = dest_file_path(&source, &dest_dir, Some(Path::new(&out_name)));
        println!("{}", dest_file.display());
    }
    copy_artifact(&source, &dest_dir, Some(Path::new(&out_name)))?;

    println!("Copied {} to {}", source.display(), dest_dir.display());
    Ok(())
}

/// Copy `source` into `dest_dir`, creating the directory chain first.
///
/// `out_name` overrides the destination file name for file sources; directory
/// sources always land at `<dest_dir>/<source dir name>`.
fn copy_artifact(source: &Path, dest_dir: &Path, out_name: Option<&Path>) -> Result<()> {
    fs::create_dir_all(dest_dir).with_context(|| {
        format!(
            "Failed to create destination directory: {}",
            dest_dir.display()
        )
    })?;

    if source.is_dir() {
        let dir_name = source
            .file_name()
            .ok_or_else(|| anyhow!("Source directory has no name: {}", source.display()))?;
        copy_tree(source, &dest_dir.join(dir_name))?;
    } else {
        let file_name = match out_name {
            Some(name) => name.as_os_str(),
            None => source
                .file_name()
                .ok_or_else(|| anyhow!("Source file has no name: {}", source.display()))?,
        };
        let dest_file = dest_dir.join(file_name);
        fs::copy(source, &dest_file).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                source.display(),
                dest_file.display()
            )
        })?;
    }

    Ok(())
}

/// Recursively copy a directory tree to `dst`.
///
/// `dst` must not exist; the copy is not merge-safe and a partially copied
/// tree is left in place on failure.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        return Err(anyhow!("Destination already exists: {}", dst.display()));
    }
    fs::create_dir(dst)
        .with_context(|| format!("Failed to create directory: {}", dst.display()))?;

    for entry in fs::read_dir(src)
        .with_context(|| format!("Failed to read directory: {}", src.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        let dest_path = dst.join(entry.file_name());

        if path.is_dir() {
            copy_tree(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    path.display(),
                    dest_path.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Where a file source would land, given its destination directory and an
/// optional output-name override. Exposed for the library publisher's
/// pre-copy path report.
pub fn dest_file_path(source: &Path, dest_dir: &Path, out_name: Option<&Path>) -> PathBuf {
    match out_name {
        Some(name) => dest_dir.join(name),
        None => match source.file_name() {
            Some(name) => dest_dir.join(name),
            None => dest_dir.to_path_buf(),
        },
    }
}
