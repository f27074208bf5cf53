//! Shared-tree destination layout.
//!
//! Build outputs from every component land in a `10-common` directory that
//! sits a fixed number of levels above the component's build directory. The
//! helpers here resolve a source artifact to that shared root and assemble
//! the variant-specific destination directory.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use crate::variant::BuildVariant;

/// Subtree under the shared root where published binaries go.
pub const BIN_SUBTREE: &str = "10-common/version/bin";

/// Subtree under the shared root where published libraries go.
pub const LIB_SUBTREE: &str = "10-common/lib/locallib/linux64";

/// How many levels above a resolved source path the shared root sits.
/// The parent directory counts as the first ancestor.
pub const COMMON_ANCESTOR_DEPTH: usize = 5;

/// Walk up from `source` to its nth ancestor (parent = 1).
///
/// `source` must already be canonical; relative paths run out of ancestors
/// long before the shared root is reached.
pub fn nth_ancestor(source: &Path, depth: usize) -> Result<&Path> {
    source.ancestors().nth(depth).ok_or_else(|| {
        anyhow!(
            "{} has fewer than {} ancestor directories",
            source.display(),
            depth
        )
    })
}

/// Destination directory for a published artifact:
/// `<source's 5th ancestor>/<subtree>/<debug|release>`.
pub fn publish_dir(source: &Path, subtree: &str, variant: BuildVariant) -> Result<PathBuf> {
    let root = nth_ancestor(source, COMMON_ANCESTOR_DEPTH)?;
    Ok(root.join(subtree).join(variant.as_str()))
}
