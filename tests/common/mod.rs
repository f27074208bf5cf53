//! Shared fixtures for the build-helper CLI tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Component build directory nested deep enough that the shared tree's
/// ancestor offset (five levels above the artifact) stays inside the fixture.
pub const BUILD_DIR: &str = "proj/20-mtcbb/httpserver/out/linux64";

/// A temporary project tree mimicking the orchestrator's checkout layout.
#[allow(dead_code)]
pub struct BuildTree {
    temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl BuildTree {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory for tests");
        // Canonicalize so paths compare equal with the binaries' resolved output.
        let root = temp
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory");
        fs::create_dir_all(root.join(BUILD_DIR)).expect("Failed to create build directory");
        Self { temp, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a file artifact in the component build directory.
    pub fn artifact_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join(BUILD_DIR).join(name);
        fs::write(&path, contents).expect("Failed to write artifact file");
        path
    }

    /// Create a directory artifact with a couple of nested files.
    pub fn artifact_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.join(BUILD_DIR).join(name);
        fs::create_dir_all(dir.join("sub")).expect("Failed to create artifact directory");
        fs::write(dir.join("inner.txt"), b"inner").expect("Failed to write artifact file");
        fs::write(dir.join("sub/deep.txt"), b"deep").expect("Failed to write artifact file");
        dir
    }

    /// The shared root the publishers resolve: the build directory's 5th
    /// ancestor, i.e. `<root>/proj`.
    pub fn common_root(&self) -> PathBuf {
        self.root.join("proj")
    }

    pub fn bin_dest(&self, variant: &str) -> PathBuf {
        self.common_root()
            .join("10-common/version/bin")
            .join(variant)
    }

    pub fn lib_dest(&self, variant: &str) -> PathBuf {
        self.common_root()
            .join("10-common/lib/locallib/linux64")
            .join(variant)
    }
}
