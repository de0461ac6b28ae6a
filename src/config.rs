use std::path::{Path, PathBuf};

/// Name of the host application's entry project under `src/`.
pub const PROJECT: &str = "Server";

/// Target framework passed to the toolchain's publish subcommand.
pub const TARGET_FRAMEWORK: &str = "net8.0";

/// Top-level directory inside the package archive; the host OS name
/// is appended below it.
pub const ARCHIVE_PREFIX: &str = "server";

/// Immutable per-run paths, computed once at process entry and passed
/// by reference into each phase.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Repository root, resolved from this tool's own location rather
    /// than the caller's working directory.
    pub root: PathBuf,
    /// `<root>/artifacts`
    pub artifacts_dir: PathBuf,
    /// `<root>/artifacts/publish` — the publish output tree, wiped and
    /// rebuilt on every non-skipped publish.
    pub publish_dir: PathBuf,
    /// `<root>/artifacts/server.tar.gz` — the final package, overwritten
    /// on every non-skipped packaging.
    pub archive_path: PathBuf,
    /// `<root>/src` — where restore resolves dependencies.
    pub restore_dir: PathBuf,
    /// `<root>/src/Server` — working directory for the publish subcommand.
    pub project_dir: PathBuf,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::at_root(Path::new(env!("CARGO_MANIFEST_DIR")))
    }

    pub fn at_root(root: &Path) -> Self {
        let artifacts_dir = root.join("artifacts");
        let restore_dir = root.join("src");
        Self {
            root: root.to_path_buf(),
            publish_dir: artifacts_dir.join("publish"),
            archive_path: artifacts_dir.join(format!("{ARCHIVE_PREFIX}.tar.gz")),
            artifacts_dir,
            project_dir: restore_dir.join(PROJECT),
            restore_dir,
        }
    }
}
