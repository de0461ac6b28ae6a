use std::fs::{self, File};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::config::{self, BuildConfig};
use crate::error::BuildError;

/// Bundle the publish output into `artifacts/server.tar.gz`, rooted in
/// the archive at `server/<host-os>/`.
///
/// `published_this_run` is false when the publish phase was skipped; the
/// existing output directory is then archived as-is, with a warning.
pub fn run(config: &BuildConfig, published_this_run: bool) -> Result<(), BuildError> {
    if !config.publish_dir.is_dir() {
        eprintln!(
            "[warn] no publish output at {} (was the publish phase skipped?)",
            config.publish_dir.display()
        );
        return Err(BuildError::MissingOutput(config.publish_dir.clone()));
    }
    if !published_this_run {
        eprintln!("[warn] packaging output from a previous run; contents may be stale");
    }

    println!(
        "Packaging {} -> {}",
        config.publish_dir.display(),
        config.archive_path.display()
    );

    fs::create_dir_all(&config.artifacts_dir)?;
    write_archive(&config.publish_dir, &config.archive_path, &archive_root())?;

    eprintln!("[ok] package");
    Ok(())
}

/// Archive-internal root: `server/<host-os-name>`.
pub fn archive_root() -> String {
    format!("{}/{}", config::ARCHIVE_PREFIX, std::env::consts::OS)
}

/// Write a gzip tar of the whole `src` tree to `dest`, with every entry
/// placed under `root`. An existing archive at `dest` is truncated.
pub fn write_archive(src: &Path, dest: &Path, root: &str) -> Result<(), BuildError> {
    let file = File::create(dest)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_dir_all(root, src)?;
    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn entry_paths(archive: &Path) -> Vec<String> {
        let file = File::open(archive).unwrap();
        let mut ar = tar::Archive::new(GzDecoder::new(file));
        ar.entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn archive_contains_the_whole_tree_under_the_root() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("publish");
        fs::create_dir_all(out.join("runtimes/unix")).unwrap();
        fs::write(out.join("Server.dll"), b"bin").unwrap();
        fs::write(out.join("runtimes/unix/lib.so"), b"lib").unwrap();

        let dest = tmp.path().join("server.tar.gz");
        write_archive(&out, &dest, "server/linux").unwrap();

        let paths = entry_paths(&dest);
        assert!(paths.iter().all(|p| p.starts_with("server/linux")));
        assert!(paths.iter().any(|p| p == "server/linux/Server.dll"));
        assert!(paths
            .iter()
            .any(|p| p == "server/linux/runtimes/unix/lib.so"));
    }

    #[test]
    fn archive_round_trips_file_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("publish");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("app.json"), b"{\"ok\":true}").unwrap();

        let dest = tmp.path().join("server.tar.gz");
        write_archive(&out, &dest, "server/linux").unwrap();

        let file = File::open(&dest).unwrap();
        let mut ar = tar::Archive::new(GzDecoder::new(file));
        let mut found = false;
        for entry in ar.entries().unwrap() {
            let mut entry = entry.unwrap();
            let is_match = entry.path().unwrap().ends_with("app.json");
            if is_match {
                let mut body = String::new();
                entry.read_to_string(&mut body).unwrap();
                assert_eq!(body, "{\"ok\":true}");
                found = true;
            }
        }
        assert!(found);
    }

    #[test]
    fn existing_archive_is_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("publish");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("new.txt"), b"new").unwrap();

        let dest = tmp.path().join("server.tar.gz");
        fs::write(&dest, b"stale bytes that are not a tar").unwrap();
        write_archive(&out, &dest, "server/linux").unwrap();

        let paths = entry_paths(&dest);
        assert!(paths.iter().any(|p| p == "server/linux/new.txt"));
    }

    #[test]
    fn packaging_missing_output_is_an_explicit_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = crate::config::BuildConfig::at_root(tmp.path());

        let err = run(&cfg, false).unwrap_err();
        assert!(matches!(err, BuildError::MissingOutput(_)));
        assert!(!cfg.archive_path.exists());
    }

    #[test]
    fn packaging_a_stale_tree_still_produces_the_archive() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = crate::config::BuildConfig::at_root(tmp.path());
        fs::create_dir_all(&cfg.publish_dir).unwrap();
        fs::write(cfg.publish_dir.join("old.dll"), b"old").unwrap();

        run(&cfg, false).unwrap();
        let paths = entry_paths(&cfg.archive_path);
        let root = archive_root();
        assert!(paths.iter().any(|p| *p == format!("{root}/old.dll")));
    }
}
