use clap::Parser;

/// Builds the Server release artifact in three ordered phases:
/// restore dependencies, publish the project, package the output
/// into a gzip tar archive under `artifacts/`.
#[derive(Parser, Debug)]
#[command(name = "distbuild")]
#[command(about = "Restore, publish, and package the Server host application")]
pub struct Cli {
    /// Skip the dependency-restore phase.
    #[arg(long)]
    pub skip_restore: bool,

    /// Skip the publish phase. Packaging then archives whatever
    /// output directory is already on disk.
    #[arg(long)]
    pub skip_build: bool,

    /// Skip the packaging phase.
    #[arg(long)]
    pub skip_package: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_runs_everything() {
        let cli = Cli::try_parse_from(["distbuild"]).unwrap();
        assert!(!cli.skip_restore);
        assert!(!cli.skip_build);
        assert!(!cli.skip_package);
    }

    #[test]
    fn skip_flags_are_independent_and_order_free() {
        let cli =
            Cli::try_parse_from(["distbuild", "--skip-package", "--skip-restore"]).unwrap();
        assert!(cli.skip_restore);
        assert!(!cli.skip_build);
        assert!(cli.skip_package);

        let cli =
            Cli::try_parse_from(["distbuild", "--skip-restore", "--skip-package"]).unwrap();
        assert!(cli.skip_restore);
        assert!(cli.skip_package);
    }

    #[test]
    fn all_skip_flags_accepted() {
        let cli = Cli::try_parse_from([
            "distbuild",
            "--skip-restore",
            "--skip-build",
            "--skip-package",
        ])
        .unwrap();
        assert!(cli.skip_restore && cli.skip_build && cli.skip_package);
    }

    #[test]
    fn help_short_circuits_parsing() {
        // -h aborts parsing with DisplayHelp even when other flags are present.
        let err = Cli::try_parse_from(["distbuild", "--skip-build", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["distbuild", "--skip-tests"]).is_err());
    }
}
