use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Phases that can fail through a toolchain subprocess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Restore,
    Publish,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Restore => write!(f, "restore"),
            Phase::Publish => write!(f, "publish"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    /// The toolchain binary is absent or not runnable. Exit code 1.
    #[error("`{binary}` not found or not runnable; install the toolchain and retry")]
    ToolchainMissing { binary: &'static str },

    /// A toolchain subprocess returned nonzero; its exit code is propagated.
    #[error("{phase} failed with {status}")]
    PhaseFailed { phase: Phase, status: ExitStatus },

    /// Packaging was requested but there is no publish output on disk.
    #[error("nothing to package: publish output missing at {}", .0.display())]
    MissingOutput(PathBuf),

    /// Filesystem or archival failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BuildError {
    /// Process exit status for this failure. Subprocess failures keep the
    /// child's code; everything else maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            BuildError::PhaseFailed { status, .. } => status
                .code()
                .and_then(|c| u8::try_from(c).ok())
                .unwrap_or(1),
            BuildError::ToolchainMissing { .. }
            | BuildError::MissingOutput(_)
            | BuildError::Io(_) => 1,
        }
    }
}
