//! Toolchain command construction.
//!
//! Commands are assembled as explicit program + argument lists so the
//! per-platform branches can be checked without spawning anything.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config;

/// Host operating-system family, detected once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    pub fn host() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Returns the toolchain binary name for this platform.
    pub fn toolchain_binary(self) -> &'static str {
        match self {
            Platform::Windows => "dotnet.exe",
            Platform::Linux | Platform::MacOs => "dotnet",
        }
    }

    /// Runtime identifier appended to restore, where one is required.
    /// Only macOS restores against an explicit runtime.
    pub fn restore_runtime(self) -> Option<&'static str> {
        match self {
            Platform::MacOs => Some("osx-x64"),
            Platform::Linux | Platform::Windows => None,
        }
    }
}

/// Builder for invocations of the external `dotnet` toolchain.
#[derive(Clone, Copy, Debug)]
pub struct Toolchain {
    platform: Platform,
}

impl Toolchain {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn binary(&self) -> &'static str {
        self.platform.toolchain_binary()
    }

    /// Bare invocation with all output discarded; used as the presence probe.
    pub fn probe_command(&self) -> Command {
        let mut cmd = Command::new(self.binary());
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
        cmd
    }

    /// `dotnet restore [--runtime <rid>]`, run from the source tree root.
    pub fn restore_command(&self, restore_dir: &Path) -> Command {
        let mut cmd = Command::new(self.binary());
        cmd.arg("restore");
        if let Some(rid) = self.platform.restore_runtime() {
            cmd.args(["--runtime", rid]);
        }
        cmd.current_dir(restore_dir);
        cmd
    }

    /// `dotnet publish -o <out> -f <tfm>`, run from the project directory.
    pub fn publish_command(&self, publish_dir: &Path, project_dir: &Path) -> Command {
        let mut cmd = Command::new(self.binary());
        cmd.arg("publish");
        cmd.arg("-o").arg(publish_dir);
        cmd.args(["-f", config::TARGET_FRAMEWORK]);
        cmd.current_dir(project_dir);
        cmd
    }
}
