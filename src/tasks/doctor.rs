use crate::error::BuildError;
use crate::toolchain::Toolchain;

/// Verify the toolchain is present and runnable before any phase
/// touches the filesystem.
pub fn run(toolchain: &Toolchain) -> Result<(), BuildError> {
    let binary = toolchain.binary();

    if which::which(binary).is_err() {
        eprintln!("[FAIL] missing `{binary}` in PATH");
        return Err(BuildError::ToolchainMissing { binary });
    }

    match toolchain.probe_command().status() {
        Ok(status) if status.success() => {
            eprintln!("[OK] {binary}");
            Ok(())
        }
        _ => {
            eprintln!("[FAIL] `{binary}` found but did not run cleanly");
            Err(BuildError::ToolchainMissing { binary })
        }
    }
}
