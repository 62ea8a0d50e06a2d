use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Child, Command};

#[cfg(windows)]
pub const DEFAULT_VIEWER: &str = "mspaint";
#[cfg(target_os = "macos")]
pub const DEFAULT_VIEWER: &str = "open";
#[cfg(not(any(windows, target_os = "macos")))]
pub const DEFAULT_VIEWER: &str = "xdg-open";

/// Launch `program` (or the platform default) with `path` as its only argument.
/// Does not wait for the viewer to exit.
pub fn open(program: Option<&str>, path: &Path) -> Result<Child> {
    let program = program.unwrap_or(DEFAULT_VIEWER);
    Command::new(program)
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to launch viewer '{}'", program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_viewer_is_an_error() {
        let err = open(Some("bmpline-no-such-viewer"), Path::new("line.bmp")).unwrap_err();
        assert!(err.to_string().contains("bmpline-no-such-viewer"));
    }
}
