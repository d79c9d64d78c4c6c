// Fri Jan 16 2026 - Alex

use std::ffi::OsString;
use std::path::PathBuf;

/// Checks whether a command's executable resolves on the search path.
/// Read-only; never fails.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityGate {
    search_path: Option<OsString>,
}

impl AvailabilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve against `paths` (same syntax as `PATH`) instead of the
    /// process environment.
    pub fn with_search_path<S: Into<OsString>>(paths: S) -> Self {
        Self {
            search_path: Some(paths.into()),
        }
    }

    pub fn is_available(&self, command: &str) -> bool {
        match command.split_whitespace().next() {
            Some(program) => self.resolve(program).is_some(),
            None => false,
        }
    }

    pub fn resolve(&self, program: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(program, Some(paths), cwd).ok()
            }
            None => which::which(program).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn make_executable(path: &std::path::Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_missing_executable_is_unavailable() {
        let gate = AvailabilityGate::new();
        assert!(!gate.is_available("definitely-not-an-enum-tool-7f3a --subs-only example.com"));
    }

    #[test]
    fn test_empty_command_is_unavailable() {
        let gate = AvailabilityGate::new();
        assert!(!gate.is_available(""));
        assert!(!gate.is_available("   "));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolves_from_custom_search_path() {
        let dir = tempfile::tempdir().unwrap();
        make_executable(&dir.path().join("fakefinder"));

        let gate = AvailabilityGate::with_search_path(dir.path().as_os_str());
        assert!(gate.is_available("fakefinder -d example.com"));
        assert!(gate.resolve("fakefinder").is_some());
        assert!(!gate.is_available("otherfinder -d example.com"));
    }

    #[cfg(unix)]
    #[test]
    fn test_sh_is_on_default_path() {
        assert!(AvailabilityGate::new().is_available("sh -c true"));
    }
}
