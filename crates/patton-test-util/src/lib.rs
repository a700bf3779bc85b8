//! Shared test utilities for the patton acceptance harness.
//!
//! The harness's own tests need subprocesses with known behaviour. A
//! [`FakeTool`] is a throwaway `#!/bin/sh` executable in a temp directory
//! standing in for the tool under test.

#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A throwaway executable standing in for the tool under test.
#[derive(Debug)]
pub struct FakeTool {
    /// Keeps the backing directory alive while the tool is in use.
    #[allow(dead_code)]
    dir: TempDir,
    path: Utf8PathBuf,
}

impl FakeTool {
    /// Writes `body` under a `#!/bin/sh` shebang and marks it executable.
    ///
    /// # Panics
    ///
    /// Panics on filesystem trouble; these helpers run in tests only.
    pub fn from_script(body: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("fake-tool");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake tool script");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("mark fake tool executable");
        }

        let path = Utf8PathBuf::from_path_buf(path).expect("temp path should be UTF-8");
        Self { dir, path }
    }

    /// Emits the given lines on stdout and exits zero.
    pub fn emitting(lines: &[&str]) -> Self {
        Self::exiting(0, lines)
    }

    /// Emits the given lines on stdout, then exits with `code`.
    pub fn exiting(code: i32, lines: &[&str]) -> Self {
        let mut body = String::new();
        for line in lines {
            body.push_str(&format!("printf '%s\\n' '{line}'\n"));
        }
        body.push_str(&format!("exit {code}"));
        Self::from_script(&body)
    }

    /// Copies stdin through to stdout, exiting zero at end-of-input.
    pub fn echoing_stdin() -> Self {
        Self::from_script("cat")
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
