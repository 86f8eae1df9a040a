//! Revert marker repository
//!
//! One commit hash per project, stored as `<project>/LAST_REVISION` followed
//! by a newline. Each deploy overwrites it; there is no history.

use std::fs;
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::value_objects::CommitHash;
use crate::error::{ManageError, ManageResult};

pub const MARKER_FILE: &str = "LAST_REVISION";

/// Mode of a newly created marker; the deploying user must be able to read it
#[cfg(unix)]
const MARKER_MODE: u32 = 0o644;

/// The revert marker of a single project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionMarker {
    path: PathBuf,
}

impl RevisionMarker {
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            path: project_dir.join(MARKER_FILE),
        }
    }

    /// Read the recorded hash.
    ///
    /// A missing, empty or non-hex marker is reported as `RevisionMarker`.
    pub fn read(&self) -> ManageResult<CommitHash> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => self.error("no deployment has been recorded yet"),
            _ => ManageError::Io(e),
        })?;

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(self.error("marker is empty"));
        }
        CommitHash::parse(trimmed)
            .ok_or_else(|| self.error(&format!("'{trimmed}' is not a commit hash")))
    }

    /// Replace the marker atomically (temp file in the same directory, then rename)
    pub fn write(&self, hash: &CommitHash) -> ManageResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        writeln!(tmp, "{hash}")?;
        self.match_permissions(tmp.as_file())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| ManageError::Io(e.error))?;

        tracing::debug!(path = %self.path.display(), %hash, "revert marker written");
        Ok(())
    }

    /// Temp files start as 0600; keep the previous marker's mode, or 0644
    #[cfg(unix)]
    fn match_permissions(&self, file: &fs::File) -> ManageResult<()> {
        use std::os::unix::fs::PermissionsExt;

        let mode = match fs::metadata(&self.path) {
            Ok(existing) => existing.permissions().mode() & 0o7777,
            Err(_) => MARKER_MODE,
        };
        file.set_permissions(fs::Permissions::from_mode(mode))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn match_permissions(&self, _file: &fs::File) -> ManageResult<()> {
        Ok(())
    }

    fn error(&self, reason: &str) -> ManageError {
        ManageError::RevisionMarker {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}
