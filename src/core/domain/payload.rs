//! Payload type.
//!
//! A secret's string value that has passed validation and may be written.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::store::SecretValue;
use crate::core::types::VersionId;
use crate::error::{Error, Result, StoreError};

/// A non-empty secret string, ready to be written verbatim.
pub struct Payload {
    value: Zeroizing<String>,
    version_id: Option<VersionId>,
}

impl Payload {
    /// Validate a store response.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyPayload` when the response has no string
    /// value or the string is empty.
    pub fn from_response(secret: &str, response: SecretValue) -> Result<Self> {
        let SecretValue {
            string,
            binary,
            version_id,
        } = response;

        match string {
            Some(value) if !value.is_empty() => Ok(Self { value, version_id }),
            _ => Err(StoreError::EmptyPayload {
                secret: secret.to_string(),
                binary,
            }
            .into()),
        }
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Always false for a validated payload.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Write the payload to `path`, replacing the contents of whatever
    /// file it names.
    ///
    /// Symlinks are followed, so the file they point to is updated and the
    /// link stays in place. A regular file is replaced through a temporary
    /// file beside it and a rename, so it is either untouched or complete,
    /// and ends up with mode 0600 on Unix. Devices and FIFOs are written
    /// directly, as is a regular file in a directory that doesn't allow new
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns `Error::Write` if any filesystem step fails.
    pub fn write_to(&self, path: &Path) -> Result<usize> {
        let write_err = |source: std::io::Error| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let target = resolve_target(path).map_err(write_err)?;
        if target != path {
            debug!(target = %target.display(), "resolved output path");
        }

        match std::fs::metadata(&target) {
            Ok(meta) if !meta.is_file() => {
                debug!("target is not a regular file, writing in place");
                std::fs::write(&target, self.value.as_bytes()).map_err(write_err)?;
            }
            existing => {
                let dir = match target.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };

                match NamedTempFile::new_in(dir) {
                    Ok(file) => self.replace(file, &target).map_err(write_err)?,
                    Err(e) if existing.is_ok() && e.kind() == ErrorKind::PermissionDenied => {
                        debug!(dir = %dir.display(), "directory not writable, overwriting in place");
                        self.overwrite(&target).map_err(write_err)?;
                    }
                    Err(e) => return Err(write_err(e)),
                }
            }
        }

        Ok(self.value.len())
    }

    /// Stage the payload in `file` and rename it over `target`.
    fn replace(&self, mut file: NamedTempFile, target: &Path) -> std::io::Result<()> {
        debug!(tmp = %file.path().display(), "staging payload");

        file.write_all(self.value.as_bytes())?;
        file.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        file.persist(target).map_err(|e| e.error)?;
        Ok(())
    }

    /// Truncate and rewrite an existing regular file.
    fn overwrite(&self, target: &Path) -> std::io::Result<()> {
        let mut file = OpenOptions::new().write(true).truncate(true).open(target)?;
        file.write_all(self.value.as_bytes())?;
        file.sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}

/// The file `path` actually names: symlinks resolved, including a dangling
/// link whose target doesn't exist yet.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == ErrorKind::NotFound => match std::fs::read_link(path) {
            Ok(link) => Ok(path.parent().unwrap_or(Path::new("")).join(link)),
            Err(_) => Ok(path.to_path_buf()),
        },
        Err(e) => Err(e),
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Payload")
            .field("len", &self.value.len())
            .field("version_id", &self.version_id)
            .finish()
    }
}
