//! Scoped working directory for split pages

use crate::types::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEMP_PREFIX: &str = "pdfreorder_";

/// Working directory that lives for one reorder run.
///
/// A caller-supplied directory is created if missing and left in place. A
/// temporary directory is removed when the value is dropped unless `keep` was
/// requested.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
    temp: Option<TempDir>,
    keep: bool,
}

impl WorkDir {
    pub fn acquire(requested: Option<&Path>, keep: bool) -> Result<Self> {
        match requested {
            Some(path) => {
                std::fs::create_dir_all(path).map_err(|source| ReorderError::WorkDir {
                    path: path.to_owned(),
                    source,
                })?;
                log::debug!("Using working directory {}", path.display());
                Ok(Self {
                    path: path.to_owned(),
                    temp: None,
                    keep,
                })
            }
            None => {
                let temp = tempfile::Builder::new()
                    .prefix(TEMP_PREFIX)
                    .tempdir()
                    .map_err(|source| ReorderError::WorkDir {
                        path: std::env::temp_dir(),
                        source,
                    })?;
                log::debug!("Created temporary working directory {}", temp.path().display());
                Ok(Self {
                    path: temp.path().to_owned(),
                    temp: Some(temp),
                    keep,
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        let Some(temp) = self.temp.take() else {
            return;
        };

        if self.keep {
            let path = temp.keep();
            log::info!("Keeping working directory: {}", path.display());
        } else if let Err(e) = temp.close() {
            log::warn!(
                "Failed to remove working directory {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
