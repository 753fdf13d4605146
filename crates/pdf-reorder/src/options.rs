use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "reordered.pdf";

/// Reorder run configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    // Files
    pub input: Option<PathBuf>,
    pub output: PathBuf,

    // Working directory
    pub work_dir: Option<PathBuf>,
    pub keep_work_dir: bool,

    // Ordering
    pub back_order: BackOrder,
    pub padding: PaddingMode,

    // Rotate every back side by 180 degrees
    pub rotate_backs: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            work_dir: None,
            keep_work_dir: false,
            back_order: BackOrder::Ascending,
            padding: PaddingMode::DuplicateLast,
            rotate_backs: false,
        }
    }
}

impl ReorderOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ReorderError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// The input path, or a configuration error if none was given
    pub fn input_path(&self) -> Result<&PathBuf> {
        self.input
            .as_ref()
            .ok_or_else(|| ReorderError::Config("Please provide -in <input.pdf>".to_string()))
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let input = self.input_path()?;
        if input.as_os_str().is_empty() {
            return Err(ReorderError::Config("Please provide -in <input.pdf>".to_string()));
        }

        if self.output.as_os_str().is_empty() {
            return Err(ReorderError::Config("Output path is empty".to_string()));
        }

        if self
            .work_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(ReorderError::Config(
                "Working directory path is empty".to_string(),
            ));
        }

        Ok(())
    }
}
