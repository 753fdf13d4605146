use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReorderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Working directory {}: {source}", path.display())]
    WorkDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Split failed: {0}")]
    Split(String),
    #[error("Merge failed: {0}")]
    Merge(String),
    #[error("Rotate failed: {0}")]
    Rotate(String),
    #[error("Could not create padding page: {0}")]
    Padding(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages found after split")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, ReorderError>;

impl ReorderError {
    /// Tag an error with the collaborator stage it came from. Errors already
    /// tagged keep their original stage.
    pub(crate) fn in_stage(self, stage: fn(String) -> ReorderError) -> ReorderError {
        match self {
            ReorderError::Split(_)
            | ReorderError::Merge(_)
            | ReorderError::Rotate(_)
            | ReorderError::Padding(_) => self,
            other => stage(other.to_string()),
        }
    }
}

/// Which original page lands on the back of each sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackOrder {
    /// Back of sheet k is page S+k (the back stack is re-flipped in place)
    #[default]
    Ascending,
    /// Back of sheet k is page N+1-k (the back stack is re-inserted reversed)
    Descending,
}

impl fmt::Display for BackOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackOrder::Ascending => f.write_str("ascending"),
            BackOrder::Descending => f.write_str("descending"),
        }
    }
}

/// How an odd page count is brought up to an even one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingMode {
    /// Byte copy of the last page file. Not a real blank page.
    #[default]
    DuplicateLast,
    /// Empty page sized like the last page
    Blank,
}

/// Rotation for pages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i64 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }
}

/// One physical sheet: 1-based page numbers of its two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    pub number: usize,
    pub front: usize,
    pub back: usize,
    pub back_order: BackOrder,
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sheet {:2}: Front=Page {}, Back=Page {} ({})",
            self.number, self.front, self.back, self.back_order
        )
    }
}

/// What a reorder run would do, computed without writing anything
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderPlan {
    /// Pages in the source document
    pub source_pages: usize,
    /// Pages in the output (source pages plus padding)
    pub output_pages: usize,
    /// Whether a padding page is needed
    pub needs_padding: bool,
    pub sheets: Vec<Sheet>,
    /// 1-based output positions that get rotated
    pub rotated_positions: Vec<u32>,
}

/// Result of a completed reorder run
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderReport {
    pub source_pages: usize,
    pub output_pages: usize,
    /// Padding page file, if one was synthesized
    pub padding_page: Option<PathBuf>,
    pub sheets: Vec<Sheet>,
    pub rotated_positions: Vec<u32>,
    pub output: PathBuf,
}
