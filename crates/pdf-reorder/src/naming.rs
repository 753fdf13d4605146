//! Page number recovery from split output file names

use crate::types::*;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `<anything>_<digits>.pdf`, extension case-insensitive
static PAGE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\d+)\.(?i:pdf)$").expect("valid page suffix pattern"));

/// A single-page file and the page number recovered from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    /// 1-based page number in the source document
    pub number: usize,
    pub path: PathBuf,
}

/// Extract the page number embedded in a split output file name.
///
/// Tries `_<digits>.pdf` first, then falls back to the trailing run of digits
/// in the name with its extension removed.
pub fn parse_page_number(file_name: &str) -> Option<usize> {
    if let Some(caps) = PAGE_SUFFIX.captures(file_name) {
        if let Ok(number) = caps[1].parse() {
            return Some(number);
        }
    }

    let stem = Path::new(file_name).file_stem()?.to_str()?;
    let digits_start = stem
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    stem[digits_start..].parse().ok()
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// List the single-page PDFs in `dir`, sorted by page number.
///
/// Subdirectories and non-PDF files are ignored. PDFs whose name carries no
/// page number are skipped with a warning.
pub fn scan_page_files(dir: &Path) -> Result<Vec<PageFile>> {
    let entries = std::fs::read_dir(dir).map_err(|source| ReorderError::WorkDir {
        path: dir.to_owned(),
        source,
    })?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        if !has_pdf_extension(&path) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match parse_page_number(&name) {
            Some(number) => pages.push(PageFile { number, path }),
            None => {
                log::warn!("Could not extract page number from {:?}, skipping file", name);
            }
        }
    }

    pages.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.path.cmp(&b.path)));
    Ok(pages)
}
