//! Padding an odd page list up to an even count

use crate::document::{blank_page_document, page_media_box};
use crate::io::write_pdf;
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// File name of the duplicated last page
pub const DUPLICATE_PAGE_NAME: &str = "ZZZ_blank_clone.pdf";

/// File name of the generated blank page
pub const BLANK_PAGE_NAME: &str = "ZZZ_blank_page.pdf";

/// Append a padding page to `pages` if its length is odd.
///
/// Returns the path of the padding page, or `None` when the count was
/// already even.
pub fn pad_page_list(
    pages: &mut Vec<PathBuf>,
    work_dir: &Path,
    mode: PaddingMode,
) -> Result<Option<PathBuf>> {
    if pages.len() % 2 == 0 {
        return Ok(None);
    }

    // Odd count implies at least one page
    let last = pages[pages.len() - 1].clone();
    let padding = match mode {
        PaddingMode::DuplicateLast => {
            let path = work_dir.join(DUPLICATE_PAGE_NAME);
            std::fs::copy(&last, &path)
                .map_err(|e| ReorderError::Padding(format!("{}: {}", path.display(), e)))?;
            path
        }
        PaddingMode::Blank => {
            let path = work_dir.join(BLANK_PAGE_NAME);
            write_blank_like(&last, &path).map_err(|e| e.in_stage(ReorderError::Padding))?;
            path
        }
    };

    pages.push(padding.clone());
    Ok(Some(padding))
}

/// Write a blank page sized like the first page of `template`
fn write_blank_like(template: &Path, path: &Path) -> Result<()> {
    let source = Document::load(template)?;
    let media_box = match source.get_pages().values().next() {
        Some(&page_id) => page_media_box(&source, page_id),
        None => return Err(ReorderError::NoPages),
    };

    let mut blank = blank_page_document(&media_box);
    write_pdf(&mut blank, path)
}
