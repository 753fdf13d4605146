//! Split a document into one file per page

use crate::document::{finish_page_tree, import_page};
use crate::io::write_pdf;
use crate::naming::PageFile;
use crate::types::*;
use lopdf::Document;
use std::collections::HashMap;
use std::path::Path;

/// Write every page of `source` to `<dest_dir>/<stem>_<n>.pdf` (1-based `n`).
///
/// Returns the files written, in page order.
pub fn split_document(source: &Path, dest_dir: &Path) -> Result<Vec<PageFile>> {
    split_inner(source, dest_dir).map_err(|e| e.in_stage(ReorderError::Split))
}

fn split_inner(source: &Path, dest_dir: &Path) -> Result<Vec<PageFile>> {
    let doc = Document::load(source)?;
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page");

    let pages = doc.get_pages();
    let mut written = Vec::with_capacity(pages.len());

    for (&number, &page_id) in &pages {
        let mut single = Document::with_version(doc.version.clone());
        let pages_id = single.new_object_id();
        let mut cache = HashMap::new();
        let new_page = import_page(&mut single, &doc, page_id, pages_id, &mut cache)?;
        finish_page_tree(&mut single, pages_id, &[new_page]);

        let path = dest_dir.join(format!("{}_{}.pdf", stem, number));
        write_pdf(&mut single, &path)?;
        log::debug!("Wrote page {} to {}", number, path.display());

        written.push(PageFile {
            number: number as usize,
            path,
        });
    }

    log::info!("Split {} pages into {}", written.len(), dest_dir.display());
    Ok(written)
}
