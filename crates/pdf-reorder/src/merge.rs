//! Concatenate documents in a given order

use crate::document::{finish_page_tree, import_page};
use crate::io::write_pdf;
use crate::types::*;
use lopdf::Document;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Merge the pages of `paths`, in order, into a new document.
///
/// The same file may appear more than once; each occurrence contributes its
/// own copy of the pages.
pub fn merge_files(paths: &[PathBuf]) -> Result<Document> {
    merge_inner(paths).map_err(|e| e.in_stage(ReorderError::Merge))
}

/// Merge `paths` and write the result to `output`
pub fn merge_to_file(paths: &[PathBuf], output: &Path) -> Result<usize> {
    let mut merged = merge_files(paths)?;
    let page_count = merged.get_pages().len();
    write_pdf(&mut merged, output).map_err(|e| e.in_stage(ReorderError::Merge))?;
    log::info!(
        "Merged {} files ({} pages) into {}",
        paths.len(),
        page_count,
        output.display()
    );
    Ok(page_count)
}

fn merge_inner(paths: &[PathBuf]) -> Result<Document> {
    if paths.is_empty() {
        return Err(ReorderError::NoPages);
    }

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for path in paths {
        let source = Document::load(path).map_err(|e| {
            ReorderError::Merge(format!("failed to load {}: {}", path.display(), e))
        })?;

        // One cache per source document: ids are only unique within a file
        let mut cache = HashMap::new();
        for &page_id in source.get_pages().values() {
            page_refs.push(import_page(
                &mut output,
                &source,
                page_id,
                pages_id,
                &mut cache,
            )?);
        }
    }

    finish_page_tree(&mut output, pages_id, &page_refs);
    Ok(output)
}
