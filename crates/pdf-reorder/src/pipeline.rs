//! Duplex reordering pipeline
//!
//! This module drives one reorder run:
//! 1. Split the source into single-page files in a working directory
//! 2. Check the split files against the page numbers in their names
//! 3. Pad an odd page count
//! 4. Merge the pages in duplex order
//! 5. Rotate the back sides if requested

use crate::io::load_pdf;
use crate::merge::merge_to_file;
use crate::naming::{PageFile, scan_page_files};
use crate::options::ReorderOptions;
use crate::order::{apply_order, back_side_positions, compute_merge_order, padded_count, sheets};
use crate::pad::pad_page_list;
use crate::rotate::rotate_pages;
use crate::split::split_document;
use crate::types::*;
use crate::workspace::WorkDir;
use std::path::{Path, PathBuf};

/// Main reorder function
pub async fn reorder(options: &ReorderOptions) -> Result<ReorderReport> {
    options.validate()?;

    let options = options.clone();

    tokio::task::spawn_blocking(move || reorder_sync(&options)).await?
}

/// Compute the sheet mapping for the input without writing anything
pub async fn plan(options: &ReorderOptions) -> Result<ReorderPlan> {
    options.validate()?;

    let doc = load_pdf(options.input_path()?).await?;
    let source_pages = doc.get_pages().len();
    if source_pages == 0 {
        return Err(ReorderError::NoPages);
    }

    let output_pages = padded_count(source_pages);
    Ok(ReorderPlan {
        source_pages,
        output_pages,
        needs_padding: output_pages != source_pages,
        sheets: sheets(source_pages, options.back_order),
        rotated_positions: rotated_positions(options, output_pages),
    })
}

fn rotated_positions(options: &ReorderOptions, output_pages: usize) -> Vec<u32> {
    if options.rotate_backs {
        back_side_positions(output_pages)
    } else {
        Vec::new()
    }
}

fn reorder_sync(options: &ReorderOptions) -> Result<ReorderReport> {
    let input = options.input_path()?;
    let work_dir = WorkDir::acquire(options.work_dir.as_deref(), options.keep_work_dir)?;

    // Split input into single pages
    let split = split_document(input, work_dir.path())?;

    let page_files = check_split_files(split, work_dir.path())?;
    if page_files.is_empty() {
        return Err(ReorderError::NoPages);
    }

    let mut pages: Vec<PathBuf> = page_files.into_iter().map(|file| file.path).collect();
    let source_pages = pages.len();

    // Ensure even number of pages for the duplex pattern
    if source_pages % 2 != 0 {
        log::warn!(
            "PDF has an odd number of pages ({}). Adding a padding page at the end to keep sheets paired.",
            source_pages
        );
    }
    let padding_page = pad_page_list(&mut pages, work_dir.path(), options.padding)?;

    let order = compute_merge_order(pages.len(), options.back_order);
    let ordered = apply_order(&pages, &order)?;

    let merged_pages = merge_to_file(&ordered, &options.output)?;
    if merged_pages != ordered.len() {
        return Err(ReorderError::Merge(format!(
            "expected {} pages in {} but wrote {}",
            ordered.len(),
            options.output.display(),
            merged_pages
        )));
    }

    let rotated = rotated_positions(options, merged_pages);
    if !rotated.is_empty() {
        rotate_pages(
            &options.output,
            &options.output,
            Rotation::Clockwise180,
            &rotated,
        )?;
    }

    Ok(ReorderReport {
        source_pages,
        output_pages: merged_pages,
        padding_page,
        sheets: sheets(pages.len(), options.back_order),
        rotated_positions: rotated,
        output: options.output.clone(),
    })
}

/// Check the pages written by the split against the page files found on disk.
///
/// Every split file must be found with the number it was written as. Other
/// numbered PDFs in the directory (left over from earlier runs, or the input
/// itself) are ignored.
fn check_split_files(mut split: Vec<PageFile>, dir: &Path) -> Result<Vec<PageFile>> {
    let scanned = scan_page_files(dir)?;

    for file in &split {
        if !scanned.contains(file) {
            return Err(ReorderError::Split(format!(
                "page {} was written to {} but is not in {} under that number",
                file.number,
                file.path.display(),
                dir.display()
            )));
        }
    }

    let ignored = scanned.len().saturating_sub(split.len());
    if ignored > 0 {
        log::warn!(
            "Ignoring {} page files in {} not written by this run",
            ignored,
            dir.display()
        );
    }

    split.sort_by_key(|file| file.number);
    Ok(split)
}
