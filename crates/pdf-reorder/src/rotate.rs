//! Rotate selected pages of a document

use crate::document::page_rotation;
use crate::io::write_pdf;
use crate::types::*;
use lopdf::{Document, Object};
use std::path::Path;

/// Add `rotation` to the /Rotate of each selected 1-based page of `input` and
/// write the result to `output`. `input` and `output` may be the same path.
pub fn rotate_pages(
    input: &Path,
    output: &Path,
    rotation: Rotation,
    selected_pages: &[u32],
) -> Result<()> {
    rotate_inner(input, output, rotation, selected_pages)
        .map_err(|e| e.in_stage(ReorderError::Rotate))
}

fn rotate_inner(
    input: &Path,
    output: &Path,
    rotation: Rotation,
    selected_pages: &[u32],
) -> Result<()> {
    let mut doc = Document::load(input)?;
    let pages = doc.get_pages();

    for number in selected_pages {
        let page_id = *pages.get(number).ok_or_else(|| {
            ReorderError::Rotate(format!(
                "page {} out of range (document has {} pages)",
                number,
                pages.len()
            ))
        })?;

        let degrees = (page_rotation(&doc, page_id) + rotation.degrees()).rem_euclid(360);
        doc.get_dictionary_mut(page_id)?
            .set("Rotate", Object::Integer(degrees));
    }

    write_pdf(&mut doc, output)?;
    log::info!(
        "Rotated {} pages by {} degrees in {}",
        selected_pages.len(),
        rotation.degrees(),
        output.display()
    );
    Ok(())
}
