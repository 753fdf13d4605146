//! lopdf object helpers shared by split, merge, rotate and padding

use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// Page Attributes
// =============================================================================

/// Default page dimensions in points (US Letter)
pub(crate) const DEFAULT_PAGE_DIMENSIONS: (i64, i64) = (612, 792);

/// Page attributes that may be inherited from an ancestor Pages node
pub(crate) const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Look up `key` on the page or, failing that, on its ancestors.
pub(crate) fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut node_id = page_id;
    // Bounded walk; a malformed tree may contain a Parent cycle
    for _ in 0..64 {
        let dict = doc.get_dictionary(node_id).ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        node_id = dict.get(b"Parent").and_then(Object::as_reference).ok()?;
    }
    None
}

/// MediaBox of a page, falling back to US Letter
pub(crate) fn page_media_box(doc: &Document, page_id: ObjectId) -> Vec<Object> {
    inherited_attribute(doc, page_id, b"MediaBox")
        .and_then(|obj| match obj {
            Object::Reference(id) => doc.get_object(*id).ok(),
            other => Some(other),
        })
        .and_then(|obj| obj.as_array().ok())
        .cloned()
        .unwrap_or_else(|| {
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(DEFAULT_PAGE_DIMENSIONS.0),
                Object::Integer(DEFAULT_PAGE_DIMENSIONS.1),
            ]
        })
}

/// Effective /Rotate of a page in degrees
pub(crate) fn page_rotation(doc: &Document, page_id: ObjectId) -> i64 {
    match inherited_attribute(doc, page_id, b"Rotate") {
        Some(Object::Integer(degrees)) => *degrees,
        Some(Object::Real(degrees)) => *degrees as i64,
        _ => 0,
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from `source` into `output`, following references.
///
/// `cache` maps source ids to output ids. An id is reserved before its object
/// is copied, so reference cycles (annotation /P back to its page) terminate.
pub(crate) fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary_deep(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary_deep(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary_deep(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

/// Copy one page of `source` into `output` under `parent_id`.
///
/// Inherited attributes are resolved onto the copied page so it no longer
/// depends on the source page tree. Every ancestor of the source page is
/// mapped to `parent_id` in `cache`, which keeps the source tree itself out of
/// the output.
pub(crate) fn import_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    parent_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let mut ancestor = source
        .get_dictionary(page_id)?
        .get(b"Parent")
        .and_then(Object::as_reference)
        .ok();
    while let Some(id) = ancestor {
        if cache.insert(id, parent_id).is_some() {
            break;
        }
        ancestor = source
            .get_dictionary(id)
            .and_then(|dict| dict.get(b"Parent"))
            .and_then(Object::as_reference)
            .ok();
    }

    let new_page_id = *cache
        .entry(page_id)
        .or_insert_with(|| output.new_object_id());

    let page_dict = source.get_dictionary(page_id)?;
    let mut new_page = Dictionary::new();
    for (key, value) in page_dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_page.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }

    for key in INHERITABLE_KEYS {
        if new_page.has(key) {
            continue;
        }
        if let Some(value) = inherited_attribute(source, page_id, key) {
            let value = value.clone();
            new_page.set(key.to_vec(), copy_object_deep(output, source, &value, cache)?);
        }
    }

    new_page.set("Parent", Object::Reference(parent_id));
    output
        .objects
        .insert(new_page_id, Object::Dictionary(new_page));

    Ok(new_page_id)
}

// =============================================================================
// Document Assembly
// =============================================================================

/// Write the Pages node and Catalog for `page_ids` and set the trailer Root
pub(crate) fn finish_page_tree(doc: &mut Document, pages_id: ObjectId, page_ids: &[ObjectId]) {
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    let count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
}

/// Build a one-page document holding an empty page with the given MediaBox
pub(crate) fn blank_page_document(media_box: &[Object]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set("MediaBox", Object::Array(media_box.to_vec()));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));
    let page_id = doc.add_object(page_dict);

    finish_page_tree(&mut doc, pages_id, &[page_id]);
    doc
}
