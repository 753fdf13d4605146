//! Document I/O

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Blocking save used by the collaborators, which already run off the runtime
pub(crate) fn write_pdf(doc: &mut Document, path: &Path) -> Result<()> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    std::fs::write(path, writer)?;
    Ok(())
}
