use anyhow::{Context, Result, bail};
use log::warn;
use std::fs;
use std::path::Path;

use crate::models::{DocumentInfo, DocumentInfoBuilder};
use crate::utils::file::{display_name, get_creation_date, is_binary_content};
use crate::utils::hash::{calculate_sha1, calculate_sha256};

/// A document read from disk, ready for comparison.
#[derive(Debug, Clone)]
pub struct Document {
    pub info: DocumentInfo,
    pub text: String,
}

/// Read a text document and collect its file metadata.
///
/// Binary files are rejected. Invalid UTF-8 is decoded lossily and flagged in
/// the returned `DocumentInfo`.
pub fn load_document(path: &Path) -> Result<Document> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }

    let buffer = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if is_binary_content(&buffer) {
        bail!("{} looks like a binary file", path.display());
    }

    let mut info_builder = DocumentInfoBuilder::default();
    info_builder
        .name(display_name(path))
        .path(path.to_string_lossy().to_string())
        .size(metadata.len())
        .date(get_creation_date(&metadata))
        .sha1(Some(calculate_sha1(&buffer)))
        .sha256(Some(calculate_sha256(&buffer)));

    let text = match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => {
            warn!("{} is not valid UTF-8, decoding lossily", path.display());
            info_builder.lossy_decoding(true);
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    let info = info_builder.build().map_err(anyhow::Error::msg)?;

    Ok(Document { info, text })
}
