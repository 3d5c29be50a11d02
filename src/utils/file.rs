use chrono::{DateTime, Utc};
use content_inspector::{ContentType, inspect};
use std::fs;
use std::path::Path;

/// Get the creation date of a file as an RFC3339 string.
///
/// Falls back to the modification time on platforms without creation times.
pub fn get_creation_date(metadata: &fs::Metadata) -> Option<String> {
    let time = metadata.created().or_else(|_| metadata.modified()).ok()?;
    Some(DateTime::<Utc>::from(time).to_rfc3339())
}

/// True when the content looks like binary data rather than text.
pub fn is_binary_content(buffer: &[u8]) -> bool {
    inspect(buffer) == ContentType::BINARY
}

/// File name of a path, or the whole path when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
