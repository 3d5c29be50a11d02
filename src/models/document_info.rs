use derive_builder::Builder;
use serde::Serialize;

/// File metadata for one compared document.
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
#[builder(build_fn(skip))]
pub struct DocumentInfo {
    pub name: String,
    pub path: String,
    pub size: u64,
    #[builder(default)]
    pub date: Option<String>,
    #[builder(default)]
    pub sha1: Option<String>,
    #[builder(default)]
    pub sha256: Option<String>,
    /// Set when the file was not valid UTF-8 and had to be decoded lossily
    #[builder(default)]
    pub lossy_decoding: bool,
}

impl DocumentInfoBuilder {
    pub fn build(&self) -> Result<DocumentInfo, String> {
        Ok(DocumentInfo {
            name: self.name.clone().ok_or("Missing field: name")?,
            path: self.path.clone().ok_or("Missing field: path")?,
            size: self.size.ok_or("Missing field: size")?,
            date: self.date.clone().flatten(),
            sha1: self.sha1.clone().flatten(),
            sha256: self.sha256.clone().flatten(),
            lossy_decoding: self.lossy_decoding.unwrap_or_default(),
        })
    }
}
