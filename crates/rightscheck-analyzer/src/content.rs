//! Resolving an upload into analysis content

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Kind of uploaded media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Still image
    Image,
    /// Text article; analyzed by its contents
    Article,
    /// Video clip
    Video,
}

impl FileType {
    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "IMAGE",
            FileType::Article => "ARTICLE",
            FileType::Video => "VIDEO",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IMAGE" => Ok(FileType::Image),
            "ARTICLE" => Ok(FileType::Article),
            "VIDEO" => Ok(FileType::Video),
            other => Err(format!(
                "Unknown file type '{}'. Expected IMAGE, ARTICLE or VIDEO",
                other
            )),
        }
    }
}

/// Metadata of an uploaded item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDescriptor {
    /// Original file name
    pub file_name: String,

    /// Media kind
    pub file_type: FileType,

    /// Free-form content type supplied at upload time
    pub content_type: Option<String>,
}

impl UploadDescriptor {
    /// Create a descriptor without a content type
    pub fn new(file_name: impl Into<String>, file_type: FileType) -> Self {
        Self {
            file_name: file_name.into(),
            file_type,
            content_type: None,
        }
    }

    /// Attach a content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// One-line description of an upload
pub fn describe(upload: &UploadDescriptor) -> String {
    let mut description = base_description(upload);
    if let Some(content_type) = &upload.content_type {
        description.push_str(&format!(", Content type: {}", content_type));
    }
    description
}

fn base_description(upload: &UploadDescriptor) -> String {
    format!(
        "File name: {}, File type: {}",
        upload.file_name, upload.file_type
    )
}

/// Text to analyze for an upload stored at `path`
///
/// Articles are analyzed by their contents when the file exists; everything
/// else is analyzed by its description. Invalid UTF-8 in an article is
/// replaced rather than rejected. An article that exists but cannot be read
/// falls back to the description without its content type.
pub fn content_for_analysis(upload: &UploadDescriptor, path: Option<&Path>) -> String {
    let path = match path {
        Some(path) if path.exists() => path,
        _ => return describe(upload),
    };

    if upload.file_type != FileType::Article {
        return describe(upload);
    }

    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Error reading file {}: {}", path.display(), e);
            base_description(upload)
        }
    }
}
