//! Uploaded file validation functions
//!
//! Validators only need the size and declared content type of an upload, so
//! any framework's upload type can be checked by implementing [`Upload`].

use serde::{Deserialize, Serialize};

use crate::status::ValidationResult;

/// What the file validators need to know about an upload
pub trait Upload {
    /// Size in bytes
    fn size(&self) -> u64;

    /// Declared MIME type, e.g. `image/png`
    fn content_type(&self) -> &str;
}

/// Plain owned upload description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadInfo {
    pub size: u64,
    pub content_type: String,
}

impl UploadInfo {
    pub fn new(size: u64, content_type: impl Into<String>) -> Self {
        Self {
            size,
            content_type: content_type.into(),
        }
    }
}

impl Upload for UploadInfo {
    fn size(&self) -> u64 {
        self.size
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }
}

const ONE_MB: u64 = 1_000_000;
const HUNDRED_MB: u64 = 100_000_000;

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/svg+xml"];

const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

const MEDIA_TYPES: &[&str] = &[
    "video/mp4",
    "video/x-msvideo",
    "video/x-ms-wmv",
    "video/quicktime",
    "video/3gpp",
    "video/3gpp2",
    "video/ogg",
    "video/webm",
    "audio/mpeg",
    "audio/mp4",
    "audio/ogg",
    "audio/wav",
    "audio/webm",
];

const SPREADSHEET_TYPES: &[&str] =
    &["application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"];

/// Size ceiling and accepted content types for one kind of upload
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub max_bytes: u64,
    pub size_label: &'static str,
    pub allowed: &'static [&'static [&'static str]],
    pub format_label: &'static str,
}

impl FileRules {
    pub const IMAGE: FileRules = FileRules {
        max_bytes: ONE_MB,
        size_label: "1 MB",
        allowed: &[IMAGE_TYPES],
        format_label: "jpeg, png or svg",
    };

    pub const DOCUMENT: FileRules = FileRules {
        max_bytes: ONE_MB,
        size_label: "1 MB",
        allowed: &[DOCUMENT_TYPES],
        format_label: "pdf, doc, docx, jpeg or png",
    };

    /// Documents plus common video and audio; the format message still
    /// lists only the document formats
    pub const DOCUMENT_MEDIA: FileRules = FileRules {
        max_bytes: HUNDRED_MB,
        size_label: "100 MB",
        allowed: &[DOCUMENT_TYPES, MEDIA_TYPES],
        format_label: "pdf, doc, docx, jpeg or png",
    };

    pub const SPREADSHEET: FileRules = FileRules {
        max_bytes: ONE_MB,
        size_label: "1 MB",
        allowed: &[SPREADSHEET_TYPES],
        format_label: "xlsx",
    };

    pub fn accepts(&self, content_type: &str) -> bool {
        self.allowed
            .iter()
            .any(|group| group.contains(&content_type))
    }
}

/// Check an upload against a set of rules
pub fn validate_file(upload: Option<&dyn Upload>, title: &str, rules: FileRules) -> ValidationResult {
    let upload = match upload {
        Some(upload) if upload.size() > 0 => upload,
        _ => return ValidationResult::failure(format!("Please select {}", title)),
    };

    if upload.size() > rules.max_bytes {
        return ValidationResult::failure(format!(
            "{} should be maximum {}",
            title, rules.size_label
        ));
    }

    if !rules.accepts(upload.content_type()) {
        return ValidationResult::failure(format!(
            "{} should be in {} format",
            title, rules.format_label
        ));
    }

    ValidationResult::success()
}

/// JPEG, PNG or SVG up to 1 MB
pub fn validate_image_file(upload: Option<&dyn Upload>, title: &str) -> ValidationResult {
    validate_file(upload, title, FileRules::IMAGE)
}

/// PDF, DOC, DOCX, JPEG or PNG up to 1 MB
pub fn validate_document_file(upload: Option<&dyn Upload>, title: &str) -> ValidationResult {
    validate_file(upload, title, FileRules::DOCUMENT)
}

/// Document formats plus video/audio up to 100 MB
pub fn validate_document_media_file(upload: Option<&dyn Upload>, title: &str) -> ValidationResult {
    validate_file(upload, title, FileRules::DOCUMENT_MEDIA)
}

/// XLSX only, up to 1 MB
pub fn validate_spreadsheet_file(upload: Option<&dyn Upload>, title: &str) -> ValidationResult {
    validate_file(upload, title, FileRules::SPREADSHEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in for a framework upload type
    struct Multipart {
        bytes: Vec<u8>,
        mime: &'static str,
    }

    impl Upload for Multipart {
        fn size(&self) -> u64 {
            self.bytes.len() as u64
        }

        fn content_type(&self) -> &str {
            self.mime
        }
    }

    #[test]
    fn test_missing_or_empty_upload() {
        assert_eq!(validate_image_file(None, "Logo").message, "Please select Logo");

        let empty = UploadInfo::new(0, "image/png");
        assert_eq!(validate_image_file(Some(&empty), "Logo").message, "Please select Logo");
    }

    #[test]
    fn test_image_rules() {
        let png = UploadInfo::new(512_000, "image/png");
        assert!(validate_image_file(Some(&png), "Logo").is_ok());

        let exact = UploadInfo::new(1_000_000, "image/svg+xml");
        assert!(validate_image_file(Some(&exact), "Logo").is_ok());

        let big = UploadInfo::new(1_000_001, "image/png");
        assert_eq!(validate_image_file(Some(&big), "Logo").message, "Logo should be maximum 1 MB");

        let gif = UploadInfo::new(10, "image/gif");
        assert_eq!(
            validate_image_file(Some(&gif), "Logo").message,
            "Logo should be in jpeg, png or svg format"
        );
    }

    #[test]
    fn test_document_rules() {
        let pdf = Multipart { bytes: vec![0; 2048], mime: "application/pdf" };
        assert!(validate_document_file(Some(&pdf), "CV").is_ok());

        let mp4 = UploadInfo::new(2048, "video/mp4");
        assert_eq!(
            validate_document_file(Some(&mp4), "CV").message,
            "CV should be in pdf, doc, docx, jpeg or png format"
        );
    }

    #[test]
    fn test_document_media_rules() {
        let mp4 = UploadInfo::new(50_000_000, "video/mp4");
        assert!(validate_document_media_file(Some(&mp4), "Attachment").is_ok());

        let docx = UploadInfo::new(
            10,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        );
        assert!(validate_document_media_file(Some(&docx), "Attachment").is_ok());

        let huge = UploadInfo::new(100_000_001, "video/mp4");
        assert_eq!(
            validate_document_media_file(Some(&huge), "Attachment").message,
            "Attachment should be maximum 100 MB"
        );

        let flv = UploadInfo::new(10, "video/x-flv");
        assert_eq!(
            validate_document_media_file(Some(&flv), "Attachment").message,
            "Attachment should be in pdf, doc, docx, jpeg or png format"
        );
    }

    #[test]
    fn test_spreadsheet_rules() {
        let xlsx = UploadInfo::new(
            300,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        );
        assert!(validate_spreadsheet_file(Some(&xlsx), "Sheet").is_ok());

        let xls = UploadInfo::new(300, "application/vnd.ms-excel");
        assert_eq!(
            validate_spreadsheet_file(Some(&xls), "Sheet").message,
            "Sheet should be in xlsx format"
        );
    }
}
