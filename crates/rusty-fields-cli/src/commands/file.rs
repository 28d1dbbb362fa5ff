use anyhow::Result;

use rusty_fields_validation::{validate_file, FileRules, Upload, UploadInfo, ValidationResult};

use crate::context::Context;
use crate::output;

/// Upload categories with preset size and format rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FileKind {
    /// JPEG, PNG or SVG up to 1 MB
    Image,
    /// PDF, Word, JPEG or PNG up to 1 MB
    Document,
    /// Documents plus audio and video up to 100 MB
    Media,
    /// XLSX up to 1 MB
    Spreadsheet,
}

impl FileKind {
    fn rules(self) -> FileRules {
        match self {
            FileKind::Image => FileRules::IMAGE,
            FileKind::Document => FileRules::DOCUMENT,
            FileKind::Media => FileRules::DOCUMENT_MEDIA,
            FileKind::Spreadsheet => FileRules::SPREADSHEET,
        }
    }
}

/// Check a described upload; size 0 counts as nothing selected
pub fn check_upload(kind: FileKind, size: u64, content_type: &str, title: &str) -> ValidationResult {
    let upload = UploadInfo::new(size, content_type);
    tracing::debug!(?kind, size, content_type, "Checking upload");
    validate_file(Some(&upload as &dyn Upload), title, kind.rules())
}

pub fn execute(ctx: &Context, kind: FileKind, size: u64, content_type: &str, title: &str) -> Result<bool> {
    let result = check_upload(kind, size, content_type, title);
    output::print_result(&result, ctx.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_image_rules() {
        assert!(check_upload(FileKind::Image, 200_000, "image/png", "Avatar").is_ok());
        assert_eq!(
            check_upload(FileKind::Image, 200_000, "application/pdf", "Avatar").message,
            "Avatar should be in jpeg, png or svg format"
        );
        assert_eq!(check_upload(FileKind::Image, 0, "image/png", "Avatar").message, "Please select Avatar");
    }

    #[test]
    fn test_media_allows_large_video() {
        assert!(check_upload(FileKind::Media, 50 * 1024 * 1024, "video/mp4", "Attachment").is_ok());
        assert!(check_upload(FileKind::Document, 50 * 1024 * 1024, "application/pdf", "Attachment").is_err());
    }
}
