//! Attach-time handling of article files: type validation, then a full
//! read into memory so the upload needs no further disk access.

use std::path::Path;

use crate::client::models::app_state::AttachedFile;

const TXT_MIME: &str = "text/plain";
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Please upload a .txt or .docx file.";

/// Media type for an accepted article file; `None` when the extension is
/// not one the analysis service can read.
pub fn detect_mime(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    if lower.ends_with(".txt") {
        Some(TXT_MIME)
    } else if lower.ends_with(".docx") {
        Some(DOCX_MIME)
    } else {
        None
    }
}

/// Read an article file into memory, validating its type before touching
/// the disk. Failures surface in the alert panel without touching the
/// current input.
pub async fn load(path: String) -> Result<AttachedFile, String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err("Enter the path of a .txt or .docx file to attach.".to_string());
    }
    let name = Path::new(trimmed)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| INVALID_TYPE_MESSAGE.to_string())?;
    let mime = detect_mime(&name).ok_or_else(|| INVALID_TYPE_MESSAGE.to_string())?;

    let bytes = tokio::fs::read(trimmed)
        .await
        .map_err(|e| format!("Could not read '{}': {}", name, e))?;
    if bytes.is_empty() {
        return Err(format!("File '{}' appears to be empty.", name));
    }

    log::info!("Attached '{}' ({} bytes, {})", name, bytes.len(), mime);
    Ok(AttachedFile { name, bytes, mime })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_txt_and_docx_are_accepted() {
        assert_eq!(detect_mime("article.txt"), Some(TXT_MIME));
        assert_eq!(detect_mime("ARTICLE.TXT"), Some(TXT_MIME));
        assert_eq!(detect_mime("report.docx"), Some(DOCX_MIME));
        assert_eq!(detect_mime("legacy.doc"), None);
        assert_eq!(detect_mime("image.png"), None);
        assert_eq!(detect_mime("noextension"), None);
    }

    #[tokio::test]
    async fn loads_a_text_file_from_disk() {
        let path = std::env::temp_dir().join("news_analyzer_attach_test.txt");
        std::fs::write(&path, b"breaking news").unwrap();

        let file = load(path.to_string_lossy().to_string()).await.unwrap();
        assert_eq!(file.name, "news_analyzer_attach_test.txt");
        assert_eq!(file.bytes, b"breaking news");
        assert_eq!(file.mime, TXT_MIME);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn rejects_unsupported_extensions_before_reading() {
        let err = load("/nowhere/picture.png".to_string()).await.unwrap_err();
        assert_eq!(err, INVALID_TYPE_MESSAGE);
    }

    #[tokio::test]
    async fn missing_files_report_the_read_failure() {
        let err = load("/nowhere/absent.txt".to_string()).await.unwrap_err();
        assert!(err.starts_with("Could not read 'absent.txt'"));
    }

    #[tokio::test]
    async fn empty_files_are_rejected() {
        let path = std::env::temp_dir().join("news_analyzer_empty_test.txt");
        std::fs::write(&path, b"").unwrap();

        let err = load(path.to_string_lossy().to_string()).await.unwrap_err();
        assert!(err.contains("appears to be empty"));

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn blank_path_asks_for_one() {
        let err = load("   ".to_string()).await.unwrap_err();
        assert!(err.contains(".txt or .docx"));
    }
}
