//! MIME helpers for ingestion and export.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Content type used when a record has no MIME type.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Guess a MIME type from a filename extension.
pub fn mime_from_filename(filename: &str) -> Option<&'static str> {
    let (_, ext) = filename.rsplit_once('.')?;
    let mime = match ext.to_lowercase().as_str() {
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        _ => return None,
    };
    Some(mime)
}

/// Whether content of this type can be previewed as text.
pub fn is_textual(mime_type: &str) -> bool {
    mime_type.starts_with("text/")
        || matches!(
            mime_type,
            "application/json" | "application/xml" | "image/svg+xml"
        )
}

/// Encode bytes as a `data:` URI, falling back to [`DEFAULT_MIME`].
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.is_empty() {
        DEFAULT_MIME
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
