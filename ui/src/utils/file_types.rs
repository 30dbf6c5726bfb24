//! File type helpers for browser uploads.
//!
//! The Dioxus file engine hands over names and bytes only, so the content
//! type is derived from the extension the same way browsers fill `File.type`.

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extensions offered by the upload picker
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.jpg,.jpeg,.webp";

pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => extension.to_ascii_lowercase(),
        _ => return OCTET_STREAM,
    };

    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        _ => OCTET_STREAM,
    }
}

/// Human readable size for the upload list
pub fn format_file_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let size = bytes as f64;
    if size >= MB {
        format!("{:.1} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(content_type_for("passport.PDF"), "application/pdf");
        assert_eq!(content_type_for("scan.jpeg"), "image/jpeg");
        assert_eq!(
            content_type_for("cv.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content_type_for("photo.webp"), "image/webp");
        assert_eq!(content_type_for("archive.tar.gz"), OCTET_STREAM);
        assert_eq!(content_type_for("README"), OCTET_STREAM);
        assert_eq!(content_type_for(".pdf"), OCTET_STREAM);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }
}
