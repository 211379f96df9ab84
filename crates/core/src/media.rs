//! Photo file-name handling: content-type sniffing and upload name cleanup.

/// Guess the response Content-Type of a stored photo from its file name.
///
/// Only the suffix is inspected (case-insensitively); the bytes are never
/// interpreted. Anything that is not PNG or GIF is served as JPEG.
pub fn content_type_for_file_name(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else {
        "image/jpeg"
    }
}

/// Reduce a client-supplied upload file name to its final path component.
///
/// Returns `None` when nothing usable remains (empty names, `.` or `..`),
/// so uploads can never be written outside the upload directory.
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or("").trim();
    match base {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}
