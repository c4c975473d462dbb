/// Fallback for unknown or missing extensions.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Returns the MIME type for a file name based on its extension.
///
/// # Example
///
/// ```
/// # use rawhttp::http::mime::mime_type;
/// assert_eq!(mime_type("index.html"), "text/html");
/// assert_eq!(mime_type("photo.JPG"), "image/jpeg");
/// assert_eq!(mime_type("Makefile"), "application/octet-stream");
/// ```
pub fn mime_type(filename: &str) -> &'static str {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return DEFAULT_MIME_TYPE;
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "jpg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "txt" => "text/plain",
        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(mime_type("style.css"), "text/css");
        assert_eq!(mime_type("app.min.js"), "application/javascript");
        assert_eq!(mime_type("notes.TXT"), "text/plain");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(mime_type("archive.tar.zst"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type("trailing."), DEFAULT_MIME_TYPE);
    }
}
