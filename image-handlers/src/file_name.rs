//! Upload file name derivation from an image URL.

use reqwest::Url;

/// Appended when the URL's last path segment has no extension.
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Derives the upload file name from the last path segment of `url`, without query string or
/// fragment. Names without an extension get `.jpg`; an empty segment becomes `image.jpg`.
pub fn file_name_from_url(url: &str) -> String {
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or("")
            .to_string(),
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or("");
            path.rsplit('/').next().unwrap_or("").to_string()
        }
    };

    if segment.is_empty() {
        return format!("image.{}", DEFAULT_IMAGE_EXTENSION);
    }
    if has_extension(&segment) {
        segment
    } else {
        format!("{}.{}", segment, DEFAULT_IMAGE_EXTENSION)
    }
}

/// A dot that is neither the first nor the last character marks an extension.
fn has_extension(name: &str) -> bool {
    matches!(name.rfind('.'), Some(idx) if idx > 0 && idx + 1 < name.len())
}
