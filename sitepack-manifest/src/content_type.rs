use std::path::Path;

/// Derive the media type to publish a file under from its file extension, or `None` if the
/// extension is unrecognized or missing.
pub fn from_path(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}
