// file: src/utils/validation.rs
// description: input validation for record files, directories and endpoints
// reference: input validation patterns

use crate::error::{LensError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            LensError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(LensError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(LensError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(LensError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_json_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(()),
            _ => Err(LensError::Validation(format!(
                "File is not a JSON record: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(LensError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Listing ids end up in URL paths, so only `[A-Za-z0-9_-]` is accepted.
    pub fn validate_listing_id(id: &str) -> Result<()> {
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(LensError::Validation(format!("Invalid listing id: {:?}", id)));
        }
        Ok(())
    }

    /// Truncates on a char boundary, appending `...` when shortened.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((cut, _)) => format!("{}...", &text[..cut]),
        }
    }

    pub fn display_or<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
        if text.trim().is_empty() {
            placeholder
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("listing.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_json_extension() {
        assert!(Validator::validate_json_extension(Path::new("listing.json")).is_ok());
        assert!(Validator::validate_json_extension(Path::new("LISTING.JSON")).is_ok());
        assert!(Validator::validate_json_extension(Path::new("listing.txt")).is_err());
        assert!(Validator::validate_json_extension(Path::new("listing")).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com/api").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
    }

    #[test]
    fn test_validate_listing_id() {
        assert!(Validator::validate_listing_id("42").is_ok());
        assert!(Validator::validate_listing_id("abc-123_x").is_ok());
        assert!(Validator::validate_listing_id("").is_err());
        assert!(Validator::validate_listing_id("../admin").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("🔥🔥🔥", 2), "🔥🔥...");
    }

    #[test]
    fn test_display_or() {
        assert_eq!(Validator::display_or("", "Not available"), "Not available");
        assert_eq!(Validator::display_or("  ", "n/a"), "n/a");
        assert_eq!(Validator::display_or("Title", "n/a"), "Title");
    }
}
