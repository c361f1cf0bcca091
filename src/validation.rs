//! Pre-mutation input validation.
//! Every check in this module runs before the first byte is written to the
//! output directory; each failure names the offending input.

use crate::error::{Error, Result};
use std::path::Path;
use url::Url;

/// Java language keywords that may not appear as package segments.
const JAVA_KEYWORDS: [&str; 50] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "package", "private", "protected",
    "public", "return", "short", "static", "strictfp", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "try", "void", "volatile",
    "while",
];

/// Image file extensions the icon step accepts.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates an Android package identifier.
///
/// A valid identifier has at least two dot-separated segments; each segment
/// starts with a lowercase ASCII letter, continues with ASCII alphanumerics
/// or underscores, and is not a Java keyword.
///
/// # Arguments
/// * `package_id` - Package identifier to validate (e.g. `com.example.app`)
///
/// # Errors
/// * `Error::ValidationError` naming the offending segment or rule
pub fn validate_package_id(package_id: &str) -> Result<()> {
    if package_id.is_empty() {
        return Err(Error::ValidationError("package identifier cannot be empty".to_string()));
    }

    let segments: Vec<&str> = package_id.split('.').collect();
    if segments.len() < 2 {
        return Err(Error::ValidationError(format!(
            "package identifier '{}' must have at least two segments (e.g. com.example.app)",
            package_id
        )));
    }

    for segment in segments {
        if segment.is_empty() {
            return Err(Error::ValidationError(format!(
                "package identifier '{}' contains an empty segment",
                package_id
            )));
        }
        if !is_valid_segment(segment) {
            return Err(Error::ValidationError(format!(
                "package segment '{}' must start with a lowercase letter and contain only letters, digits and underscores",
                segment
            )));
        }
        if JAVA_KEYWORDS.contains(&segment) {
            return Err(Error::ValidationError(format!(
                "package segment '{}' is a reserved Java keyword",
                segment
            )));
        }
    }

    Ok(())
}

/// Validates the target URL: must parse and use the http or https scheme.
pub fn validate_url(target_url: &str) -> Result<()> {
    let parsed = Url::parse(target_url).map_err(|e| {
        Error::ValidationError(format!("invalid URL '{}': {}", target_url, e))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::ValidationError(format!(
            "URL '{}' must use http or https, got '{}'",
            target_url, scheme
        ))),
    }
}

/// Validates that an icon path exists and carries a supported raster extension.
/// Decodability is checked separately by the icon module before any mutation.
pub fn validate_icon_path(icon_path: &Path) -> Result<()> {
    if !icon_path.is_file() {
        return Err(Error::ValidationError(format!(
            "icon file '{}' does not exist",
            icon_path.display()
        )));
    }

    let extension = icon_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::ValidationError(format!(
            "icon '{}' must be one of: {}",
            icon_path.display(),
            IMAGE_EXTENSIONS.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_package_ids() {
        assert!(validate_package_id("com.example").is_ok());
        assert!(validate_package_id("com.example.app").is_ok());
        assert!(validate_package_id("org.my_company.app2").is_ok());
    }

    #[test]
    fn rejects_single_segment() {
        assert!(validate_package_id("myapp").is_err());
    }

    #[test]
    fn rejects_empty_and_malformed_segments() {
        assert!(validate_package_id("").is_err());
        assert!(validate_package_id("com..app").is_err());
        assert!(validate_package_id("com.example.").is_err());
        assert!(validate_package_id("com.1example").is_err());
        assert!(validate_package_id("Com.example").is_err());
        assert!(validate_package_id("com.exa-mple").is_err());
    }

    #[test]
    fn rejects_java_keywords() {
        assert!(validate_package_id("com.class").is_err());
        assert!(validate_package_id("new.example").is_err());
    }

    #[test]
    fn validates_urls() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://localhost:8080/app").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("example.com").is_err());
    }
}
