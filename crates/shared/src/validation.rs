//! Guard clauses and common validation utilities.

use crate::error::ArgumentError;
use validator::ValidationError;

/// Maximum length of an absolute URL stored on a model.
const MAX_URL_LENGTH: usize = 2048;

/// Fails when `value` is empty.
pub fn require_not_empty<'a>(param: &'static str, value: &'a str) -> Result<&'a str, ArgumentError> {
    if value.is_empty() {
        Err(ArgumentError::NullOrEmpty { param })
    } else {
        Ok(value)
    }
}

/// Fails when `value` is empty or consists only of whitespace.
pub fn require_not_blank<'a>(param: &'static str, value: &'a str) -> Result<&'a str, ArgumentError> {
    if value.trim().is_empty() {
        Err(ArgumentError::NullOrWhiteSpace { param })
    } else {
        Ok(value)
    }
}

/// Like [`require_not_empty`] but accepts an optional value, treating `None` as empty.
pub fn require_some_not_empty<'a>(
    param: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ArgumentError> {
    require_not_empty(param, value.unwrap_or_default())
}

/// Validates that a string is an absolute http(s) URL.
pub fn validate_absolute_url(url: &str) -> Result<(), ValidationError> {
    if url.len() > MAX_URL_LENGTH {
        let mut err = ValidationError::new("url_length");
        err.message = Some("URL must be at most 2048 characters".into());
        return Err(err);
    }

    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        let mut err = ValidationError::new("absolute_url");
        err.message = Some("URL must be absolute (http or https)".into());
        Err(err)
    }
}

/// Validates that a string is a site-relative URL path.
pub fn validate_relative_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with('/') && !url.starts_with("//") {
        Ok(())
    } else {
        let mut err = ValidationError::new("relative_url");
        err.message = Some("URL must be a site-relative path starting with '/'".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_not_empty() {
        assert_eq!(require_not_empty("to", "a@b.c").unwrap(), "a@b.c");
        assert!(require_not_empty("to", " ").is_ok());
        assert_eq!(
            require_not_empty("to", "").unwrap_err(),
            ArgumentError::NullOrEmpty { param: "to" }
        );
    }

    #[test]
    fn test_require_not_blank() {
        assert!(require_not_blank("culture", "en-US").is_ok());
        assert_eq!(
            require_not_blank("culture", "   ").unwrap_err(),
            ArgumentError::NullOrWhiteSpace { param: "culture" }
        );
        assert!(require_not_blank("culture", "").is_err());
    }

    #[test]
    fn test_require_some_not_empty() {
        assert!(require_some_not_empty("from", None).is_err());
        assert!(require_some_not_empty("from", Some("")).is_err());
        assert_eq!(require_some_not_empty("from", Some("x")).unwrap(), "x");
    }

    #[test]
    fn test_validate_absolute_url() {
        assert!(validate_absolute_url("https://example.com/hook").is_ok());
        assert!(validate_absolute_url("http://localhost:8080").is_ok());
        assert!(validate_absolute_url("/relative").is_err());
        assert!(validate_absolute_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_absolute_url_too_long() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let err = validate_absolute_url(&url).unwrap_err();
        assert_eq!(err.code, "url_length");
    }

    #[test]
    fn test_validate_relative_url() {
        assert!(validate_relative_url("/about-us/").is_ok());
        assert!(validate_relative_url("//evil.example.com").is_err());
        assert!(validate_relative_url("about-us").is_err());
    }

    #[test]
    fn test_validate_absolute_url_error_message() {
        let err = validate_absolute_url("example.com").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "URL must be absolute (http or https)"
        );
    }
}
