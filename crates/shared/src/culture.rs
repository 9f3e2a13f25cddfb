//! Culture code helpers.
//!
//! Culture codes (`en-US`, `da-DK`, `zh-Hans-CN`) are compared
//! case-insensitively everywhere in the model layer, so keyed collections
//! store them lowercased.

use crate::error::ArgumentError;
use crate::validation::require_not_blank;
use validator::ValidationError;

lazy_static::lazy_static! {
    pub static ref CULTURE_CODE_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap();
}

/// Normalizes a culture code into its collection key.
///
/// Fails when the code is empty or whitespace.
pub fn normalize_culture(param: &'static str, culture: &str) -> Result<String, ArgumentError> {
    let culture = require_not_blank(param, culture)?;
    Ok(culture.trim().to_lowercase())
}

/// Case-insensitive culture comparison.
pub fn cultures_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Validates the shape of a culture code.
pub fn validate_culture_code(culture: &str) -> Result<(), ValidationError> {
    if CULTURE_CODE_REGEX.is_match(culture) {
        Ok(())
    } else {
        let mut err = ValidationError::new("culture_code");
        err.message = Some("Culture must be an ISO code such as 'en-US'".into());
        Err(err)
    }
}
