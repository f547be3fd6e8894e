//! Canonical phone number value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Country code prepended when a number lacks it
pub const DEFAULT_COUNTRY_CODE: &str = "998";

/// Phone number in canonical form: `+` followed by ASCII digits that start
/// with the country code.
///
/// Canonicalization is idempotent, so a canonical number parses to itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    /// Canonicalize with the default country code
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Self::parse_with_country_code(raw, DEFAULT_COUNTRY_CODE)
    }

    /// Strip everything but digits, prefix `country_code` if absent, prepend `+`
    pub fn parse_with_country_code(raw: &str, country_code: &str) -> DomainResult<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(DomainError::Validation {
                message: "Phone number must contain digits".to_string(),
            });
        }

        let digits = if digits.starts_with(country_code) {
            digits
        } else {
            format!("{}{}", country_code, digits)
        };

        Ok(Self(format!("+{}", digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
