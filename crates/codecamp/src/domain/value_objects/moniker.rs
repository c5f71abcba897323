//! Moniker - Short unique key of a Camp, used verbatim in resource URLs

use crate::domain::errors::DomainError;

/// Maximum moniker length
pub const MAX_MONIKER_LEN: usize = 50;

/// Moniker - validated, URL path safe camp key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Moniker(String);

impl Moniker {
    /// Validate a raw moniker.
    ///
    /// Only unreserved URL characters are accepted so the moniker can be
    /// placed in a path segment without escaping.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::Validation("moniker must not be empty".to_string()));
        }
        if raw.len() > MAX_MONIKER_LEN {
            return Err(DomainError::Validation(format!(
                "moniker must be at most {} characters",
                MAX_MONIKER_LEN
            )));
        }
        if let Some(c) = raw.chars().find(|c| !is_unreserved(*c)) {
            return Err(DomainError::Validation(format!(
                "moniker contains invalid character {:?}",
                c
            )));
        }
        Ok(Self(raw.to_string()))
    }
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

impl std::fmt::Display for Moniker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
