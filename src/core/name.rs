//! Bounded machine names.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum length of a machine name, in characters.
pub const MAX_NAME_LEN: usize = 16;

/// Errors that can occur when constructing a [`MachineName`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("machine name is empty")]
    Empty,
}

/// Owned machine name bounded to [`MAX_NAME_LEN`] characters.
///
/// Names longer than the bound are truncated, not rejected; truncation is
/// recorded and queryable via [`MachineName::was_truncated`] rather than
/// happening silently. Empty names are rejected.
///
/// # Example
///
/// ```rust
/// use transit::core::name::MachineName;
///
/// let name = MachineName::new("Menu").unwrap();
/// assert_eq!(name.as_str(), "Menu");
/// assert!(!name.was_truncated());
///
/// let long = MachineName::new("StateMachineWithAVeryLongName").unwrap();
/// assert_eq!(long.as_str(), "StateMachineWith");
/// assert!(long.was_truncated());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineName {
    inner: String,
    truncated: bool,
}

impl MachineName {
    /// Construct a name, truncating to [`MAX_NAME_LEN`] characters.
    pub fn new(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        let inner: String = raw.chars().take(MAX_NAME_LEN).collect();
        let truncated = raw.chars().count() > MAX_NAME_LEN;
        Ok(Self { inner, truncated })
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether the original name exceeded the bound and was cut short.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for MachineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
