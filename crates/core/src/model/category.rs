use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key naming a grouping of trivia questions, e.g. `sejarah`.
///
/// The set of known keys is closed and lives in the catalog; the key type
/// itself accepts any non-blank string so that unknown categories can be
/// requested and rejected with a not-found answer.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Creates a new `CategoryKey` from a non-blank string.
    ///
    /// # Errors
    ///
    /// Returns `ParseCategoryError` if the key is blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ParseCategoryError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(ParseCategoryError);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the underlying key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryKey({:?})", self.0)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a category key from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError;

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category key cannot be blank")
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for CategoryKey {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
