//! Category name model
//!
//! Categories are identified by their name alone. Names are normalized on the
//! way in so that `" food "`, `"FOOD"` and `"Food"` all refer to the same
//! category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum length of a category name, in characters
pub const MAX_NAME_LEN: usize = 50;

/// A normalized category name
///
/// Equality and hashing use the case-insensitive key; the display form is
/// capitalized (first character upper case, the rest lower case).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CategoryName {
    display: String,
    key: String,
}

impl CategoryName {
    /// Parse and normalize a raw category name
    pub fn parse(raw: &str) -> Result<Self, CategoryValidationError> {
        let collapsed = collapse_whitespace(raw);

        if collapsed.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = collapsed.chars().count();
        if len > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(Self {
            display: capitalize(&collapsed),
            key: collapsed.to_lowercase(),
        })
    }

    /// Compute the lookup key for a raw name without validating it
    ///
    /// Lookups never fail, so queries for empty or oversized names simply
    /// find nothing.
    pub fn key_for(raw: &str) -> String {
        collapse_whitespace(raw).to_lowercase()
    }

    /// The capitalized display form
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The case-insensitive identity key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for CategoryName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CategoryName {}

impl Hash for CategoryName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> Self {
        name.display
    }
}

impl TryFrom<String> for CategoryName {
    type Error = CategoryValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validation errors for category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(
                    f,
                    "Category name too long ({} chars, max {})",
                    len, MAX_NAME_LEN
                )
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
