//! Search policies deciding whether a row matches a search term.
//!
//! The match policy is the one customization point each list view supplies.
//! Three forms are available:
//!
//! - [`FieldSubstring`]: case-insensitive substring match on named text fields
//! - [`FuzzyFields`]: skim-style fuzzy match on named text fields, every
//!   whitespace-separated token must match
//! - any closure `Fn(&T, &str) -> bool`

use crate::domain::Row;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Decides whether a row matches a non-empty search term.
///
/// The reducer only consults the policy when the search term is non-empty,
/// so implementations never see `""`.
pub trait SearchPolicy<T: ?Sized> {
    fn matches(&self, row: &T, term: &str) -> bool;
}

impl<T: ?Sized, F> SearchPolicy<T> for F
where
    F: Fn(&T, &str) -> bool,
{
    fn matches(&self, row: &T, term: &str) -> bool {
        self(row, term)
    }
}

/// Case-insensitive substring match against a fixed set of text fields.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tableview::reducer::{FieldSubstring, SearchPolicy};
///
/// let policy = FieldSubstring::new(["name", "description"]);
/// let row = json!({"name": "Foxglove", "description": "plan"});
/// assert!(policy.matches(&row, "FOX"));
/// assert!(!policy.matches(&row, "wolf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSubstring {
    fields: Vec<String>,
}

impl FieldSubstring {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Row + ?Sized> SearchPolicy<T> for FieldSubstring {
    fn matches(&self, row: &T, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.fields.iter().any(|name| {
            row.field(name)
                .and_then(|value| value.as_text().map(|text| text.to_lowercase().contains(&needle)))
                .unwrap_or(false)
        })
    }
}

/// Fuzzy match against a fixed set of text fields.
///
/// The term is split on whitespace and every token has to fuzzy-match at
/// least one of the fields.
pub struct FuzzyFields {
    fields: Vec<String>,
    matcher: SkimMatcherV2,
}

impl FuzzyFields {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl<T: Row + ?Sized> SearchPolicy<T> for FuzzyFields {
    fn matches(&self, row: &T, term: &str) -> bool {
        let texts: Vec<String> = self
            .fields
            .iter()
            .filter_map(|name| row.field(name).and_then(|v| v.as_text().map(str::to_owned)))
            .collect();

        term.split_whitespace().all(|token| {
            texts
                .iter()
                .any(|text| self.matcher.fuzzy_match(text, token).is_some())
        })
    }
}

impl std::fmt::Debug for FuzzyFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyFields")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
