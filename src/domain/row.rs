//! Row abstraction over opaque collection records.
//!
//! The controller never inspects rows beyond the fields named by the search
//! policy and the sort header. [`Row`] exposes those fields as typed
//! [`FieldValue`]s so that numbers sort numerically and text sorts without
//! regard to case.

use std::borrow::Cow;
use std::cmp::Ordering;

/// Value of a named field of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Bool(bool),
}

impl FieldValue<'_> {
    /// Text used for search matching; `None` for non-text fields.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::Bool(_) => None,
        }
    }

    /// Display form used by the table renderer.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.to_string(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{n:.0}"),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }

    /// Total ordering used by sort headers.
    ///
    /// Values of the same kind compare naturally (text case-insensitively,
    /// with the raw text as tie-breaker). Mixed kinds order as
    /// booleans < numbers < text.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

/// A record that can be searched and sorted by field name.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use tableview::{FieldValue, Row};
///
/// struct Plan {
///     name: String,
///     order: u32,
/// }
///
/// impl Row for Plan {
///     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
///         match name {
///             "name" => Some(FieldValue::Text(Cow::Borrowed(&self.name))),
///             "order" => Some(FieldValue::Number(f64::from(self.order))),
///             _ => None,
///         }
///     }
/// }
///
/// let plan = Plan { name: "Gold".into(), order: 2 };
/// assert_eq!(plan.field("name").unwrap().as_text(), Some("Gold"));
/// ```
pub trait Row {
    /// Value of the field called `name`, or `None` when the row has no such
    /// field (or it is null).
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

/// JSON objects are rows keyed by their top-level members.
///
/// Dotted names (`application.name`) reach into nested objects. Arrays and
/// objects are not addressable as values.
impl Row for serde_json::Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        use serde_json::Value;

        let value = name
            .split('.')
            .try_fold(self, |current, segment| current.get(segment))?;

        match value {
            Value::String(s) => Some(FieldValue::Text(Cow::Borrowed(s))),
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Compares two rows on `field`; rows missing the field order last.
pub fn compare_by_field<R: Row>(a: &R, b: &R, field: &str) -> Ordering {
    match (a.field(field), b.field(field)) {
        (Some(x), Some(y)) => x.compare(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
