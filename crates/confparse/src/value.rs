//! The cell type stored in a [`Config`](crate::Config): one value held as
//! canonical text, converted to scalar types on demand.

use core::fmt;

use thiserror::Error;

use crate::number::{format_canonical_f32, format_canonical_f64};

/// A single configuration value.
///
/// The value is always stored as text; typed access re-parses that text on
/// every call, so callers reading the same value repeatedly should convert
/// once and keep the result. A cell constructed from a non-text scalar
/// renders it to canonical text up front: integers in standard decimal
/// form, reals in plain decimal without exponent, booleans as `True` /
/// `False`.
///
/// An *empty* cell (no value at all) is distinct from a cell holding an
/// empty string:
///
/// ```
/// use confparse::Value;
///
/// assert!(Value::empty().is_empty());
/// assert!(!Value::from("").is_empty());
/// assert_ne!(Value::empty(), Value::from(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    text: String,
    empty: bool,
}

impl Value {
    /// The distinguished empty cell: `is_empty()` is true and the text is
    /// `""`. This is what [`Config::get`](crate::Config::get) hands back
    /// for missing keys.
    pub const fn empty() -> Self {
        Value {
            text: String::new(),
            empty: true,
        }
    }

    /// True only for a cell constructed with no value at all.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// The stored text. Never fails; an empty cell yields `""`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert the text to `T`, strictly: the whole text must be a valid
    /// literal for `T`. Trailing characters after a valid prefix are an
    /// error, not a truncation.
    ///
    /// ```
    /// use confparse::Value;
    ///
    /// let cell = Value::from("1552");
    /// assert_eq!(cell.parse::<i64>().unwrap(), 1552);
    /// assert!(Value::from("1552 items").parse::<i64>().is_err());
    /// ```
    pub fn parse<T: FromValue>(&self) -> Result<T, ConvertError> {
        T::from_text(&self.text).ok_or_else(|| ConvertError {
            text: self.text.clone(),
            expected: T::EXPECTED,
        })
    }

    /// Like [`parse`](Self::parse), but yields `default` instead of an
    /// error when the text is not a valid literal for `T`.
    pub fn parse_or<T: FromValue>(&self, default: T) -> T {
        T::from_text(&self.text).unwrap_or(default)
    }

    /// Whether [`parse::<T>`](Self::parse) would succeed. Performs no
    /// conversion visible to the caller and never mutates the cell.
    pub fn is<T: FromValue>(&self) -> bool {
        T::from_text(&self.text).is_some()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::empty()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value {
            text: text.to_owned(),
            empty: false,
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value { text, empty: false }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value {
            text: String::from(if value { "True" } else { "False" }),
            empty: false,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value {
            text: format_canonical_f64(value),
            empty: false,
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value {
            text: format_canonical_f32(value),
            empty: false,
        }
    }
}

macro_rules! impl_value_from_int {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value {
                    text: value.to_string(),
                    empty: false,
                }
            }
        }
    )*};
}

impl_value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

/// The text of a cell could not be interpreted as the requested type.
///
/// Conversion failures are local to the call that produced them; they do
/// not disturb the cell or its owning [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {expected} literal: {text:?}")]
pub struct ConvertError {
    text: String,
    expected: &'static str,
}

impl ConvertError {
    /// The text that failed to convert.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Human name of the literal form that was expected, e.g. `"integer"`.
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

/// Types a [`Value`]'s text can be converted into.
///
/// Implement this to give application-defined scalars the same
/// `parse` / `parse_or` / `is` access as the built-in ones.
pub trait FromValue: Sized {
    /// Human name of the expected literal form, used in error messages.
    const EXPECTED: &'static str;

    /// Parse a complete textual literal. `None` when `text` is not, in
    /// its entirety, a valid literal for `Self`.
    fn from_text(text: &str) -> Option<Self>;
}

macro_rules! impl_from_value_via_str {
    ($expected:literal => $($t:ty),* $(,)?) => {$(
        impl FromValue for $t {
            const EXPECTED: &'static str = $expected;

            fn from_text(text: &str) -> Option<Self> {
                text.parse().ok()
            }
        }
    )*};
}

impl_from_value_via_str!("integer" => i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);
impl_from_value_via_str!("real number" => f32, f64);

/// Boolean literal recognition is intentionally lopsided: `True`, `true`
/// and `1` are true; `False`, `false` and `0` are false; everything else —
/// including `TRUE`, `FALSE` and arbitrary text — is a conversion error
/// rather than a falsy value.
impl FromValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_text(text: &str) -> Option<Self> {
        match text {
            "True" | "true" | "1" => Some(true),
            "False" | "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "text";

    fn from_text(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}
