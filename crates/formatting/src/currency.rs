use serde::{Deserialize, Serialize};

use estate_core::{DomainError, DomainResult, ValueObject};

const GROUP_SEPARATOR: char = ',';
const DECIMAL_POINT: char = '.';
const MAX_FRACTION_DIGITS: usize = 2;

/// Normalize free-text monetary input into a grouped display string.
///
/// Keeps only ASCII digits and `.`, takes the integer part before the first
/// `.` and at most two digits of the segment after it, then groups the
/// integer part in runs of three with `,`. Extra fractional digits are
/// dropped, never rounded.
///
/// ```
/// use estate_formatting::normalize_currency_input;
///
/// assert_eq!(normalize_currency_input("1234567.891abc"), "1,234,567.89");
/// assert_eq!(normalize_currency_input("$ 19.999"), "19.99");
/// assert_eq!(normalize_currency_input("."), ".");
/// ```
pub fn normalize_currency_input(raw: &str) -> String {
    let clean: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == DECIMAL_POINT)
        .collect();

    let mut parts = clean.split(DECIMAL_POINT);
    let whole = parts.next().unwrap_or_default();
    // Anything after a second `.` is discarded along with it.
    let fraction = parts.next();

    let mut out = group_thousands(whole);
    if let Some(fraction) = fraction {
        out.push(DECIMAL_POINT);
        out.extend(fraction.chars().take(MAX_FRACTION_DIGITS));
    }
    out
}

/// Remove grouping separators, producing the canonical storage form.
pub fn strip_separators(formatted: &str) -> String {
    formatted.chars().filter(|c| *c != GROUP_SEPARATOR).collect()
}

/// Normalize raw input straight to its canonical (ungrouped) form.
pub fn canonical_value(raw: &str) -> String {
    strip_separators(&normalize_currency_input(raw))
}

/// Display form of a stored canonical value (`"1234.5"` -> `"1,234.5"`).
pub fn format_for_display(canonical: &str) -> String {
    normalize_currency_input(canonical)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// A monetary amount in canonical form: digits with at most one `.` and at
/// most two fractional digits, no separators, no currency symbol.
///
/// Deserialization only accepts strings already in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalValue(String);

impl CanonicalValue {
    /// Normalize raw (possibly grouped) input and validate the result.
    ///
    /// Fails when nothing numeric is left, e.g. for `""`, `"abc"` or `"."`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let canonical = canonical_value(raw);
        if !canonical.chars().any(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("value must contain at least one digit"));
        }
        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Grouped display form; never stored.
    pub fn to_display(&self) -> String {
        format_for_display(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for CanonicalValue {}

impl TryFrom<String> for CanonicalValue {
    type Error = DomainError;

    /// Accepts `s` only if it is already canonical (no separators, symbols
    /// or surplus fraction digits).
    fn try_from(s: String) -> Result<Self, Self::Error> {
        let value = Self::parse(&s)?;
        if value.0 != s {
            return Err(DomainError::validation(format!("value {s:?} is not canonical")));
        }
        Ok(value)
    }
}

impl From<CanonicalValue> for String {
    fn from(value: CanonicalValue) -> Self {
        value.0
    }
}

impl core::fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
