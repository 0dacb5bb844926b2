//! Currency-string formatting for estate values.
//!
//! Free-text monetary input is normalized into a grouped display string
//! (`"1,234.56"`) and stored in canonical form (`"1234.56"`). Everything here
//! is pure and allocation-only.

pub mod currency;

pub use currency::{
    CanonicalValue, canonical_value, format_for_display, normalize_currency_input,
    strip_separators,
};
