//! Deserialization helpers for input documents
//!
//! Amounts must reach the model with every digit of the input intact. JSON
//! numbers keep their text through serde_json's arbitrary precision mode. YAML
//! numbers would otherwise be handed over as `f64`, so while a YAML document is
//! read (see [`with_scalar_text`]) amounts are taken from the scalar's text.

use std::cell::Cell;
use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserialize, Deserializer, Visitor};

thread_local! {
    static SCALARS_AS_TEXT: Cell<bool> = const { Cell::new(false) };
}

/// Run `read` with amounts deserialized from their scalar text
pub(crate) fn with_scalar_text<T>(read: impl FnOnce() -> T) -> T {
    let previous = SCALARS_AS_TEXT.with(|flag| flag.replace(true));
    let _restore = Restore(previous);
    read()
}

struct Restore(bool);

impl Drop for Restore {
    fn drop(&mut self) {
        SCALARS_AS_TEXT.with(|flag| flag.set(self.0));
    }
}

/// Deserialize an exact decimal amount from a number or a string
pub fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    if SCALARS_AS_TEXT.with(Cell::get) {
        deserializer.deserialize_str(AmountTextVisitor)
    } else {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
    }
}

/// Treat an explicit `null` like a missing value
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

struct AmountTextVisitor;

impl<'de> Visitor<'de> for AmountTextVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        parse_amount(value).map_err(|e| E::custom(format!("invalid amount '{}': {}", value, e)))
    }
}

/// Parse amount text, refusing values that would need rounding
fn parse_amount(text: &str) -> Result<Decimal, rust_decimal::Error> {
    let text = text.trim();
    Decimal::from_str_exact(text).or_else(|_| Decimal::from_scientific(text))
}
