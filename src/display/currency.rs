//! Currency formatting per culture
//!
//! Amounts are carried at full decimal precision through the engine and only
//! rounded here. The format is an explicit value handed to every writer; there
//! is no process-wide locale.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{SplitterError, SplitterResult};

/// Culture used when none is given
pub const DEFAULT_CULTURE: &str = "sv-SE";

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Prefix,
    /// `kr 1,00`
    PrefixSpaced,
    /// `1,00 kr`
    SuffixSpaced,
}

/// Rules for rendering an amount as currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Culture name this format was resolved from
    pub culture: String,
    /// Currency symbol
    pub symbol: String,
    /// Separator between whole and fractional part
    pub decimal_separator: String,
    /// Separator between groups of three digits
    pub group_separator: String,
    /// Number of fractional digits shown
    pub decimals: u32,
    /// Symbol placement
    pub placement: SymbolPlacement,
}

impl CurrencyFormat {
    /// Resolve the format for a culture name such as `sv-SE` or `en_us`
    pub fn for_culture(name: &str) -> SplitterResult<Self> {
        let key = name.trim().replace('_', "-").to_ascii_lowercase();

        let (symbol, decimal, group, decimals, placement) = match key.as_str() {
            "sv-se" | "sv" => ("kr", ",", NBSP, 2, SymbolPlacement::SuffixSpaced),
            "nb-no" | "nb" | "no" => ("kr", ",", NBSP, 2, SymbolPlacement::PrefixSpaced),
            "da-dk" | "da" => ("kr.", ",", ".", 2, SymbolPlacement::SuffixSpaced),
            "fi-fi" | "fi" => ("€", ",", NBSP, 2, SymbolPlacement::SuffixSpaced),
            "de-de" | "de" => ("€", ",", ".", 2, SymbolPlacement::SuffixSpaced),
            "fr-fr" | "fr" => ("€", ",", NARROW_NBSP, 2, SymbolPlacement::SuffixSpaced),
            "nl-nl" | "nl" => ("€", ",", ".", 2, SymbolPlacement::PrefixSpaced),
            "en-us" | "en" => ("$", ".", ",", 2, SymbolPlacement::Prefix),
            "en-gb" => ("£", ".", ",", 2, SymbolPlacement::Prefix),
            "ja-jp" | "ja" => ("¥", ".", ",", 0, SymbolPlacement::Prefix),
            "invariant" | "" => ("¤", ".", ",", 2, SymbolPlacement::Prefix),
            _ => return Err(SplitterError::UnknownCulture(name.to_string())),
        };

        Ok(Self {
            culture: name.trim().to_string(),
            symbol: symbol.to_string(),
            decimal_separator: decimal.to_string(),
            group_separator: group.to_string(),
            decimals,
            placement,
        })
    }

    /// Format an amount, rounding half away from zero
    pub fn format(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let digits = format!("{:.*}", self.decimals as usize, rounded.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut number = group_digits(whole, &self.group_separator);
        if let Some(fraction) = fraction {
            number.push_str(&self.decimal_separator);
            number.push_str(fraction);
        }

        let body = match self.placement {
            SymbolPlacement::Prefix => format!("{}{}", self.symbol, number),
            SymbolPlacement::PrefixSpaced => format!("{}{}{}", self.symbol, NBSP, number),
            SymbolPlacement::SuffixSpaced => format!("{}{}{}", number, NBSP, self.symbol),
        };

        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            culture: DEFAULT_CULTURE.to_string(),
            symbol: "kr".to_string(),
            decimal_separator: ",".to_string(),
            group_separator: NBSP.to_string(),
            decimals: 2,
            placement: SymbolPlacement::SuffixSpaced,
        }
    }
}

fn group_digits(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_swedish_format() {
        let format = CurrencyFormat::for_culture("sv-SE").unwrap();
        assert_eq!(format.format(dec!(1234.5)), "1\u{a0}234,50\u{a0}kr");
        assert_eq!(format.format(dec!(-50)), "-50,00\u{a0}kr");
        assert_eq!(format, CurrencyFormat::default());
    }

    #[test]
    fn test_us_format() {
        let format = CurrencyFormat::for_culture("en-US").unwrap();
        assert_eq!(format.format(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format.format(dec!(-0.5)), "-$0.50");
        assert_eq!(format.format(dec!(0)), "$0.00");
    }

    #[test]
    fn test_rounding_happens_at_display_time() {
        let format = CurrencyFormat::for_culture("en-US").unwrap();
        let share = dec!(100) / dec!(3);
        assert_eq!(format.format(share), "$33.33");
        assert_eq!(format.format(dec!(2.345)), "$2.35");
        assert_eq!(format.format(dec!(-2.345)), "-$2.35");
    }

    #[test]
    fn test_tiny_negative_rounds_to_unsigned_zero() {
        let format = CurrencyFormat::for_culture("en-US").unwrap();
        assert_eq!(format.format(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_zero_decimal_currency() {
        let format = CurrencyFormat::for_culture("ja-JP").unwrap();
        assert_eq!(format.format(dec!(1234.5)), "¥1,235");
    }

    #[test]
    fn test_prefix_spaced_and_alias() {
        let format = CurrencyFormat::for_culture("nb_no").unwrap();
        assert_eq!(format.format(dec!(1000)), "kr\u{a0}1\u{a0}000,00");
    }

    #[test]
    fn test_unknown_culture() {
        let err = CurrencyFormat::for_culture("xx-XX").unwrap_err();
        assert!(matches!(err, SplitterError::UnknownCulture(_)));
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ","), "1");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("1234567", "."), "1.234.567");
    }
}
