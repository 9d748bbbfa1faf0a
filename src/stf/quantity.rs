//! Parser for host-formatted quantities such as `"18 W"` or `"1200.5 lm"`.
//!
//! Grammar:
//!
//! ```text
//! quantity := ws* number ws+ unit ws*
//! number   := ['-'] digits [decimal digits]
//! unit     := one or more non-whitespace characters
//! ```
//!
//! `decimal` is the host's declared decimal symbol. The other separator is
//! never accepted, so grouped values such as `1,200` in a dot locale are
//! rejected instead of being read as `1.2`.

use crate::error::QuantityError;
use crate::units::DecimalSymbol;

/// Units accepted for the electrical load of a luminaire.
pub const LOAD_UNITS: &[&str] = &["W", "VA"];

/// Units accepted for the luminous flux of a luminaire.
pub const FLUX_UNITS: &[&str] = &["lm"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<'a> {
    pub value: f64,
    pub unit: &'a str,
}

impl<'a> Quantity<'a> {
    pub fn parse(text: &'a str, decimal: DecimalSymbol) -> Result<Self, QuantityError> {
        let mut parts = text.split_whitespace();

        let number = parts.next().ok_or(QuantityError::Empty)?;
        let unit = parts.next().ok_or_else(|| QuantityError::MissingUnit {
            value: text.to_string(),
        })?;
        if parts.next().is_some() {
            return Err(QuantityError::Malformed {
                value: text.to_string(),
            });
        }

        let value = parse_number(number, decimal).ok_or_else(|| QuantityError::InvalidNumber {
            value: text.to_string(),
        })?;

        Ok(Self { value, unit })
    }

    /// Parses `text` and checks its unit against `units`.
    pub fn expect(
        text: &'a str,
        units: &'static [&'static str],
        decimal: DecimalSymbol,
    ) -> Result<f64, QuantityError> {
        let quantity = Self::parse(text, decimal)?;
        if !units.iter().any(|u| *u == quantity.unit) {
            return Err(QuantityError::UnexpectedUnit {
                value: text.to_string(),
                found: quantity.unit.to_string(),
                expected: units,
            });
        }
        Ok(quantity.value)
    }
}

fn parse_number(s: &str, decimal: DecimalSymbol) -> Option<f64> {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (integer, fraction) = match digits.split_once(decimal.as_char()) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !fraction.is_none_or(all_digits) {
        return None;
    }

    match fraction {
        Some(fraction) => format!("{sign}{integer}.{fraction}").parse().ok(),
        None => format!("{sign}{integer}").parse().ok(),
    }
}
