//! Length conversion, number formatting and the host format scope.
//!
//! Hosts store lengths in decimal feet and format numbers according to the
//! user's locale. STF wants meters and a `.` decimal separator, so an export
//! runs inside a [`UnitScope`] that switches the host over and puts the
//! previous settings back when it is dropped.

use serde::{Deserialize, Serialize};

/// Multiplier from host-native feet to meters.
pub const FEET_TO_METERS: f64 = 0.3048;

const SIGNIFICANT_DIGITS: i32 = 15;

#[must_use]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecimalSymbol {
    #[default]
    Dot,
    Comma,
}

impl DecimalSymbol {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            DecimalSymbol::Dot => '.',
            DecimalSymbol::Comma => ',',
        }
    }

    /// Thousands separator paired with this decimal symbol.
    #[must_use]
    pub fn group_separator(self) -> char {
        match self {
            DecimalSymbol::Dot => ',',
            DecimalSymbol::Comma => '.',
        }
    }
}

/// Display unit for lengths on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Feet,
    Inches,
    Meters,
    Centimeters,
    Millimeters,
}

/// How decimal numbers are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_symbol: DecimalSymbol,
    pub digit_grouping: bool,
}

impl NumberFormat {
    /// The only format STF readers accept: dot separator, no grouping.
    pub const STF: NumberFormat = NumberFormat {
        decimal_symbol: DecimalSymbol::Dot,
        digit_grouping: false,
    };

    /// Formats `value` with up to 15 significant digits and no trailing zeros.
    ///
    /// Zero is always `0`, negative zero included.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        if value == 0.0 {
            return "0".to_string();
        }

        let magnitude = value.abs().log10().floor() as i32;
        let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
        let mut text = format!("{value:.decimals$}");
        if text.contains('.') {
            text.truncate(text.trim_end_matches('0').trim_end_matches('.').len());
        }
        if text == "-0" {
            return "0".to_string();
        }

        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(text.len() + integer.len() / 3);
        out.push_str(sign);
        if self.digit_grouping {
            out.push_str(&group_digits(
                integer,
                self.decimal_symbol.group_separator(),
            ));
        } else {
            out.push_str(integer);
        }
        if let Some(fraction) = fraction {
            out.push(self.decimal_symbol.as_char());
            out.push_str(fraction);
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Host-side unit and locale settings the exporter needs to switch.
///
/// A host adapter implements this over its document settings; the
/// serializer only ever touches them through [`UnitScope`].
pub trait HostUnits {
    fn number_format(&self) -> NumberFormat;
    fn set_number_format(&mut self, format: NumberFormat);
    fn length_unit(&self) -> LengthUnit;
    fn set_length_unit(&mut self, unit: LengthUnit);
}

/// In-memory host settings, as loaded from a project description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    pub number_format: NumberFormat,
    pub length_unit: LengthUnit,
}

impl HostUnits for HostSettings {
    fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    fn set_number_format(&mut self, format: NumberFormat) {
        self.number_format = format;
    }

    fn length_unit(&self) -> LengthUnit {
        self.length_unit
    }

    fn set_length_unit(&mut self, unit: LengthUnit) {
        self.length_unit = unit;
    }
}

/// Guard that holds the host in STF conventions (meters, dot, no grouping).
///
/// The previous settings are restored on drop, so every exit path of the
/// export (early return, `?`, unwinding) leaves the host as it was found.
pub struct UnitScope<'a, H: HostUnits + ?Sized> {
    host: &'a mut H,
    saved_format: NumberFormat,
    saved_unit: LengthUnit,
}

impl<'a, H: HostUnits + ?Sized> UnitScope<'a, H> {
    pub fn acquire(host: &'a mut H) -> Self {
        let saved_format = host.number_format();
        let saved_unit = host.length_unit();

        if saved_format.decimal_symbol == DecimalSymbol::Comma {
            tracing::debug!("host uses a comma decimal symbol, switching to dot for export");
        }
        host.set_number_format(NumberFormat::STF);
        host.set_length_unit(LengthUnit::Meters);

        Self {
            host,
            saved_format,
            saved_unit,
        }
    }

    /// The host's number format from before the scope was acquired.
    ///
    /// Strings the host formatted itself (load, flux) were written with it.
    /// Output never uses it: STF text is always [`NumberFormat::STF`], even
    /// for a host that ignores the switch.
    #[must_use]
    pub fn saved_format(&self) -> NumberFormat {
        self.saved_format
    }
}

impl<H: HostUnits + ?Sized> Drop for UnitScope<'_, H> {
    fn drop(&mut self) {
        self.host.set_number_format(self.saved_format);
        self.host.set_length_unit(self.saved_unit);
    }
}

/// Runs `f` with the host switched to STF conventions.
///
/// `f` receives the host's previous number format.
pub fn with_stf_units<H, T, F>(host: &mut H, f: F) -> T
where
    H: HostUnits + ?Sized,
    F: FnOnce(NumberFormat) -> T,
{
    let scope = UnitScope::acquire(host);
    f(scope.saved_format())
}
