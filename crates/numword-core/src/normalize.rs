use alloc::format;
use alloc::string::{String, ToString};

use num_bigint::{BigUint, Sign};
use num_traits::ToPrimitive;
use num_traits::float::FloatCore;

use crate::types::Number;

/// Fixed formatting precision for the fractional part of a float.
pub const MAX_DECIMAL_DIGITS: usize = 10;

/// Fractional digit strings up to this length are also read as one number
/// ("point forty-five"); longer strings are read digit by digit.
pub const MAX_DECIMAL_AS_NUMBER: usize = 2;

/// Sign-stripped, decimal-split form of an input value. Built once per
/// conversion and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNumber {
    pub is_negative: bool,
    pub integer: BigUint,
    /// Fractional digits with trailing zeros stripped; `None` when the
    /// value has no fractional part.
    pub decimal_digits: Option<String>,
    /// The fractional digits parsed as an integer, when short enough.
    /// Leading zeros collapse here ("05" reads as five); the digit-by-digit
    /// path keeps them.
    pub decimal_as_number: Option<u64>,
}

/// Splits a finite value into sign, integer part and fractional digits.
/// Infinities and NaN never reach this point; the dispatcher intercepts
/// them first.
pub fn normalize(number: &Number) -> NormalizedNumber {
    match number {
        Number::Int(value) => NormalizedNumber {
            is_negative: value.sign() == Sign::Minus,
            integer: value.magnitude().clone(),
            decimal_digits: None,
            decimal_as_number: None,
        },
        Number::Float(value) => normalize_float(*value),
    }
}

fn normalize_float(value: f64) -> NormalizedNumber {
    debug_assert!(value.is_finite());
    // -0.0 is not negative; only values strictly below zero take the prefix.
    let is_negative = value < 0.0;
    let magnitude = if is_negative { -value } else { value };
    // Truncate toward zero before any formatting: rounding the whole value
    // would carry a fraction within 5e-11 of one into the integer part.
    let integer_part = FloatCore::trunc(magnitude);
    let integer =
        BigUint::parse_bytes(format!("{integer_part:.0}").as_bytes(), 10).unwrap_or_default();
    let precision = MAX_DECIMAL_DIGITS;
    let formatted = format!("{:.precision$}", magnitude - integer_part);
    let fraction_digits = formatted
        .split_once('.')
        .map(|(_, digits)| digits)
        .unwrap_or("");
    let fraction = fraction_digits.trim_end_matches('0');
    if fraction.is_empty() {
        return NormalizedNumber {
            is_negative,
            integer,
            decimal_digits: None,
            decimal_as_number: None,
        };
    }
    let decimal_as_number = if fraction.len() <= MAX_DECIMAL_AS_NUMBER {
        fraction.parse::<u64>().ok()
    } else {
        None
    };
    NormalizedNumber {
        is_negative,
        integer,
        decimal_digits: Some(fraction.to_string()),
        decimal_as_number,
    }
}

/// Converts an amount into whole subunits with half-up rounding, then
/// splits main units from the subunit remainder. Rounding happens on the
/// exact decimal expansion, never on binary float arithmetic, so e.g.
/// 19.999 at factor 100 yields exactly 2000 subunits.
pub(crate) fn split_subunits(normalized: &NormalizedNumber, factor: u32) -> (BigUint, u32) {
    let factor_big = BigUint::from(factor);
    let mut total = &normalized.integer * &factor_big;
    if let Some(digits) = normalized.decimal_digits.as_deref() {
        let numerator = BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default();
        let denominator = BigUint::from(10u32).pow(digits.len() as u32);
        let rounded = (&numerator * &factor_big * 2u32 + &denominator) / (&denominator * 2u32);
        total += rounded;
    }
    let main_units = &total / &factor_big;
    let subunits = (&total % &factor_big).to_u32().unwrap_or(0);
    (main_units, subunits)
}
