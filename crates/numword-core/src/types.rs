use alloc::string::{String, ToString};
use core::str::FromStr;

use num_bigint::BigInt;

use crate::{ConvertError, ConvertResult};

/// Input value for a conversion. Integer magnitude is unbounded.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    /// Parses numeric text: integers of any magnitude first, then floats
    /// (which also admit `inf`, `-inf` and `NaN`).
    pub fn parse(input: &str) -> ConvertResult<Self> {
        let trimmed = input.trim();
        if let Ok(value) = BigInt::from_str(trimmed) {
            return Ok(Number::Int(value));
        }
        match f64::from_str(trimmed) {
            Ok(value) => Ok(Number::Float(value)),
            Err(_) => Err(ConvertError::InvalidNumericType {
                value: input.to_string(),
            }),
        }
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    pub fn parse(input: &str) -> ConvertResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "m" | "masculine" => Ok(Gender::Masculine),
            "f" | "feminine" => Ok(Gender::Feminine),
            _ => Err(ConvertError::InvalidArgument {
                field: "gender",
                value: input.to_string(),
                expected: "\"m\" or \"f\"",
            }),
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Cardinal,
    Ordinal,
    Currency,
}

impl Mode {
    pub fn parse(input: &str) -> ConvertResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "cardinal" => Ok(Mode::Cardinal),
            "ordinal" => Ok(Mode::Ordinal),
            "currency" => Ok(Mode::Currency),
            _ => Err(ConvertError::InvalidArgument {
                field: "mode",
                value: input.to_string(),
                expected: "\"cardinal\", \"ordinal\" or \"currency\"",
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Cardinal => "cardinal",
            Mode::Ordinal => "ordinal",
            Mode::Currency => "currency",
        }
    }
}

/// One conversion request. Replaces the loose keyword bag of older
/// converters with explicit, validated fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub language: String,
    pub mode: Mode,
    pub gender: Gender,
    /// Currency code, consulted only in currency mode. `None` selects the
    /// resolved language's default currency.
    pub currency: Option<String>,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            language: String::from("en"),
            mode: Mode::Cardinal,
            gender: Gender::Masculine,
            currency: None,
        }
    }
}

impl Request {
    pub fn new(language: &str) -> Self {
        Request {
            language: String::from(language),
            ..Request::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = Some(String::from(currency));
        self
    }
}
