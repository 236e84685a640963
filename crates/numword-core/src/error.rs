use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    InvalidNumericType {
        value: String,
    },
    UnsupportedLanguage {
        requested: String,
        supported: Vec<String>,
    },
    InvalidArgument {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    UnsupportedCurrency {
        requested: String,
        supported: Vec<String>,
    },
    InvalidTable(&'static str),
}

pub type ConvertResult<T> = Result<T, ConvertError>;

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidNumericType { value } => {
                write!(f, "not a numeric value: {value}")
            }
            ConvertError::UnsupportedLanguage {
                requested,
                supported,
            } => {
                write!(
                    f,
                    "unsupported language: {requested} (supported: {})",
                    supported.join(", ")
                )
            }
            ConvertError::InvalidArgument {
                field,
                value,
                expected,
            } => {
                write!(f, "invalid {field}: {value} (expected {expected})")
            }
            ConvertError::UnsupportedCurrency {
                requested,
                supported,
            } => {
                write!(
                    f,
                    "unsupported currency: {requested} (supported: {})",
                    supported.join(", ")
                )
            }
            ConvertError::InvalidTable(message) => write!(f, "invalid table: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::ConvertError;

    #[test]
    fn display_names_the_offending_language_and_the_legal_set() {
        let err = ConvertError::UnsupportedLanguage {
            requested: String::from("xx"),
            supported: vec![String::from("en"), String::from("ar")],
        };
        assert_eq!(err.to_string(), "unsupported language: xx (supported: en, ar)");
    }

    #[test]
    fn display_formats_invalid_argument() {
        let err = ConvertError::InvalidArgument {
            field: "mode",
            value: String::from("bogus"),
            expected: "\"cardinal\", \"ordinal\" or \"currency\"",
        };
        assert_eq!(
            err.to_string(),
            "invalid mode: bogus (expected \"cardinal\", \"ordinal\" or \"currency\")"
        );
    }

    #[test]
    fn display_formats_unsupported_currency() {
        let err = ConvertError::UnsupportedCurrency {
            requested: String::from("XTS"),
            supported: vec![String::from("SAR"), String::from("USD")],
        };
        assert_eq!(err.to_string(), "unsupported currency: XTS (supported: SAR, USD)");
    }

    #[test]
    fn display_formats_invalid_numeric_type() {
        let err = ConvertError::InvalidNumericType {
            value: String::from("abc"),
        };
        assert_eq!(err.to_string(), "not a numeric value: abc");
    }
}
