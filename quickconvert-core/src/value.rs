//! Parameter values
//!
//! Parameter defaults may be declared as text (the way a form field shows
//! them) or as numbers. User input arrives the same way. Both resolve to a
//! finite `f64` before a converter sees them.

use crate::number::{parse_number, NumberError};
use crate::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter value as declared or supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Resolve to a finite number, attributing failures to parameter `key`
    pub fn to_number(&self, key: &str) -> Result<f64, ConvertError> {
        match self {
            ParamValue::Number(n) if n.is_finite() => Ok(*n),
            ParamValue::Number(n) => Err(ConvertError::invalid_parameter(
                key,
                n.to_string(),
                "number is not finite",
            )),
            ParamValue::Text(s) => parse_number(s).map_err(|e| {
                let reason = match e {
                    NumberError::Empty => "value is empty".to_string(),
                    other => other.to_string(),
                };
                ConvertError::invalid_parameter(key, s.clone(), reason)
            }),
        }
    }

    /// Blank text counts as "not supplied" in form-style input
    pub fn is_blank(&self) -> bool {
        matches!(self, ParamValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_resolves_to_number() {
        assert_eq!(ParamValue::from("3.7").to_number("voltage"), Ok(3.7));
        assert_eq!(ParamValue::from(" 12 ").to_number("voltage"), Ok(12.0));
        assert_eq!(ParamValue::from(5.0).to_number("voltage"), Ok(5.0));
    }

    #[test]
    fn test_bad_text_is_invalid_parameter() {
        let err = ParamValue::from("abc").to_number("voltage").unwrap_err();
        match err {
            ConvertError::InvalidParameter { key, value, .. } => {
                assert_eq!(key, "voltage");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(ParamValue::Number(f64::NAN).to_number("voltage").is_err());
    }

    #[test]
    fn test_blank() {
        assert!(ParamValue::from("  ").is_blank());
        assert!(!ParamValue::from("1").is_blank());
        assert!(!ParamValue::from(0.0).is_blank());
    }

    #[test]
    fn test_untagged_serde() {
        let n: ParamValue = serde_json::from_str("3.7").unwrap();
        assert_eq!(n, ParamValue::Number(3.7));
        let t: ParamValue = serde_json::from_str("\"3.7\"").unwrap();
        assert_eq!(t, ParamValue::Text("3.7".into()));
    }
}
