//! Conversion errors
//!
//! Errors never crash a driver. Every failure is a value carrying a
//! machine-readable code, a human-readable message and, where one exists,
//! a suggestion for fixing the input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const MISSING_PARAM: &str = "MISSING_PARAM";
    pub const UNKNOWN_PARAM: &str = "UNKNOWN_PARAM";
    pub const INVALID_PARAM: &str = "INVALID_PARAM";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const DUPLICATE_CONVERTER: &str = "DUPLICATE_CONVERTER";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_DEFINITION: &str = "INVALID_DEFINITION";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The conversion failed; the driver shows a message and carries on
    Error,
    /// The registry is misconfigured; the application must not start
    Fatal,
}

/// Every failure a converter, parameter schema or registry can report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unsupported unit '{unit}' for {converter} converter. Supported units: {}", .supported.join(", "))]
    InvalidUnit {
        converter: String,
        unit: String,
        supported: Vec<String>,
    },

    #[error("Missing required parameter '{key}' ({label})")]
    MissingParameter { key: String, label: String },

    #[error("Unknown parameter '{key}' for {converter} converter")]
    UnknownParameter {
        converter: String,
        key: String,
        accepted: Vec<String>,
    },

    #[error("Invalid value '{value}' for parameter '{key}': {reason}")]
    InvalidParameter {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input value: {0}")]
    InvalidValue(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Converter '{0}' is already registered")]
    DuplicateConverter(String),

    #[error("No converter named '{name}' is registered")]
    ConverterNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Invalid definition for {converter} converter: {reason}")]
    InvalidDefinition { converter: String, reason: String },
}

impl ConvertError {
    // ========== Common Error Constructors ==========

    pub fn invalid_unit(converter: &str, unit: &str, supported: &[&str]) -> Self {
        Self::InvalidUnit {
            converter: converter.to_string(),
            unit: unit.to_string(),
            supported: supported.iter().map(|u| u.to_string()).collect(),
        }
    }

    pub fn missing_parameter(key: &str, label: &str) -> Self {
        Self::MissingParameter {
            key: key.to_string(),
            label: label.to_string(),
        }
    }

    pub fn invalid_parameter(key: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn domain(details: impl Into<String>) -> Self {
        Self::Domain(details.into())
    }

    pub fn invalid_definition(converter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            converter: converter.to_string(),
            reason: reason.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUnit { .. } => codes::INVALID_UNIT,
            Self::MissingParameter { .. } => codes::MISSING_PARAM,
            Self::UnknownParameter { .. } => codes::UNKNOWN_PARAM,
            Self::InvalidParameter { .. } => codes::INVALID_PARAM,
            Self::InvalidValue(_) => codes::INVALID_VALUE,
            Self::Domain(_) => codes::DOMAIN_ERROR,
            Self::DuplicateConverter(_) => codes::DUPLICATE_CONVERTER,
            Self::ConverterNotFound { .. } => codes::NOT_FOUND,
            Self::InvalidDefinition { .. } => codes::INVALID_DEFINITION,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateConverter(_) | Self::InvalidDefinition { .. } => Severity::Fatal,
            _ => Severity::Error,
        }
    }

    /// Suggestion for fixing the error, when one can be derived
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidUnit { supported, .. } => {
                Some(format!("Pick one of: {}", supported.join(", ")))
            }
            Self::MissingParameter { label, .. } => Some(format!("Enter a value for {}", label)),
            Self::UnknownParameter { accepted, .. } if accepted.is_empty() => {
                Some("This converter takes no parameters".to_string())
            }
            Self::UnknownParameter { accepted, .. } => {
                Some(format!("Accepted parameters: {}", accepted.join(", ")))
            }
            Self::InvalidValue(_) => Some("Enter a finite number".to_string()),
            Self::DuplicateConverter(_) => Some("Give each converter a unique name".to_string()),
            Self::ConverterNotFound { available, .. } if !available.is_empty() => {
                Some(format!("Available: {}", available.join(", ")))
            }
            _ => None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }

    /// Serializable form of this error
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
            severity: self.severity(),
        }
    }
}

/// Structured error as shown to a user or sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    pub severity: Severity,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
