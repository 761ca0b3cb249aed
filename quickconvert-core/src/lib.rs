//! QuickConvert Core - Fundamental types
//!
//! This crate provides the core types used throughout QuickConvert:
//! - `ConvertError`: The error taxonomy shared by converters and the registry
//! - `ErrorReport`: Serializable error form for drivers and wire protocols
//! - `ParamValue`: Parameter defaults and user-supplied parameter values
//! - `parse_number` / `format_value`: Input parsing and display formatting

mod error;
mod number;
mod value;

pub use error::{codes, ConvertError, ErrorReport, Severity};
pub use number::{format_value, parse_number, NumberError, DEFAULT_SIG_FIGS, MAX_SIG_FIGS};
pub use value::ParamValue;
