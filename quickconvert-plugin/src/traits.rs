//! Converter traits

use crate::{Params, ResolvedParams};
use quickconvert_core::{ConvertError, ParamValue};
use serde::Serialize;

/// Default value of a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    /// Shown verbatim in a form field
    Text(&'static str),
    Number(f64),
}

impl ParamDefault {
    pub fn to_value(self) -> ParamValue {
        match self {
            ParamDefault::Text(s) => ParamValue::Text(s.to_string()),
            ParamDefault::Number(n) => ParamValue::Number(n),
        }
    }
}

/// Metadata about a converter parameter
#[derive(Debug, Clone, Serialize)]
pub struct ParamMeta {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ParamDefault>,
}

impl ParamMeta {
    pub const fn required(key: &'static str, label: &'static str, description: &'static str) -> Self {
        Self { key, label, description, required: true, default: None }
    }

    pub const fn optional(key: &'static str, label: &'static str, description: &'static str, default: ParamDefault) -> Self {
        Self { key, label, description, required: false, default: Some(default) }
    }

    /// A required parameter still accepts a default; it is only missing
    /// when neither a value nor a default exists.
    pub const fn with_default(self, default: ParamDefault) -> Self {
        Self { default: Some(default), ..self }
    }
}

/// Metadata for a converter
#[derive(Debug, Clone, Serialize)]
pub struct ConverterMeta {
    /// Unique name, also the display label
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Ordered unit labels; the first two are the default pair in a form
    pub units: &'static [&'static str],
}

impl ConverterMeta {
    pub fn has_unit(&self, unit: &str) -> bool {
        self.units.contains(&unit)
    }
}

/// Check a request against a converter's metadata: the value must be
/// finite and both units must be among the converter's units.
pub fn validate_request(meta: &ConverterMeta, value: f64, from: &str, to: &str) -> Result<(), ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidValue(value.to_string()));
    }
    for unit in [from, to] {
        if !meta.has_unit(unit) {
            return Err(ConvertError::invalid_unit(meta.name, unit, meta.units));
        }
    }
    Ok(())
}

/// A finite input can still overflow on the way to the target unit
fn finite_result(result: f64) -> Result<f64, ConvertError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConvertError::domain("result is out of range"))
    }
}

/// Converter that needs nothing beyond a value and two units
pub trait Converter: Send + Sync {
    fn meta(&self) -> ConverterMeta;

    /// Map `value` between two distinct units already known to be valid
    fn convert_between(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError>;

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        validate_request(&self.meta(), value, from, to)?;
        if from == to {
            return Ok(value);
        }
        self.convert_between(value, from, to).and_then(finite_result)
    }
}

/// Converter whose mapping depends on declared parameters
pub trait ParameterizedConverter: Send + Sync {
    fn meta(&self) -> ConverterMeta;

    fn parameters(&self) -> &'static [ParamMeta];

    /// Map `value` between two distinct, valid units with resolved parameters
    fn convert_between(&self, value: f64, from: &str, to: &str, params: &ResolvedParams) -> Result<f64, ConvertError>;

    fn convert_with_params(&self, value: f64, from: &str, to: &str, params: &Params) -> Result<f64, ConvertError> {
        let meta = self.meta();
        validate_request(&meta, value, from, to)?;
        if from == to {
            return Ok(value);
        }
        let resolved = params.resolve(meta.name, self.parameters())?;
        self.convert_between(value, from, to, &resolved).and_then(finite_result)
    }

    /// Convert using the declared defaults for every parameter
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        self.convert_with_params(value, from, to, &Params::new())
    }
}
