//! Conversion parameters
//!
//! `Params` is what a caller supplies: an explicit key → value map.
//! `ResolvedParams` is what a converter receives after the map has been
//! checked against the converter's declared schema.

use crate::ParamMeta;
use quickconvert_core::{ConvertError, ParamValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters supplied by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Validate against `schema` and produce numeric values.
    ///
    /// Keys the schema does not declare are rejected. A declared parameter
    /// takes the supplied value, or its default when the value is absent
    /// or blank. A required parameter with neither is missing.
    pub fn resolve(&self, converter: &str, schema: &[ParamMeta]) -> Result<ResolvedParams, ConvertError> {
        if let Some(unknown) = self.values.keys().find(|k| !schema.iter().any(|p| p.key == k.as_str())) {
            return Err(ConvertError::UnknownParameter {
                converter: converter.to_string(),
                key: unknown.clone(),
                accepted: schema.iter().map(|p| p.key.to_string()).collect(),
            });
        }

        let mut resolved = ResolvedParams {
            converter: converter.to_string(),
            values: BTreeMap::new(),
        };
        for param in schema {
            let supplied = self.values.get(param.key).filter(|v| !v.is_blank());
            let value = match (supplied, param.default) {
                (Some(v), _) => Some(v.to_number(param.key)?),
                (None, Some(default)) => Some(default.to_value().to_number(param.key)?),
                (None, None) if param.required => {
                    return Err(ConvertError::missing_parameter(param.key, param.label));
                }
                (None, None) => None,
            };
            resolved.values.insert(param.key, (param.label, value));
        }
        Ok(resolved)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Parameters checked against a converter's schema.
///
/// Every declared key is present with its label. Optional parameters that
/// were neither supplied nor defaulted carry no value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParams {
    converter: String,
    values: BTreeMap<&'static str, (&'static str, Option<f64>)>,
}

impl ResolvedParams {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(|(_, v)| *v)
    }

    /// Value of `key`, failing when it is absent or not declared at all
    pub fn require(&self, key: &str) -> Result<f64, ConvertError> {
        match self.values.get(key) {
            Some((_, Some(value))) => Ok(*value),
            Some((label, None)) => Err(ConvertError::missing_parameter(key, label)),
            None => Err(ConvertError::UnknownParameter {
                converter: self.converter.clone(),
                key: key.to_string(),
                accepted: self.values.keys().map(|k| k.to_string()).collect(),
            }),
        }
    }

    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.values.get(key).map(|(label, _)| *label)
    }
}
