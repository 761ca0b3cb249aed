//! Converter Registry

use crate::{Converter, ConverterMeta, ParamMeta, ParameterizedConverter, Params};
use indexmap::IndexMap;
use quickconvert_core::ConvertError;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A converter as held by the registry: one of the two plugin kinds
#[derive(Clone)]
pub enum RegisteredConverter {
    Plain(Arc<dyn Converter>),
    Parameterized(Arc<dyn ParameterizedConverter>),
}

impl RegisteredConverter {
    pub fn meta(&self) -> ConverterMeta {
        match self {
            Self::Plain(c) => c.meta(),
            Self::Parameterized(c) => c.meta(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.meta().name
    }

    pub fn units(&self) -> &'static [&'static str] {
        self.meta().units
    }

    /// Declared parameters; empty for plain converters
    pub fn parameters(&self) -> &'static [ParamMeta] {
        match self {
            Self::Plain(_) => &[],
            Self::Parameterized(c) => c.parameters(),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized(_))
    }

    /// Convert using parameter defaults where parameters exist
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        let result = match self {
            Self::Plain(c) => c.convert(value, from, to),
            Self::Parameterized(c) => c.convert(value, from, to),
        };
        debug!(converter = self.name(), value, from, to, ok = result.is_ok(), "convert");
        result
    }

    /// Convert with explicit parameters. Plain converters accept only an
    /// empty parameter map.
    pub fn convert_with_params(&self, value: f64, from: &str, to: &str, params: &Params) -> Result<f64, ConvertError> {
        let result = match self {
            Self::Plain(c) => {
                if !params.is_empty() {
                    params.resolve(c.meta().name, &[])?;
                }
                c.convert(value, from, to)
            }
            Self::Parameterized(c) => c.convert_with_params(value, from, to, params),
        };
        debug!(converter = self.name(), value, from, to, params = params.len(), ok = result.is_ok(), "convert_with_params");
        result
    }

    /// Serializable description for menus and wire output
    pub fn info(&self) -> ConverterInfo {
        let meta = self.meta();
        ConverterInfo {
            name: meta.name,
            description: meta.description,
            category: meta.category,
            units: meta.units,
            parameters: self.parameters(),
        }
    }

    /// Capability check run at registration time
    fn validate(&self) -> Result<(), ConvertError> {
        let meta = self.meta();
        let name = meta.name;

        if name.trim().is_empty() {
            return Err(ConvertError::invalid_definition(name, "name must not be empty"));
        }
        if meta.units.len() < 2 {
            return Err(ConvertError::invalid_definition(name, format!(
                "at least 2 units required, found {}", meta.units.len()
            )));
        }

        let mut seen = HashSet::new();
        for unit in meta.units {
            if unit.trim().is_empty() {
                return Err(ConvertError::invalid_definition(name, "unit labels must not be empty"));
            }
            if !seen.insert(*unit) {
                return Err(ConvertError::invalid_definition(name, format!("duplicate unit '{}'", unit)));
            }
        }

        let mut keys = HashSet::new();
        for param in self.parameters() {
            if param.key.trim().is_empty() {
                return Err(ConvertError::invalid_definition(name, "parameter keys must not be empty"));
            }
            if !keys.insert(param.key) {
                return Err(ConvertError::invalid_definition(name, format!("duplicate parameter '{}'", param.key)));
            }
            if let Some(default) = param.default {
                default.to_value().to_number(param.key).map_err(|e| {
                    ConvertError::invalid_definition(name, format!("bad default for '{}': {}", param.key, e))
                })?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for RegisteredConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_parameterized() { "Parameterized" } else { "Plain" };
        f.debug_struct(kind)
            .field("name", &self.name())
            .field("units", &self.units())
            .finish()
    }
}

/// Description of a registered converter
#[derive(Debug, Clone, Serialize)]
pub struct ConverterInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub units: &'static [&'static str],
    #[serde(skip_serializing_if = "no_params")]
    pub parameters: &'static [ParamMeta],
}

fn no_params(params: &&'static [ParamMeta]) -> bool {
    params.is_empty()
}

/// Central converter registry.
///
/// Populated once at startup, read-only afterwards. Iteration follows
/// registration order.
#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: IndexMap<String, RegisteredConverter>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: Converter + 'static>(&mut self, converter: C) -> Result<(), ConvertError> {
        self.register_entry(RegisteredConverter::Plain(Arc::new(converter)))
    }

    pub fn register_parameterized<C: ParameterizedConverter + 'static>(&mut self, converter: C) -> Result<(), ConvertError> {
        self.register_entry(RegisteredConverter::Parameterized(Arc::new(converter)))
    }

    pub fn register_entry(&mut self, entry: RegisteredConverter) -> Result<(), ConvertError> {
        if let Err(e) = entry.validate() {
            warn!(converter = entry.name(), error = %e, "rejected converter definition");
            return Err(e);
        }

        let name = entry.name();
        if self.converters.contains_key(name) {
            warn!(converter = name, "duplicate converter registration");
            return Err(ConvertError::DuplicateConverter(name.to_string()));
        }

        debug!(converter = name, units = entry.units().len(), parameterized = entry.is_parameterized(), "registered converter");
        self.converters.insert(name.to_string(), entry);
        Ok(())
    }

    pub fn with_converter<C: Converter + 'static>(mut self, converter: C) -> Result<Self, ConvertError> {
        self.register(converter)?;
        Ok(self)
    }

    pub fn with_parameterized<C: ParameterizedConverter + 'static>(mut self, converter: C) -> Result<Self, ConvertError> {
        self.register_parameterized(converter)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Result<&RegisteredConverter, ConvertError> {
        self.converters.get(name).ok_or_else(|| {
            let mut available = self.find_similar(name);
            if available.is_empty() {
                available = self.names().iter().map(|n| n.to_string()).collect();
            }
            ConvertError::ConverterNotFound { name: name.to_string(), available }
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    /// All converters in registration order
    pub fn list(&self) -> Vec<&RegisteredConverter> {
        self.converters.values().collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.converters.keys().map(|k| k.as_str()).collect()
    }

    pub fn describe(&self) -> Vec<ConverterInfo> {
        self.converters.values().map(|c| c.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Converter names similar to `name`, best match first
    fn find_similar(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut matches: Vec<(&str, usize)> = self.converters.keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&query, &candidate.to_lowercase());
                (score > 0).then_some((candidate.as_str(), score))
            })
            .collect();

        // Stable sort keeps registration order among equal scores
        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(n, _)| n.to_string()).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;
        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Require a real overlap before counting shared characters
        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        if score == 0 && common * 2 < candidate_chars.len() {
            return 0;
        }
        score + common * 2
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.converters.values()).finish()
    }
}
