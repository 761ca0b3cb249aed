//! Headless conversion form
//!
//! Models the state behind a converter window: the selected converter,
//! the two unit pickers, the value field and one field per declared
//! parameter. Every change recomputes the output, so a front end only has
//! to forward input events and render `output()`.

use quickconvert_core::{format_value, parse_number, ConvertError, ParamValue};
use quickconvert_plugin::{ConverterRegistry, ParamMeta, Params, RegisteredConverter};
use tracing::debug;

/// Shown when the value field holds something that is not a number
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number";

/// What the result field shows
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutput {
    /// Nothing to convert yet
    Empty,
    /// Formatted conversion result
    Value(String),
    /// The value field does not hold a number
    Invalid(String),
    /// The conversion itself failed
    Error(ConvertError),
}

impl FormOutput {
    /// Text for the result field or status line
    pub fn display(&self) -> String {
        match self {
            FormOutput::Empty => String::new(),
            FormOutput::Value(s) | FormOutput::Invalid(s) => s.clone(),
            FormOutput::Error(e) => e.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormOutput::Invalid(_) | FormOutput::Error(_))
    }
}

pub struct ConverterForm<'r> {
    registry: &'r ConverterRegistry,
    active: Option<&'r RegisteredConverter>,
    from_unit: String,
    to_unit: String,
    input: String,
    params: Params,
    precision: usize,
    output: FormOutput,
}

impl<'r> ConverterForm<'r> {
    /// A form over `registry` with its first converter selected
    pub fn new(registry: &'r ConverterRegistry, precision: usize) -> Self {
        let mut form = Self {
            registry,
            active: None,
            from_unit: String::new(),
            to_unit: String::new(),
            input: String::new(),
            params: Params::new(),
            precision,
            output: FormOutput::Empty,
        };
        if let Some(&first) = registry.list().first() {
            form.activate(first);
        }
        form
    }

    /// Switch converters. Units reset to the first two of the new
    /// converter, parameter fields to their defaults, the value field is
    /// cleared. An unknown name leaves the current selection in place and
    /// shows the error.
    pub fn select(&mut self, name: &str) -> Result<(), ConvertError> {
        let registry = self.registry;
        match registry.get(name) {
            Ok(converter) => {
                self.activate(converter);
                Ok(())
            }
            Err(e) => {
                self.output = FormOutput::Error(e.clone());
                Err(e)
            }
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> &FormOutput {
        self.input = text.into();
        self.recompute()
    }

    pub fn set_from_unit(&mut self, unit: impl Into<String>) -> &FormOutput {
        self.from_unit = unit.into();
        self.recompute()
    }

    pub fn set_to_unit(&mut self, unit: impl Into<String>) -> &FormOutput {
        self.to_unit = unit.into();
        self.recompute()
    }

    pub fn set_param(&mut self, key: &str, text: impl Into<String>) -> &FormOutput {
        self.params.set(key, ParamValue::Text(text.into()));
        self.recompute()
    }

    pub fn swap_units(&mut self) -> &FormOutput {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        self.recompute()
    }

    pub fn output(&self) -> &FormOutput {
        &self.output
    }

    pub fn active_name(&self) -> Option<&'static str> {
        self.active.map(|c| c.name())
    }

    pub fn units(&self) -> &'static [&'static str] {
        self.active.map(|c| c.units()).unwrap_or(&[])
    }

    /// Parameter fields to render; empty for plain converters
    pub fn parameters(&self) -> &'static [ParamMeta] {
        self.active.map(|c| c.parameters()).unwrap_or(&[])
    }

    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    fn activate(&mut self, converter: &'r RegisteredConverter) {
        let units = converter.units();
        self.from_unit = units.first().map(|u| u.to_string()).unwrap_or_default();
        self.to_unit = units.get(1).or(units.first()).map(|u| u.to_string()).unwrap_or_default();
        self.params = converter.parameters().iter()
            .filter_map(|p| p.default.map(|d| (p.key, d.to_value())))
            .collect();
        self.input.clear();
        self.active = Some(converter);
        debug!(converter = converter.name(), "form selected converter");
        self.recompute();
    }

    fn recompute(&mut self) -> &FormOutput {
        self.output = match self.active {
            None => FormOutput::Empty,
            Some(_) if self.input.trim().is_empty() => FormOutput::Empty,
            Some(converter) => match parse_number(&self.input) {
                Err(_) => FormOutput::Invalid(INVALID_INPUT_MESSAGE.to_string()),
                Ok(value) => match converter.convert_with_params(value, &self.from_unit, &self.to_unit, &self.params) {
                    Ok(result) => FormOutput::Value(format_value(result, self.precision)),
                    Err(e) => FormOutput::Error(e),
                },
            },
        };
        &self.output
    }
}
