//! QuickConvert - Unit conversion through pluggable converters

mod config;
mod form;

pub use config::{Config, ConfigError, LOG_ENV, PRECISION_ENV};
pub use form::{ConverterForm, FormOutput, INVALID_INPUT_MESSAGE};

pub use quickconvert_core::{
    codes, format_value, parse_number, ConvertError, ErrorReport, NumberError, ParamValue, Severity,
};
pub use quickconvert_plugin::{
    Converter, ConverterInfo, ConverterMeta, ConverterRegistry, ParamDefault, ParamMeta,
    ParameterizedConverter, Params, RegisteredConverter, ResolvedParams,
};
pub use quickconvert_units::{Battery, DataSize, Length, Temperature, Weight};

use tracing::info;

/// Create registry with the built-in converters
pub fn standard_registry() -> Result<ConverterRegistry, ConvertError> {
    quickconvert_units::load_units_library(ConverterRegistry::new())
}

/// Main QuickConvert engine: a populated registry plus display settings
pub struct QuickConvert {
    registry: ConverterRegistry,
    config: Config,
}

impl QuickConvert {
    pub fn new(registry: ConverterRegistry, config: Config) -> Self {
        info!(converters = registry.len(), precision = config.precision, "converter registry ready");
        Self { registry, config }
    }

    pub fn with_standard_library(config: Config) -> Result<Self, ConvertError> {
        Ok(Self::new(standard_registry()?, config))
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn convert(&self, converter: &str, value: f64, from: &str, to: &str, params: &Params) -> Result<f64, ConvertError> {
        self.registry.get(converter)?.convert_with_params(value, from, to, params)
    }

    /// Format a result with the configured significant figures
    pub fn format(&self, value: f64) -> String {
        format_value(value, self.config.precision)
    }

    pub fn describe(&self) -> Vec<ConverterInfo> {
        self.registry.describe()
    }

    /// A form bound to this engine's registry, first converter selected
    pub fn form(&self) -> ConverterForm<'_> {
        ConverterForm::new(&self.registry, self.config.precision)
    }
}
