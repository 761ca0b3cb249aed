//! Temperature converter
//!
//! Temperature scales are affine, not proportional, so every conversion
//! goes through Celsius:
//! - F = C × 9/5 + 32
//! - K = C + 273.15

use quickconvert_core::ConvertError;
use quickconvert_plugin::{Converter, ConverterMeta};

static TEMPERATURE_UNITS: [&str; 3] = ["°C", "°F", "K"];

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

pub struct Temperature;

impl Temperature {
    fn to_celsius(value: f64, unit: &str) -> Result<f64, ConvertError> {
        match unit {
            "°C" => Ok(value),
            "°F" => Ok((value - FAHRENHEIT_OFFSET) / 9.0 * 5.0),
            "K" => Ok(value - KELVIN_OFFSET),
            other => Err(ConvertError::invalid_unit("Temperature", other, &TEMPERATURE_UNITS)),
        }
    }

    fn from_celsius(celsius: f64, unit: &str) -> Result<f64, ConvertError> {
        match unit {
            "°C" => Ok(celsius),
            "°F" => Ok(celsius / 5.0 * 9.0 + FAHRENHEIT_OFFSET),
            "K" => Ok(celsius + KELVIN_OFFSET),
            other => Err(ConvertError::invalid_unit("Temperature", other, &TEMPERATURE_UNITS)),
        }
    }
}

impl Converter for Temperature {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "Temperature",
            description: "Celsius, Fahrenheit and Kelvin",
            category: "temperature",
            units: &TEMPERATURE_UNITS,
        }
    }

    fn convert_between(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        let celsius = Self::to_celsius(value, from)?;
        Self::from_celsius(celsius, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;

    #[test]
    fn test_boiling_point() {
        assert_eq!(Temperature.convert(100.0, "°C", "°F").unwrap(), 212.0);
        assert_close(Temperature.convert(212.0, "°F", "°C").unwrap(), 100.0);
        assert_close(Temperature.convert(100.0, "°C", "K").unwrap(), 373.15);
    }

    #[test]
    fn test_freezing_point() {
        assert_eq!(Temperature.convert(0.0, "°C", "°F").unwrap(), 32.0);
        assert_close(Temperature.convert(0.0, "°C", "K").unwrap(), 273.15);
        assert_close(Temperature.convert(32.0, "°F", "K").unwrap(), 273.15);
        assert_close(Temperature.convert(273.15, "K", "°F").unwrap(), 32.0);
        assert_close(Temperature.convert(273.15, "K", "°C").unwrap(), 0.0);
    }

    #[test]
    fn test_scales_meet_at_minus_forty() {
        assert_close(Temperature.convert(-40.0, "°C", "°F").unwrap(), -40.0);
    }

    #[test]
    fn test_absolute_zero() {
        assert_close(Temperature.convert(0.0, "K", "°C").unwrap(), -273.15);
        assert_close(Temperature.convert(0.0, "K", "°F").unwrap(), -459.67);
    }

    #[test]
    fn test_extreme_values_stay_finite() {
        let celsius = Temperature.convert(-1e308, "°F", "°C").unwrap();
        assert_close(celsius, -1e308 / 9.0 * 5.0);
        assert!(celsius.is_finite());

        let fahrenheit = Temperature.convert(-5e307, "°C", "°F").unwrap();
        assert_close(fahrenheit, -9e307);
    }

    #[test]
    fn test_plain_letters_are_not_units() {
        assert!(matches!(
            Temperature.convert(1.0, "C", "F"),
            Err(ConvertError::InvalidUnit { .. })
        ));
    }
}
