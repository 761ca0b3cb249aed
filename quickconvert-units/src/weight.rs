//! Weight converter (base unit: kilogram)

use quickconvert_core::ConvertError;
use quickconvert_plugin::{Converter, ConverterMeta};

use crate::scale::ScaleTable;

static WEIGHT_UNITS: [&str; 6] = ["kg", "g", "mg", "ton", "lb", "oz"];

// "ton" is the metric tonne
static KILOGRAMS_PER_UNIT: [f64; 6] = [
    1.0,
    0.001,
    0.000001,
    1000.0,
    0.45359237,
    0.028349523125,
];

static WEIGHT: ScaleTable = ScaleTable::new("Weight", &WEIGHT_UNITS, &KILOGRAMS_PER_UNIT);

pub struct Weight;

impl Converter for Weight {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "Weight",
            description: "Metric and avoirdupois masses",
            category: "mass",
            units: &WEIGHT_UNITS,
        }
    }

    fn convert_between(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        WEIGHT.convert(value, from, to)
    }
}
