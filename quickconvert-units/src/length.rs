//! Length converter (base unit: meter)

use quickconvert_core::ConvertError;
use quickconvert_plugin::{Converter, ConverterMeta};

use crate::scale::ScaleTable;

static LENGTH_UNITS: [&str; 8] = ["m", "km", "cm", "mm", "mile", "yard", "ft", "inch"];

// Meters per unit; international yard and pound agreement values
static METERS_PER_UNIT: [f64; 8] = [
    1.0,
    1000.0,
    0.01,
    0.001,
    1609.344,
    0.9144,
    0.3048,
    0.0254,
];

static LENGTH: ScaleTable = ScaleTable::new("Length", &LENGTH_UNITS, &METERS_PER_UNIT);

pub struct Length;

impl Converter for Length {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "Length",
            description: "Metric and imperial lengths",
            category: "length",
            units: &LENGTH_UNITS,
        }
    }

    fn convert_between(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        LENGTH.convert(value, from, to)
    }
}
