//! QuickConvert Units - Built-in converters
//!
//! Converters:
//! - Length (m, km, cm, mm, mile, yard, ft, inch)
//! - Temperature (°C, °F, K)
//! - Weight (kg, g, mg, ton, lb, oz)
//! - Battery (mAh, Ah, Wh, kWh; voltage parameter)
//! - Data Size (bit, byte, KB..TB, KiB..TiB)
//!
//! Linear converters share a scale table normalized to one base unit.
//! Temperature pivots through Celsius. Battery normalizes within each
//! family and crosses families through the voltage parameter.

mod scale;
mod length;
mod weight;
mod temperature;
mod battery;
mod data_size;

pub use length::Length;
pub use weight::Weight;
pub use temperature::Temperature;
pub use battery::Battery;
pub use data_size::DataSize;

use quickconvert_core::ConvertError;
use quickconvert_plugin::ConverterRegistry;

/// Load the built-in converters into registry, in menu order
pub fn load_units_library(registry: ConverterRegistry) -> Result<ConverterRegistry, ConvertError> {
    registry
        .with_converter(Length)?
        .with_converter(Temperature)?
        .with_converter(Weight)?
        .with_parameterized(Battery)?
        .with_converter(DataSize)
}
