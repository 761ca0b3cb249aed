//! Data size converter (base unit: bit)
//!
//! KB/MB/GB/TB use the same base-1024 multipliers as KiB/MiB/GiB/TiB,
//! matching how file sizes are shown by most desktop tools. The two label
//! families are numerically identical.

use quickconvert_core::ConvertError;
use quickconvert_plugin::{Converter, ConverterMeta};

use crate::scale::ScaleTable;

const BITS_PER_BYTE: f64 = 8.0;
const KIB: f64 = BITS_PER_BYTE * 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;

static DATA_UNITS: [&str; 10] = [
    "bit", "byte",
    "KB", "MB", "GB", "TB",
    "KiB", "MiB", "GiB", "TiB",
];

static BITS_PER_UNIT: [f64; 10] = [
    1.0, BITS_PER_BYTE,
    KIB, MIB, GIB, TIB,
    KIB, MIB, GIB, TIB,
];

static DATA_SIZE: ScaleTable = ScaleTable::new("Data Size", &DATA_UNITS, &BITS_PER_UNIT);

pub struct DataSize;

impl Converter for DataSize {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "Data Size",
            description: "Bits, bytes and base-1024 multiples",
            category: "data",
            units: &DATA_UNITS,
        }
    }

    fn convert_between(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        DATA_SIZE.convert(value, from, to)
    }
}
