//! Battery capacity converter
//!
//! Two unit families:
//! - Charge: mAh, Ah (normalized to mAh)
//! - Energy: Wh, kWh (normalized to Wh)
//!
//! Within a family the conversion is a fixed ×1000 step and the voltage
//! parameter is never read. Crossing families uses Wh = Ah × V.

use quickconvert_core::ConvertError;
use quickconvert_plugin::{ConverterMeta, ParamDefault, ParamMeta, ParameterizedConverter, ResolvedParams};

use crate::scale::ScaleTable;

static BATTERY_UNITS: [&str; 4] = ["mAh", "Ah", "Wh", "kWh"];

static CHARGE_UNITS: [&str; 2] = ["mAh", "Ah"];
static MAH_PER_UNIT: [f64; 2] = [1.0, 1000.0];
static CHARGE: ScaleTable = ScaleTable::new("Battery", &CHARGE_UNITS, &MAH_PER_UNIT);

static ENERGY_UNITS: [&str; 2] = ["Wh", "kWh"];
static WH_PER_UNIT: [f64; 2] = [1.0, 1000.0];
static ENERGY: ScaleTable = ScaleTable::new("Battery", &ENERGY_UNITS, &WH_PER_UNIT);

const MAH_PER_AH: f64 = 1000.0;

/// Nominal lithium-ion cell voltage
const DEFAULT_VOLTAGE: &str = "3.7";

static BATTERY_PARAMS: [ParamMeta; 1] = [
    ParamMeta::required("voltage", "Voltage (V)", "Nominal battery voltage, used when converting between charge and energy")
        .with_default(ParamDefault::Text(DEFAULT_VOLTAGE)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Charge,
    Energy,
}

fn family(unit: &str) -> Result<Family, ConvertError> {
    if CHARGE_UNITS.contains(&unit) {
        Ok(Family::Charge)
    } else if ENERGY_UNITS.contains(&unit) {
        Ok(Family::Energy)
    } else {
        Err(ConvertError::invalid_unit("Battery", unit, &BATTERY_UNITS))
    }
}

fn voltage(params: &ResolvedParams) -> Result<f64, ConvertError> {
    let volts = params.require("voltage")?;
    if volts <= 0.0 {
        return Err(ConvertError::domain(format!("Voltage must be positive, got {}V", volts)));
    }
    Ok(volts)
}

pub struct Battery;

impl ParameterizedConverter for Battery {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            name: "Battery",
            description: "Battery charge and energy capacity",
            category: "energy",
            units: &BATTERY_UNITS,
        }
    }

    fn parameters(&self) -> &'static [ParamMeta] {
        &BATTERY_PARAMS
    }

    fn convert_between(&self, value: f64, from: &str, to: &str, params: &ResolvedParams) -> Result<f64, ConvertError> {
        match (family(from)?, family(to)?) {
            (Family::Charge, Family::Charge) => CHARGE.convert(value, from, to),
            (Family::Energy, Family::Energy) => ENERGY.convert(value, from, to),
            (Family::Charge, Family::Energy) => {
                let ah = value * CHARGE.factor(from)? / MAH_PER_AH;
                let wh = ah * voltage(params)?;
                Ok(wh / ENERGY.factor(to)?)
            }
            (Family::Energy, Family::Charge) => {
                let wh = value * ENERGY.factor(from)?;
                let ah = wh / voltage(params)?;
                Ok(ah * MAH_PER_AH / CHARGE.factor(to)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_close;
    use quickconvert_plugin::Params;

    fn at(volts: f64) -> Params {
        Params::new().with("voltage", volts)
    }

    #[test]
    fn test_charge_to_energy_at_default_voltage() {
        assert_close(Battery.convert(1000.0, "mAh", "Wh").unwrap(), 3.7);
        assert_close(Battery.convert(5000.0, "mAh", "kWh").unwrap(), 0.0185);
    }

    #[test]
    fn test_energy_to_charge() {
        assert_close(Battery.convert_with_params(12.0, "Wh", "Ah", &at(12.0)).unwrap(), 1.0);
        assert_close(Battery.convert_with_params(1.0, "kWh", "mAh", &at(48.0)).unwrap(), 20833.333333333332);
    }

    #[test]
    fn test_same_family_ignores_voltage() {
        let low = Battery.convert_with_params(2500.0, "mAh", "Ah", &at(1.2)).unwrap();
        let high = Battery.convert_with_params(2500.0, "mAh", "Ah", &at(400.0)).unwrap();
        assert_eq!(low, high);
        assert_eq!(low, 2.5);

        let low = Battery.convert_with_params(3.0, "kWh", "Wh", &at(1.2)).unwrap();
        let high = Battery.convert_with_params(3.0, "kWh", "Wh", &at(400.0)).unwrap();
        assert_eq!(low, high);
        assert_eq!(low, 3000.0);
    }

    #[test]
    fn test_same_family_accepts_any_voltage() {
        assert_eq!(Battery.convert_with_params(1.0, "Ah", "mAh", &at(-5.0)).unwrap(), 1000.0);
    }

    #[test]
    fn test_cross_family_rejects_non_positive_voltage() {
        for volts in [0.0, -3.7] {
            assert!(matches!(
                Battery.convert_with_params(1.0, "Ah", "Wh", &at(volts)),
                Err(ConvertError::Domain(_))
            ));
        }
    }

    #[test]
    fn test_voltage_text_input() {
        let params = Params::new().with("voltage", "7.4");
        assert_close(Battery.convert_with_params(2.0, "Ah", "Wh", &params).unwrap(), 14.8);

        let bad = Params::new().with("voltage", "high");
        assert!(matches!(
            Battery.convert_with_params(2.0, "Ah", "Wh", &bad),
            Err(ConvertError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_identity_ignores_parameters() {
        let bad = Params::new().with("voltage", "high");
        assert_eq!(Battery.convert_with_params(7.0, "Wh", "Wh", &bad).unwrap(), 7.0);
    }

    #[test]
    fn test_schema() {
        let params = Battery.parameters();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].key, "voltage");
        assert_eq!(params[0].label, "Voltage (V)");
        assert!(params[0].required);
        assert_eq!(params[0].default, Some(ParamDefault::Text("3.7")));
    }
}
