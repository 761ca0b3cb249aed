//! Linear scale tables

use quickconvert_core::ConvertError;

/// Units of one quantity with their size in a shared base unit
pub(crate) struct ScaleTable {
    pub converter: &'static str,
    pub units: &'static [&'static str],
    /// `factors[i]` base units make one `units[i]`
    pub factors: &'static [f64],
}

impl ScaleTable {
    pub const fn new(converter: &'static str, units: &'static [&'static str], factors: &'static [f64]) -> Self {
        assert!(units.len() == factors.len(), "every unit needs a factor");
        Self { converter, units, factors }
    }

    pub fn factor(&self, unit: &str) -> Result<f64, ConvertError> {
        self.units
            .iter()
            .position(|u| *u == unit)
            .map(|i| self.factors[i])
            .ok_or_else(|| ConvertError::invalid_unit(self.converter, unit, self.units))
    }

    /// value × factor(from) ÷ factor(to)
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        let base = value * self.factor(from)?;
        Ok(base / self.factor(to)?)
    }
}
