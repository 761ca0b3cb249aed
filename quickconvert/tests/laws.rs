//! Algebraic laws every registered converter obeys

use proptest::prelude::*;
use quickconvert::{standard_registry, ConverterRegistry, Params};

fn registry() -> ConverterRegistry {
    standard_registry().expect("built-in converters register cleanly")
}

fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}

/// (converter, from, to) for every ordered unit pair of every converter
fn unit_pairs(names: &'static [&'static str]) -> Vec<(&'static str, &'static str, &'static str)> {
    let registry = registry();
    let mut pairs = Vec::new();
    for name in names {
        let units = registry.get(name).unwrap().units();
        for from in units {
            for to in units {
                pairs.push((*name, *from, *to));
            }
        }
    }
    pairs
}

static ALL: [&str; 5] = ["Length", "Temperature", "Weight", "Battery", "Data Size"];
static LINEAR: [&str; 3] = ["Length", "Weight", "Data Size"];

proptest! {
    #[test]
    fn identity_is_exact(
        (name, unit, _) in prop::sample::select(unit_pairs(&ALL)),
        value in -1e12f64..1e12,
    ) {
        let registry = registry();
        let converter = registry.get(name).unwrap();
        prop_assert_eq!(converter.convert(value, unit, unit).unwrap(), value);
    }

    #[test]
    fn round_trip_restores_value(
        (name, from, to) in prop::sample::select(unit_pairs(&ALL)),
        value in -1e9f64..1e9,
        voltage in 0.5f64..500.0,
    ) {
        let registry = registry();
        let converter = registry.get(name).unwrap();
        let params = if converter.is_parameterized() {
            Params::new().with("voltage", voltage)
        } else {
            Params::new()
        };

        let there = converter.convert_with_params(value, from, to, &params).unwrap();
        let back = converter.convert_with_params(there, to, from, &params).unwrap();
        prop_assert!(close(back, value), "{} {} -> {} -> {}: {} vs {}", name, from, to, from, back, value);
    }

    #[test]
    fn linear_conversions_compose(
        (name, a, b) in prop::sample::select(unit_pairs(&LINEAR)),
        c_index in 0usize..10,
        value in -1e9f64..1e9,
    ) {
        let registry = registry();
        let converter = registry.get(name).unwrap();
        let units = converter.units();
        let c = units[c_index % units.len()];

        let stepwise = converter.convert(converter.convert(value, a, b).unwrap(), b, c).unwrap();
        let direct = converter.convert(value, a, c).unwrap();
        prop_assert!(close(stepwise, direct), "{}: {} via {} to {}: {} vs {}", name, a, b, c, stepwise, direct);
    }

    #[test]
    fn battery_same_family_ignores_voltage(
        value in 0f64..1e6,
        x in 0.1f64..1000.0,
        y in 0.1f64..1000.0,
    ) {
        let registry = registry();
        let battery = registry.get("Battery").unwrap();
        for (from, to) in [("mAh", "Ah"), ("Ah", "mAh"), ("Wh", "kWh"), ("kWh", "Wh")] {
            let at_x = battery.convert_with_params(value, from, to, &Params::new().with("voltage", x)).unwrap();
            let at_y = battery.convert_with_params(value, from, to, &Params::new().with("voltage", y)).unwrap();
            prop_assert_eq!(at_x, at_y);
        }
    }
}
