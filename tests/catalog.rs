//! 단위 표 불변식 테스트.
use std::collections::HashSet;

use unit_converter_toolbox::catalog;
use unit_converter_toolbox::conversion::ConversionError;
use unit_converter_toolbox::quantity::{CategoryGroup, UnitCategory};
use unit_converter_toolbox::units::{convert_temperature, TemperatureUnit};

#[test]
fn base_unit_factor_is_one() {
    for category in UnitCategory::ALL {
        let factor = catalog::factor_in(category, category.base_unit()).unwrap();
        assert_eq!(factor, 1.0, "{category}");
    }
}

#[test]
fn base_unit_is_listed_exactly_once() {
    for category in UnitCategory::ALL {
        let units = catalog::units_in(category);
        let hits = units.iter().filter(|u| **u == category.base_unit()).count();
        assert_eq!(hits, 1, "{category}");
        let unique: HashSet<_> = units.iter().collect();
        assert_eq!(unique.len(), units.len(), "duplicate symbol in {category}");
    }
}

#[test]
fn linear_factors_are_positive() {
    for category in UnitCategory::ALL {
        for def in category.table().units {
            if let Some(f) = def.factor() {
                assert!(f > 0.0 && f.is_finite(), "{category} {}", def.symbol);
            }
        }
    }
}

#[test]
fn units_for_category_by_key() {
    assert_eq!(
        catalog::units_for_category("length").unwrap(),
        vec!["m", "cm", "mm", "km", "in", "ft", "yd", "mile"]
    );
    assert_eq!(
        catalog::units_for_category("enthalpy").unwrap(),
        vec!["kJ/kg", "kcal/kg", "BTU/lb"]
    );
    assert_eq!(
        catalog::units_for_category("volume").unwrap(),
        vec!["m³", "L", "cm³", "in³", "ft³", "gal (US)"]
    );
}

#[test]
fn unknown_category_lookup_fails() {
    assert_eq!(
        catalog::units_for_category("velocity"),
        Err(ConversionError::UnknownCategory("velocity".to_string()))
    );
    assert!(catalog::base_unit("").is_err());
}

#[test]
fn factor_lookup() {
    assert_eq!(catalog::factor("pressure", "bar").unwrap(), 0.000_01);
    assert_eq!(catalog::factor("length", "mm").unwrap(), 1000.0);
    assert!(matches!(
        catalog::factor("length", "ly"),
        Err(ConversionError::InvalidUnit { .. })
    ));
}

#[test]
fn temperature_offsets_have_no_factor() {
    assert_eq!(catalog::factor("temperature", "°C").unwrap(), 1.0);
    assert_eq!(
        catalog::factor("temperature", "°F"),
        Err(ConversionError::NotLinear {
            category: UnitCategory::Temperature,
            unit: "°F",
        })
    );
}

#[test]
fn base_units() {
    assert_eq!(catalog::base_unit("pressure").unwrap(), "Pa");
    assert_eq!(catalog::base_unit("energy").unwrap(), "kcal/h");
    assert_eq!(UnitCategory::Flow.base_unit(), "m³/s");
}

#[test]
fn groups_cover_every_category_once() {
    let mut seen = Vec::new();
    for group in CategoryGroup::ALL {
        for category in catalog::categories_in(group) {
            assert_eq!(category.group(), group);
            seen.push(*category);
        }
    }
    seen.sort();
    let mut all = catalog::categories().to_vec();
    all.sort();
    assert_eq!(seen, all);
}

#[test]
fn category_keys_round_trip() {
    for category in UnitCategory::ALL {
        assert_eq!(category.key().parse::<UnitCategory>().unwrap(), category);
        assert_eq!(category.to_string(), category.key());
    }
    assert_eq!(" Pressure ".parse::<UnitCategory>().unwrap(), UnitCategory::Pressure);
}

#[test]
fn typed_temperature_conversion() {
    assert_eq!(
        convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        212.0
    );
    assert_eq!(
        convert_temperature(0.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
        273.15
    );
    assert_eq!(TemperatureUnit::from_symbol("K"), Some(TemperatureUnit::Kelvin));
    assert_eq!(TemperatureUnit::from_symbol("F"), Some(TemperatureUnit::Fahrenheit));
    assert_eq!(TemperatureUnit::from_symbol("f"), None);
    assert_eq!(TemperatureUnit::from_symbol("R"), None);
}
