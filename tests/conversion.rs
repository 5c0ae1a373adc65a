//! 범용 단위 변환 회귀 테스트.
use approx::{assert_relative_eq, relative_eq};
use proptest::prelude::*;
use unit_converter_toolbox::catalog;
use unit_converter_toolbox::conversion::{
    convert, convert_all, convert_in, ConversionError,
};
use unit_converter_toolbox::quantity::UnitCategory;

fn linear_categories() -> Vec<UnitCategory> {
    UnitCategory::ALL
        .into_iter()
        .filter(|c| *c != UnitCategory::Temperature)
        .collect()
}

#[test]
fn length_meter_to_centimeter() {
    assert_eq!(convert(1.0, "m", "cm", "length").unwrap(), 100.0);
}

#[test]
fn length_foot_to_meter() {
    let m = convert(1.0, "ft", "m", "length").unwrap();
    assert_relative_eq!(m, 0.3048, epsilon = 1e-6);
}

#[test]
fn pressure_megapascal_to_psi() {
    let psi = convert(1.0, "MPa", "psi", "pressure").unwrap();
    assert_relative_eq!(psi, 145.038, epsilon = 1e-3);
}

#[test]
fn mass_short_ton_to_kg() {
    let kg = convert(1.0, "ton(미국)", "kg", "mass").unwrap();
    assert_relative_eq!(kg, 907.184, max_relative = 1e-12);
}

#[test]
fn energy_us_refrigeration_ton_to_kcal_per_hour() {
    let kcal = convert(1.0, "USRt", "kcal/h", "energy").unwrap();
    assert_relative_eq!(kcal, 3024.0, max_relative = 1e-12);
}

#[test]
fn flow_cubic_meter_per_hour_to_liter_per_minute() {
    // 1 m³/h = 1000 L / 60 min
    let lpm = convert(1.0, "m³/h", "L/min", "flow").unwrap();
    assert_relative_eq!(lpm, 1000.0 / 60.0, max_relative = 1e-12);
}

#[test]
fn temperature_fixed_points() {
    assert_eq!(convert(0.0, "°C", "°F", "temperature").unwrap(), 32.0);
    assert_eq!(convert(100.0, "°C", "°F", "temperature").unwrap(), 212.0);
    assert_eq!(convert(0.0, "°C", "K", "temperature").unwrap(), 273.15);
    assert_eq!(convert(32.0, "°F", "°C", "temperature").unwrap(), 0.0);
}

#[test]
fn temperature_pair_formulas() {
    let t = "temperature";
    assert_relative_eq!(convert(300.0, "K", "°C", t).unwrap(), 26.85, epsilon = 1e-9);
    assert_relative_eq!(convert(212.0, "°F", "K", t).unwrap(), 373.15, epsilon = 1e-9);
    assert_relative_eq!(convert(373.15, "K", "°F", t).unwrap(), 212.0, epsilon = 1e-9);
    assert_relative_eq!(convert(-40.0, "°C", "°F", t).unwrap(), -40.0, epsilon = 1e-12);
    assert_relative_eq!(convert(-40.0, "°F", "°C", t).unwrap(), -40.0, epsilon = 1e-12);
}

#[test]
fn self_conversion_is_exact_identity() {
    for category in UnitCategory::ALL {
        for unit in catalog::units_in(category) {
            for x in [0.0, 1.0, -17.3, 123_456.789, 1e-9] {
                assert_eq!(convert_in(category, x, unit, unit).unwrap(), x, "{category} {unit}");
            }
        }
    }
}

#[test]
fn unknown_category_is_reported() {
    let err = convert(1.0, "m", "cm", "speed").unwrap_err();
    assert_eq!(err, ConversionError::UnknownCategory("speed".to_string()));
}

#[test]
fn invalid_unit_is_reported() {
    let err = convert(1.0, "m", "parsec", "length").unwrap_err();
    assert_eq!(
        err,
        ConversionError::InvalidUnit {
            category: UnitCategory::Length,
            unit: "parsec".to_string(),
        }
    );
    let err = convert(1.0, "°C", "°R", "temperature").unwrap_err();
    assert!(matches!(err, ConversionError::InvalidUnit { category: UnitCategory::Temperature, .. }));
}

#[test]
fn units_from_other_categories_are_rejected() {
    assert!(convert(1.0, "kg", "m", "length").is_err());
    assert!(convert(1.0, "psi", "°F", "temperature").is_err());
}

#[test]
fn plain_spellings_are_accepted() {
    assert_eq!(convert(1.0, "m2", "cm2", "area").unwrap(), 10_000.0);
    assert_eq!(convert(100.0, "C", "F", "Temperature").unwrap(), 212.0);
    assert_relative_eq!(convert(1.0, "ft^3", "m3", "volume").unwrap(), 0.0283168, epsilon = 1e-6);
}

#[test]
fn symbol_case_is_significant() {
    for (from, to, category) in [
        ("mPa", "Pa", "pressure"),
        ("Mg", "kg", "mass"),
        ("PSI", "psi", "pressure"),
        ("c", "°F", "temperature"),
    ] {
        assert!(
            matches!(
                convert(1.0, from, to, category),
                Err(ConversionError::InvalidUnit { .. })
            ),
            "{from} should not resolve in {category}"
        );
    }
}

#[test]
fn convert_all_follows_table_order() {
    let rows = convert_all(1.0, "m", "length").unwrap();
    let units: Vec<_> = rows.iter().map(|(u, _)| *u).collect();
    assert_eq!(units, catalog::units_in(UnitCategory::Length));
    assert_eq!(rows[0], ("m", 1.0));
    assert_eq!(rows[1], ("cm", 100.0));
    assert_eq!(rows[2], ("mm", 1000.0));
}

#[test]
fn convert_all_temperature_row() {
    let rows = convert_all(100.0, "°C", "temperature").unwrap();
    assert_eq!(rows, vec![("°C", 100.0), ("°F", 212.0), ("K", 373.15)]);
}

#[test]
fn convert_all_rejects_bad_source_unit() {
    assert!(matches!(
        convert_all(1.0, "furlong", "length"),
        Err(ConversionError::InvalidUnit { .. })
    ));
}

proptest! {
    #[test]
    fn round_trip_returns_input(
        category in prop::sample::select(linear_categories()),
        a in 0usize..16,
        b in 0usize..16,
        x in -1.0e6f64..1.0e6,
    ) {
        let units = catalog::units_in(category);
        let from = units[a % units.len()];
        let to = units[b % units.len()];
        let there = convert_in(category, x, from, to).unwrap();
        let back = convert_in(category, there, to, from).unwrap();
        prop_assert!(
            relative_eq!(back, x, epsilon = 1e-9, max_relative = 1e-9),
            "{category}: {x} {from} -> {there} {to} -> {back}"
        );
    }

    #[test]
    fn temperature_round_trip(a in 0usize..3, b in 0usize..3, x in -500.0f64..5000.0) {
        let units = catalog::units_in(UnitCategory::Temperature);
        let there = convert_in(UnitCategory::Temperature, x, units[a], units[b]).unwrap();
        let back = convert_in(UnitCategory::Temperature, there, units[b], units[a]).unwrap();
        prop_assert!(relative_eq!(back, x, epsilon = 1e-9, max_relative = 1e-12));
    }

    #[test]
    fn linear_conversion_is_homogeneous(
        category in prop::sample::select(linear_categories()),
        a in 0usize..16,
        b in 0usize..16,
        x in -1.0e3f64..1.0e3,
        k in -1.0e3f64..1.0e3,
    ) {
        let units = catalog::units_in(category);
        let from = units[a % units.len()];
        let to = units[b % units.len()];
        let scaled = convert_in(category, k * x, from, to).unwrap();
        let expected = k * convert_in(category, x, from, to).unwrap();
        prop_assert!(relative_eq!(scaled, expected, epsilon = 1e-9, max_relative = 1e-9));
    }
}
