//! 반올림/표시 형식 테스트.
use unit_converter_toolbox::format::{
    format_grouped, format_number, format_property_value, format_property_value_in,
    format_result, parse_number, round_to_decimal_places, NumberLocale, DEFAULT_DECIMALS,
};

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_to_decimal_places(Some(1.125), 2), Some(1.13));
    assert_eq!(round_to_decimal_places(Some(-1.125), 2), Some(-1.13));
    assert_eq!(round_to_decimal_places(Some(2.5), 0), Some(3.0));
    assert_eq!(round_to_decimal_places(Some(-2.5), 0), Some(-3.0));
    assert_eq!(round_to_decimal_places(Some(3.14159), DEFAULT_DECIMALS), Some(3.14));
}

#[test]
fn rounding_beyond_f64_precision_keeps_value() {
    assert_eq!(round_to_decimal_places(Some(1.5), 400), Some(1.5));
    assert_eq!(round_to_decimal_places(Some(-0.1), u32::MAX), Some(-0.1));
}

#[test]
fn rounding_missing_value() {
    assert_eq!(round_to_decimal_places(None, 2), None);
}

#[test]
fn grouped_formatting() {
    assert_eq!(format_grouped(1_234_567.891, 2, NumberLocale::Comma), "1,234,567.89");
    assert_eq!(format_grouped(1_234_567.891, 2, NumberLocale::Period), "1.234.567,89");
    assert_eq!(format_grouped(1.5, 2, NumberLocale::Comma), "1.5");
    assert_eq!(format_grouped(100.0, 2, NumberLocale::Comma), "100");
    assert_eq!(format_grouped(999.0, 2, NumberLocale::Comma), "999");
    assert_eq!(format_grouped(-1234.5, 1, NumberLocale::Comma), "-1,234.5");
    assert_eq!(format_grouped(-0.001, 2, NumberLocale::Comma), "0");
}

#[test]
fn integer_formatting_and_parsing() {
    assert_eq!(format_number(1234.5, NumberLocale::Comma), "1,235");
    assert_eq!(format_number(1_000_000.0, NumberLocale::Period), "1.000.000");
    assert_eq!(parse_number("1,234.5"), 1234.5);
    assert_eq!(parse_number(" 42 "), 42.0);
    assert_eq!(parse_number("abc"), 0.0);
    assert_eq!(parse_number("NaN"), 0.0);
    assert_eq!(parse_number(""), 0.0);
}

#[test]
fn small_results_switch_to_exponent() {
    assert_eq!(format_result(0.000621371, 2, NumberLocale::Comma), "6.21e-4");
    assert_eq!(format_result(0.0, 2, NumberLocale::Comma), "0");
    assert_eq!(format_result(3.28084, 2, NumberLocale::Comma), "3.28");
}

#[test]
fn property_value_with_unit_label() {
    let c = NumberLocale::Comma;
    assert_eq!(format_property_value_in(c, "den", Some(7861.093), true, 2), "7,861.09 kg/m³");
    assert_eq!(format_property_value_in(c, "yield_str", Some(36_000.0), false, 2), "36,000 psi");
    assert_eq!(format_property_value_in(c, "max_bed_temp", Some(60.0), true, 2), "60 °C");
    assert_eq!(format_property_value_in(c, "elongation", Some(12.345), false, 1), "12.3 %");
}

#[test]
fn property_value_missing_or_unknown() {
    assert_eq!(format_property_value("den", None, true, 2), "-");
    assert_eq!(format_property_value("hardness", Some(3.0), false, 2), "-");
    assert_eq!(format_property_value_in(NumberLocale::Period, "moe", None, false, 2), "-");
}

#[test]
fn locale_codes() {
    assert_eq!(NumberLocale::from_code("de_DE.UTF-8"), NumberLocale::Period);
    assert_eq!(NumberLocale::from_code("ko-KR"), NumberLocale::Comma);
    assert_eq!(NumberLocale::from_code("en"), NumberLocale::Comma);
    assert_eq!(NumberLocale::from_code(""), NumberLocale::Comma);
}
