//! 결과값 반올림과 표시용 문자열 생성.
//!
//! 반올림은 0에서 먼 쪽으로(half away from zero) 처리한다. 음수도 양수와 대칭이다.

use sys_locale::get_locale;

use crate::material::{property_unit, UnitSystem};

/// 물성값 기본 소수 자릿수.
pub const DEFAULT_DECIMALS: u32 = 2;
/// 설정에서 허용하는 최대 소수 자릿수.
pub const MAX_DECIMALS: u32 = 10;

/// 숫자 구분 기호 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLocale {
    /// `1,234.5` (ko, en 등)
    #[default]
    Comma,
    /// `1.234,5` (de, fr 등)
    Period,
}

impl NumberLocale {
    /// 언어/로케일 코드(`ko-KR`, `de_DE.UTF-8` ...)로 규칙을 정한다.
    pub fn from_code(code: &str) -> Self {
        let lang = code
            .split(['.', '_', '-'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match lang.as_str() {
            "de" | "fr" | "es" | "it" | "nl" | "pt" | "ru" | "tr" | "id" => NumberLocale::Period,
            _ => NumberLocale::Comma,
        }
    }

    /// 시스템 로케일에서 규칙을 추정한다.
    pub fn detect() -> Self {
        get_locale()
            .map(|loc| Self::from_code(&loc))
            .unwrap_or_default()
    }

    pub fn group_separator(self) -> char {
        match self {
            NumberLocale::Comma => ',',
            NumberLocale::Period => '.',
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            NumberLocale::Comma => '.',
            NumberLocale::Period => ',',
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = value * scale;
    // f64 로 표현할 수 없는 자릿수까지 반올림하는 것은 값을 그대로 두는 것과 같다
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// 값을 지정된 소수 자릿수로 반올림한다. 값이 없으면 None.
pub fn round_to_decimal_places(value: Option<f64>, decimals: u32) -> Option<f64> {
    value.map(|v| round_to(v, decimals))
}

/// 반올림 후 자릿수 구분 기호를 넣어 표시한다. 소수부 끝의 0은 지운다.
pub fn format_grouped(value: f64, max_fraction_digits: u32, locale: NumberLocale) -> String {
    let rounded = round_to(value, max_fraction_digits);
    if !rounded.is_finite() {
        return rounded.to_string();
    }
    // -0 은 0 으로 표시
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let text = format!("{:.*}", max_fraction_digits as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (text.as_str(), ""),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.group_separator()));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// 변환 결과 표시용. 자릿수 안에서 0으로 사라지는 작은 값은 지수 표기로 보여준다.
pub fn format_result(value: f64, decimals: u32, locale: NumberLocale) -> String {
    if value != 0.0 && value.is_finite() && round_to(value, decimals) == 0.0 {
        return format!("{:.*e}", decimals.max(1) as usize, value);
    }
    format_grouped(value, decimals, locale)
}

/// 정수로 반올림해 구분 기호와 함께 표시한다.
pub fn format_number(value: f64, locale: NumberLocale) -> String {
    format_grouped(value, 0, locale)
}

/// 쉼표 구분 기호가 들어간 숫자 문자열을 읽는다. 읽을 수 없거나 유한하지 않으면 0.
pub fn parse_number(text: &str) -> f64 {
    text.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// 물성값을 단위와 함께 표시한다. 값이 없거나 알 수 없는 물성이면 `-`.
pub fn format_property_value(
    key: &str,
    value: Option<f64>,
    use_si: bool,
    decimals: u32,
) -> String {
    format_property_value_in(NumberLocale::detect(), key, value, use_si, decimals)
}

/// [`format_property_value`] 와 같되 숫자 구분 규칙을 직접 지정한다.
pub fn format_property_value_in(
    locale: NumberLocale,
    key: &str,
    value: Option<f64>,
    use_si: bool,
    decimals: u32,
) -> String {
    let (Some(value), Some(unit)) = (value, property_unit(key)) else {
        return "-".to_string();
    };
    let system = if use_si {
        UnitSystem::SI
    } else {
        UnitSystem::Imperial
    };
    format!(
        "{} {}",
        format_grouped(value, decimals, locale),
        unit.label(system)
    )
}
