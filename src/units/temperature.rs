use serde::{Deserialize, Serialize};

use super::{UnitDef, UnitTable};

/// 섭씨와 켈빈의 원점 차이.
pub const KELVIN_OFFSET: f64 = 273.15;
/// 화씨 빙점.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        TABLE.find(s).and_then(|def| {
            Self::ALL
                .into_iter()
                .find(|unit| unit.symbol() == def.symbol)
        })
    }
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

/// 온도 단위 표. 기준은 섭씨이며 화씨/켈빈은 아핀 변환으로 정의한다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "°C",
    units: &[
        UnitDef::linear("°C", 1.0),
        UnitDef::affine("°F", fahrenheit_to_celsius, celsius_to_fahrenheit),
        UnitDef::affine("K", kelvin_to_celsius, celsius_to_kelvin),
    ],
};

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        TemperatureUnit::Kelvin => kelvin_to_celsius(value),
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(value_c),
        TemperatureUnit::Kelvin => celsius_to_kelvin(value_c),
    }
}

/// 온도를 서로 다른 단위로 변환한다. 같은 단위끼리는 값을 그대로 돌려준다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let c = to_celsius(value, from);
    from_celsius(c, to)
}
