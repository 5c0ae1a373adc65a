//! 재료 물성값의 영국단위 ↔ SI 단위 변환.
//!
//! 물성 데이터는 영국단위(lb/in³, psi, °F ...)로 수집된 것을 기본으로 한다.
//! 값이 없는 물성(`None`)은 오류가 아니라 "데이터 없음"으로 그대로 전달된다.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::temperature::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// lb/in³ → kg/m³
pub const DENSITY_FACTOR: f64 = 27679.9047;
/// psi → MPa
pub const STRESS_FACTOR: f64 = 0.00689476;
/// psi → GPa
pub const MODULUS_FACTOR: f64 = STRESS_FACTOR / 1000.0;
/// μin/in/°F → μm/m/°C
pub const THERMAL_EXPANSION_FACTOR: f64 = 1.8;

/// 물성값을 표시할 단위계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Imperial,
    SI,
}

impl UnitSystem {
    pub fn is_si(self) -> bool {
        self == UnitSystem::SI
    }
}

/// 물성 하나의 환산 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyConversion {
    /// `si = imperial * factor`
    Factor(f64),
    /// °F ↔ °C
    Temperature,
    /// 무차원(%) 값. 그대로 통과한다.
    Dimensionless,
}

/// 물성의 단위 표기와 환산 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyUnit {
    pub imperial: &'static str,
    pub si: &'static str,
    pub conversion: PropertyConversion,
}

impl PropertyUnit {
    pub fn to_si(&self, value: f64) -> f64 {
        match self.conversion {
            PropertyConversion::Temperature => fahrenheit_to_celsius(value),
            PropertyConversion::Factor(factor) => value * factor,
            PropertyConversion::Dimensionless => value,
        }
    }

    pub fn to_imperial(&self, value: f64) -> f64 {
        match self.conversion {
            PropertyConversion::Temperature => celsius_to_fahrenheit(value),
            PropertyConversion::Factor(factor) => value / factor,
            PropertyConversion::Dimensionless => value,
        }
    }

    pub fn label(&self, system: UnitSystem) -> &'static str {
        match system {
            UnitSystem::Imperial => self.imperial,
            UnitSystem::SI => self.si,
        }
    }
}

/// 단위 환산 대상인 재료 물성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialProperty {
    Density,
    YieldStrength,
    UltimateStrength,
    Elongation,
    ModulusOfElasticity,
    PoissonRatio,
    MaxServiceTemp,
    CoefThermalExpansion,
    MinExtrudeTemp,
    MaxExtrudeTemp,
    MinBedTemp,
    MaxBedTemp,
}

impl MaterialProperty {
    pub const ALL: [MaterialProperty; 12] = [
        MaterialProperty::Density,
        MaterialProperty::YieldStrength,
        MaterialProperty::UltimateStrength,
        MaterialProperty::Elongation,
        MaterialProperty::ModulusOfElasticity,
        MaterialProperty::PoissonRatio,
        MaterialProperty::MaxServiceTemp,
        MaterialProperty::CoefThermalExpansion,
        MaterialProperty::MinExtrudeTemp,
        MaterialProperty::MaxExtrudeTemp,
        MaterialProperty::MinBedTemp,
        MaterialProperty::MaxBedTemp,
    ];

    /// 물성 데이터에서 쓰는 키.
    pub fn key(self) -> &'static str {
        match self {
            MaterialProperty::Density => "den",
            MaterialProperty::YieldStrength => "yield_str",
            MaterialProperty::UltimateStrength => "ult_str",
            MaterialProperty::Elongation => "elongation",
            MaterialProperty::ModulusOfElasticity => "moe",
            MaterialProperty::PoissonRatio => "pr",
            MaterialProperty::MaxServiceTemp => "max_service_temp",
            MaterialProperty::CoefThermalExpansion => "coef_thermal_exp",
            MaterialProperty::MinExtrudeTemp => "min_extrude_temp",
            MaterialProperty::MaxExtrudeTemp => "max_extrude_temp",
            MaterialProperty::MinBedTemp => "min_bed_temp",
            MaterialProperty::MaxBedTemp => "max_bed_temp",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            MaterialProperty::Density => "밀도",
            MaterialProperty::YieldStrength => "항복강도",
            MaterialProperty::UltimateStrength => "인장강도",
            MaterialProperty::Elongation => "연신율",
            MaterialProperty::ModulusOfElasticity => "탄성계수",
            MaterialProperty::PoissonRatio => "푸아송비",
            MaterialProperty::MaxServiceTemp => "최대 사용온도",
            MaterialProperty::CoefThermalExpansion => "열팽창계수",
            MaterialProperty::MinExtrudeTemp => "최소 압출온도",
            MaterialProperty::MaxExtrudeTemp => "최대 압출온도",
            MaterialProperty::MinBedTemp => "최소 베드온도",
            MaterialProperty::MaxBedTemp => "최대 베드온도",
        }
    }

    pub fn unit(self) -> PropertyUnit {
        use PropertyConversion::*;
        let (imperial, si, conversion) = match self {
            MaterialProperty::Density => ("lb/in³", "kg/m³", Factor(DENSITY_FACTOR)),
            MaterialProperty::YieldStrength | MaterialProperty::UltimateStrength => {
                ("psi", "MPa", Factor(STRESS_FACTOR))
            }
            MaterialProperty::ModulusOfElasticity => ("psi", "GPa", Factor(MODULUS_FACTOR)),
            MaterialProperty::Elongation | MaterialProperty::PoissonRatio => {
                ("%", "%", Dimensionless)
            }
            MaterialProperty::CoefThermalExpansion => {
                ("μin/in/°F", "μm/m/°C", Factor(THERMAL_EXPANSION_FACTOR))
            }
            MaterialProperty::MaxServiceTemp
            | MaterialProperty::MinExtrudeTemp
            | MaterialProperty::MaxExtrudeTemp
            | MaterialProperty::MinBedTemp
            | MaterialProperty::MaxBedTemp => ("°F", "°C", Temperature),
        };
        PropertyUnit {
            imperial,
            si,
            conversion,
        }
    }
}

impl fmt::Display for MaterialProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 키로 물성 단위 정보를 찾는다. 등록되지 않은 키는 None.
pub fn property_unit(key: &str) -> Option<PropertyUnit> {
    MaterialProperty::from_key(key).map(MaterialProperty::unit)
}

/// 단일 물성값을 영국단위에서 SI 단위로 변환한다.
/// 등록되지 않은 키는 무단위 값으로 보고 그대로 돌려준다.
pub fn convert_property_to_si(key: &str, value: Option<f64>) -> Option<f64> {
    let value = value?;
    Some(match property_unit(key) {
        Some(unit) => unit.to_si(value),
        None => value,
    })
}

/// 단일 물성값을 SI 단위에서 영국단위로 변환한다.
pub fn convert_property_to_imperial(key: &str, value: Option<f64>) -> Option<f64> {
    let value = value?;
    Some(match property_unit(key) {
        Some(unit) => unit.to_imperial(value),
        None => value,
    })
}

/// 물성 키 → 값 맵.
pub type PropertyBag = BTreeMap<String, f64>;

/// 물성 맵 전체를 SI 단위로 변환한 새 맵을 만든다. 입력은 바뀌지 않는다.
pub fn convert_properties_to_si(bag: &PropertyBag) -> PropertyBag {
    bag.iter()
        .map(|(k, v)| (k.clone(), convert_property_to_si(k, Some(*v)).unwrap_or(*v)))
        .collect()
}

/// 물성 맵 전체를 영국단위로 변환한 새 맵을 만든다.
pub fn convert_properties_to_imperial(bag: &PropertyBag) -> PropertyBag {
    bag.iter()
        .map(|(k, v)| (k.clone(), convert_property_to_imperial(k, Some(*v)).unwrap_or(*v)))
        .collect()
}

/// JSON 객체에서 숫자 값만 골라 물성 맵을 만든다.
/// 범위 문자열("10 to 20")처럼 숫자가 아닌 항목은 건너뛴다.
pub fn property_bag_from_json(value: &serde_json::Value) -> PropertyBag {
    value
        .as_object()
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
                .collect()
        })
        .unwrap_or_default()
}

/// 알려진 물성만 담는 구조체. 값이 없는 물성은 None.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub den: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_str: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ult_str: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elongation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_service_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coef_thermal_exp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_extrude_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_extrude_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bed_temp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bed_temp: Option<f64>,
}

impl MaterialProperties {
    fn slot(&mut self, property: MaterialProperty) -> &mut Option<f64> {
        match property {
            MaterialProperty::Density => &mut self.den,
            MaterialProperty::YieldStrength => &mut self.yield_str,
            MaterialProperty::UltimateStrength => &mut self.ult_str,
            MaterialProperty::Elongation => &mut self.elongation,
            MaterialProperty::ModulusOfElasticity => &mut self.moe,
            MaterialProperty::PoissonRatio => &mut self.pr,
            MaterialProperty::MaxServiceTemp => &mut self.max_service_temp,
            MaterialProperty::CoefThermalExpansion => &mut self.coef_thermal_exp,
            MaterialProperty::MinExtrudeTemp => &mut self.min_extrude_temp,
            MaterialProperty::MaxExtrudeTemp => &mut self.max_extrude_temp,
            MaterialProperty::MinBedTemp => &mut self.min_bed_temp,
            MaterialProperty::MaxBedTemp => &mut self.max_bed_temp,
        }
    }

    pub fn get(&self, property: MaterialProperty) -> Option<f64> {
        match property {
            MaterialProperty::Density => self.den,
            MaterialProperty::YieldStrength => self.yield_str,
            MaterialProperty::UltimateStrength => self.ult_str,
            MaterialProperty::Elongation => self.elongation,
            MaterialProperty::ModulusOfElasticity => self.moe,
            MaterialProperty::PoissonRatio => self.pr,
            MaterialProperty::MaxServiceTemp => self.max_service_temp,
            MaterialProperty::CoefThermalExpansion => self.coef_thermal_exp,
            MaterialProperty::MinExtrudeTemp => self.min_extrude_temp,
            MaterialProperty::MaxExtrudeTemp => self.max_extrude_temp,
            MaterialProperty::MinBedTemp => self.min_bed_temp,
            MaterialProperty::MaxBedTemp => self.max_bed_temp,
        }
    }

    pub fn set(&mut self, property: MaterialProperty, value: Option<f64>) {
        *self.slot(property) = value;
    }

    fn map(&self, f: impl Fn(MaterialProperty, f64) -> f64) -> Self {
        let mut out = Self::default();
        for property in MaterialProperty::ALL {
            out.set(property, self.get(property).map(|v| f(property, v)));
        }
        out
    }

    pub fn to_si(&self) -> Self {
        self.map(|p, v| p.unit().to_si(v))
    }

    pub fn to_imperial(&self) -> Self {
        self.map(|p, v| p.unit().to_imperial(v))
    }

    /// 값이 있는 물성만 맵으로 옮긴다.
    pub fn to_bag(&self) -> PropertyBag {
        MaterialProperty::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|v| (p.key().to_string(), v)))
            .collect()
    }

    /// 맵에서 알려진 물성만 골라 담는다.
    pub fn from_bag(bag: &PropertyBag) -> Self {
        let mut out = Self::default();
        for property in MaterialProperty::ALL {
            out.set(property, bag.get(property.key()).copied());
        }
        out
    }
}
