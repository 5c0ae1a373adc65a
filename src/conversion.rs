use thiserror::Error;

use crate::catalog;
use crate::quantity::UnitCategory;
use crate::units::UnitDef;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 카탈로그에 없는 카테고리 문자열
    #[error("알 수 없는 카테고리: {0}")]
    UnknownCategory(String),
    /// 카테고리 단위 표에 없는 단위 문자열
    #[error("카테고리 {category}에 유효하지 않은 단위가 있습니다: {unit}")]
    InvalidUnit { category: UnitCategory, unit: String },
    /// 오프셋이 있는 단위에 배율을 요청함
    #[error("카테고리 {category}의 {unit} 단위는 배율 하나로 표현할 수 없습니다")]
    NotLinear {
        category: UnitCategory,
        unit: &'static str,
    },
}

/// 문자열로 전달된 카테고리와 단위명으로 값을 환산한다.
///
/// 카테고리 키 예시는 `length`, `pressure`, `temperature` 이고, 단위는 단위 표의
/// 기호(`m`, `MPa`, `°C` 등)를 쓴다. 입력 편의 표기(`m2`, `C`)도 허용한다.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConversionError> {
    let category: UnitCategory = category.parse()?;
    convert_in(category, value, from_unit, to_unit)
}

/// 해석된 카테고리 안에서 값을 환산한다.
pub fn convert_in(
    category: UnitCategory,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from = catalog::unit(category, from_unit)?;
    let to = catalog::unit(category, to_unit)?;
    Ok(convert_units(value, from, to))
}

/// 기준 단위로 정규화한 뒤 목표 단위로 투영한다.
///
/// 같은 단위끼리는 나눗셈/곱셈 오차 없이 입력값을 그대로 돌려준다.
pub fn convert_units(value: f64, from: &UnitDef, to: &UnitDef) -> f64 {
    if from.symbol == to.symbol {
        return value;
    }
    let base = from.to_base(value);
    to.from_base(base)
}

/// 한 입력값을 카테고리의 모든 단위로 환산한다. 결과는 단위 표 순서를 따른다.
pub fn convert_all(
    value: f64,
    from_unit: &str,
    category: &str,
) -> Result<Vec<(&'static str, f64)>, ConversionError> {
    let category: UnitCategory = category.parse()?;
    convert_all_in(category, value, from_unit)
}

pub fn convert_all_in(
    category: UnitCategory,
    value: f64,
    from_unit: &str,
) -> Result<Vec<(&'static str, f64)>, ConversionError> {
    let from = catalog::unit(category, from_unit)?;
    Ok(category
        .table()
        .units
        .iter()
        .map(|to| (to.symbol, convert_units(value, from, to)))
        .collect())
}
