//! 카테고리별 단위 표 조회.
//!
//! 표는 정적 데이터이며 실행 중에 바뀌지 않는다. 문자열 인자를 받는 함수는
//! 외부 입력(CLI, 설정 파일)용이고, `*_in` 계열은 이미 해석된 [`UnitCategory`]를 받는다.

use crate::conversion::ConversionError;
use crate::quantity::{CategoryGroup, UnitCategory};
use crate::units::{UnitDef, UnitTable};

/// 등록된 모든 카테고리.
pub fn categories() -> &'static [UnitCategory] {
    &UnitCategory::ALL
}

/// 그룹(탭)에 속한 카테고리.
pub fn categories_in(group: CategoryGroup) -> &'static [UnitCategory] {
    group.categories()
}

pub fn table(category: UnitCategory) -> &'static UnitTable {
    category.table()
}

/// 카테고리의 단위 기호를 표 순서대로 반환한다.
pub fn units_for_category(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    let category: UnitCategory = category.parse()?;
    Ok(units_in(category))
}

pub fn units_in(category: UnitCategory) -> Vec<&'static str> {
    category.table().symbols().collect()
}

pub fn base_unit(category: &str) -> Result<&'static str, ConversionError> {
    let category: UnitCategory = category.parse()?;
    Ok(category.base_unit())
}

/// 카테고리 안에서 단위 항목을 찾는다.
pub fn unit(category: UnitCategory, symbol: &str) -> Result<&'static UnitDef, ConversionError> {
    category
        .table()
        .find(symbol)
        .ok_or_else(|| ConversionError::InvalidUnit {
            category,
            unit: symbol.to_string(),
        })
}

/// 단위의 배율(기준 단위 1 에 해당하는 양)을 반환한다.
pub fn factor(category: &str, symbol: &str) -> Result<f64, ConversionError> {
    let category: UnitCategory = category.parse()?;
    factor_in(category, symbol)
}

pub fn factor_in(category: UnitCategory, symbol: &str) -> Result<f64, ConversionError> {
    let def = unit(category, symbol)?;
    def.factor().ok_or(ConversionError::NotLinear {
        category,
        unit: def.symbol,
    })
}
