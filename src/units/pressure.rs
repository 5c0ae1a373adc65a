use super::{UnitDef, UnitTable};

/// 압력 단위 표. 기준은 Pa 이며 모든 단위를 같은 (절대/게이지 구분 없는) 척도로 본다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "Pa",
    units: &[
        UnitDef::linear("Pa", 1.0),
        UnitDef::linear("kPa", 0.001),
        UnitDef::linear("MPa", 0.000_001),
        UnitDef::linear("bar", 0.000_01),
        UnitDef::linear("psi", 0.000145038),
        UnitDef::linear("atm", 0.000_009_869_23),
        UnitDef::linear("mmHg", 0.00750062),
    ],
};
