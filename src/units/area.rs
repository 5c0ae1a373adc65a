use super::{UnitDef, UnitTable};

/// 면적 단위 표. 기준은 제곱미터이다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "m²",
    units: &[
        UnitDef::linear("m²", 1.0),
        UnitDef::linear("cm²", 10_000.0),
        UnitDef::linear("km²", 0.000_001),
        UnitDef::linear("in²", 1550.0),
        UnitDef::linear("ft²", 10.7639),
        UnitDef::linear("yd²", 1.19599),
        UnitDef::linear("acre", 0.000247105),
    ],
};
