use super::{UnitDef, UnitTable};

/// 체적 단위 표. 기준은 입방미터이다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "m³",
    units: &[
        UnitDef::linear("m³", 1.0),
        UnitDef::linear("L", 1000.0),
        UnitDef::linear("cm³", 1_000_000.0),
        UnitDef::linear("in³", 61023.7),
        UnitDef::linear("ft³", 35.3147),
        UnitDef::linear("gal (US)", 264.172),
    ],
};
