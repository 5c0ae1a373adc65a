use super::{UnitDef, UnitTable};

/// 길이 단위 표. 기준은 미터이다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "m",
    units: &[
        UnitDef::linear("m", 1.0),
        UnitDef::linear("cm", 100.0),
        UnitDef::linear("mm", 1000.0),
        UnitDef::linear("km", 0.001),
        UnitDef::linear("in", 39.3701),
        UnitDef::linear("ft", 3.28084),
        UnitDef::linear("yd", 1.09361),
        UnitDef::linear("mile", 0.000621371),
    ],
};
