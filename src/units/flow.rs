use super::{UnitDef, UnitTable};

/// 체적 유량 단위 표. 기준은 m³/s 이다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "m³/s",
    units: &[
        UnitDef::linear("m³/s", 1.0),
        UnitDef::linear("m³/h", 3600.0),
        UnitDef::linear("L/s", 1000.0),
        UnitDef::linear("L/min", 60_000.0),
        UnitDef::linear("ft³/s", 35.3147),
        UnitDef::linear("ft³/min", 2118.88),
        UnitDef::linear("gpm (US)", 15850.3),
    ],
};
