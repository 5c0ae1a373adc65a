use super::{UnitDef, UnitTable};

/// 비엔탈피 단위 표. 기준은 kJ/kg 이다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "kJ/kg",
    units: &[
        UnitDef::linear("kJ/kg", 1.0),
        UnitDef::linear("kcal/kg", 0.239006),
        UnitDef::linear("BTU/lb", 0.429923),
    ],
};
