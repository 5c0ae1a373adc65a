use super::{UnitDef, UnitTable};

/// 열에너지(열량률) 단위 표. 기준은 kcal/h 이다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "kcal/h",
    units: &[
        UnitDef::linear("kcal/h", 1.0),
        UnitDef::linear("W", 1.163),
        UnitDef::linear("kW", 0.001163),
        UnitDef::linear("HP", 0.0015596),
        // 냉동톤: 미국 3024 kcal/h, 일본(CRt) 3320 kcal/h
        UnitDef::linear("USRt", 1.0 / 3024.0),
        UnitDef::linear("CRt", 1.0 / 3320.0),
    ],
};
