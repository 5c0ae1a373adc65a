use super::{UnitDef, UnitTable};

/// 질량 단위 표. 기준은 kg 이다.
pub static TABLE: UnitTable = UnitTable {
    base_unit: "kg",
    units: &[
        UnitDef::linear("kg", 1.0),
        UnitDef::linear("g", 1000.0),
        UnitDef::linear("mg", 1_000_000.0),
        // 미터톤
        UnitDef::linear("ton(SI)", 0.001),
        // 숏톤
        UnitDef::linear("ton(미국)", 1.0 / 907.184),
        // 롱톤
        UnitDef::linear("ton(영국)", 1.0 / 1016.0469),
        UnitDef::linear("lb", 2.20462),
        UnitDef::linear("oz", 35.274),
    ],
};
