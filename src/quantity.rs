use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::units::{self, UnitTable};

/// 변환기가 다루는 물리량 카테고리.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Energy,
    Length,
    Area,
    Volume,
    Temperature,
    Flow,
    Pressure,
    Mass,
    Enthalpy,
}

/// 화면에서 카테고리를 묶어 보여주는 탭.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryGroup {
    /// 기본 단위 (길이, 면적, 체적, 온도)
    Basic,
    /// 공학 단위 (유량, 압력, 열에너지, 질량, 엔탈피)
    Engineering,
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 2] = [CategoryGroup::Basic, CategoryGroup::Engineering];

    /// 그룹에 속한 카테고리를 탭 순서대로 반환한다.
    pub fn categories(self) -> &'static [UnitCategory] {
        match self {
            CategoryGroup::Basic => &[
                UnitCategory::Length,
                UnitCategory::Area,
                UnitCategory::Volume,
                UnitCategory::Temperature,
            ],
            CategoryGroup::Engineering => &[
                UnitCategory::Flow,
                UnitCategory::Pressure,
                UnitCategory::Energy,
                UnitCategory::Mass,
                UnitCategory::Enthalpy,
            ],
        }
    }
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 9] = [
        UnitCategory::Energy,
        UnitCategory::Length,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::Temperature,
        UnitCategory::Flow,
        UnitCategory::Pressure,
        UnitCategory::Mass,
        UnitCategory::Enthalpy,
    ];

    /// 외부 입력에서 쓰는 문자열 키.
    pub fn key(self) -> &'static str {
        match self {
            UnitCategory::Energy => "energy",
            UnitCategory::Length => "length",
            UnitCategory::Area => "area",
            UnitCategory::Volume => "volume",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Flow => "flow",
            UnitCategory::Pressure => "pressure",
            UnitCategory::Mass => "mass",
            UnitCategory::Enthalpy => "enthalpy",
        }
    }

    /// 카테고리 표시 이름.
    pub fn name(self) -> &'static str {
        match self {
            UnitCategory::Energy => "열에너지",
            UnitCategory::Length => "길이",
            UnitCategory::Area => "면적",
            UnitCategory::Volume => "체적",
            UnitCategory::Temperature => "온도",
            UnitCategory::Flow => "유량",
            UnitCategory::Pressure => "압력",
            UnitCategory::Mass => "질량",
            UnitCategory::Enthalpy => "엔탈피",
        }
    }

    pub fn group(self) -> CategoryGroup {
        match self {
            UnitCategory::Length
            | UnitCategory::Area
            | UnitCategory::Volume
            | UnitCategory::Temperature => CategoryGroup::Basic,
            UnitCategory::Flow
            | UnitCategory::Pressure
            | UnitCategory::Energy
            | UnitCategory::Mass
            | UnitCategory::Enthalpy => CategoryGroup::Engineering,
        }
    }

    pub fn table(self) -> &'static UnitTable {
        match self {
            UnitCategory::Energy => &units::energy::TABLE,
            UnitCategory::Length => &units::length::TABLE,
            UnitCategory::Area => &units::area::TABLE,
            UnitCategory::Volume => &units::volume::TABLE,
            UnitCategory::Temperature => &units::temperature::TABLE,
            UnitCategory::Flow => &units::flow::TABLE,
            UnitCategory::Pressure => &units::pressure::TABLE,
            UnitCategory::Mass => &units::mass::TABLE,
            UnitCategory::Enthalpy => &units::specific_enthalpy::TABLE,
        }
    }

    pub fn base_unit(self) -> &'static str {
        self.table().base_unit
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UnitCategory {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        UnitCategory::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}
