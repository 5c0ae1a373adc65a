//! 카테고리별 단위 표와 배율 모델.
//!
//! 각 카테고리는 기준 단위 하나와 단위 목록을 가진다. 선형 단위의 배율은
//! `기준 단위 값 * factor = 해당 단위 값` 을 만족하며, 기준 단위의 배율은 항상 1이다.

pub mod area;
pub mod energy;
pub mod flow;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod specific_enthalpy;
pub mod temperature;
pub mod volume;

pub use temperature::{convert_temperature, TemperatureUnit};

/// 기준 단위와 개별 단위 사이의 관계.
#[derive(Debug, Clone, Copy)]
pub enum UnitScale {
    /// 기준 단위 1에 해당하는 이 단위의 양.
    Linear(f64),
    /// 원점이 다른 단위. 배율 하나로 표현할 수 없어 양방향 변환식을 가진다.
    Affine {
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    },
}

/// 단위 표의 한 항목.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub scale: UnitScale,
}

impl UnitDef {
    pub const fn linear(symbol: &'static str, factor: f64) -> Self {
        Self {
            symbol,
            scale: UnitScale::Linear(factor),
        }
    }

    pub const fn affine(
        symbol: &'static str,
        to_base: fn(f64) -> f64,
        from_base: fn(f64) -> f64,
    ) -> Self {
        Self {
            symbol,
            scale: UnitScale::Affine { to_base, from_base },
        }
    }

    /// 선형 단위의 배율. 아핀 단위는 None.
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            UnitScale::Linear(factor) => Some(factor),
            UnitScale::Affine { .. } => None,
        }
    }

    /// 이 단위의 값을 기준 단위로 환산한다.
    pub fn to_base(&self, value: f64) -> f64 {
        match self.scale {
            UnitScale::Linear(factor) => value / factor,
            UnitScale::Affine { to_base, .. } => to_base(value),
        }
    }

    /// 기준 단위 값을 이 단위로 환산한다.
    pub fn from_base(&self, value: f64) -> f64 {
        match self.scale {
            UnitScale::Linear(factor) => value * factor,
            UnitScale::Affine { from_base, .. } => from_base(value),
        }
    }
}

/// 한 카테고리의 단위 표. 항목 순서는 화면에 나열되는 순서와 같다.
#[derive(Debug)]
pub struct UnitTable {
    pub base_unit: &'static str,
    pub units: &'static [UnitDef],
}

impl UnitTable {
    /// 단위 기호로 항목을 찾는다.
    ///
    /// 정확히 일치하는 기호를 먼저 찾고, 없으면 앞의 `°`, `^2`/`2`(→`²`) 같은
    /// 입력 편의 표기만 정규화해서 다시 비교한다. (`m2` → `m²`, `C` → `°C`)
    /// 대소문자는 구분한다. `mPa` 와 `MPa` 는 다른 단위이다.
    pub fn find(&self, symbol: &str) -> Option<&'static UnitDef> {
        let symbol = symbol.trim();
        if let Some(unit) = self.units.iter().find(|u| u.symbol == symbol) {
            return Some(unit);
        }
        let wanted = canonical_symbol(symbol);
        self.units
            .iter()
            .find(|u| canonical_symbol(u.symbol) == wanted)
    }

    pub fn base(&self) -> Option<&'static UnitDef> {
        self.find(self.base_unit)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.units.iter().map(|u| u.symbol)
    }
}

fn canonical_symbol(s: &str) -> String {
    let s = s.trim();
    s.strip_prefix('°')
        .unwrap_or(s)
        .replace("^2", "²")
        .replace("^3", "³")
        .replace('2', "²")
        .replace('3', "³")
}
