//! 카테고리 기반 단위 변환 엔진과 재료 물성 단위 변환.
//!
//! 변환 로직은 라이브러리에 두고, CLI(`main.rs`)는 입력을 받아 결과를 표시하기만 한다.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod format;
pub mod i18n;
pub mod material;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert, convert_all, ConversionError};
pub use quantity::{CategoryGroup, UnitCategory};
