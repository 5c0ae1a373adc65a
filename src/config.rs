use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::format::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::material::UnitSystem;
use crate::quantity::UnitCategory;

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `auto`, `ko`, `en`
    pub language: String,
    /// 재료 물성 표시 단위계
    pub unit_system: UnitSystem,
    /// 결과 표시 소수 자릿수
    pub decimals: u32,
    /// 카테고리를 생략했을 때 쓰는 카테고리
    pub default_category: UnitCategory,
    /// TOML 언어팩 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            unit_system: UnitSystem::Imperial,
            decimals: DEFAULT_DECIMALS,
            default_category: UnitCategory::Length,
            locale_dir: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 허용 범위를 벗어난 값
    #[error("설정 값 오류: {0}")]
    Invalid(String),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드하거나 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "설정을 불러왔습니다");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일을 생성했습니다");
        Ok(cfg)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(content)?;
        if cfg.decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "decimals 는 0..={MAX_DECIMALS} 범위여야 합니다: {}",
                cfg.decimals
            )));
        }
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
