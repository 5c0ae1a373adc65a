//! 명령행 인자 정의.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::material::UnitSystem;

#[derive(Debug, Parser)]
#[command(name = "unit_converter_toolbox", version, about = "단위 변환 계산기")]
pub struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,

    /// 설정 파일 경로
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 값 하나를 다른 단위로 변환한다
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// 카테고리 키 (생략하면 설정의 기본 카테고리)
        #[arg(long, short)]
        category: Option<String>,
    },
    /// 값 하나를 카테고리의 모든 단위로 변환한다
    Table {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        #[arg(long, short)]
        category: Option<String>,
    },
    /// 카테고리의 단위 목록을 출력한다
    Units { category: String },
    /// 카테고리 목록을 그룹별로 출력한다
    Categories,
    /// 재료 물성값 하나를 변환한다
    Property {
        key: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// 변환 방향 (생략하면 설정의 단위계)
        #[arg(long, value_enum)]
        to: Option<Target>,
    },
    /// JSON 물성 파일 전체를 변환한다
    Properties {
        file: PathBuf,
        #[arg(long, value_enum)]
        to: Option<Target>,
        /// 결과 JSON 저장 경로 (생략하면 표준 출력)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// 대화형 메뉴
    Interactive,
}

/// 물성 변환 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Si,
    Imperial,
}

impl From<Target> for UnitSystem {
    fn from(value: Target) -> Self {
        match value {
            Target::Si => UnitSystem::SI,
            Target::Imperial => UnitSystem::Imperial,
        }
    }
}
