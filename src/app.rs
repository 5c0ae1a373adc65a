use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::{Cli, Command, Target};
use crate::config::{self, Config, ConfigError, CONFIG_FILE};
use crate::conversion::{self, ConversionError};
use crate::format::{format_property_value_in, format_result, NumberLocale};
use crate::i18n::{self, keys, Translator};
use crate::material::{self, MaterialProperty, UnitSystem};
use crate::quantity::{CategoryGroup, UnitCategory};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 물성 파일 읽기/쓰기 오류
    #[error("JSON 처리 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 사용자가 잘못된 값을 지정함
    #[error("입력 오류: {0}")]
    InvalidInput(String),
}

/// 명령 실행에 필요한 설정과 표시 규칙.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    pub locale: NumberLocale,
}

impl Context {
    /// 설정 파일을 읽고 언어를 결정한다.
    pub fn load(cli_lang: Option<&str>, config_path: Option<PathBuf>) -> Result<Self, AppError> {
        let config_path = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        let config = config::load_or_default_at(&config_path)?;
        let lang = i18n::resolve_language(cli_lang.unwrap_or("auto"), Some(&config.language));
        tracing::debug!(lang = %lang, "표시 언어 결정");
        let tr = Translator::new_with_pack(&lang, config.locale_dir.as_deref());
        Ok(Self {
            config,
            config_path,
            tr,
            locale: NumberLocale::detect(),
        })
    }

    /// 파일을 거치지 않고 주어진 설정으로 만든다.
    pub fn with_config(config: Config, lang: &str, locale: NumberLocale) -> Self {
        Self {
            config,
            config_path: PathBuf::from(CONFIG_FILE),
            tr: Translator::new(lang),
            locale,
        }
    }

    /// 카테고리 인자가 없으면 설정의 기본 카테고리를 쓴다.
    pub fn category_or_default(
        &self,
        category: Option<&str>,
    ) -> Result<UnitCategory, ConversionError> {
        match category {
            Some(key) => key.parse(),
            None => Ok(self.config.default_category),
        }
    }

    /// 방향 인자가 없으면 설정의 재료 물성 단위계를 쓴다.
    pub fn target_or_default(&self, to: Option<Target>) -> UnitSystem {
        to.map(UnitSystem::from)
            .unwrap_or(self.config.unit_system)
    }

    pub fn display(&self, value: f64) -> String {
        format_result(value, self.config.decimals, self.locale)
    }
}

/// 명령행 인자에 따라 애플리케이션을 실행한다. 하위 명령이 없으면 대화형 메뉴를 띄운다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut ctx = Context::load(cli.lang.as_deref(), cli.config)?;
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            ui_cli::run_menu(&mut ctx, &mut stdin.lock(), &mut stdout.lock())?;
            ctx.config.save_to(&ctx.config_path)?;
            Ok(())
        }
        command => {
            let stdout = io::stdout();
            execute(&command, &ctx, &mut stdout.lock())
        }
    }
}

/// 비대화형 명령 하나를 실행하고 결과를 `out`에 쓴다.
pub fn execute(command: &Command, ctx: &Context, out: &mut impl Write) -> Result<(), AppError> {
    tracing::debug!(?command, "명령 실행");
    match command {
        Command::Convert {
            value,
            from,
            to,
            category,
        } => {
            let category = ctx.category_or_default(category.as_deref())?;
            let result = conversion::convert_in(category, *value, from, to)?;
            writeln!(
                out,
                "{} {} = {} {}",
                ctx.display(*value),
                from.trim(),
                ctx.display(result),
                to.trim()
            )?;
        }
        Command::Table {
            value,
            from,
            category,
        } => {
            let category = ctx.category_or_default(category.as_deref())?;
            let rows = conversion::convert_all_in(category, *value, from)?;
            write_table(ctx, category, &rows, out)?;
        }
        Command::Units { category } => {
            let category: UnitCategory = category.parse()?;
            write_units(ctx, category, out)?;
        }
        Command::Categories => write_categories(ctx, out)?,
        Command::Property { key, value, to } => {
            let property = MaterialProperty::from_key(key)
                .ok_or_else(|| AppError::InvalidInput(format!("알 수 없는 물성 키: {key}")))?;
            let target = ctx.target_or_default(*to);
            let converted = match target {
                UnitSystem::SI => material::convert_property_to_si(key, Some(*value)),
                UnitSystem::Imperial => material::convert_property_to_imperial(key, Some(*value)),
            };
            let decimals = ctx.config.decimals;
            writeln!(
                out,
                "{}: {} → {}",
                ctx.tr.property_name(property),
                format_property_value_in(ctx.locale, key, Some(*value), !target.is_si(), decimals),
                format_property_value_in(ctx.locale, key, converted, target.is_si(), decimals),
            )?;
        }
        Command::Properties { file, to, output } => {
            let content = fs::read_to_string(file)?;
            let json: serde_json::Value = serde_json::from_str(&content)?;
            let bag = material::property_bag_from_json(&json);
            let converted = match ctx.target_or_default(*to) {
                UnitSystem::SI => material::convert_properties_to_si(&bag),
                UnitSystem::Imperial => material::convert_properties_to_imperial(&bag),
            };
            let rendered = serde_json::to_string_pretty(&converted)?;
            match output {
                Some(path) => {
                    fs::write(path, rendered)?;
                    tracing::info!(path = %path.display(), count = converted.len(), "변환된 물성 파일을 저장했습니다");
                }
                None => writeln!(out, "{rendered}")?,
            }
        }
        Command::Interactive => {
            return Err(AppError::InvalidInput(
                "대화형 메뉴는 run()으로 실행해야 합니다".to_string(),
            ))
        }
    }
    Ok(())
}

pub(crate) fn write_table(
    ctx: &Context,
    category: UnitCategory,
    rows: &[(&'static str, f64)],
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "{} ({} {})",
        ctx.tr.category_name(category),
        ctx.tr.t(keys::BASE_UNIT),
        category.base_unit()
    )?;
    for (unit, value) in rows {
        writeln!(out, "{:>20}  {unit}", ctx.display(*value))?;
    }
    Ok(())
}

pub(crate) fn write_units(
    ctx: &Context,
    category: UnitCategory,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{} {}", ctx.tr.t(keys::BASE_UNIT), category.base_unit())?;
    writeln!(out, "{}", ctx.tr.t(keys::UNITS_AVAILABLE))?;
    for unit in category.table().symbols() {
        writeln!(out, "  {unit}")?;
    }
    Ok(())
}

fn write_categories(ctx: &Context, out: &mut impl Write) -> io::Result<()> {
    for group in CategoryGroup::ALL {
        let heading = match group {
            CategoryGroup::Basic => keys::GROUP_BASIC,
            CategoryGroup::Engineering => keys::GROUP_ENGINEERING,
        };
        writeln!(out, "{}", ctx.tr.t(heading))?;
        for category in group.categories() {
            writeln!(
                out,
                "  {:<12} {} ({})",
                category.key(),
                ctx.tr.category_name(*category),
                category.base_unit()
            )?;
        }
    }
    Ok(())
}
