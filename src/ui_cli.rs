use std::io::{self, BufRead, Write};

use crate::app::{self, AppError, Context};
use crate::conversion::{self, ConversionError};
use crate::format::{format_property_value_in, MAX_DECIMALS};
use crate::i18n::keys;
use crate::material::{self, MaterialProperty, UnitSystem};
use crate::quantity::{CategoryGroup, UnitCategory};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    ConvertAll,
    Material,
    Settings,
    Exit,
}

/// 메뉴 루프를 실행한다. 입력이 끝나면(EOF) 종료로 취급한다.
pub fn run_menu<R: BufRead, W: Write>(
    ctx: &mut Context,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    loop {
        let choice = match main_menu(ctx, input, out) {
            Ok(choice) => choice,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let result = match choice {
            MenuChoice::UnitConversion => handle_unit_conversion(ctx, input, out),
            MenuChoice::ConvertAll => handle_convert_all(ctx, input, out),
            MenuChoice::Material => handle_material(ctx, input, out),
            MenuChoice::Settings => handle_settings(ctx, input, out),
            MenuChoice::Exit => {
                writeln!(out, "{}", ctx.tr.t(keys::APP_EXIT))?;
                break;
            }
        };
        match result {
            Ok(()) => {}
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(AppError::Conversion(e)) => report_conversion_error(ctx, out, &e)?,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    ctx: &Context,
    input: &mut R,
    out: &mut W,
) -> Result<MenuChoice, AppError> {
    let tr = &ctx.tr;
    writeln!(out, "{}", tr.t(keys::MAIN_MENU_TITLE))?;
    for key in [
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_CONVERT_ALL,
        keys::MAIN_MENU_MATERIAL,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        writeln!(out, "{}", tr.t(key))?;
    }
    loop {
        let sel = read_line(input, out, tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::ConvertAll),
            "3" => return Ok(MenuChoice::Material),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => writeln!(out, "{}", tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion<R: BufRead, W: Write>(
    ctx: &Context,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let tr = &ctx.tr;
    writeln!(out, "{}", tr.t(keys::UNIT_CONVERSION_HEADING))?;
    writeln!(out, "{}", tr.t(keys::HELP_UNIT_CONVERSION))?;
    let category = read_category(ctx, input, out)?;
    app::write_units(ctx, category, out)?;
    let value = read_f64(ctx, input, out, tr.t(keys::PROMPT_VALUE))?;
    let from_unit = read_line(input, out, tr.t(keys::PROMPT_FROM_UNIT))?;
    let to_unit = read_line(input, out, tr.t(keys::PROMPT_TO_UNIT))?;
    let result = conversion::convert_in(category, value, from_unit.trim(), to_unit.trim())?;
    writeln!(
        out,
        "{} {} {}",
        tr.t(keys::RESULT),
        ctx.display(result),
        to_unit.trim()
    )?;
    Ok(())
}

/// 한 값을 카테고리의 모든 단위로 보여준다.
pub fn handle_convert_all<R: BufRead, W: Write>(
    ctx: &Context,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let tr = &ctx.tr;
    writeln!(out, "{}", tr.t(keys::CONVERT_ALL_HEADING))?;
    let category = read_category(ctx, input, out)?;
    app::write_units(ctx, category, out)?;
    let value = read_f64(ctx, input, out, tr.t(keys::PROMPT_VALUE))?;
    let from_unit = read_line(input, out, tr.t(keys::PROMPT_FROM_UNIT))?;
    let rows = conversion::convert_all_in(category, value, from_unit.trim())?;
    app::write_table(ctx, category, &rows, out)?;
    Ok(())
}

/// 재료 물성 변환 메뉴를 처리한다.
pub fn handle_material<R: BufRead, W: Write>(
    ctx: &Context,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let tr = &ctx.tr;
    writeln!(out, "{}", tr.t(keys::MATERIAL_HEADING))?;
    writeln!(out, "{}", tr.t(keys::HELP_MATERIAL))?;
    for (i, property) in MaterialProperty::ALL.iter().enumerate() {
        let unit = property.unit();
        writeln!(
            out,
            "{:>2}) {} [{} / {}]",
            i + 1,
            tr.property_name(*property),
            unit.imperial,
            unit.si
        )?;
    }
    let property = loop {
        let sel = read_line(input, out, tr.t(keys::MATERIAL_PROMPT_PROPERTY))?;
        let picked = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| MaterialProperty::ALL.get(i).copied());
        match picked {
            Some(p) => break p,
            None => writeln!(out, "{}", tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    };
    let value = read_f64(ctx, input, out, tr.t(keys::PROMPT_VALUE))?;
    writeln!(out, "{}", tr.t(keys::MATERIAL_DIRECTION))?;
    let to_si = loop {
        let sel = read_line(input, out, tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "" => break ctx.config.unit_system.is_si(),
            "1" => break true,
            "2" => break false,
            _ => writeln!(out, "{}", tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    };
    let key = property.key();
    let converted = if to_si {
        material::convert_property_to_si(key, Some(value))
    } else {
        material::convert_property_to_imperial(key, Some(value))
    };
    let decimals = ctx.config.decimals;
    writeln!(
        out,
        "{} {} → {}",
        tr.t(keys::RESULT),
        format_property_value_in(ctx.locale, key, Some(value), !to_si, decimals),
        format_property_value_in(ctx.locale, key, converted, to_si, decimals),
    )?;
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings<R: BufRead, W: Write>(
    ctx: &mut Context,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "{}", ctx.tr.t(keys::SETTINGS_HEADING))?;
    writeln!(
        out,
        "{} {:?}",
        ctx.tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        ctx.config.unit_system
    )?;
    writeln!(out, "{}", ctx.tr.t(keys::SETTINGS_OPTIONS))?;
    let sel = read_line(input, out, ctx.tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let picked = match sel.trim() {
        "" => None,
        "1" => Some(UnitSystem::Imperial),
        "2" => Some(UnitSystem::SI),
        _ => {
            writeln!(out, "{}", ctx.tr.t(keys::SETTINGS_INVALID))?;
            None
        }
    };
    if let Some(system) = picked {
        ctx.config.unit_system = system;
        writeln!(out, "{} {:?}", ctx.tr.t(keys::SETTINGS_SAVED), system)?;
    }

    writeln!(
        out,
        "{} {}",
        ctx.tr.t(keys::SETTINGS_CURRENT_DECIMALS),
        ctx.config.decimals
    )?;
    let sel = read_line(input, out, ctx.tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
    if !sel.trim().is_empty() {
        match sel.trim().parse::<u32>() {
            Ok(n) if n <= MAX_DECIMALS => ctx.config.decimals = n,
            _ => writeln!(out, "{}", ctx.tr.t(keys::SETTINGS_INVALID))?,
        }
    }
    tracing::debug!(config = ?ctx.config, "설정 변경");
    Ok(())
}

fn report_conversion_error<W: Write>(
    ctx: &Context,
    out: &mut W,
    err: &ConversionError,
) -> Result<(), AppError> {
    tracing::warn!(error = %err, "변환 실패");
    writeln!(out, "{}: {err}", ctx.tr.t(keys::ERROR_PREFIX))?;
    Ok(())
}

/// 그룹별 카테고리 목록을 번호와 함께 보여주고 선택을 받는다.
fn read_category<R: BufRead, W: Write>(
    ctx: &Context,
    input: &mut R,
    out: &mut W,
) -> Result<UnitCategory, AppError> {
    let tr = &ctx.tr;
    let mut numbered = Vec::with_capacity(UnitCategory::ALL.len());
    for group in CategoryGroup::ALL {
        let heading = match group {
            CategoryGroup::Basic => keys::GROUP_BASIC,
            CategoryGroup::Engineering => keys::GROUP_ENGINEERING,
        };
        writeln!(out, "{}", tr.t(heading))?;
        for category in group.categories() {
            numbered.push(*category);
            writeln!(
                out,
                "{:>2}) {}",
                numbered.len(),
                tr.category_name(*category)
            )?;
        }
    }
    loop {
        let sel = read_line(input, out, tr.t(keys::PROMPT_CATEGORY))?;
        let sel = sel.trim();
        let picked = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| numbered.get(i).copied())
            .or_else(|| sel.parse::<UnitCategory>().ok());
        match picked {
            Some(category) => return Ok(category),
            None => writeln!(out, "{}", tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "입력이 끝났습니다",
        )));
    }
    Ok(buf)
}

fn read_f64<R: BufRead, W: Write>(
    ctx: &Context,
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, out, prompt)?;
        match s.trim().replace(',', "").parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => writeln!(out, "{}", ctx.tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}
