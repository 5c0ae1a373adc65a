use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::material::MaterialProperty;
use crate::quantity::UnitCategory;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_CONVERT_ALL: &str = "main_menu.convert_all";
    pub const MAIN_MENU_MATERIAL: &str = "main_menu.material";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const CONVERT_ALL_HEADING: &str = "convert_all.heading";
    pub const GROUP_BASIC: &str = "group.basic";
    pub const GROUP_ENGINEERING: &str = "group.engineering";
    pub const PROMPT_CATEGORY: &str = "prompt.category";
    pub const UNITS_AVAILABLE: &str = "unit_conversion.units_available";
    pub const BASE_UNIT: &str = "unit_conversion.base_unit";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const RESULT: &str = "result.converted";

    pub const MATERIAL_HEADING: &str = "material.heading";
    pub const MATERIAL_PROMPT_PROPERTY: &str = "material.prompt_property";
    pub const MATERIAL_DIRECTION: &str = "material.direction";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_CURRENT_DECIMALS: &str = "settings.current_decimals";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";

    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_MATERIAL: &str = "help.material";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if pack_dir.is_some() && overrides.is_none() {
            tracing::warn!(dir = ?pack_dir, lang = lang_code, "언어팩을 찾지 못해 내장 문자열을 사용합니다");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// TOML 문자열로 된 언어팩을 직접 적용한다.
    pub fn with_overrides_toml(mut self, src: &str) -> Self {
        self.overrides = parse_toml_to_map(src);
        self
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// 카테고리 표시 이름. 언어팩의 `category.<key>` 가 우선한다.
    pub fn category_name(&self, category: UnitCategory) -> &str {
        if let Some(v) = self.lookup(&format!("category.{}", category.key())) {
            return v;
        }
        match self.lang {
            Language::Ko => category.name(),
            Language::En => en_category(category),
        }
    }

    /// 물성 표시 이름. 언어팩의 `property.<key>` 가 우선한다.
    pub fn property_name(&self, property: MaterialProperty) -> &str {
        if let Some(v) = self.lookup(&format!("property.{}", property.key())) {
            return v;
        }
        match self.lang {
            Language::Ko => property.name(),
            Language::En => en_property(property),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 맵(중첩 테이블 허용).
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 단위 변환 계산기 ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환",
        MAIN_MENU_CONVERT_ALL => "2) 전체 단위 환산표",
        MAIN_MENU_MATERIAL => "3) 재료 물성 단위 변환",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        CONVERT_ALL_HEADING => "\n-- 전체 단위 환산표 --",
        GROUP_BASIC => "[기본 단위]",
        GROUP_ENGINEERING => "[공학 단위]",
        PROMPT_CATEGORY => "카테고리 번호를 입력: ",
        UNITS_AVAILABLE => "사용 가능한 단위:",
        BASE_UNIT => "기준 단위:",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_FROM_UNIT => "입력 단위: ",
        PROMPT_TO_UNIT => "변환 단위: ",
        RESULT => "변환 결과:",
        MATERIAL_HEADING => "\n-- 재료 물성 단위 변환 --",
        MATERIAL_PROMPT_PROPERTY => "물성 번호를 입력: ",
        MATERIAL_DIRECTION => "1) 영국단위 → SI  2) SI → 영국단위  (엔터: 설정의 단위계)",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 물성 표시 단위계:",
        SETTINGS_OPTIONS => "1) 영국단위  2) SI",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위계가 다음으로 설정되었습니다:",
        SETTINGS_CURRENT_DECIMALS => "현재 소수 자릿수:",
        SETTINGS_PROMPT_DECIMALS => "새 소수 자릿수(취소하려면 엔터): ",
        HELP_UNIT_CONVERSION => "도움말: 카테고리 번호 → 값 → 입력/변환 단위 순으로 입력 (예: m, ft, MPa, psi, °C, K). m2, C 같은 표기도 허용합니다.",
        HELP_MATERIAL => "도움말: 온도 물성은 °F ↔ °C, 연신율/푸아송비는 변환 없이 그대로 표시됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Unit Converter Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit conversion",
        MAIN_MENU_CONVERT_ALL => "2) Conversion table",
        MAIN_MENU_MATERIAL => "3) Material property units",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        CONVERT_ALL_HEADING => "\n-- Conversion Table --",
        GROUP_BASIC => "[Basic units]",
        GROUP_ENGINEERING => "[Engineering units]",
        PROMPT_CATEGORY => "Enter category number: ",
        UNITS_AVAILABLE => "Available units:",
        BASE_UNIT => "Base unit:",
        PROMPT_VALUE => "Value: ",
        PROMPT_FROM_UNIT => "From unit: ",
        PROMPT_TO_UNIT => "To unit: ",
        RESULT => "Result:",
        MATERIAL_HEADING => "\n-- Material Property Units --",
        MATERIAL_PROMPT_PROPERTY => "Enter property number: ",
        MATERIAL_DIRECTION => "1) Imperial → SI  2) SI → Imperial  (Enter: configured unit system)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current material unit system:",
        SETTINGS_OPTIONS => "1) Imperial  2) SI",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        SETTINGS_CURRENT_DECIMALS => "Current decimal places:",
        SETTINGS_PROMPT_DECIMALS => "New decimal places (enter to cancel): ",
        HELP_UNIT_CONVERSION => "Help: category number → value → from/to units (e.g. m, ft, MPa, psi, °C, K). Plain forms like m2 or C are accepted.",
        HELP_MATERIAL => "Help: temperature properties convert °F ↔ °C; elongation and Poisson ratio pass through unchanged.",
        _ => return None,
    })
}

fn en_category(category: UnitCategory) -> &'static str {
    match category {
        UnitCategory::Energy => "Heat energy",
        UnitCategory::Length => "Length",
        UnitCategory::Area => "Area",
        UnitCategory::Volume => "Volume",
        UnitCategory::Temperature => "Temperature",
        UnitCategory::Flow => "Flow",
        UnitCategory::Pressure => "Pressure",
        UnitCategory::Mass => "Mass",
        UnitCategory::Enthalpy => "Enthalpy",
    }
}

fn en_property(property: MaterialProperty) -> &'static str {
    match property {
        MaterialProperty::Density => "Density",
        MaterialProperty::YieldStrength => "Yield strength",
        MaterialProperty::UltimateStrength => "Ultimate strength",
        MaterialProperty::Elongation => "Elongation",
        MaterialProperty::ModulusOfElasticity => "Modulus of elasticity",
        MaterialProperty::PoissonRatio => "Poisson ratio",
        MaterialProperty::MaxServiceTemp => "Max service temperature",
        MaterialProperty::CoefThermalExpansion => "Coefficient of thermal expansion",
        MaterialProperty::MinExtrudeTemp => "Min extrusion temperature",
        MaterialProperty::MaxExtrudeTemp => "Max extrusion temperature",
        MaterialProperty::MinBedTemp => "Min bed temperature",
        MaterialProperty::MaxBedTemp => "Max bed temperature",
    }
}
