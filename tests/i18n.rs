//! 번역기 테스트.
use unit_converter_toolbox::i18n::{keys, resolve_language, Language, Translator};
use unit_converter_toolbox::material::MaterialProperty;
use unit_converter_toolbox::quantity::UnitCategory;

#[test]
fn built_in_languages() {
    let en = Translator::new("en-US");
    assert_eq!(en.language(), Language::En);
    assert!(en.t(keys::MAIN_MENU_TITLE).contains("Unit Converter"));
    assert_eq!(en.category_name(UnitCategory::Energy), "Heat energy");
    assert_eq!(en.property_name(MaterialProperty::PoissonRatio), "Poisson ratio");

    let ko = Translator::new("ko");
    assert_eq!(ko.language_code(), "ko");
    assert_eq!(ko.category_name(UnitCategory::Flow), "유량");
    assert_eq!(ko.property_name(MaterialProperty::Density), "밀도");
    assert_eq!(ko.t(keys::APP_EXIT), "프로그램을 종료합니다.");
}

#[test]
fn unknown_language_falls_back_to_korean() {
    assert_eq!(Translator::new("fr").language(), Language::Ko);
}

#[test]
fn toml_overrides_take_precedence() {
    let tr = Translator::new("en").with_overrides_toml(
        r#"
[category]
length = "Länge"

[main_menu]
exit = "0) Beenden"
"#,
    );
    assert_eq!(tr.category_name(UnitCategory::Length), "Länge");
    assert_eq!(tr.category_name(UnitCategory::Mass), "Mass");
    assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) Beenden");
    assert_eq!(tr.lookup("main_menu.exit"), Some("0) Beenden"));
    assert_eq!(tr.t(keys::PROMPT_VALUE), "Value: ");
}

#[test]
fn missing_pack_directory_uses_built_ins() {
    let tr = Translator::new_with_pack("en", Some("/nonexistent/locales"));
    assert_eq!(tr.t(keys::PROMPT_SELECT), "Select: ");
}

#[test]
fn language_resolution_order() {
    assert_eq!(resolve_language("en", Some("ko")), "en");
    assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    assert_eq!(resolve_language("", Some("en-gb")), "en");
}
