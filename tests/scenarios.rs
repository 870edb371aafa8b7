//! End-to-end checks of derivation and export through the public API.

use tintsmith::color::{derive, hex_to_hsl, rgba};
use tintsmith::export::{self, ExportError};
use tintsmith::tokens::Palette;
use tintsmith::{
    generate_tokens, theme_name, ExportFormat, Mode, Preset, Rgb, TokenKey, EXPORT_FORMATS,
};

fn two_tokens() -> [(TokenKey, &'static str); 2] {
    [
        (TokenKey::CheckboxFill, "#112233"),
        (TokenKey::SliderTrack, "#445566"),
    ]
}

#[test]
fn test_checkbox_fill_is_base_reencoded() {
    let hsl = hex_to_hsl("#6366F1").unwrap();
    assert_eq!((hsl.h, hsl.s, hsl.l), (239.0, 84.0, 67.0));

    let tokens = generate_tokens("#6366F1", Mode::Dark).unwrap();
    assert_eq!(
        tokens[TokenKey::CheckboxFill].to_string(),
        derive(hsl.h, hsl.s, hsl.l)
    );
}

#[test]
fn test_light_base_is_white_for_black_input() {
    let hsl = hex_to_hsl("#000000").unwrap();
    let palette = Palette::new(hsl, Mode::Light);
    assert_eq!(palette.background.base, Rgb::WHITE);

    let tokens = generate_tokens("#000000", Mode::Light).unwrap();
    assert!(tokens[TokenKey::CardFooterBg]
        .to_string()
        .eq_ignore_ascii_case("#FFFFFF"));
}

#[test]
fn test_css_export_of_partial_set() {
    let css = export::serialize("css", two_tokens(), "Test").unwrap();

    let header = css.find("/* Test").expect("header comment");
    let open = css.find(":root {").expect("root block");
    let close = css.rfind('}').unwrap();
    let fill = css.find("--checkbox-fill: #112233;").expect("checkbox fill");
    let track = css.find("--slider-track: #445566;").expect("slider track");

    assert!(header < open);
    assert!(open < fill && fill < close);
    assert!(open < track && track < close);
    assert_eq!(css.matches(":root {").count(), 1);
}

#[test]
fn test_scss_export_groups_under_first_category() {
    let scss = export::serialize("scss", two_tokens(), "Test").unwrap();
    let lines: Vec<&str> = scss.lines().collect();

    let comment = lines
        .iter()
        .position(|l| *l == "// Interactive & Form")
        .expect("category comment");
    assert_eq!(lines[comment + 1], "$checkbox-fill: #112233;");
    assert_eq!(lines[comment + 2], "$slider-track: #445566;");
    assert_eq!(scss.matches("// Interactive & Form").count(), 1);
}

#[test]
fn test_rgba_exact() {
    assert_eq!(rgba("#FF0000", 0.5).unwrap(), "rgba(255,0,0,0.5)");
}

#[test]
fn test_every_format_exports_full_set() {
    let tokens = generate_tokens("#14B8A6", Mode::Light).unwrap();
    for descriptor in &EXPORT_FORMATS {
        let out = descriptor
            .format
            .serialize(tokens.iter(), "Teal")
            .unwrap();
        assert!(out.contains("Teal"), "{} lost the name", descriptor.id);
        for key in TokenKey::ALL {
            let value = tokens[key].to_string();
            assert!(out.contains(&value), "{} missing {key}", descriptor.id);
        }
    }
}

#[test]
fn test_json_formats_parse() {
    let tokens = generate_tokens("#F59E0B", Mode::Dark).unwrap();

    let json = ExportFormat::Json.serialize(tokens.iter(), "Amber").unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["name"], "Amber");
    assert_eq!(doc["tokens"].as_object().unwrap().len(), TokenKey::COUNT);
    assert_eq!(doc["tokens"]["gradientStop1"]["cssVar"], "--gradient-stop-1");

    let dt = ExportFormat::DesignTokens.serialize(tokens.iter(), "Amber").unwrap();
    let doc: serde_json::Value = serde_json::from_str(&dt).unwrap();
    let groups = doc["Amber"].as_object().unwrap();
    assert_eq!(groups.len(), 4);
    assert_eq!(doc["Amber"]["System & Browser"]["caretColor"]["$type"], "color");
}

#[test]
fn test_css_uses_hyphen_rule_not_registry_name() {
    let css = export::serialize("css", [(TokenKey::GradientStop1, "#000000")], "T").unwrap();
    assert!(css.contains("--gradient-stop1: #000000;"));
}

#[test]
fn test_unknown_format_is_an_error() {
    let err = export::serialize("less", two_tokens(), "Test").unwrap_err();
    assert!(matches!(err, ExportError::UnknownFormat { ref id } if id == "less"));
}

#[test]
fn test_name_is_embedded_verbatim() {
    // Text formats do not escape the name; a comment terminator passes through.
    let css = export::serialize("css", two_tokens(), "Evil */ body {}").unwrap();
    assert!(css.starts_with("/* Evil */ body {} — CSS Custom Properties */"));

    let js = export::serialize("style-object", two_tokens(), "It's").unwrap();
    assert!(js.starts_with("// It's — Style Object"));
}

#[test]
fn test_invalid_base_color() {
    for bad in ["#fff", "6366F1", "#6366FZ", "rgb(0,0,0)"] {
        assert!(generate_tokens(bad, Mode::Dark).is_err(), "accepted {bad}");
    }
}

#[test]
fn test_preset_name_export_uses_resolved_color() {
    let color = Preset::resolve("emerald");
    let tokens = generate_tokens(color, Mode::Light).unwrap();
    let name = theme_name(color, Mode::Light);
    let css = ExportFormat::default().serialize(tokens.iter(), &name).unwrap();
    assert!(css.starts_with("/* Custom Emerald Light — CSS Custom Properties */"));
}
