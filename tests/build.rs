use std::{fs, path::Path};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;
use theme_tokens::{build, derive_light, orchestrator, BuildConfig, Theme};
use theme_tokens_core::{Format, TokenDocument};

const DARK: &str = r##"{
  "primitive": {
    "color": {
      "neutral": {
        "0": { "value": "#000000", "type": "color" },
        "200": { "value": "#ffffff", "type": "color" }
      },
      "brand": { "primary": { "value": "#7c3aed", "type": "color" } }
    }
  },
  "semantic": {
    "color": {
      "bg": { "value": "{primitive.color.neutral.0}", "type": "color", "description": "Page" },
      "fg": { "value": "{primitive.color.neutral.200}", "type": "color" },
      "brand": { "value": "{primitive.color.brand.primary}", "type": "color" }
    }
  },
  "component": {
    "button": { "bg": { "value": "{semantic.color.brand}", "type": "color" } }
  }
}"##;

fn setup(formats: &[Format]) -> (TempDir, BuildConfig) {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("dark-mode.json");
    fs::write(&source, DARK).unwrap();
    let config = BuildConfig {
        source,
        derived: dir.path().join("derived/nested/light-mode.json"),
        output_dir: dir.path().join("out"),
        formats: formats.to_vec(),
        ..BuildConfig::default()
    };
    (dir, config)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn derives_and_persists_the_light_document() {
    let (_dir, config) = setup(&[]);
    let (light, summary) = derive_light(&config, &config.derived).unwrap();
    assert_eq!(summary.inverted, 2);
    assert_eq!(summary.unmatched, 1);

    let persisted = TokenDocument::from_json(&read(&config.derived)).unwrap();
    assert_eq!(persisted, light);

    let json: Value = serde_json::from_str(&read(&config.derived)).unwrap();
    assert_eq!(json["semantic"]["color"]["bg"]["value"], "{primitive.color.neutral.200}");
    assert_eq!(json["semantic"]["color"]["fg"]["value"], "{primitive.color.neutral.0}");
    assert_eq!(json["semantic"]["color"]["brand"]["value"], "{primitive.color.brand.primary}");
    assert_eq!(json["semantic"]["color"]["bg"]["description"], "Page");
}

#[test]
fn derived_document_is_overwritten() {
    let (_dir, config) = setup(&[]);
    fs::create_dir_all(config.derived.parent().unwrap()).unwrap();
    fs::write(&config.derived, r#"{ "stale": { "value": "x" } }"#).unwrap();
    derive_light(&config, &config.derived).unwrap();
    assert!(!read(&config.derived).contains("stale"));
}

#[test]
fn builds_every_theme_and_format() {
    let (_dir, config) = setup(&[Format::Css, Format::Scss, Format::Ts, Format::Json]);
    let report = build(&config).unwrap();

    let names: Vec<String> = report
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "tokens-dark.css",
            "_tokens-dark.scss",
            "tokens-dark.ts",
            "tokens-dark.json",
            "tokens-light.css",
            "_tokens-light.scss",
            "tokens-light.ts",
            "tokens-light.json",
        ]
    );

    let out = &config.output_dir;
    let dark_css = read(&out.join("tokens-dark.css"));
    let light_css = read(&out.join("tokens-light.css"));
    assert!(dark_css.contains("[data-theme=\"dark\"] {"));
    assert!(dark_css.contains("  --semantic-color-bg: #000000;"));
    assert!(light_css.contains(":root, [data-theme=\"light\"] {"));
    assert!(light_css.contains("  --semantic-color-bg: #ffffff;"));
    assert!(light_css.contains("  --semantic-color-brand: #7c3aed;"));

    let light_scss = read(&out.join("_tokens-light.scss"));
    assert!(light_scss.contains("  --color-bg: #ffffff;\n"));
    assert!(light_scss.contains("$color-bg: var(--color-bg);\n"));
    assert!(light_scss.contains("$button-bg: $color-brand;\n"));

    let dark_ts = read(&out.join("tokens-dark.ts"));
    assert!(dark_ts.contains("\"fullName\": \"Color Bg\""));
    assert!(!dark_ts.contains("primitive-color"));

    let dark_json: Value = serde_json::from_str(&read(&out.join("tokens-dark.json"))).unwrap();
    assert_eq!(dark_json["component"]["button"]["bg"]["value"], "#7c3aed");

    let header = |text: &str| text.lines().take(4).collect::<Vec<_>>().join("\n");
    assert_eq!(header(&dark_css), header(&light_scss));
    assert_eq!(header(&dark_css), header(&dark_ts));
}

#[test]
fn renders_a_single_theme() {
    let (_dir, config) = setup(&[]);
    derive_light(&config, &config.derived).unwrap();
    let dictionary = orchestrator::resolve_theme(&config, Theme::Light).unwrap();
    let text =
        orchestrator::render(&config, &dictionary, Theme::Light, Format::Css, chrono::Utc::now()).unwrap();
    assert!(text.contains("--semantic-color-fg: #000000;"));
}

#[test]
fn missing_source_fails_before_writing() {
    let (_dir, mut config) = setup(&[Format::Css]);
    config.source = config.source.with_file_name("missing.json");
    let err = build(&config).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read token document"), "{err:#}");
    assert!(!config.derived.exists());
    assert!(!config.output_dir.exists());
}

#[test]
fn invalid_json_is_a_load_failure() {
    let (_dir, config) = setup(&[Format::Css]);
    fs::write(&config.source, "{ nope").unwrap();
    let err = build(&config).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse token document"), "{err:#}");
}

#[test]
fn custom_inversion_table() {
    let (dir, mut config) = setup(&[]);
    let table = dir.path().join("table.json");
    fs::write(&table, r#"{ "brand.primary": "neutral.0" }"#).unwrap();
    config.inversion_table = Some(table);
    let (_, summary) = derive_light(&config, &config.derived).unwrap();
    assert_eq!(summary.inverted, 1);
    assert_eq!(summary.unmatched, 2);
    let json: Value = serde_json::from_str(&read(&config.derived)).unwrap();
    assert_eq!(json["semantic"]["color"]["brand"]["value"], "{primitive.color.neutral.0}");
    assert_eq!(json["semantic"]["color"]["bg"]["value"], "{primitive.color.neutral.0}");
}

#[test]
fn bundled_tokens_build_in_both_themes() {
    let dir = tempfile::tempdir().unwrap();
    let config = BuildConfig {
        source: Path::new(env!("CARGO_MANIFEST_DIR")).join("tokens/dark-mode.json"),
        derived: dir.path().join("light-mode.json"),
        output_dir: dir.path().join("out"),
        ..BuildConfig::default()
    };
    let report = build(&config).unwrap();
    assert_eq!(report.files.len(), 6);
    assert_eq!(report.inversion.unmatched, 2);

    let light_scss = read(&config.output_dir.join("_tokens-light.scss"));
    assert!(light_scss.contains("  --color-bg-default: #ffffff;\n"));
    assert!(light_scss.contains("  --color-fg-default: #08090c;\n"));
    assert!(light_scss.contains("$button-label: $color-bg-default;\n"));
    assert!(light_scss.contains("$button-border: 1px solid {semantic.color.border.default};\n"));
}
