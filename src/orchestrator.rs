use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use theme_tokens_core::{
    ColorInverter, FileContext, Format, InversionSummary, TokenDictionary, TokenDocument,
};
use tracing::{debug, info};

use crate::{config::BuildConfig, store, Theme};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub inversion: InversionSummary,
    pub files: Vec<PathBuf>,
}

/// Derives the light document from the dark source and persists it.
pub fn derive_light(config: &BuildConfig, destination: &Path) -> Result<(TokenDocument, InversionSummary)> {
    let dark = store::load_document(&config.source)?;
    let table = config.inversion_table()?;
    debug!(entries = table.len(), "loaded inversion table");
    let (light, summary) = ColorInverter::new(&table)
        .with_semantic_category(config.options.category_name.semantic.as_str())
        .warn_unmatched(config.warn_unmatched)
        .invert_with_summary(&dark);
    store::save_document(destination, &light)?;
    info!(
        path = %destination.display(),
        inverted = summary.inverted,
        unmatched = summary.unmatched,
        "derived light theme"
    );
    Ok((light, summary))
}

/// The document a theme is rendered from: the hand-written source for dark,
/// the persisted derivation for light.
pub fn theme_source(config: &BuildConfig, theme: Theme) -> &Path {
    match theme {
        Theme::Dark => config.source.as_path(),
        Theme::Light => config.derived.as_path(),
    }
}

pub fn resolve_theme(config: &BuildConfig, theme: Theme) -> Result<TokenDictionary> {
    let path = theme_source(config, theme);
    let document = store::load_document(path)?;
    TokenDictionary::resolve(&document)
        .with_context(|| format!("failed to resolve tokens in {}", path.display()))
}

pub fn render(
    config: &BuildConfig,
    dictionary: &TokenDictionary,
    theme: Theme,
    format: Format,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let file = FileContext::new(format.file_name(theme.as_str()), generated_at);
    format
        .formatter()
        .format(dictionary, &config.options, &file)
        .with_context(|| format!("failed to render {}", file.destination))
}

/// Full pipeline: derive light, then render every configured format for both themes.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    let generated_at = Utc::now();
    let (_, inversion) = derive_light(config, &config.derived)?;
    let mut files = Vec::new();
    for theme in Theme::ALL {
        let dictionary = resolve_theme(config, theme)?;
        for &format in &config.formats {
            let text = render(config, &dictionary, theme, format, generated_at)?;
            let path = config.output_dir.join(format.file_name(theme.as_str()));
            store::write_file(&path, &text)?;
            info!(theme = theme.as_str(), %format, path = %path.display(), tokens = dictionary.len(), "wrote");
            files.push(path);
        }
    }
    Ok(BuildReport { inversion, files })
}
