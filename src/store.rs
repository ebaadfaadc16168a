//! Reading and writing token documents and generated files.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use theme_tokens_core::TokenDocument;
use tracing::debug;

pub fn load_document(path: &Path) -> Result<TokenDocument> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read token document {}", path.display()))?;
    let document = TokenDocument::from_json(&data)
        .with_context(|| format!("failed to parse token document {}", path.display()))?;
    debug!(path = %path.display(), categories = document.categories.len(), "loaded token document");
    Ok(document)
}

/// Overwrites `path` with the pretty printed document, creating parent directories.
pub fn save_document(path: &Path, document: &TokenDocument) -> Result<()> {
    let mut data = document
        .to_json_pretty()
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    data.push('\n');
    write_file(path, &data)
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
