use std::{env, fs, path::Path};

use chrono::{DateTime, Utc};
use theme_tokens_core::{
    format::FlatCssFormatter, ColorInverter, FileContext, FormatOptions, Formatter,
    InversionTable, TokenDictionary, TokenDocument,
};

fn main() {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../tokens/dark-mode.json");
    let dark = TokenDocument::from_json(&fs::read_to_string(&source).unwrap()).unwrap();
    let table = InversionTable::builtin();
    let light = ColorInverter::new(&table).invert(&dark);

    // Reproducible builds pin the header timestamp.
    let generated_at = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.parse().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    let out_dir = env::var_os("OUT_DIR").unwrap();
    for (name, document) in [("tokens-dark.css", &dark), ("tokens-light.css", &light)] {
        let dictionary = TokenDictionary::resolve(document).unwrap();
        let css = FlatCssFormatter
            .format(
                &dictionary,
                &FormatOptions::default(),
                &FileContext::new(name, generated_at),
            )
            .unwrap();
        fs::write(Path::new(&out_dir).join(name), css).unwrap();
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", source.display());
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
