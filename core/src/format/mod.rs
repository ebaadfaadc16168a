//! Output encodings of a [`TokenDictionary`].
//!
//! Each format is a [`Formatter`]: a pure function from the resolved token
//! records (plus naming options and the destination file) to text. None of
//! them touch the filesystem.

use std::{fmt, str::FromStr};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{dictionary::TokenDictionary, naming::kebab_name, TokenRecord, Result};

mod flat_css;
mod json;
mod style_variables;
mod typed_constants;

pub use flat_css::FlatCssFormatter;
pub use json::JsonFormatter;
pub use style_variables::StyleVariableFormatter;
pub use typed_constants::TypedConstantsFormatter;

pub trait Formatter {
    fn format(
        &self,
        dictionary: &TokenDictionary,
        options: &FormatOptions,
        file: &FileContext,
    ) -> Result<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub var_prefix: VarPrefix,
    pub category_name: CategoryNames,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VarPrefix {
    pub css: Option<String>,
    pub style_lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryNames {
    pub primitive: String,
    pub semantic: String,
    pub component: String,
}
impl Default for CategoryNames {
    fn default() -> Self {
        Self {
            primitive: "primitive".to_string(),
            semantic: "semantic".to_string(),
            component: "component".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn css_prefix(&self) -> &str {
        self.var_prefix.css.as_deref().unwrap_or("--")
    }
    pub fn style_prefix(&self) -> &str {
        self.var_prefix.style_lang.as_deref().unwrap_or("$")
    }
    /// `--<prefix>color-bg-default` for `semantic.color.bg.default`; the
    /// category segment is replaced by the prefix.
    pub fn css_variable(&self, record: &TokenRecord) -> String {
        format!("{}{}", self.css_prefix(), kebab_name(without_category(record)))
    }
    pub fn style_variable(&self, record: &TokenRecord) -> String {
        format!("{}{}", self.style_prefix(), kebab_name(without_category(record)))
    }
}

fn without_category(record: &TokenRecord) -> &[String] {
    record.path.get(1..).unwrap_or_default()
}

/// Where the output is going, and when this build started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    pub destination: String,
    pub generated_at: DateTime<Utc>,
}
impl FileContext {
    pub fn new(destination: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            destination: destination.into(),
            generated_at,
        }
    }
}

pub fn file_header(file: &FileContext) -> String {
    format!(
        "/**\n * Do not edit directly, this file was auto-generated.\n * Generated at {}\n */\n",
        file.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Css,
    Scss,
    Ts,
    Json,
}
impl Format {
    pub const ALL: [Format; 4] = [Format::Css, Format::Scss, Format::Ts, Format::Json];

    pub fn formatter(self) -> &'static dyn Formatter {
        match self {
            Format::Css => &FlatCssFormatter,
            Format::Scss => &StyleVariableFormatter,
            Format::Ts => &TypedConstantsFormatter,
            Format::Json => &JsonFormatter,
        }
    }
    pub fn file_name(self, theme: &str) -> String {
        match self {
            Format::Css => format!("tokens-{theme}.css"),
            Format::Scss => format!("_tokens-{theme}.scss"),
            Format::Ts => format!("tokens-{theme}.ts"),
            Format::Json => format!("tokens-{theme}.json"),
        }
    }
}
impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Css => "css",
            Format::Scss => "scss",
            Format::Ts => "ts",
            Format::Json => "json",
        })
    }
}
impl FromStr for Format {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.to_string() == s)
            .ok_or_else(|| format!("unknown format `{s}`, expected one of css, scss, ts, json"))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::TimeZone;

    use super::*;

    pub fn file(destination: &str) -> FileContext {
        FileContext::new(destination, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    pub const HEADER: &str =
        "/**\n * Do not edit directly, this file was auto-generated.\n * Generated at 2024-05-01T12:00:00Z\n */\n";
}
