//! File-level glue around `theme_tokens_core`: configuration, loading and
//! saving token documents, and the build that writes every theme's outputs.

pub mod config;
pub mod logging;
pub mod orchestrator;
pub mod store;

use std::fmt;

pub use config::BuildConfig;
pub use orchestrator::{build, derive_light, BuildReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}
impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
