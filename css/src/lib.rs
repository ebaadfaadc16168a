//! The bundled token set, rendered to flat CSS at compile time.

pub const DARK_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens-dark.css"));
pub const LIGHT_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens-light.css"));
