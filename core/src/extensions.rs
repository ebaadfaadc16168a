use csscolorparser::Color;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{document::Token, Error, Result};

/// The parts of a token's `$extensions` object this crate understands.
/// Other vendors' keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct Extensions {
    #[serde(rename = "studio.tokens")]
    pub studio_tokens: Option<StudioTokensExtension>,
}
impl Extensions {
    pub fn of(token: &Token) -> Option<Self> {
        let raw = token.extra.get("$extensions")?;
        match serde_json::from_value(raw.clone()) {
            Ok(extensions) => Some(extensions),
            Err(err) => {
                debug!(%err, "ignoring unrecognised $extensions");
                None
            }
        }
    }
    pub fn modifier(&self) -> Option<&StudioTokensModifier> {
        self.studio_tokens.as_ref()?.modify.as_ref()
    }
}

#[derive(Debug, Deserialize)]
pub struct StudioTokensExtension {
    pub modify: Option<StudioTokensModifier>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum StudioTokensModify {
    #[serde(rename = "lighten")]
    Lighten,
    #[serde(rename = "darken")]
    Darken,
    #[serde(rename = "alpha")]
    Alpha,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub enum StudioTokensSpace {
    #[default]
    #[serde(rename = "hsl")]
    Hsl,
    #[serde(rename = "lch")]
    Lch,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudioTokensModifier {
    #[serde(rename = "type")]
    pub type_: StudioTokensModify,
    /// Tokens Studio writes this as a string, hand-written files often use a number.
    pub value: Value,
    #[serde(default)]
    pub space: StudioTokensSpace,
}
impl StudioTokensModifier {
    fn amount(&self, token: &str) -> Result<f64> {
        let amount = match &self.value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        amount.ok_or_else(|| Error::InvalidModifier {
            token: token.to_string(),
            reason: format!("`{}` is not a number", self.value),
        })
    }

    /// Applies the modifier to an already resolved color and returns it as hex.
    pub fn apply(&self, token: &str, base: &str) -> Result<String> {
        let amount = self.amount(token)?;
        let color = csscolorparser::parse(base).map_err(|_| Error::InvalidColor {
            token: token.to_string(),
            value: base.to_string(),
        })?;
        let scale = |l: f64| match self.type_ {
            StudioTokensModify::Lighten => l + l * amount,
            _ => l - l * amount,
        };
        let modified = match (&self.type_, &self.space) {
            (StudioTokensModify::Alpha, _) => {
                Color::new(color.r, color.g, color.b, amount.clamp(0.0, 1.0))
            }
            (StudioTokensModify::Lighten | StudioTokensModify::Darken, StudioTokensSpace::Hsl) => {
                let (h, s, l, a) = color.to_hsla();
                Color::from_hsla(h, s, scale(l).clamp(0.0, 1.0), a)
            }
            (StudioTokensModify::Lighten | StudioTokensModify::Darken, StudioTokensSpace::Lch) => {
                let (l, c, h, a) = color.to_lch();
                Color::from_lch(scale(l).clamp(0.0, 100.0), c, h, a)
            }
            (type_, space) => {
                warn!(token, ?type_, ?space, "unsupported studio.tokens modifier, value left as is");
                return Ok(base.to_string());
            }
        };
        Ok(modified.to_hex_string())
    }
}
