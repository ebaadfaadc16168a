//! Dark to light theme derivation.
//!
//! Light mode is never authored by hand. It is produced from the dark
//! document by swapping every semantic color's primitive reference for its
//! perceptual opposite, as listed in an [`InversionTable`]. Tokens whose
//! reference has no entry (brand colors, for instance) stay the same in both
//! themes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    document::{TokenDocument, TokenNode},
    reference::TokenReference,
};

const PRIMITIVE_COLOR: [&str; 2] = ["primitive", "color"];

/// Curated `<family>.<step>` pairs. Not symmetric in general: some mid-range
/// steps map to themselves and some families fold unevenly.
const BUILTIN: &[(&str, &str)] = &[
    ("neutral.0", "neutral.200"),
    ("neutral.10", "neutral.190"),
    ("neutral.20", "neutral.180"),
    ("neutral.30", "neutral.170"),
    ("neutral.40", "neutral.160"),
    ("neutral.50", "neutral.150"),
    ("neutral.60", "neutral.140"),
    ("neutral.70", "neutral.130"),
    ("neutral.80", "neutral.120"),
    ("neutral.90", "neutral.110"),
    ("neutral.100", "neutral.100"),
    ("neutral.110", "neutral.90"),
    ("neutral.120", "neutral.80"),
    ("neutral.130", "neutral.70"),
    ("neutral.140", "neutral.60"),
    ("neutral.150", "neutral.50"),
    ("neutral.160", "neutral.40"),
    ("neutral.170", "neutral.30"),
    ("neutral.180", "neutral.20"),
    ("neutral.190", "neutral.10"),
    ("neutral.200", "neutral.0"),
    ("blue.20", "blue.100"),
    ("blue.30", "blue.90"),
    ("blue.40", "blue.80"),
    ("blue.50", "blue.70"),
    ("blue.60", "blue.60"),
    ("blue.70", "blue.50"),
    ("blue.80", "blue.40"),
    ("blue.90", "blue.30"),
    ("blue.100", "blue.20"),
    ("teal.20", "teal.80"),
    ("teal.30", "teal.70"),
    ("teal.40", "teal.60"),
    ("teal.50", "teal.50"),
    ("teal.60", "teal.40"),
    ("teal.70", "teal.40"),
    ("teal.80", "teal.30"),
    ("red.30", "red.80"),
    ("red.50", "red.60"),
    ("red.60", "red.50"),
    ("red.80", "red.30"),
    ("green.30", "green.80"),
    ("green.50", "green.60"),
    ("green.60", "green.50"),
    ("green.80", "green.30"),
    ("yellow.30", "yellow.70"),
    ("yellow.50", "yellow.50"),
    ("yellow.70", "yellow.30"),
];

/// Primitive color slot to its theme-opposite slot, both as `<family>.<step>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InversionTable {
    entries: IndexMap<String, String>,
}
impl InversionTable {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN.iter().copied())
    }
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl Default for InversionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InversionSummary {
    pub inverted: usize,
    pub unmatched: usize,
}

#[derive(Debug, Clone)]
pub struct ColorInverter<'a> {
    table: &'a InversionTable,
    semantic: String,
    warn_unmatched: bool,
}
impl<'a> ColorInverter<'a> {
    pub fn new(table: &'a InversionTable) -> Self {
        Self {
            table,
            semantic: "semantic".to_string(),
            warn_unmatched: false,
        }
    }
    pub fn with_semantic_category(mut self, name: impl Into<String>) -> Self {
        self.semantic = name.into();
        self
    }
    pub fn warn_unmatched(mut self, warn: bool) -> Self {
        self.warn_unmatched = warn;
        self
    }

    pub fn invert(&self, dark: &TokenDocument) -> TokenDocument {
        self.invert_with_summary(dark).0
    }

    pub fn invert_with_summary(&self, dark: &TokenDocument) -> (TokenDocument, InversionSummary) {
        let mut light = dark.clone();
        let mut summary = InversionSummary::default();
        if let Some(semantic) = light.category_mut(&self.semantic) {
            let mut path = vec![self.semantic.clone()];
            self.invert_node(semantic, &mut path, &mut summary);
        }
        (light, summary)
    }

    fn invert_node(&self, node: &mut TokenNode, path: &mut Vec<String>, summary: &mut InversionSummary) {
        match node {
            TokenNode::Token(token) if token.is_color() => {
                let Some(value) = token.value.as_str() else {
                    return;
                };
                let Some(key) = TokenReference::parse(value)
                    .and_then(|reference| reference.strip_prefix(&PRIMITIVE_COLOR))
                else {
                    return;
                };
                match self.table.get(&key) {
                    Some(inverse) => {
                        let inverted = format!("{{primitive.color.{inverse}}}");
                        debug!(token = %path.join("."), from = %value, to = %inverted, "inverted color reference");
                        token.value = inverted.into();
                        summary.inverted += 1;
                    }
                    None => {
                        summary.unmatched += 1;
                        if self.warn_unmatched {
                            warn!(token = %path.join("."), reference = %value, "no inverse registered, keeping dark value");
                        } else {
                            trace!(token = %path.join("."), reference = %value, "no inverse registered");
                        }
                    }
                }
            }
            TokenNode::Group(group) => {
                for (key, child) in group.iter_mut() {
                    path.push(key.clone());
                    self.invert_node(child, path, summary);
                    path.pop();
                }
            }
            TokenNode::Token(_) | TokenNode::Scalar(_) => {}
        }
    }
}
