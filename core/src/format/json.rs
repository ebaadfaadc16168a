use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::{FileContext, FormatOptions, Formatter};
use crate::{Result, TokenDictionary};

/// Nested JSON keyed by token path, the closest thing to a lossless dump of
/// the resolved dictionary. Options and destination are not used.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

/// A path segment. A token whose path is a prefix of another token's keeps
/// its fields next to the nested children.
#[derive(Debug, Default, Serialize)]
struct Node<'a> {
    #[serde(flatten)]
    leaf: Option<Leaf<'a>>,
    #[serde(flatten)]
    children: IndexMap<&'a str, Node<'a>>,
}

#[derive(Debug, Serialize)]
struct Leaf<'a> {
    value: &'a Value,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

fn insert<'a>(group: &mut IndexMap<&'a str, Node<'a>>, path: &'a [String], leaf: Leaf<'a>) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    let node = group.entry(first.as_str()).or_default();
    if rest.is_empty() {
        node.leaf = Some(leaf);
    } else {
        insert(&mut node.children, rest, leaf);
    }
}

impl JsonFormatter {
    pub fn render(&self, dictionary: &TokenDictionary) -> Result<String> {
        let mut root = IndexMap::new();
        for record in dictionary {
            let leaf = Leaf {
                value: &record.value,
                type_: record.type_.as_deref(),
                description: record.description.as_deref(),
            };
            insert(&mut root, &record.path, leaf);
        }
        Ok(serde_json::to_string_pretty(&root)?)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, dictionary: &TokenDictionary, _: &FormatOptions, _: &FileContext) -> Result<String> {
        self.render(dictionary)
    }
}
