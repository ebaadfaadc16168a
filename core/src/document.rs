use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// A whole token file: category name (`primitive`, `semantic`, ...) to its subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDocument {
    pub categories: IndexMap<String, TokenNode>,
}
impl TokenDocument {
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn category(&self, name: &str) -> Option<&TokenNode> {
        self.categories.get(name)
    }
    pub fn category_mut(&mut self, name: &str) -> Option<&mut TokenNode> {
        self.categories.get_mut(name)
    }
    /// Every token with its full path, depth first in document order.
    pub fn tokens(&self) -> Vec<(Vec<String>, &Token)> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        for (key, node) in &self.categories {
            path.push(key.clone());
            node.collect_tokens(&mut path, &mut out);
            path.pop();
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
    Token(Token),
    Group(IndexMap<String, TokenNode>),
    /// Group-level metadata (`"$description": "..."`, arrays, ...), kept verbatim.
    Scalar(Value),
}
impl TokenNode {
    fn collect_tokens<'a>(&'a self, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, &'a Token)>) {
        match self {
            TokenNode::Token(token) => out.push((path.clone(), token)),
            TokenNode::Group(group) => {
                for (key, node) in group {
                    path.push(key.clone());
                    node.collect_tokens(path, out);
                    path.pop();
                }
            }
            TokenNode::Scalar(_) => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub value: Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Anything else on the token (`$extensions`, `comment`, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}
impl Token {
    pub fn new(type_: &str, value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            type_: Some(type_.to_string()),
            description: None,
            extra: IndexMap::new(),
        }
    }
    pub fn is_color(&self) -> bool {
        self.type_.as_deref() == Some("color")
    }
}
