//! Flat, resolved view of a token document.
//!
//! Every formatter reads the same [`TokenDictionary`]: one [`TokenRecord`] per
//! token, in document order, with references followed down to their literal
//! values. The unresolved value is kept alongside as `original_value` because
//! some outputs re-express references instead of inlining them.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    document::{Token, TokenDocument},
    extensions::Extensions,
    naming::kebab_name,
    reference::{parse_template, Segment, TokenReference},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub path: Vec<String>,
    pub name: String,
    pub category: String,
    pub group: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub value: Value,
    pub original_value: Value,
    pub description: Option<String>,
}
impl TokenRecord {
    /// An already resolved record, `original_value` equal to `value`.
    pub fn new<S: AsRef<str>>(path: &[S], type_: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::from_parts(
            path.iter().map(|s| s.as_ref().to_string()).collect(),
            Some(type_.to_string()),
            value.clone(),
            value,
            None,
        )
    }
    pub fn with_original(mut self, original: impl Into<Value>) -> Self {
        self.original_value = original.into();
        self
    }
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
    fn from_parts(
        path: Vec<String>,
        type_: Option<String>,
        value: Value,
        original_value: Value,
        description: Option<String>,
    ) -> Self {
        Self {
            name: kebab_name(&path),
            category: path.first().cloned().unwrap_or_default(),
            group: path.get(1).cloned().unwrap_or_default(),
            path,
            type_,
            value,
            original_value,
            description,
        }
    }
    /// Dotted path, the same form a reference uses between its braces.
    pub fn key(&self) -> String {
        self.path.join(".")
    }
    pub fn value_text(&self) -> String {
        value_text(&self.value)
    }
    /// The reference this token was authored as, if its original value is exactly one.
    pub fn original_reference(&self) -> Option<TokenReference> {
        self.original_value.as_str().and_then(TokenReference::parse)
    }
}

/// Text form of a token value: strings as they are, anything else as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenDictionary {
    records: Vec<TokenRecord>,
}
impl TokenDictionary {
    pub fn resolve(document: &TokenDocument) -> Result<Self> {
        let tokens = document.tokens();
        let mut resolver = Resolver {
            tokens: tokens.iter().map(|(path, token)| (path.join("."), *token)).collect(),
            resolved: HashMap::new(),
        };
        let mut records = Vec::with_capacity(tokens.len());
        for (path, token) in &tokens {
            let value = resolver.resolve(&path.join("."), &mut Vec::new())?;
            records.push(TokenRecord::from_parts(
                path.clone(),
                token.type_.clone(),
                value,
                token.value.clone(),
                token.description.clone(),
            ));
        }
        Ok(Self { records })
    }
    pub fn from_records(records: Vec<TokenRecord>) -> Self {
        Self { records }
    }
    pub fn records(&self) -> &[TokenRecord] {
        &self.records
    }
    pub fn iter(&self) -> std::slice::Iter<'_, TokenRecord> {
        self.records.iter()
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
impl<'a> IntoIterator for &'a TokenDictionary {
    type Item = &'a TokenRecord;
    type IntoIter = std::slice::Iter<'a, TokenRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

struct Resolver<'a> {
    tokens: IndexMap<String, &'a Token>,
    resolved: HashMap<String, Value>,
}
impl<'a> Resolver<'a> {
    fn resolve(&mut self, key: &str, stack: &mut Vec<String>) -> Result<Value> {
        if let Some(value) = self.resolved.get(key) {
            return Ok(value.clone());
        }
        if stack.iter().any(|k| k == key) {
            let mut chain = stack.clone();
            chain.push(key.to_string());
            return Err(Error::CircularReference { chain });
        }
        let Some(token) = self.tokens.get(key).copied() else {
            return Err(Error::UnresolvedReference {
                from: stack.last().cloned().unwrap_or_default(),
                reference: format!("{{{key}}}"),
            });
        };
        stack.push(key.to_string());
        let mut value = self.resolve_value(&token.value, stack)?;
        if let Some(modifier) = Extensions::of(token).and_then(|e| e.modifier().cloned()) {
            if let Some(base) = value.as_str() {
                value = Value::String(modifier.apply(key, base)?);
            }
        }
        stack.pop();
        trace!(token = key, value = %value, "resolved");
        self.resolved.insert(key.to_string(), value.clone());
        Ok(value)
    }

    fn resolve_value(&mut self, value: &Value, stack: &mut Vec<String>) -> Result<Value> {
        match value {
            Value::String(s) => {
                let segments = parse_template(s);
                if let [Segment::Reference(reference)] = segments.as_slice() {
                    return self.resolve(&reference.key(), stack);
                }
                if !segments.iter().any(|s| matches!(s, Segment::Reference(_))) {
                    return Ok(value.clone());
                }
                let mut out = String::new();
                for segment in segments {
                    match segment {
                        Segment::Literal(text) => out.push_str(&text),
                        Segment::Reference(reference) => {
                            out.push_str(&value_text(&self.resolve(&reference.key(), stack)?))
                        }
                    }
                }
                Ok(Value::String(out))
            }
            Value::Object(map) => {
                let mut out = Map::new();
                for (k, v) in map {
                    out.insert(k.clone(), self.resolve_value(v, stack)?);
                }
                Ok(Value::Object(out))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.resolve_value(item, stack))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            other => Ok(other.clone()),
        }
    }
}
