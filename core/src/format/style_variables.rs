use std::collections::HashMap;

use itertools::Itertools;

use super::{file_header, FileContext, FormatOptions, Formatter};
use crate::{dictionary::value_text, Result, TokenDictionary, TokenRecord};

/// SCSS partial: a mixin declaring the semantic custom properties, SCSS
/// aliases pointing at them, and component variables composed from those
/// aliases. Every block is sorted, so input order does not matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleVariableFormatter;

type Lookup<'a> = HashMap<&'a str, HashMap<String, &'a TokenRecord>>;

fn lookup(dictionary: &TokenDictionary) -> Lookup<'_> {
    let mut lookup: Lookup = HashMap::new();
    for record in dictionary {
        lookup
            .entry(record.category.as_str())
            .or_default()
            .insert(record.key(), record);
    }
    lookup
}

/// Finds the record `record` was authored as a reference to, within `category`.
fn referenced<'a>(lookup: &Lookup<'a>, category: &str, record: &TokenRecord) -> Option<&'a TokenRecord> {
    let reference = record.original_reference()?;
    lookup.get(category)?.get(&reference.key()).copied()
}

impl Formatter for StyleVariableFormatter {
    fn format(
        &self,
        dictionary: &TokenDictionary,
        options: &FormatOptions,
        file: &FileContext,
    ) -> Result<String> {
        let names = &options.category_name;
        let lookup = lookup(dictionary);
        let semantic = move || dictionary.iter().filter(move |r| r.category == names.semantic);

        let properties = semantic()
            .map(|record| {
                let value = referenced(&lookup, &names.primitive, record)
                    .map(TokenRecord::value_text)
                    .unwrap_or_else(|| record.value_text());
                format!("  {}: {};", options.css_variable(record), value)
            })
            .sorted()
            .join("\n");

        let aliases = semantic()
            .map(|record| {
                format!(
                    "{}: var({});",
                    options.style_variable(record),
                    options.css_variable(record)
                )
            })
            .sorted()
            .join("\n");

        let components = dictionary
            .iter()
            .filter(|r| r.category == names.component)
            .map(|record| {
                let value = referenced(&lookup, &names.semantic, record)
                    .map(|target| options.style_variable(target))
                    .unwrap_or_else(|| value_text(&record.original_value));
                format!("{}: {};", options.style_variable(record), value)
            })
            .sorted()
            .join("\n");

        Ok(format!(
            "{}\n@mixin theme-tokens {{\n{properties}\n}}\n\n// Semantic aliases\n{aliases}\n\n// Component tokens\n{components}\n",
            file_header(file)
        ))
    }
}
