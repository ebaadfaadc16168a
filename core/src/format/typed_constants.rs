use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::{file_header, FileContext, FormatOptions, Formatter};
use crate::{naming::title_words, Result, TokenDictionary, TokenRecord};

const DECLARATIONS: &str = "export type DesignToken = {
  name: string;
  fullName: string;
  category: string;
  group: string;
  scssVariable: string;
  cssVariable?: string;
  type: string;
  value: string | number | boolean | Record<string, unknown> | unknown[];
};

export type DesignTokens = Record<string, Record<string, DesignToken[]>>;
";

/// TypeScript module with the semantic tokens, grouped by category then
/// group, in the order they were first seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedConstantsFormatter;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConstantToken<'a> {
    name: String,
    full_name: String,
    category: &'a str,
    group: &'a str,
    scss_variable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    css_variable: Option<String>,
    #[serde(rename = "type")]
    type_: &'a str,
    value: &'a Value,
}
impl<'a> ConstantToken<'a> {
    fn new(record: &'a TokenRecord, options: &FormatOptions) -> Self {
        let words = title_words(&record.path);
        let is_semantic = record.category == options.category_name.semantic;
        Self {
            name: words.iter().skip(1).map(String::as_str).collect::<Vec<_>>().join(" "),
            full_name: words.join(" "),
            category: &record.category,
            group: &record.group,
            scss_variable: options.style_variable(record),
            css_variable: is_semantic.then(|| format!("var({})", options.css_variable(record))),
            type_: record.type_.as_deref().unwrap_or_default(),
            value: &record.value,
        }
    }
}

impl Formatter for TypedConstantsFormatter {
    fn format(
        &self,
        dictionary: &TokenDictionary,
        options: &FormatOptions,
        file: &FileContext,
    ) -> Result<String> {
        let mut grouped: IndexMap<&str, IndexMap<&str, Vec<ConstantToken>>> = IndexMap::new();
        for record in dictionary
            .iter()
            .filter(|record| record.category == options.category_name.semantic)
        {
            grouped
                .entry(&record.category)
                .or_default()
                .entry(&record.group)
                .or_default()
                .push(ConstantToken::new(record, options));
        }
        let body = serde_json::to_string_pretty(&grouped)?;
        Ok(format!(
            "{}\n{DECLARATIONS}\nexport const tokens: DesignTokens = {body};\n\nexport default tokens;\n",
            file_header(file)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_support::{file, HEADER};
    use pretty_assertions::assert_eq;

    fn tokens_json(output: &str) -> serde_json::Value {
        let marker = "tokens: DesignTokens = ";
        let start = output.find(marker).unwrap() + marker.len();
        let end = output.rfind("};").unwrap() + 1;
        serde_json::from_str(&output[start..end]).unwrap()
    }

    #[test]
    fn emits_semantic_tokens_only() {
        let dictionary = TokenDictionary::from_records(vec![
            TokenRecord::new(&["primitive", "color", "neutral", "0"], "color", "#000"),
            TokenRecord::new(&["semantic", "color", "bg-subtle", "hover"], "color", "#111")
                .with_original("{primitive.color.neutral.10}"),
            TokenRecord::new(&["component", "button", "bg"], "color", "#111"),
        ]);
        let output = TypedConstantsFormatter
            .format(&dictionary, &FormatOptions::default(), &file("tokens-dark.ts"))
            .unwrap();

        assert!(output.starts_with(HEADER));
        assert!(output.contains("export type DesignToken = {"));
        assert!(output.contains("export type DesignTokens = Record<string, Record<string, DesignToken[]>>;"));
        assert!(output.ends_with("\n\nexport default tokens;\n"));
        assert_eq!(
            tokens_json(&output),
            serde_json::json!({
                "semantic": {
                    "color": [{
                        "name": "Bg Subtle Hover",
                        "fullName": "Color Bg Subtle Hover",
                        "category": "semantic",
                        "group": "color",
                        "scssVariable": "$color-bg-subtle-hover",
                        "cssVariable": "var(--color-bg-subtle-hover)",
                        "type": "color",
                        "value": "#111"
                    }]
                }
            })
        );
    }

    #[test]
    fn keeps_first_seen_order() {
        let dictionary = TokenDictionary::from_records(vec![
            TokenRecord::new(&["semantic", "spacing", "gap"], "spacing", "8px"),
            TokenRecord::new(&["semantic", "color", "fg"], "color", "#fff"),
            TokenRecord::new(&["semantic", "color", "bg"], "color", "#000"),
        ]);
        let output = TypedConstantsFormatter
            .format(&dictionary, &FormatOptions::default(), &file("tokens-dark.ts"))
            .unwrap();
        let json = tokens_json(&output);
        let groups: Vec<&String> = json["semantic"].as_object().unwrap().keys().collect();
        assert_eq!(groups, vec!["spacing", "color"]);
        let names: Vec<&str> = json["semantic"]["color"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Fg", "Bg"]);
    }

    #[test]
    fn display_names_keep_mixed_case_segments() {
        let dictionary = TokenDictionary::from_records(vec![TokenRecord::new(
            &["semantic", "color", "onPrimary", "bgSubtle"],
            "color",
            "#fff",
        )]);
        let output = TypedConstantsFormatter
            .format(&dictionary, &FormatOptions::default(), &file("tokens-dark.ts"))
            .unwrap();
        let token = &tokens_json(&output)["semantic"]["color"][0];
        assert_eq!(token["name"], "OnPrimary BgSubtle");
        assert_eq!(token["fullName"], "Color OnPrimary BgSubtle");
    }

    #[test]
    fn uses_configured_prefixes_and_category() {
        let options: FormatOptions = serde_json::from_str(
            r#"{ "varPrefix": { "css": "--ds-", "styleLang": "$ds-" }, "categoryName": { "semantic": "intent" } }"#,
        )
        .unwrap();
        let dictionary = TokenDictionary::from_records(vec![
            TokenRecord::new(&["semantic", "color", "bg"], "color", "#000"),
            TokenRecord::new(&["intent", "color", "bg"], "color", "#000"),
        ]);
        let output = TypedConstantsFormatter
            .format(&dictionary, &options, &file("tokens-dark.ts"))
            .unwrap();
        let json = tokens_json(&output);
        assert_eq!(json.as_object().unwrap().len(), 1);
        let token = &json["intent"]["color"][0];
        assert_eq!(token["scssVariable"], "$ds-color-bg");
        assert_eq!(token["cssVariable"], "var(--ds-color-bg)");
    }
}
