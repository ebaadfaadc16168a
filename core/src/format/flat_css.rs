use itertools::Itertools;

use super::{file_header, FileContext, FormatOptions, Formatter};
use crate::{Result, TokenDictionary};

/// Every token as a custom property, in input order, scoped to the theme
/// named by the destination file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatCssFormatter;

pub(crate) fn theme_selector(destination: &str) -> &'static str {
    if destination.contains("dark") {
        r#"[data-theme="dark"]"#
    } else if destination.contains("light") {
        r#":root, [data-theme="light"]"#
    } else {
        ":root"
    }
}

impl Formatter for FlatCssFormatter {
    fn format(
        &self,
        dictionary: &TokenDictionary,
        options: &FormatOptions,
        file: &FileContext,
    ) -> Result<String> {
        let declarations = dictionary
            .iter()
            .map(|record| format!("  {}{}: {};", options.css_prefix(), record.name, record.value_text()))
            .join("\n");
        Ok(format!(
            "{}\n{} {{\n{declarations}\n}}\n",
            file_header(file),
            theme_selector(&file.destination)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        format::test_support::{file, HEADER},
        TokenRecord,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn picks_the_selector_from_the_file_name() {
        assert_eq!(theme_selector("tokens-dark.css"), r#"[data-theme="dark"]"#);
        assert_eq!(theme_selector("tokens-light.css"), r#":root, [data-theme="light"]"#);
        assert_eq!(theme_selector("tokens.css"), ":root");
    }

    #[test]
    fn declares_every_token_in_order() {
        let dictionary = TokenDictionary::from_records(vec![
            TokenRecord::new(&["semantic", "color", "bg"], "color", "#ffffff"),
            TokenRecord::new(&["primitive", "color", "neutral", "0"], "color", "#000000"),
            TokenRecord::new(&["component", "card", "padding"], "spacing", 16),
        ]);
        let output = FlatCssFormatter
            .format(&dictionary, &FormatOptions::default(), &file("tokens-light.css"))
            .unwrap();
        assert_eq!(
            output,
            format!(
                "{HEADER}
:root, [data-theme=\"light\"] {{
  --semantic-color-bg: #ffffff;
  --primitive-color-neutral-0: #000000;
  --component-card-padding: 16;
}}
"
            )
        );
    }
}
