use itertools::Itertools;

pub(crate) fn slugify(s: &str, sep: &str) -> String {
    deunicode::deunicode(
        &s.replace(',', "c")
            .replace('+', "p")
            .replace('.', "d")
            .replace('(', "_")
            .replace(')', "_")
            .replace(' ', sep)
            .to_ascii_lowercase(),
    )
}
pub(crate) fn slugify_css(s: &str) -> String {
    slugify(s, "-")
}

/// Kebab name of a token path, e.g. `semantic-color-bg-default`.
pub fn kebab_name<S: AsRef<str>>(path: &[S]) -> String {
    path.iter().map(|segment| slugify_css(segment.as_ref())).join("-")
}

/// Capitalized words of a path without its category segment: `["semantic",
/// "color", "bg-subtle"]` gives `["Color", "Bg", "Subtle"]`. Only the first
/// letter changes, so `onPrimary` stays `OnPrimary`.
pub fn title_words<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter()
        .skip(1)
        .map(AsRef::<str>::as_ref)
        .join("-")
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
