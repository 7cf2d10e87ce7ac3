/// Markdown markers stripped before translation. `**` goes before `*` so
/// bold markers never leave a stray asterisk behind.
const MARKDOWN_MARKERS: [&str; 4] = ["**", "*", "`", "~~"];

const QUOTE_REPLACEMENTS: [(char, char); 4] = [
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
];

/// Normalise text the way the translation service does before translating:
/// strip markdown, straighten smart quotes and collapse whitespace.
pub fn clean_text_for_translation(text: &str) -> String {
    let mut result = text.to_string();

    for marker in MARKDOWN_MARKERS {
        result = result.replace(marker, "");
    }

    let result: String = result
        .chars()
        .map(|c| {
            QUOTE_REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect();

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}
