//! Cell rendering shared by both output formats.

use std::fmt::Write;

use pipeline::SearchResult;

/// Renders a list of strings as a quoted list literal, e.g. `['a', "b's"]`.
///
/// Existing result files use this representation for the citation columns, so
/// spreadsheets built on top of them keep parsing.
pub(crate) fn list_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                // Writing into a String cannot fail.
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

/// Text form of every column, in [`pipeline::ResultTable::COLUMNS`] order.
pub(crate) fn text_row(row: &SearchResult) -> [String; 7] {
    [
        row.search_type().to_string(),
        row.query().to_owned(),
        format!("{:.2}", row.duration_seconds()),
        row.response_text().to_owned(),
        row.citation_count().to_string(),
        list_literal(row.citation_urls()),
        list_literal(row.citation_titles()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(list_literal(&[]), "[]");
    }

    #[test]
    fn test_plain_items_use_single_quotes() {
        assert_eq!(
            list_literal(&strings(&["https://a.example", "Title"])),
            "['https://a.example', 'Title']"
        );
    }

    #[test]
    fn test_apostrophe_switches_to_double_quotes() {
        assert_eq!(list_literal(&strings(&["Kim's Kitchen"])), "[\"Kim's Kitchen\"]");
    }

    #[test]
    fn test_both_quote_kinds_escape_single() {
        assert_eq!(
            list_literal(&strings(&["it's \"fine\""])),
            "['it\\'s \"fine\"']"
        );
    }

    #[test]
    fn test_control_characters_are_escaped() {
        assert_eq!(list_literal(&strings(&["a\\b\nc"])), "['a\\\\b\\nc']");
    }

    #[test]
    fn test_other_control_characters_use_hex_escapes() {
        assert_eq!(
            list_literal(&strings(&["bell\u{7}", "esc\u{1b}[0m", "del\u{7f}", "c1\u{85}"])),
            "['bell\\x07', 'esc\\x1b[0m', 'del\\x7f', 'c1\\x85']"
        );
    }
}
