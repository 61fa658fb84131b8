//! Just enough HTML handling to get readable text out of catalog pages.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").unwrap());

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

/// Tags that separate words when the page is rendered.
const BREAKING_TAGS: [&str; 11] = [
    "br", "p", "div", "tr", "td", "th", "li", "ul", "ol", "table", "tbody",
];

/// The text content of an HTML fragment, with entities decoded and all runs of
/// whitespace collapsed into single spaces.
pub fn flatten(html: &str) -> String {
    let without_tags = TAG.replace_all(html, |captures: &Captures| {
        let is_breaking = captures
            .get(2)
            .map(|name| {
                BREAKING_TAGS
                    .iter()
                    .any(|tag| tag.eq_ignore_ascii_case(name.as_str()))
            })
            .unwrap_or(false);
        if is_breaking {
            " "
        } else {
            ""
        }
    });
    normalize_whitespace(&decode_entities(&without_tags))
}

/// Decodes character references. Unknown named entities are kept as they are.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |captures: &Captures| {
            let reference = &captures[1];
            let decoded = if let Some(hex) = reference
                .strip_prefix("#x")
                .or_else(|| reference.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(decimal) = reference.strip_prefix('#') {
                decimal.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match reference {
                    "amp" => Some('&'),
                    "nbsp" => Some(' '),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "ndash" => Some('–'),
                    _ => None,
                }
            };
            match decoded {
                Some(character) => character.to_string(),
                None => captures[0].to_string(),
            }
        })
        .into_owned()
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The inner HTML of the first element carrying the given class, e.g. the body cell of a
/// catalog detail page. An element that is never closed extends to the end of the input.
pub fn inner_html_by_class<'a>(html: &'a str, class: &str) -> Option<&'a str> {
    let opening = Regex::new(&format!(
        r#"(?i)<([a-z][a-z0-9]*)\b[^>]*\bclass\s*=\s*["']?[^"'>]*\b{}\b[^>]*>"#,
        regex::escape(class)
    ))
    .ok()?;
    let captures = opening.captures(html)?;
    let tag_name = captures.get(1)?.as_str();
    let content_start = captures.get(0)?.end();

    let same_tag = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(tag_name))).ok()?;
    let mut depth = 1;
    for tag in same_tag.captures_iter(&html[content_start..]) {
        let is_closing = tag.get(1).map_or(false, |slash| !slash.as_str().is_empty());
        let whole = tag.get(0)?;
        if is_closing {
            depth -= 1;
            if depth == 0 {
                return Some(&html[content_start..content_start + whole.start()]);
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }
    Some(&html[content_start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn tags_are_removed_and_whitespace_collapsed() {
        let html = "<br /> Undergraduate level\n  <b>CIS</b> 310 <br/>Minimum Grade of D\n<br />";

        assert_eq!(flatten(html), "Undergraduate level CIS 310 Minimum Grade of D");
    }

    #[test]
    fn line_breaks_separate_words() {
        assert_eq!(flatten("one<br>two<br/>three"), "one two three");
    }

    #[test]
    fn inline_tags_do_not_separate_words() {
        assert_eq!(flatten("Pre<i>requisites</i>"), "Prerequisites");
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(flatten("a <!-- b <c> --> d"), "a d");
    }

    #[parameterized(
    text = { "a &amp; b", "&lt;x&gt;", "&#39;quoted&#x27;", "a&nbsp;b", "&bogus; stays" },
    expected = { "a & b", "<x>", "'quoted'", "a b", "&bogus; stays" }
    )]
    fn entities_are_decoded(text: &str, expected: &str) {
        assert_eq!(decode_entities(text), expected);
    }

    #[test]
    fn inner_html_of_nested_element_is_found() {
        let html = r#"<table><tr><td class="ntdefault">outer <td>inner</td> more</td><td>next</td></tr></table>"#;

        assert_eq!(
            inner_html_by_class(html, "ntdefault"),
            Some("outer <td>inner</td> more")
        );
    }

    #[test]
    fn missing_class_gives_nothing() {
        assert_eq!(inner_html_by_class("<td class=\"other\">x</td>", "ntdefault"), None);
    }

    #[test]
    fn unclosed_element_extends_to_the_end() {
        assert_eq!(
            inner_html_by_class("<div class='a ntdefault b'>rest of page", "ntdefault"),
            Some("rest of page")
        );
    }
}
