use crate::common::*;

#[doc = r#"
    Normalize raw prediction text before JSON extraction:
    strip the wrapping quote artifacts some endpoints add, unescape `\n`
    and `\"`, and replace non-breaking/typographic space characters
    (U+00A0, U+2000..U+200A) that break JSON parsing.
"#]
pub fn clean_prediction_text(raw: &str) -> String {
    let cleaned: &str = raw
        .strip_prefix("\"\"\"")
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(raw);

    let mut text: String = cleaned.replace("\\n", "\n").replace("\\\"", "\"");

    for odd_space in [
        '\u{a0}', '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}',
        '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200a}',
    ] {
        if text.contains(odd_space) {
            text = text.replace(odd_space, " ");
        }
    }

    text
}

#[doc = r#"
    Scan the text for balanced-brace JSON object candidates, returning each
    complete `{...}` span as (byte offset, slice). Candidates are yielded in
    order of appearance; the caller tries to parse them one by one.
"#]
pub fn balanced_json_candidates(text: &str) -> Vec<(usize, &str)> {
    let mut candidates: Vec<(usize, &str)> = Vec::new();
    let mut depth: usize = 0;
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = Some(idx);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(begin) = start.take() {
                            candidates.push((begin, &text[begin..idx + ch.len_utf8()]));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    candidates
}

#[doc = r#"
    Everything before the chart JSON is treated as analysis prose.
    Markdown fences are stripped and blank-line runs collapsed; short
    leftovers (10 chars or fewer) are discarded as noise.
"#]
pub fn extract_analysis_text(cleaned: &str, json_start: usize) -> Option<String> {
    let prefix: &str = cleaned.get(..json_start)?;

    let mut analysis: String = prefix
        .lines()
        .filter(|line| !line.trim_start().starts_with("```") && line.trim() != "json")
        .collect::<Vec<&str>>()
        .join("\n");

    while analysis.contains("\n\n\n") {
        analysis = analysis.replace("\n\n\n", "\n\n");
    }

    let analysis: String = analysis.trim().to_string();

    if analysis.len() > 10 {
        Some(analysis)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaning_strips_quote_wrapping_and_escapes() {
        let raw: &str = "\"\"\"line one\\nline two with \\\"quotes\\\"\"";
        let cleaned: String = clean_prediction_text(raw);
        assert_eq!(cleaned, "line one\nline two with \"quotes\"");
    }

    #[test]
    fn degenerate_quote_wrapping_is_left_intact() {
        /* A bare quote artifact must not be treated as a wrapped body */
        assert_eq!(clean_prediction_text("\"\"\""), "\"\"\"");
        assert_eq!(clean_prediction_text("\"\"\"\""), "");
        assert_eq!(clean_prediction_text(""), "");
    }

    #[test]
    fn cleaning_normalizes_typographic_spaces() {
        let raw: &str = "a\u{a0}b\u{2009}c";
        assert_eq!(clean_prediction_text(raw), "a b c");
    }

    #[test]
    fn balanced_scan_finds_nested_objects() {
        let text: &str = "analysis text {\"a\": {\"b\": 1}} trailing {\"c\": 2}";
        let candidates: Vec<(usize, &str)> = balanced_json_candidates(text);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].1, "{\"a\": {\"b\": 1}}");
        assert_eq!(candidates[1].1, "{\"c\": 2}");
    }

    #[test]
    fn unbalanced_text_yields_no_candidates() {
        assert!(balanced_json_candidates("no braces here }").is_empty());
        assert!(balanced_json_candidates("{ never closed").is_empty());
    }

    #[test]
    fn analysis_prefix_is_cleaned_and_short_noise_dropped() {
        let text: &str = "Revenue grew steadily across quarters.\n```json\n{\"a\":1}";
        let json_start: usize = text.find('{').unwrap();
        let analysis: String = extract_analysis_text(text, json_start).unwrap();
        assert_eq!(analysis, "Revenue grew steadily across quarters.");

        assert!(extract_analysis_text("ok\n{\"a\":1}", 3).is_none());
    }
}
