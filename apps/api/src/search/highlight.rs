use regex::{Captures, Regex, RegexBuilder};
use tracing::warn;

use crate::search::index::tokenize;

pub const HIGHLIGHT_OPEN: &str = r#"<mark class="bg-primary/20 text-primary">"#;
pub const HIGHLIGHT_CLOSE: &str = "</mark>";

/// Wraps whole-word, case-insensitive occurrences of each query word in a
/// highlight marker. All words are matched in one pass so markup inserted
/// for one word is never re-matched by another.
pub fn highlight(text: &str, query: &str) -> String {
    let Some(pattern) = highlight_pattern(query) else {
        return text.to_string();
    };

    pattern
        .replace_all(text, |caps: &Captures| {
            format!("{HIGHLIGHT_OPEN}{}{HIGHLIGHT_CLOSE}", &caps[1])
        })
        .into_owned()
}

fn highlight_pattern(query: &str) -> Option<Regex> {
    let mut words: Vec<String> = Vec::new();
    for word in tokenize(query) {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    if words.is_empty() {
        return None;
    }

    // Longer words first so "reactjs" wins over "react" at the same position.
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");

    // ASCII word boundaries, matching the tokenizer's notion of a word.
    match RegexBuilder::new(&format!(r"(?-u:\b)({alternation})(?-u:\b)"))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping highlight for query {query:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(word: &str) -> String {
        format!("{HIGHLIGHT_OPEN}{word}{HIGHLIGHT_CLOSE}")
    }

    #[test]
    fn test_wraps_whole_words_case_insensitively() {
        let out = highlight("Senior React Developer", "react");
        assert_eq!(out, format!("Senior {} Developer", marked("React")));
    }

    #[test]
    fn test_does_not_wrap_inside_words() {
        assert_eq!(highlight("Reactive systems", "react"), "Reactive systems");
    }

    #[test]
    fn test_multiple_words() {
        let out = highlight("Python and AWS engineer", "aws python");
        assert_eq!(
            out,
            format!("{} and {} engineer", marked("Python"), marked("AWS"))
        );
    }

    #[test]
    fn test_blank_query_is_noop() {
        assert_eq!(highlight("Anything", "   "), "Anything");
        assert_eq!(highlight("Anything", ""), "Anything");
    }

    #[test]
    fn test_markup_words_do_not_corrupt_output() {
        let out = highlight("Great text and mark", "mark text class");
        assert_eq!(
            out,
            format!("Great {} and {}", marked("text"), marked("mark"))
        );
    }

    #[test]
    fn test_repeat_query_word_wraps_once() {
        let out = highlight("Go developer", "go GO");
        assert_eq!(out, format!("{} developer", marked("Go")));
    }

    #[test]
    fn test_deterministic() {
        let a = highlight("Full Stack Developer", "stack developer");
        let b = highlight("Full Stack Developer", "stack developer");
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_ascii_letters_end_a_word() {
        // "café" tokenizes to "caf", which must still be highlighted.
        let out = highlight("Café Nero barista", "café");
        assert_eq!(out, format!("{}é Nero barista", marked("Caf")));
    }
}
