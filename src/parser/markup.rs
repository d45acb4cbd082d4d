use once_cell::sync::Lazy;
use regex::Regex;

// SRT inline markup comes in three kinds: emphasis (<i>/<em>), strong
// (<b>/<strong>) and underline (<u>). Tags may carry attributes and content
// may span lines. The regex crate has no backreferences, so each kind gets
// its own pattern.
static EMPHASIS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:i|em)\b[^>]*>(.*?)</(?:i|em)\s*>").unwrap());
static STRONG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(?:b|strong)\b[^>]*>(.*?)</(?:b|strong)\s*>").unwrap());
static UNDERLINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<u\b[^>]*>(.*?)</u\s*>").unwrap());

/// Any leftover markup-like span with no matching transform.
static STRAY_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize inline markup to plain parenthetical text.
///
/// Each well-formed emphasis/strong/underline span becomes `(content)`;
/// unmatched markup is stripped; whitespace runs (including newlines)
/// collapse to single spaces and the result is trimmed. Idempotent: the
/// output contains no markup, so a second pass is a no-op.
pub fn clean_markup(text: &str) -> String {
    let mut cleaned = text.to_string();

    // Repeat until stable so nested spans unwrap fully, e.g.
    // "<i><b>x</b></i>" -> "(<b>x</b>)" -> "((x))".
    loop {
        let pass = EMPHASIS_REGEX.replace_all(&cleaned, "($1)");
        let pass = STRONG_REGEX.replace_all(&pass, "($1)");
        let pass = UNDERLINE_REGEX.replace_all(&pass, "($1)");
        if pass == cleaned {
            break;
        }
        cleaned = pass.into_owned();
    }

    let cleaned = STRAY_TAG_REGEX.replace_all(&cleaned, "");
    WHITESPACE_REGEX.replace_all(&cleaned, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_to_parenthetical() {
        assert_eq!(clean_markup("<i>quietly</i> hello"), "(quietly) hello");
    }

    #[test]
    fn test_all_tag_kinds() {
        assert_eq!(clean_markup("<b>loud</b>"), "(loud)");
        assert_eq!(clean_markup("<u>underlined</u>"), "(underlined)");
        assert_eq!(clean_markup("<em>soft</em>"), "(soft)");
        assert_eq!(clean_markup("<strong>hard</strong>"), "(hard)");
    }

    #[test]
    fn test_case_insensitive_with_attributes() {
        assert_eq!(clean_markup("<I>a</I>"), "(a)");
        assert_eq!(clean_markup(r#"<i color="red">a</i>"#), "(a)");
    }

    #[test]
    fn test_multiline_span() {
        assert_eq!(clean_markup("<i>two\nlines</i>"), "(two lines)");
    }

    #[test]
    fn test_nested_markup() {
        assert_eq!(clean_markup("<i><b>x</b></i>"), "((x))");
    }

    #[test]
    fn test_unmatched_markup_stripped() {
        assert_eq!(clean_markup("<i>dangling hello"), "dangling hello");
        assert_eq!(clean_markup("</i>orphan"), "orphan");
        assert_eq!(clean_markup("<font face=\"x\">styled</font>"), "styled");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(clean_markup("  a \n\n  b\tc  "), "a b c");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<i>quietly</i> hello",
            "<i><b>x</b></i>",
            "plain  text",
            "<i>dangling",
        ];
        for input in inputs {
            let once = clean_markup(input);
            assert_eq!(clean_markup(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_empty_after_cleaning() {
        assert_eq!(clean_markup("<i></i>"), "()");
        assert_eq!(clean_markup("</b>"), "");
        assert_eq!(clean_markup("   "), "");
    }
}
