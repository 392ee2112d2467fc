//! Text sanitization for the PDF stage.
//!
//! The layout engine and the built-in PDF base fonts only handle 7-bit ASCII,
//! so generated text is cleaned before layout. Characters with code point
//! ≥ 128 are deleted outright — never replaced with a placeholder.

/// Strips every character outside the 7-bit range from `text`.
///
/// Always succeeds, including on empty input. Idempotent: sanitizing
/// already-sanitized text returns it unchanged.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| (*c as u32) < 128).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_non_ascii_without_substitution() {
        assert_eq!(sanitize("café"), "caf");
    }

    #[test]
    fn test_ascii_input_is_identity() {
        let text = "Skills:\n- Python\n- Rust\n";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize("résumé — senior engineer");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_output_is_always_seven_bit() {
        let input = "naïve • bullet — em dash \u{1F680} emoji";
        assert!(sanitize(input).chars().all(|c| (c as u32) < 128));
    }

    #[test]
    fn test_keeps_line_breaks_and_tabs() {
        assert_eq!(sanitize("a\n\tb"), "a\n\tb");
    }
}
