/// Answers the two code point questions the word measurer asks.
pub trait Classifier {
    /// Returns true if `c` is a forced line break, which may not appear inside text submitted
    /// for wrapping.
    fn is_hard_line_break(&self, c: char) -> bool;

    /// Returns true if `c` is whitespace that may be trimmed from the end of a line.
    fn is_whitespace(&self, c: char) -> bool;
}

/// Classifies code points by their Unicode properties: the newline characters of the Unicode
/// Newline Guidelines are hard breaks and `White_Space` code points are whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeClassifier;

impl Classifier for UnicodeClassifier {
    fn is_hard_line_break(&self, c: char) -> bool {
        matches!(c, '\u{000A}'..='\u{000D}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
    }

    fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_breaks() {
        let c = UnicodeClassifier;
        for ch in ['\n', '\r', '\u{b}', '\u{c}', '\u{85}', '\u{2028}', '\u{2029}'] {
            assert!(c.is_hard_line_break(ch), "{ch:?}");
        }
        for ch in [' ', '\t', 'a', '\u{a0}'] {
            assert!(!c.is_hard_line_break(ch), "{ch:?}");
        }
    }

    #[test]
    fn whitespace() {
        let c = UnicodeClassifier;
        assert!(c.is_whitespace(' '));
        assert!(c.is_whitespace('\t'));
        assert!(c.is_whitespace('\u{3000}'));
        assert!(!c.is_whitespace('x'));
        assert!(!c.is_whitespace('-'));
    }
}
