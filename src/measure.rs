use alloc::vec::Vec;

use crate::{Boundaries, Classifier, MeasureError};

/// The measurements of a single word, i.e. the run of text between two consecutive break
/// opportunities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    /// The width of the word in code points, including trailing whitespace.
    pub original_width: usize,
    /// The width of the word in code points, excluding trailing whitespace. Never larger than
    /// `original_width`.
    pub trimmed_width: usize,
    /// The byte offset just past the last non-whitespace code point of the word, or the word's
    /// start offset if it is entirely whitespace.
    pub trimmed_end: usize,
}

impl Word {
    pub fn new(original_width: usize, trimmed_width: usize, trimmed_end: usize) -> Self {
        debug_assert!(trimmed_width <= original_width);
        Word {
            original_width,
            trimmed_width,
            trimmed_end,
        }
    }
}

/// Measures every word of `text` delimited by `boundaries`.
///
/// Fails with [`MeasureError::HardBreakInText`] if the text contains a code point the classifier
/// considers a hard line break, and with [`MeasureError::InvalidEncoding`] if a word is not valid
/// UTF-8 (including boundaries that fall inside a code point).
pub fn measure<C: Classifier + ?Sized>(
    text: &[u8],
    boundaries: &Boundaries,
    classifier: &C,
) -> Result<Vec<Word>, MeasureError> {
    let mut words = Vec::with_capacity(boundaries.word_count());
    for (start, end) in boundaries.words() {
        let bytes = text
            .get(start..end)
            .ok_or(MeasureError::InvalidEncoding { offset: start })?;
        let chunk = core::str::from_utf8(bytes).map_err(|e| MeasureError::InvalidEncoding {
            offset: start + e.valid_up_to(),
        })?;

        let mut width = 0;
        let mut trailing = 0;
        let mut trimmed_end = start;
        for (at, c) in chunk.char_indices() {
            if classifier.is_hard_line_break(c) {
                return Err(MeasureError::HardBreakInText {
                    offset: start + at,
                    character: c,
                });
            }
            width += 1;
            if classifier.is_whitespace(c) {
                trailing += 1;
            } else {
                trailing = 0;
                trimmed_end = start + at + c.len_utf8();
            }
        }

        words.push(Word::new(width, width - trailing, trimmed_end));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Locale, UnicodeClassifier, UnicodeSegmenter};
    use alloc::vec;

    fn measure_str(text: &str) -> Result<Vec<Word>, MeasureError> {
        let boundaries = Boundaries::segment(&UnicodeSegmenter, text, &Locale::root()).unwrap();
        measure(text.as_bytes(), &boundaries, &UnicodeClassifier)
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let words = measure_str("The  quick brown").unwrap();
        assert_eq!(
            words,
            vec![Word::new(5, 3, 3), Word::new(6, 5, 10), Word::new(5, 5, 16)]
        );
    }

    #[test]
    fn widths_count_code_points_not_bytes() {
        // "żółw " is 5 code points but 8 bytes.
        let words = measure_str("żółw ma").unwrap();
        assert_eq!(words, vec![Word::new(5, 4, 7), Word::new(2, 2, 10)]);
    }

    #[test]
    fn whitespace_only_word_ends_at_its_start() {
        let boundaries = Boundaries::new(vec![0, 2, 5], 5).unwrap();
        let words = measure(b"ab   ", &boundaries, &UnicodeClassifier).unwrap();
        assert_eq!(words, vec![Word::new(2, 2, 2), Word::new(3, 0, 2)]);
    }

    #[test]
    fn hard_break_fails() {
        let err = measure_str("one\ntwo").unwrap_err();
        assert_eq!(
            err,
            MeasureError::HardBreakInText {
                offset: 3,
                character: '\n'
            }
        );
        assert!(measure_str("one\u{2028}two").is_err());
    }

    #[test]
    fn split_code_point_is_invalid() {
        // The boundary at 2 falls inside 'ó'.
        let text = "pó";
        let boundaries = Boundaries::new(vec![0, 2, 3], 3).unwrap();
        let err = measure(text.as_bytes(), &boundaries, &UnicodeClassifier).unwrap_err();
        assert_eq!(err, MeasureError::InvalidEncoding { offset: 1 });
    }

    #[test]
    fn malformed_bytes_are_invalid() {
        let boundaries = Boundaries::new(vec![0, 2, 4], 4).unwrap();
        let err = measure(b"a \xffb", &boundaries, &UnicodeClassifier).unwrap_err();
        assert_eq!(err, MeasureError::InvalidEncoding { offset: 2 });
    }
}
