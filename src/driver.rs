use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{
    line_spans, measure, plan, Boundaries, Classifier, Locale, MeasureError, Segmenter,
    UnicodeClassifier, UnicodeSegmenter, WrapError,
};

/// What to do with a string that contains a hard line break.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum HardBreakPolicy {
    /// Fail the whole call with [`WrapError::HardBreakInText`].
    #[default]
    Fail,
    /// Emit the offending string unchanged as a single line and carry on with the rest.
    PassThrough,
}

/// Parameters shared by every string of a wrapping call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct WrapOptions {
    /// Maximum line width in code points.
    pub width: usize,
    /// Exponent of the raggedness cost. Zero or negative selects the greedy policy.
    pub cost_exponent: f64,
    /// Locale handed to the segmenter.
    pub locale: Locale,
    pub hard_breaks: HardBreakPolicy,
}

impl WrapOptions {
    /// Creates options for lines of at most `width` code points, wrapped greedily.
    pub fn new(width: usize) -> Self {
        WrapOptions {
            width,
            cost_exponent: 0.0,
            locale: Locale::root(),
            hard_breaks: HardBreakPolicy::Fail,
        }
    }

    /// Sets the cost exponent. Values above zero select the minimum-raggedness policy.
    pub fn with_cost_exponent(mut self, cost_exponent: f64) -> Self {
        self.cost_exponent = cost_exponent;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_hard_breaks(mut self, hard_breaks: HardBreakPolicy) -> Self {
        self.hard_breaks = hard_breaks;
        self
    }

    /// Checks the parameters before any string is processed.
    pub fn validate(&self) -> Result<(), WrapError> {
        if self.width == 0 {
            return Err(WrapError::InvalidArgument {
                name: "width",
                reason: "expected a positive integer".to_string(),
            });
        }
        if !self.cost_exponent.is_finite() {
            return Err(WrapError::InvalidArgument {
                name: "cost_exponent",
                reason: "expected a finite number".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        WrapOptions::new(80)
    }
}

/// Wraps strings according to a fixed set of options, using a pluggable segmenter and
/// classifier.
#[derive(Debug, Clone)]
pub struct Wrapper<S = UnicodeSegmenter, C = UnicodeClassifier> {
    options: WrapOptions,
    segmenter: S,
    classifier: C,
}

impl Wrapper {
    /// Creates a wrapper backed by the Unicode segmenter and classifier. Fails if the options are
    /// invalid.
    pub fn new(options: WrapOptions) -> Result<Self, WrapError> {
        options.validate()?;
        Ok(Wrapper {
            options,
            segmenter: UnicodeSegmenter,
            classifier: UnicodeClassifier,
        })
    }
}

impl<S: Segmenter, C: Classifier> Wrapper<S, C> {
    /// Replaces the boundary segmenter.
    pub fn with_segmenter<T: Segmenter>(self, segmenter: T) -> Wrapper<T, C> {
        Wrapper {
            options: self.options,
            segmenter,
            classifier: self.classifier,
        }
    }

    /// Replaces the character classifier.
    pub fn with_classifier<T: Classifier>(self, classifier: T) -> Wrapper<S, T> {
        Wrapper {
            options: self.options,
            segmenter: self.segmenter,
            classifier,
        }
    }

    pub fn options(&self) -> &WrapOptions {
        &self.options
    }

    /// Wraps a single string. Text that is not valid UTF-8 is returned unchanged as one line.
    pub fn wrap_bytes<'a>(&self, text: &'a [u8]) -> Result<Vec<&'a [u8]>, WrapError> {
        self.wrap_one(0, text)
    }

    /// Wraps a single string.
    pub fn wrap_str<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, WrapError> {
        let spans = self.spans(0, text.as_bytes())?;
        Ok(spans.into_iter().map(|span| &text[span]).collect())
    }

    /// Wraps every string of a batch, in order. Missing strings stay missing.
    ///
    /// Fails as a whole if the segmenter fails or, under [`HardBreakPolicy::Fail`], if any
    /// string contains a hard line break.
    pub fn wrap_batch<'a>(
        &self,
        strings: &[Option<&'a [u8]>],
    ) -> Result<Vec<Option<Vec<&'a [u8]>>>, WrapError> {
        strings
            .iter()
            .enumerate()
            .map(|(index, &text)| text.map(|text| self.wrap_one(index, text)).transpose())
            .collect()
    }

    /// Like [`wrap_batch`](Self::wrap_batch), but spreads the strings over the rayon thread
    /// pool. Results are returned in input order.
    #[cfg(feature = "rayon")]
    pub fn wrap_batch_parallel<'a>(
        &self,
        strings: &[Option<&'a [u8]>],
    ) -> Result<Vec<Option<Vec<&'a [u8]>>>, WrapError>
    where
        S: Sync,
        C: Sync,
    {
        use rayon::prelude::*;

        tracing::debug!(
            strings = strings.len(),
            threads = rayon::current_num_threads(),
            "wrapping batch in parallel"
        );
        strings
            .par_iter()
            .enumerate()
            .map(|(index, &text)| text.map(|text| self.wrap_one(index, text)).transpose())
            .collect()
    }

    fn wrap_one<'a>(&self, index: usize, text: &'a [u8]) -> Result<Vec<&'a [u8]>, WrapError> {
        let spans = self.spans(index, text)?;
        Ok(spans.into_iter().map(|span| &text[span]).collect())
    }

    /// Computes the byte range of each output line of the `index`th string.
    fn spans(&self, index: usize, text: &[u8]) -> Result<Vec<Range<usize>>, WrapError> {
        let verbatim = || vec![0..text.len()];

        let Ok(s) = core::str::from_utf8(text) else {
            tracing::warn!(index, "string is not valid UTF-8, passing it through");
            return Ok(verbatim());
        };

        let boundaries = Boundaries::segment(&self.segmenter, s, &self.options.locale)?;
        if boundaries.word_count() == 0 {
            return Ok(verbatim());
        }

        let words = match measure(text, &boundaries, &self.classifier) {
            Ok(words) => words,
            Err(MeasureError::InvalidEncoding { offset }) => {
                tracing::warn!(index, offset, "invalid UTF-8 between boundaries, passing string through");
                return Ok(verbatim());
            }
            Err(MeasureError::HardBreakInText { offset, character }) => {
                match self.options.hard_breaks {
                    HardBreakPolicy::Fail => {
                        return Err(WrapError::HardBreakInText {
                            index,
                            offset,
                            character,
                        })
                    }
                    HardBreakPolicy::PassThrough => {
                        tracing::warn!(index, offset, ?character, "hard line break in text, passing string through");
                        return Ok(verbatim());
                    }
                }
            }
        };

        let breaks = plan(&words, self.options.width, self.options.cost_exponent);
        let spans = line_spans(text.len(), &boundaries, &words, &breaks);
        tracing::debug!(index, words = words.len(), lines = spans.len(), "wrapped string");
        Ok(spans)
    }
}

/// Wraps a batch of strings to lines of at most `width` code points.
///
/// A `cost_exponent` of zero or less selects the greedy policy; anything greater selects the
/// minimum-raggedness policy with that exponent. `locale` is a locale identifier; the empty
/// string means the root locale. Missing strings yield missing results, strings that are not valid
/// UTF-8 are returned unchanged, and a hard line break inside a string fails the whole call.
///
/// ```
/// let strings = [Some("The quick brown fox jumps".as_bytes()), None];
/// let lines = text_wrap::wrap(&strings, 10, 0.0, "").unwrap();
/// let first = lines[0].as_ref().unwrap();
/// assert_eq!(first, &["The quick".as_bytes(), "brown fox".as_bytes(), "jumps".as_bytes()]);
/// assert!(lines[1].is_none());
/// ```
pub fn wrap<'a>(
    strings: &[Option<&'a [u8]>],
    width: usize,
    cost_exponent: f64,
    locale: &str,
) -> Result<Vec<Option<Vec<&'a [u8]>>>, WrapError> {
    let options = WrapOptions::new(width)
        .with_cost_exponent(cost_exponent)
        .with_locale(locale.parse()?);
    Wrapper::new(options)?.wrap_batch(strings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentError;

    fn greedy(width: usize) -> Wrapper {
        Wrapper::new(WrapOptions::new(width)).unwrap()
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = Wrapper::new(WrapOptions::new(0)).unwrap_err();
        assert!(matches!(err, WrapError::InvalidArgument { name: "width", .. }));
        let err = wrap(&[Some(b"abc".as_slice())], 0, 0.0, "").unwrap_err();
        assert!(matches!(err, WrapError::InvalidArgument { name: "width", .. }));
    }

    #[test]
    fn bad_locale_is_rejected() {
        let err = wrap(&[Some(b"abc".as_slice())], 10, 0.0, "not a locale").unwrap_err();
        assert!(matches!(err, WrapError::InvalidArgument { name: "locale", .. }));
    }

    #[test]
    fn non_finite_exponent_is_rejected() {
        let options = WrapOptions::new(10).with_cost_exponent(f64::NAN);
        assert!(Wrapper::new(options).is_err());
    }

    #[test]
    fn missing_strings_stay_missing() {
        let out = greedy(10).wrap_batch(&[None, Some(b"ab cd".as_slice())]).unwrap();
        assert_eq!(out, vec![None, Some(vec![b"ab cd".as_slice()])]);
    }

    #[test]
    fn empty_string_is_one_empty_line() {
        assert_eq!(greedy(10).wrap_str("").unwrap(), vec![""]);
    }

    #[test]
    fn unbreakable_text_is_returned_verbatim() {
        let wrapper = greedy(3).with_segmenter(|_: &str, _: &Locale| -> Result<Vec<usize>, SegmentError> {
            Ok(vec![0])
        });
        assert_eq!(wrapper.wrap_str("abcdefgh  ").unwrap(), vec!["abcdefgh  "]);
    }

    #[test]
    fn invalid_utf8_is_passed_through() {
        let text = b"abc \xff\xfe def";
        let out = greedy(3).wrap_batch(&[Some(text.as_slice()), Some(b"x y".as_slice())]).unwrap();
        assert_eq!(out, vec![Some(vec![text.as_slice()]), Some(vec![b"x y".as_slice()])]);
    }

    #[test]
    fn hard_break_fails_the_batch_by_default() {
        let err = greedy(10)
            .wrap_batch(&[Some(b"fine".as_slice()), Some(b"not\nfine".as_slice())])
            .unwrap_err();
        assert_eq!(
            err,
            WrapError::HardBreakInText {
                index: 1,
                offset: 3,
                character: '\n'
            }
        );
    }

    #[test]
    fn hard_break_can_pass_through() {
        let options = WrapOptions::new(3).with_hard_breaks(HardBreakPolicy::PassThrough);
        let wrapper = Wrapper::new(options).unwrap();
        let out = wrapper
            .wrap_batch(&[Some(b"a\r\nb".as_slice()), Some(b"c d".as_slice())])
            .unwrap();
        assert_eq!(out, vec![Some(vec![b"a\r\nb".as_slice()]), Some(vec![b"c d".as_slice()])]);
    }

    #[test]
    fn segmenter_failure_fails_the_batch() {
        let wrapper = greedy(10).with_segmenter(|text: &str, _: &Locale| -> Result<Vec<usize>, SegmentError> {
            if text.starts_with('!') {
                Err(SegmentError::Backend("out of memory".to_string()))
            } else {
                Ok(vec![0, text.len()])
            }
        });
        let err = wrapper
            .wrap_batch(&[Some(b"ok".as_slice()), Some(b"!boom".as_slice())])
            .unwrap_err();
        assert!(matches!(err, WrapError::Segmenter(SegmentError::Backend(_))));
    }

    #[test]
    fn malformed_boundaries_fail_the_batch() {
        let wrapper = greedy(10).with_segmenter(|_: &str, _: &Locale| -> Result<Vec<usize>, SegmentError> {
            Ok(vec![0, 1])
        });
        let err = wrapper.wrap_str("abc").unwrap_err();
        assert!(matches!(err, WrapError::Segmenter(SegmentError::Malformed(_))));
    }

    #[test]
    fn dynamic_policy_is_used_for_positive_exponents() {
        let wrapper = Wrapper::new(WrapOptions::new(6).with_cost_exponent(2.0)).unwrap();
        assert_eq!(wrapper.wrap_str("aaa bb cc dddd").unwrap(), vec!["aaa", "bb cc", "dddd"]);
        assert_eq!(greedy(6).wrap_str("aaa bb cc dddd").unwrap(), vec!["aaa bb", "cc", "dddd"]);
    }

    #[test]
    fn custom_classifier() {
        struct Underscores;
        impl Classifier for Underscores {
            fn is_hard_line_break(&self, c: char) -> bool {
                c == '|'
            }
            fn is_whitespace(&self, c: char) -> bool {
                c == '_'
            }
        }
        let wrapper = greedy(5).with_classifier(Underscores);
        // UAX #14 offers no breaks after underscores, so this is a single word.
        assert_eq!(wrapper.wrap_str("abc__").unwrap(), vec!["abc"]);
        assert!(matches!(
            wrapper.wrap_str("a|b").unwrap_err(),
            WrapError::HardBreakInText { offset: 1, character: '|', .. }
        ));
    }
}
