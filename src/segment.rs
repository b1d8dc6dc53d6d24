use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use unicode_linebreak::linebreaks;

use crate::{LocaleError, SegmentError};

/// A locale identifier such as `en`, `en-US` or `zh_Hant_TW`. The empty identifier and `und`
/// denote the root locale.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Locale(String);

impl Locale {
    /// Returns the root locale.
    pub fn root() -> Self {
        Locale(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the identifier in its normalized form, with `-` separating subtags. The root
    /// locale is the empty string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the primary language subtag, or None for the root locale.
    pub fn language(&self) -> Option<&str> {
        self.0.split('-').next().filter(|s| !s.is_empty())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("und") || s.eq_ignore_ascii_case("root") {
            return Ok(Locale::root());
        }

        let mut tag = String::with_capacity(s.len());
        for (i, subtag) in s.split(['-', '_']).enumerate() {
            let valid = if i == 0 {
                matches!(subtag.len(), 2..=3 | 5..=8) && subtag.bytes().all(|b| b.is_ascii_alphabetic())
            } else {
                matches!(subtag.len(), 1..=8) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            };
            if !valid {
                return Err(LocaleError(s.to_string()));
            }
            if i > 0 {
                tag.push('-');
            }
            tag.push_str(subtag);
        }
        Ok(Locale(tag))
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> String {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("und")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Produces the byte offsets at which a string may be broken across lines.
pub trait Segmenter {
    /// Returns the break opportunities in `text` in increasing order. The first offset is 0 and
    /// the last is `text.len()`; for text without any break opportunity, only 0 is returned.
    fn segment(&self, text: &str, locale: &Locale) -> Result<Vec<usize>, SegmentError>;
}

impl<F> Segmenter for F
where
    F: Fn(&str, &Locale) -> Result<Vec<usize>, SegmentError>,
{
    fn segment(&self, text: &str, locale: &Locale) -> Result<Vec<usize>, SegmentError> {
        self(text, locale)
    }
}

/// Finds break opportunities using the Unicode Line Breaking Algorithm (UAX #14). The default
/// rules apply to every locale.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str, _locale: &Locale) -> Result<Vec<usize>, SegmentError> {
        let mut offsets = Vec::with_capacity(text.len() / 4 + 2);
        offsets.push(0);
        offsets.extend(linebreaks(text).map(|(offset, _)| offset).filter(|&offset| offset > 0));
        Ok(offsets)
    }
}

/// A validated boundary sequence for one string: strictly increasing byte offsets starting at 0
/// and, if there is more than one, ending at the string's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries(Vec<usize>);

impl Boundaries {
    /// Checks the offsets a segmenter produced for a string of `len` bytes.
    pub fn new(offsets: Vec<usize>, len: usize) -> Result<Self, SegmentError> {
        match offsets.first() {
            None => return Err(SegmentError::Malformed("no offsets")),
            Some(&first) if first != 0 => return Err(SegmentError::Malformed("first offset is not 0")),
            _ => {}
        }
        if offsets.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SegmentError::Malformed("offsets are not strictly increasing"));
        }
        if offsets.len() > 1 && offsets[offsets.len() - 1] != len {
            return Err(SegmentError::Malformed("last offset is not the end of the text"));
        }
        Ok(Boundaries(offsets))
    }

    /// Runs `segmenter` over `text` and validates the result.
    pub fn segment<S: Segmenter + ?Sized>(
        segmenter: &S,
        text: &str,
        locale: &Locale,
    ) -> Result<Self, SegmentError> {
        Boundaries::new(segmenter.segment(text, locale)?, text.len())
    }

    /// Returns the number of words between the boundaries.
    pub fn word_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Returns the byte range of each word.
    pub fn words(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for Boundaries {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.0[index]
    }
}
