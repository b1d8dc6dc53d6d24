//! Word wrapping for Unicode text.
//!
//! A string is cut into words at the line break opportunities reported by a [`Segmenter`], each
//! word is measured in code points by [`measure`], a [`WrapPolicy`] decides after which words a
//! line ends, and [`build_lines`] slices the original text back into lines with trailing
//! whitespace removed. [`Wrapper`] runs the whole pipeline over a batch of strings.
//!
//! Two policies are provided: [`Greedy`] fills each line as far as it will go, and [`Dynamic`]
//! minimizes the total raggedness of the paragraph, where each line is charged its leftover space
//! raised to a cost exponent.
//!
//! ```
//! use text_wrap::{WrapOptions, Wrapper};
//!
//! let wrapper = Wrapper::new(WrapOptions::new(10)).unwrap();
//! let lines = wrapper.wrap_str("The quick brown fox jumps").unwrap();
//! assert_eq!(lines, ["The quick", "brown fox", "jumps"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error! { "Either the std or libm feature must be enabled" }

extern crate alloc;
use alloc::vec::Vec;

mod build;
pub use build::*;

mod classify;
pub use classify::*;

mod driver;
pub use driver::*;

mod dynamic;
pub use dynamic::*;

mod error;
pub use error::*;

mod greedy;
pub use greedy::*;

mod math;
pub use math::{Fixed, Num};

mod measure;
pub use measure::*;

mod segment;
pub use segment::*;

/// The word indices after which a line break is inserted, in increasing order. The end of the
/// text is an implicit break and never appears in the set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BreakSet(Vec<usize>);

impl BreakSet {
    /// Returns the break indices in increasing order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns an iterator over the break indices in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Returns true if a line ends after the word at `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of lines these breaks produce for a paragraph of `word_count` words.
    pub fn line_count(&self, word_count: usize) -> usize {
        if word_count == 0 {
            1
        } else {
            self.0.iter().filter(|&&k| k + 1 < word_count).count() + 1
        }
    }
}

impl FromIterator<usize> for BreakSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut breaks: Vec<usize> = iter.into_iter().collect();
        breaks.sort_unstable();
        breaks.dedup();
        BreakSet(breaks)
    }
}

/// Represents a line-breaking policy.
pub trait WrapPolicy {
    /// Decides after which of the given words a line ends so that lines fit within `width` code
    /// points wherever possible. A word wider than `width` is never split; it is placed on a
    /// line of its own instead.
    fn plan(&self, words: &[Word], width: usize) -> BreakSet;
}

/// Plans the breaks for `words` using the policy selected by `exponent`: [`Greedy`] if the
/// exponent is not positive, [`Dynamic`] with `f64` costs otherwise.
pub fn plan(words: &[Word], width: usize, exponent: f64) -> BreakSet {
    if exponent > 0.0 {
        tracing::debug!(words = words.len(), width, exponent, "planning with dynamic policy");
        Dynamic::<f64>::new().with_exponent(exponent).plan(words, width)
    } else {
        tracing::debug!(words = words.len(), width, "planning with greedy policy");
        Greedy::new().plan(words, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_set_is_sorted_and_deduplicated() {
        let breaks: BreakSet = [3, 1, 3, 0].into_iter().collect();
        assert_eq!(breaks.as_slice(), &[0, 1, 3]);
        assert!(breaks.contains(1));
        assert!(!breaks.contains(2));
    }

    #[test]
    fn line_count_ignores_trailing_break() {
        let breaks: BreakSet = [0, 2].into_iter().collect();
        assert_eq!(breaks.line_count(4), 3);
        assert_eq!(breaks.line_count(3), 2);
        assert_eq!(BreakSet::default().line_count(0), 1);
    }

    #[test]
    fn exponent_selects_policy() {
        // "aaa bb cc dddd"
        let words = [
            Word::new(4, 3, 3),
            Word::new(3, 2, 6),
            Word::new(3, 2, 9),
            Word::new(4, 4, 14),
        ];
        // Greedy fills the first line and strands "cc"; the dynamic policy evens things out.
        assert_eq!(plan(&words, 6, 0.0).as_slice(), &[1, 2]);
        assert_eq!(plan(&words, 6, -1.0).as_slice(), &[1, 2]);
        assert_eq!(plan(&words, 6, 2.0).as_slice(), &[0, 2]);
    }
}
