use alloc::vec::Vec;
use core::iter::once;
use core::ops::Range;

use crate::{Boundaries, BreakSet, Word};

/// Returns the byte range of each line. A line runs from the boundary after the previous line's
/// last word up to the trimmed end of its own last word, so whitespace at an injected break is
/// dropped from both sides. The first line keeps any leading whitespace.
///
/// Break indices at or past the last word are ignored. Without any words the whole text, `len`
/// bytes long, is a single line.
pub fn line_spans(
    len: usize,
    boundaries: &Boundaries,
    words: &[Word],
    breaks: &BreakSet,
) -> Vec<Range<usize>> {
    let Some(last) = words.len().checked_sub(1) else {
        return alloc::vec![0..len];
    };

    let mut spans = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for k in breaks.iter().filter(|&k| k < last).chain(once(last)) {
        let end = words[k].trimmed_end.max(start);
        spans.push(start..end);
        start = boundaries[k + 1];
    }
    spans
}

/// Slices `text` into the lines described by `breaks`.
pub fn build_lines<'a>(
    text: &'a [u8],
    boundaries: &Boundaries,
    words: &[Word],
    breaks: &BreakSet,
) -> Vec<&'a [u8]> {
    line_spans(text.len(), boundaries, words, breaks)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}
