extern crate alloc;
use alloc::vec::Vec;

use crate::{BreakSet, Word, WrapPolicy};

/// Runs the greedy line-breaking algorithm: words are added to the current line for as long as
/// they fit, and a line is broken only when the next word would overflow it. Runs in linear time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;

impl Greedy {
    pub fn new() -> Self {
        Greedy
    }
}

impl WrapPolicy for Greedy {
    fn plan(&self, words: &[Word], width: usize) -> BreakSet {
        let Some(first) = words.first() else {
            return BreakSet::default();
        };
        let l = GreedyLayout {
            width,
            line_width: first.original_width,
            breaks: Vec::new(),
        };
        l.plan(words)
    }
}

struct GreedyLayout {
    width: usize,

    /// Width of the words placed on the current line, trailing whitespace included.
    line_width: usize,

    breaks: Vec<usize>,
}

impl GreedyLayout {
    fn break_after(&mut self, at: usize, next: &Word) {
        self.breaks.push(at);
        self.line_width = next.original_width;
    }

    fn plan(mut self, words: &[Word]) -> BreakSet {
        for (j, word) in words.iter().enumerate().skip(1) {
            // The candidate's own trailing whitespace would be trimmed if it ended the line.
            if self.line_width + word.trimmed_width > self.width {
                self.break_after(j - 1, word);
            } else {
                self.line_width += word.original_width;
            }
        }
        BreakSet(self.breaks)
    }
}
