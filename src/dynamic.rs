extern crate alloc;
use alloc::vec::Vec;
use bumpalo::Bump;

use crate::math::Num;
use crate::{BreakSet, Word, WrapPolicy};

/// Runs the minimum-raggedness line-breaking algorithm: among all ways of breaking the paragraph,
/// chooses the one whose lines have the smallest total cost, where a line that leaves `s` code
/// points unused costs `s` raised to the cost exponent. Runs in quadratic time and space.
#[derive(Debug, Clone, Copy)]
pub struct Dynamic<N> {
    exponent: f64,
    _cost: core::marker::PhantomData<N>,
}

impl<N: Num> Dynamic<N> {
    /// Creates a new Dynamic layout with default parameter values.
    pub fn new() -> Self {
        Dynamic {
            exponent: 2.0,
            _cost: core::marker::PhantomData,
        }
    }

    /// Sets the cost exponent. Larger exponents punish short lines more heavily relative to
    /// nearly-full ones. Defaults to 2.
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the total cost of the partition described by `breaks`, or None if one of its lines
    /// does not fit.
    pub fn partition_cost(&self, words: &[Word], width: usize, breaks: &BreakSet) -> Option<N> {
        let mut total = N::from_width(0);
        let mut start = 0;
        let ends = breaks.iter().filter(|&k| k + 1 < words.len());
        for end in ends.chain((!words.is_empty()).then(|| words.len() - 1)) {
            total += line_cost::<N>(words, start, end, width, self.exponent).feasible()?;
            start = end + 1;
        }
        Some(total)
    }
}

impl<N: Num> Default for Dynamic<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Num> WrapPolicy for Dynamic<N> {
    fn plan(&self, words: &[Word], width: usize) -> BreakSet {
        if words.is_empty() {
            return BreakSet::default();
        }
        let bump = Bump::new();
        let layout = DynamicLayout {
            costs: CostMatrix::build(&bump, words, width, self.exponent),
            best: bump.alloc_slice_fill_copy(words.len(), N::from_width(0)),
            start: bump.alloc_slice_fill_copy(words.len(), 0),
        };
        layout.run()
    }
}

/// The cost of setting a run of words on one line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cost<N> {
    /// The words do not fit within the line width.
    Infeasible,
    Feasible(N),
}

impl<N: Copy> Cost<N> {
    pub fn feasible(self) -> Option<N> {
        match self {
            Cost::Infeasible => None,
            Cost::Feasible(cost) => Some(cost),
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Cost::Feasible(_))
    }
}

/// Computes the cost of setting words `i..=j` on one line. Every word but the last contributes
/// its full width; the last one's trailing whitespace is trimmed. A lone word is always feasible
/// and costs nothing if it overflows.
fn line_cost<N: Num>(words: &[Word], i: usize, j: usize, width: usize, exponent: f64) -> Cost<N> {
    let used: usize = words[i..j].iter().map(|w| w.original_width).sum::<usize>() + words[j].trimmed_width;
    leftover_cost(used, width, i == j, exponent)
}

fn leftover_cost<N: Num>(used: usize, width: usize, single: bool, exponent: f64) -> Cost<N> {
    match width.checked_sub(used) {
        Some(leftover) => Cost::Feasible(N::from_width(leftover).powf(exponent)),
        None if single => Cost::Feasible(N::from_width(0)),
        None => Cost::Infeasible,
    }
}

/// The cost of every run of words `i..=j`, `i <= j`, stored row-major in a square matrix. Cells
/// below the diagonal are unused.
pub struct CostMatrix<'b, N> {
    cells: &'b [Cost<N>],
    n: usize,
}

impl<'b, N: Num> CostMatrix<'b, N> {
    /// Builds the matrix for `words` in the given arena.
    pub fn build(bump: &'b Bump, words: &[Word], width: usize, exponent: f64) -> Self {
        let n = words.len();
        let cells = bump.alloc_slice_fill_copy(n * n, Cost::Infeasible);
        for i in 0..n {
            let mut used = 0;
            for j in i..n {
                match leftover_cost(used + words[j].trimmed_width, width, i == j, exponent) {
                    // Widths only grow along a row, so the rest of it is infeasible too.
                    Cost::Infeasible => break,
                    cost => cells[i * n + j] = cost,
                }
                used += words[j].original_width;
            }
        }
        tracing::trace!(words = n, width, exponent, "built cost matrix");
        CostMatrix { cells, n }
    }

    /// Returns the cost of setting words `i..=j` on one line.
    pub fn get(&self, i: usize, j: usize) -> Cost<N> {
        if i <= j && j < self.n {
            self.cells[i * self.n + j]
        } else {
            Cost::Infeasible
        }
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

/// Holder for the dynamic programming tables. Everything is allocated in a bump arena owned by
/// the caller and released en masse once planning terminates.
struct DynamicLayout<'b, N> {
    costs: CostMatrix<'b, N>,
    /// Minimum total cost of setting words `0..=j`.
    best: &'b mut [N],
    /// Index of the first word on the last line of the best layout of words `0..=j`.
    start: &'b mut [usize],
}

impl<'b, N: Num> DynamicLayout<'b, N> {
    fn run(mut self) -> BreakSet {
        let n = self.costs.len();
        for j in 0..n {
            self.relax(j);
        }

        // Walk backwards from the last word to recover where each line starts.
        let mut breaks = Vec::new();
        let mut j = n - 1;
        while self.start[j] > 0 {
            let i = self.start[j];
            breaks.push(i - 1);
            j = i - 1;
        }
        breaks.reverse();
        BreakSet(breaks)
    }

    /// Returns the minimum cost of setting the words before `i`.
    fn prefix(&self, i: usize) -> N {
        if i == 0 {
            N::from_width(0)
        } else {
            self.best[i - 1]
        }
    }

    /// Finds the cheapest layout of words `0..=j` given the cheapest layouts of all shorter
    /// prefixes.
    fn relax(&mut self, j: usize) {
        // A lone word is always feasible, so word j on a line of its own is the starting point.
        let mut best_start = j;
        let mut best_cost = self.prefix(j) + self.costs.get(j, j).feasible().unwrap_or_default();

        // Scan right to left so that on ties the smallest start wins.
        for i in (0..j).rev() {
            let Cost::Feasible(cost) = self.costs.get(i, j) else {
                break;
            };
            let total = self.prefix(i) + cost;
            if total <= best_cost {
                best_cost = total;
                best_start = i;
            }
        }

        self.best[j] = best_cost;
        self.start[j] = best_start;
    }
}
