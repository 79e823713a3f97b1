//! Step-producing sorting algorithms
//!
//! This module provides the five algorithms the visualizer can animate:
//! - [`bubble`]: adjacent compare-and-swap passes over a shrinking suffix
//! - [`selection`]: scan for the minimum, then swap it into place
//! - [`insertion`]: shift larger predecessors right, then place the key
//! - [`quick`]: Lomuto partition around the last element
//! - [`merge`]: top-down halving with a merge of sorted halves
//!
//! # Execution Model
//!
//! Every algorithm is a resumable state machine implementing [`SortStep`]. A call
//! to [`SortStep::step`] performs exactly one primitive operation on the sequence
//! (a comparison, a swap, or a write) and returns a [`Step`] describing it along
//! with the indices to highlight. The frame loop renders after every step, so
//! each visible mutation gets its own frame. `None` means the sequence is sorted.
//!
//! Recursive algorithms keep their pending work on explicit stacks instead of
//! the call stack so they can suspend between any two operations.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::array::Highlight;
use std::fmt;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

/// The primitive operation a step performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Two elements were compared and left in place
    Compare(usize, usize),
    /// Two elements were exchanged
    Swap(usize, usize),
    /// An element was copied one slot to the right (insertion sort)
    Shift { from: usize, to: usize },
    /// A value was written into a slot (insertion key placement, merge output)
    Write { index: usize, value: u32 },
}

/// One suspension point of a running algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub op: Operation,
    pub highlights: Highlight,
    /// Comparisons performed while producing this step
    pub compares: usize,
}

impl Step {
    pub fn compare(a: usize, b: usize) -> Self {
        Step {
            op: Operation::Compare(a, b),
            highlights: Highlight::pair(a, b),
            compares: 1,
        }
    }

    pub fn swap(a: usize, b: usize, compares: usize) -> Self {
        Step {
            op: Operation::Swap(a, b),
            highlights: Highlight::pair(a, b),
            compares,
        }
    }

    pub fn shift(from: usize, to: usize) -> Self {
        Step {
            op: Operation::Shift { from, to },
            highlights: Highlight::pair(from, to),
            compares: 1,
        }
    }

    pub fn write(index: usize, value: u32, compares: usize) -> Self {
        Step {
            op: Operation::Write { index, value },
            highlights: Highlight::one(index),
            compares,
        }
    }
}

/// A sorting algorithm that can be advanced one primitive operation at a time
pub trait SortStep {
    /// Perform the next operation on `values`, or return `None` once sorted.
    ///
    /// `values` must be the same sequence (same length) on every call.
    fn step(&mut self, values: &mut [u32]) -> Option<Step>;

    /// Drive the algorithm to completion, collecting every step
    fn run_to_completion(&mut self, values: &mut [u32]) -> Vec<Step> {
        let mut steps = Vec::new();
        while let Some(step) = self.step(values) {
            steps.push(step);
        }
        steps
    }
}

/// Algorithm selector tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Display name used by the control pane
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Short lowercase key used on the command line and in the config file
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    /// Next algorithm in selector order (wraps around)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in selector order (wraps around)
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Look up an algorithm by key or label, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let name = name.strip_suffix(" sort").unwrap_or(name.as_str());
        Self::ALL.iter().copied().find(|a| a.key() == name)
    }

    /// Look up an algorithm by name, falling back to bubble sort
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            log::warn!("unknown algorithm '{}', defaulting to {}", name, Algorithm::Bubble);
            Algorithm::Bubble
        })
    }

    /// Build a fresh engine for a sequence of `len` elements
    pub fn engine(self, len: usize) -> Engine {
        match self {
            Algorithm::Bubble => Engine::Bubble(BubbleSort::new()),
            Algorithm::Selection => Engine::Selection(SelectionSort::new()),
            Algorithm::Insertion => Engine::Insertion(InsertionSort::new()),
            Algorithm::Quick => Engine::Quick(QuickSort::new(len)),
            Algorithm::Merge => Engine::Merge(MergeSort::new(len)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A running algorithm instance
#[derive(Debug, Clone)]
pub enum Engine {
    Bubble(BubbleSort),
    Selection(SelectionSort),
    Insertion(InsertionSort),
    Quick(QuickSort),
    Merge(MergeSort),
}

impl Engine {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Engine::Bubble(_) => Algorithm::Bubble,
            Engine::Selection(_) => Algorithm::Selection,
            Engine::Insertion(_) => Algorithm::Insertion,
            Engine::Quick(_) => Algorithm::Quick,
            Engine::Merge(_) => Algorithm::Merge,
        }
    }
}

impl SortStep for Engine {
    fn step(&mut self, values: &mut [u32]) -> Option<Step> {
        match self {
            Engine::Bubble(s) => s.step(values),
            Engine::Selection(s) => s.step(values),
            Engine::Insertion(s) => s.step(values),
            Engine::Quick(s) => s.step(values),
            Engine::Merge(s) => s.step(values),
        }
    }
}
