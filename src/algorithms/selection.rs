//! Selection sort
//!
//! For each boundary `i`, scans `i+1..n` for the minimum (one step per
//! comparison, highlighting the boundary and the scan index), then swaps the
//! minimum into place as its own step.

use super::{SortStep, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scan,
    Swap,
}

#[derive(Debug, Clone)]
pub struct SelectionSort {
    i: usize,
    j: usize,
    min: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new() -> Self {
        SelectionSort {
            i: 0,
            j: 1,
            min: 0,
            phase: Phase::Scan,
        }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl SortStep for SelectionSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Step> {
        let n = values.len();
        loop {
            if self.i >= n {
                return None;
            }

            match self.phase {
                Phase::Scan => {
                    if self.j >= n {
                        self.phase = Phase::Swap;
                        continue;
                    }
                    let j = self.j;
                    self.j += 1;
                    if values[j] < values[self.min] {
                        self.min = j;
                    }
                    return Some(Step::compare(self.i, j));
                }
                Phase::Swap => {
                    let (i, min) = (self.i, self.min);
                    values.swap(i, min);

                    self.i += 1;
                    self.min = self.i;
                    self.j = self.i + 1;
                    self.phase = Phase::Scan;
                    return Some(Step::swap(i, min, 0));
                }
            }
        }
    }
}
