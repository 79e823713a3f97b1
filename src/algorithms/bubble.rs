//! Bubble sort
//!
//! Pass `i` compares every adjacent pair in `0..n - i`, swapping pairs that are
//! out of order. Each comparison is one step highlighting the compared pair.

use super::{SortStep, Step};

#[derive(Debug, Clone, Default)]
pub struct BubbleSort {
    /// Completed passes; the last `pass` elements are in final position
    pass: usize,
    /// Left index of the next adjacent pair to compare
    j: usize,
}

impl BubbleSort {
    pub fn new() -> Self {
        BubbleSort::default()
    }
}

impl SortStep for BubbleSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Step> {
        let n = values.len();
        loop {
            if self.pass >= n {
                return None;
            }

            // End of the unsorted prefix for this pass
            if self.j + 1 >= n - self.pass {
                self.pass += 1;
                self.j = 0;
                continue;
            }

            let j = self.j;
            self.j += 1;

            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                return Some(Step::swap(j, j + 1, 1));
            }
            return Some(Step::compare(j, j + 1));
        }
    }
}
