//! Insertion sort
//!
//! For each `i >= 1`, takes `values[i]` as the key and shifts each larger
//! predecessor one slot right (one step per shift), then writes the key into
//! the hole left behind.

use super::{SortStep, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pick,
    Shift,
}

#[derive(Debug, Clone)]
pub struct InsertionSort {
    i: usize,
    key: u32,
    /// Slot the key would land in if placed now
    hole: usize,
    phase: Phase,
}

impl InsertionSort {
    pub fn new() -> Self {
        InsertionSort {
            i: 1,
            key: 0,
            hole: 1,
            phase: Phase::Pick,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl SortStep for InsertionSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Step> {
        loop {
            if self.i >= values.len() {
                return None;
            }

            match self.phase {
                Phase::Pick => {
                    self.key = values[self.i];
                    self.hole = self.i;
                    self.phase = Phase::Shift;
                }
                Phase::Shift => {
                    let hole = self.hole;
                    if hole > 0 && values[hole - 1] > self.key {
                        values[hole] = values[hole - 1];
                        self.hole -= 1;
                        return Some(Step::shift(hole - 1, hole));
                    }

                    // The loop stops either at the front or on a failed comparison
                    let compares = usize::from(hole > 0);
                    values[hole] = self.key;
                    self.i += 1;
                    self.phase = Phase::Pick;
                    return Some(Step::write(hole, self.key, compares));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Operation;

    #[test]
    fn test_insertion_shifts_then_places() {
        let mut values = vec![4, 2, 3];
        let mut sorter = InsertionSort::new();

        let step = sorter.step(&mut values).unwrap();
        assert_eq!(step.op, Operation::Shift { from: 0, to: 1 });
        assert_eq!(step.highlights.indices(), &[0, 1]);
        assert_eq!(values, vec![4, 4, 3]);

        let step = sorter.step(&mut values).unwrap();
        assert_eq!(step.op, Operation::Write { index: 0, value: 2 });
        assert_eq!(step.highlights.indices(), &[0]);
        assert_eq!(step.compares, 0);
        assert_eq!(values, vec![2, 4, 3]);

        sorter.run_to_completion(&mut values);
        assert_eq!(values, vec![2, 3, 4]);
    }

    #[test]
    fn test_insertion_sorted_input_only_places() {
        let mut values = vec![1, 2, 3, 4];
        let steps = InsertionSort::new().run_to_completion(&mut values);

        assert_eq!(steps.len(), 3);
        assert!(steps
            .iter()
            .all(|s| matches!(s.op, Operation::Write { .. }) && s.compares == 1));
    }
}
