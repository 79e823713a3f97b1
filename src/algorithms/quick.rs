//! Quick sort (Lomuto partition)
//!
//! The pivot is the last element of the range. During partitioning, every
//! element `<= pivot` is swapped into the growing left block (one step per
//! swap); the pivot is then swapped into its final slot as a step of its own.
//! The left partition is processed before the right one.

use super::{SortStep, Step};

#[derive(Debug, Clone)]
struct Partition {
    low: usize,
    high: usize,
    pivot: u32,
    /// Next free slot of the `<= pivot` block
    store: usize,
    /// Next element to compare against the pivot
    j: usize,
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    /// Pending `(low, high)` ranges, top of stack processed first
    ranges: Vec<(usize, usize)>,
    current: Option<Partition>,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        let mut ranges = Vec::new();
        if len >= 2 {
            ranges.push((0, len - 1));
        }
        QuickSort {
            ranges,
            current: None,
        }
    }
}

impl SortStep for QuickSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Step> {
        loop {
            if let Some(p) = self.current.as_mut() {
                let mut compares = 0;
                while p.j < p.high {
                    let j = p.j;
                    p.j += 1;
                    compares += 1;
                    if values[j] <= p.pivot {
                        let store = p.store;
                        values.swap(store, j);
                        p.store += 1;
                        return Some(Step::swap(store, j, compares));
                    }
                }

                // Partition done: place the pivot and queue both sides
                let (low, high, pivot_index) = (p.low, p.high, p.store);
                values.swap(pivot_index, high);
                self.current = None;

                if pivot_index + 1 < high {
                    self.ranges.push((pivot_index + 1, high));
                }
                if pivot_index > low + 1 {
                    self.ranges.push((low, pivot_index - 1));
                }
                return Some(Step::swap(pivot_index, high, compares));
            }

            let (low, high) = self.ranges.pop()?;
            self.current = Some(Partition {
                low,
                high,
                pivot: values[high],
                store: low,
                j: low,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Operation;

    #[test]
    fn test_quick_two_elements() {
        let mut values = vec![2, 1];
        let mut sorter = QuickSort::new(values.len());

        // 2 > pivot 1, so the only step is the pivot placement at index 0
        let step = sorter.step(&mut values).unwrap();
        assert_eq!(step.op, Operation::Swap(0, 1));
        assert_eq!(step.highlights.indices(), &[0, 1]);
        assert_eq!(values, vec![1, 2]);

        assert!(sorter.step(&mut values).is_none());
    }

    #[test]
    fn test_quick_partition_swaps() {
        let mut values = vec![3, 7, 1, 4];
        let mut sorter = QuickSort::new(values.len());

        // pivot 4: 3 <= 4 swaps in place, 7 skipped, 1 swapped into slot 1
        assert_eq!(sorter.step(&mut values).unwrap().op, Operation::Swap(0, 0));
        let step = sorter.step(&mut values).unwrap();
        assert_eq!(step.op, Operation::Swap(1, 2));
        assert_eq!(step.compares, 2);
        assert_eq!(values, vec![3, 1, 7, 4]);

        let step = sorter.step(&mut values).unwrap();
        assert_eq!(step.op, Operation::Swap(2, 3));
        assert_eq!(values, vec![3, 1, 4, 7]);

        sorter.run_to_completion(&mut values);
        assert_eq!(values, vec![1, 3, 4, 7]);
    }
}
