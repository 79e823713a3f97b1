//! Merge sort (top-down)
//!
//! Ranges are halved at `m = (l + r) / 2` until single elements remain. The
//! halving depends only on the length, so the merges are precomputed in the
//! order a recursive implementation would run them. Each merge copies both
//! halves aside and writes the output one element per step, highlighting the
//! written index, then flushes whichever half is not exhausted.

use super::{SortStep, Step};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct Merge {
    left: Vec<u32>,
    right: Vec<u32>,
    i: usize,
    j: usize,
    /// Next output index
    k: usize,
}

#[derive(Debug, Clone)]
pub struct MergeSort {
    /// Pending `(l, m, r)` merges in post-order
    schedule: VecDeque<(usize, usize, usize)>,
    current: Option<Merge>,
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        let mut schedule = VecDeque::new();
        if len >= 2 {
            plan(0, len - 1, &mut schedule);
        }
        MergeSort {
            schedule,
            current: None,
        }
    }
}

fn plan(l: usize, r: usize, out: &mut VecDeque<(usize, usize, usize)>) {
    if l < r {
        let m = (l + r) / 2;
        plan(l, m, out);
        plan(m + 1, r, out);
        out.push_back((l, m, r));
    }
}

impl SortStep for MergeSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Step> {
        loop {
            if let Some(mg) = self.current.as_mut() {
                let k = mg.k;
                let (value, compares) = match (
                    mg.left.get(mg.i).copied(),
                    mg.right.get(mg.j).copied(),
                ) {
                    (Some(a), Some(b)) => {
                        if a <= b {
                            mg.i += 1;
                            (a, 1)
                        } else {
                            mg.j += 1;
                            (b, 1)
                        }
                    }
                    (Some(a), None) => {
                        mg.i += 1;
                        (a, 0)
                    }
                    (None, Some(b)) => {
                        mg.j += 1;
                        (b, 0)
                    }
                    (None, None) => {
                        self.current = None;
                        continue;
                    }
                };

                values[k] = value;
                mg.k += 1;
                return Some(Step::write(k, value, compares));
            }

            let (l, m, r) = self.schedule.pop_front()?;
            self.current = Some(Merge {
                left: values[l..=m].to_vec(),
                right: values[m + 1..=r].to_vec(),
                i: 0,
                j: 0,
                k: l,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_plan_order() {
        let sorter = MergeSort::new(4);
        let schedule: Vec<_> = sorter.schedule.iter().copied().collect();

        assert_eq!(schedule, vec![(0, 0, 1), (2, 2, 3), (0, 1, 3)]);
    }

    #[test]
    fn test_merge_scenario() {
        let mut values = vec![4, 2, 5, 1];
        let mut sorter = MergeSort::new(values.len());

        // [4] + [2]
        sorter.step(&mut values);
        sorter.step(&mut values);
        assert_eq!(&values[..2], &[2, 4]);

        // [5] + [1]
        sorter.step(&mut values);
        sorter.step(&mut values);
        assert_eq!(&values[2..], &[1, 5]);

        let steps = sorter.run_to_completion(&mut values);
        assert_eq!(values, vec![1, 2, 4, 5]);

        let written: Vec<usize> = steps.iter().map(|s| s.highlights.indices()[0]).collect();
        assert_eq!(written, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_merge_flush_highlights_written_index() {
        let mut values = vec![1, 2, 3, 4, 5];
        let steps = MergeSort::new(values.len()).run_to_completion(&mut values);

        for step in &steps {
            assert!(step.highlights.in_bounds(values.len()));
        }
        // the final merge of [1,2,3] and [4,5] ends by flushing index 4
        assert_eq!(steps.last().unwrap().highlights.indices(), &[4]);
    }
}
