// Frame history for stepping backward and forward through a run

use super::SortStats;
use crate::array::ArrayState;
use std::collections::VecDeque;

/// One recorded frame: the sequence, its highlights and the counters at that point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: ArrayState,
    pub stats: SortStats,
}

impl Snapshot {
    pub fn new(state: ArrayState, stats: SortStats) -> Self {
        Snapshot { state, stats }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        self.state.estimated_size() + std::mem::size_of::<Snapshot>()
    }
}

/// Bounded ring of snapshots addressed by absolute step position
///
/// Position 0 is the frame a run started from. When the memory budget is
/// exceeded the oldest snapshots are dropped, so the first retained position
/// can move forward during a long run.
#[derive(Debug)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    /// Absolute position of `snapshots[0]`
    first: usize,
    max_memory: usize,
    current_memory: usize,
}

impl History {
    pub fn new(max_memory: usize) -> Self {
        History {
            snapshots: VecDeque::new(),
            first: 0,
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot at the head, evicting the oldest ones if over budget
    pub fn push(&mut self, snapshot: Snapshot) {
        let snapshot_size = snapshot.estimated_size();

        let evicted_before = self.first;

        // Always keep at least the newest snapshot
        while !self.snapshots.is_empty() && self.current_memory + snapshot_size > self.max_memory {
            if let Some(old) = self.snapshots.pop_front() {
                self.current_memory -= old.estimated_size();
                self.first += 1;
            }
        }
        if evicted_before == 0 && self.first > 0 {
            log::info!(
                "history budget of {} bytes reached, dropping oldest steps",
                self.max_memory
            );
        }

        self.current_memory += snapshot_size;
        self.snapshots.push_back(snapshot);
    }

    /// Get a snapshot by absolute position
    pub fn get(&self, position: usize) -> Option<&Snapshot> {
        position
            .checked_sub(self.first)
            .and_then(|offset| self.snapshots.get(offset))
    }

    /// Drop every snapshot and restart positions at 0
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.first = 0;
        self.current_memory = 0;
    }

    /// Oldest position still retained
    pub fn first_position(&self) -> usize {
        self.first
    }

    /// Position of the newest snapshot, if any
    pub fn head(&self) -> Option<usize> {
        if self.snapshots.is_empty() {
            None
        } else {
            Some(self.first + self.snapshots.len() - 1)
        }
    }

    /// Total positions recorded since the last clear, evicted ones included
    pub fn total(&self) -> usize {
        self.first + self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(values: Vec<u32>) -> Snapshot {
        Snapshot::new(ArrayState::from_values(values), SortStats::default())
    }

    #[test]
    fn test_positions_are_absolute() {
        let mut history = History::new(usize::MAX);
        assert_eq!(history.head(), None);

        history.push(snapshot(vec![3, 1]));
        history.push(snapshot(vec![1, 3]));

        assert_eq!(history.head(), Some(1));
        assert_eq!(history.total(), 2);
        assert_eq!(history.get(0).unwrap().state.values, vec![3, 1]);
        assert_eq!(history.get(1).unwrap().state.values, vec![1, 3]);
        assert!(history.get(2).is_none());
    }

    #[test]
    fn test_evicts_oldest_when_over_budget() {
        let one = snapshot(vec![0; 10]).estimated_size();
        let mut history = History::new(one * 3);

        for i in 0..5 {
            history.push(snapshot(vec![i; 10]));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.first_position(), 2);
        assert_eq!(history.head(), Some(4));
        assert!(history.get(1).is_none());
        assert_eq!(history.get(2).unwrap().state.values[0], 2);
        assert!(history.current_memory <= history.max_memory);
    }

    #[test]
    fn test_keeps_newest_even_when_budget_is_tiny() {
        let mut history = History::new(1);
        history.push(snapshot(vec![1, 2, 3]));
        history.push(snapshot(vec![4, 5, 6]));

        assert_eq!(history.len(), 1);
        assert_eq!(history.get(1).unwrap().state.values, vec![4, 5, 6]);
    }

    #[test]
    fn test_clear_resets_positions() {
        let mut history = History::new(usize::MAX);
        history.push(snapshot(vec![1]));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.total(), 0);
        assert_eq!(history.current_memory, 0);
    }
}
