//! Bounded snapshot history with linear undo/redo.

use crate::stroke::StrokeSegment;

/// Maximum number of snapshots to keep.
pub const HISTORY_CAPACITY: usize = 30;

/// A captured raster state plus the stroke path that produced it.
///
/// Each snapshot exclusively owns its buffer.
#[derive(Debug, Clone)]
pub struct HistorySnapshot<B> {
    raster: B,
    path: Vec<StrokeSegment>,
}

impl<B> HistorySnapshot<B> {
    pub fn new(raster: B, path: Vec<StrokeSegment>) -> Self {
        Self { raster, path }
    }

    pub fn raster(&self) -> &B {
        &self.raster
    }

    /// The stroke path committed with this snapshot (empty for blank/clear states).
    pub fn path(&self) -> &[StrokeSegment] {
        &self.path
    }
}

/// Snapshot stack plus redo buffer.
///
/// The stack is never empty: undo stops at one remaining entry. Once the stack
/// is at capacity, pushing evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct History<B> {
    snapshots: Vec<HistorySnapshot<B>>,
    redo_stack: Vec<HistorySnapshot<B>>,
    capacity: usize,
}

impl<B> History<B> {
    /// Create a history seeded with its initial state.
    pub fn new(initial: HistorySnapshot<B>) -> Self {
        Self::with_capacity(initial, HISTORY_CAPACITY)
    }

    /// Create a history with a custom capacity (at least 1).
    pub fn with_capacity(initial: HistorySnapshot<B>, capacity: usize) -> Self {
        Self {
            snapshots: vec![initial],
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push a new state. Clears the redo buffer.
    pub fn push(&mut self, snapshot: HistorySnapshot<B>) {
        self.snapshots.push(snapshot);
        self.redo_stack.clear();

        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
        }
    }

    /// Move the top snapshot into the redo buffer.
    /// Returns the new current state, or `None` if only one entry remains.
    pub fn undo(&mut self) -> Option<&HistorySnapshot<B>> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        let top = self.snapshots.pop()?;
        self.redo_stack.push(top);
        self.snapshots.last()
    }

    /// Move the most recently undone snapshot back onto the stack.
    /// Returns the new current state, or `None` if there is nothing to redo.
    pub fn redo(&mut self) -> Option<&HistorySnapshot<B>> {
        let snapshot = self.redo_stack.pop()?;
        self.snapshots.push(snapshot);
        self.snapshots.last()
    }

    /// The state currently shown.
    pub fn current(&self) -> &HistorySnapshot<B> {
        debug_assert!(!self.is_empty());
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(n: u32) -> HistorySnapshot<u32> {
        HistorySnapshot::new(n, Vec::new())
    }

    #[test]
    fn test_undo_stops_at_initial_state() {
        let mut history = History::new(snap(0));
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert!(history.undo().is_none());
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current().raster(), 0);
    }

    #[test]
    fn test_undo_redo() {
        let mut history = History::new(snap(0));
        history.push(snap(1));
        history.push(snap(2));

        assert_eq!(history.undo().map(|s| *s.raster()), Some(1));
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.redo().map(|s| *s.raster()), Some(2));
        assert_eq!(history.len(), 3);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = History::new(snap(0));
        history.push(snap(1));
        history.undo();
        assert!(history.can_redo());

        history.push(snap(2));
        assert!(!history.can_redo());
        assert_eq!(*history.current().raster(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new(snap(0));
        for n in 1..=31 {
            history.push(snap(n));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);

        while history.undo().is_some() {}
        // 0 and 1 were evicted
        assert_eq!(*history.current().raster(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = History::with_capacity(snap(0), 0);
        history.push(snap(1));
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current().raster(), 1);
    }
}
