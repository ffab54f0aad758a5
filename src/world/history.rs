use crate::world::grid_index::GridIndex;
use serde::{Deserialize, Serialize};

/// The order bricks were committed in, most recent last.
///
/// Undo is strictly last-in-first-out; there is no arbitrary deletion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementHistory {
    placed: Vec<GridIndex>,
}

impl PlacementHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: GridIndex) {
        self.placed.push(index);
    }

    /// The most recent placement, or `None` when nothing is left to undo.
    pub fn pop(&mut self) -> Option<GridIndex> {
        self.placed.pop()
    }

    pub fn last(&self) -> Option<GridIndex> {
        self.placed.last().copied()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_lifo() {
        let mut history = PlacementHistory::new();
        history.push(GridIndex::new(1, 0, 1));
        history.push(GridIndex::new(2, 0, 2));

        assert_eq!(history.last(), Some(GridIndex::new(2, 0, 2)));
        assert_eq!(history.pop(), Some(GridIndex::new(2, 0, 2)));
        assert_eq!(history.pop(), Some(GridIndex::new(1, 0, 1)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_empty_history_pops_nothing() {
        let mut history = PlacementHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
