//! Link pool: numeric ids for the actions bound to tappable ranges.
//!
//! A render surface that registers tap ranges by integer id (see
//! [`TapMap`](crate::TapMap)) keeps the actual [`Action`] values here.

use crate::content::Action;

/// Pool of link actions addressed by non-zero ids.
#[derive(Clone, Debug, Default)]
pub struct LinkPool {
    actions: Vec<Action>,
}

impl LinkPool {
    /// Create a new empty link pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for an action.
    ///
    /// Returns a non-zero id (0 means no link). An action equal to one
    /// already in the pool gets the existing id.
    pub fn alloc(&mut self, action: &Action) -> u32 {
        if let Some(idx) = self.actions.iter().position(|existing| existing == action) {
            return idx as u32 + 1;
        }
        self.actions.push(action.clone());
        self.actions.len() as u32
    }

    /// Get the action for an id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Action> {
        if id == 0 {
            return None;
        }
        self.actions.get(id as usize - 1)
    }

    /// Clear all actions.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    /// Number of allocated ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
