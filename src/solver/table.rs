use fnv::FnvHashMap;

use crate::data::Pos;
use crate::state::{BoxId, State, StateKey};

/// Best known cost-to-goal estimates, keyed by state content.
///
/// Zero and missing are the same thing: `get` returns `None` for both
/// and storing zero removes the entry.
#[derive(Debug, Clone, Default)]
pub struct StateTable {
    values: FnvHashMap<StateKey, i32>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, state: &State) -> Option<i32> {
        self.values.get(&state.key()).cloned()
    }

    pub fn contains(&self, state: &State) -> bool {
        self.values.contains_key(&state.key())
    }

    pub fn insert(&mut self, state: &State, value: i32) {
        if value == 0 {
            self.values.remove(&state.key());
        } else {
            self.values.insert(state.key(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// How many times each box stood on each cell. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct Visited {
    counts: FnvHashMap<(BoxId, Pos), u32>,
}

impl Visited {
    pub fn new() -> Self {
        Self::default()
    }

    /// 0 for placements never seen.
    pub fn get(&self, id: BoxId, pos: Pos) -> u32 {
        self.counts.get(&(id, pos)).cloned().unwrap_or(0)
    }

    pub fn increment(&mut self, id: BoxId, pos: Pos) {
        *self.counts.entry((id, pos)).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
