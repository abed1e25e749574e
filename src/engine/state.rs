use std::cmp::Reverse;

use crate::catalog::{SuiteSet, SUITES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteState {
    Unused,
    Active,
    Excluded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveEntry {
    pub index: usize,
    pub group: u32,
}

/// Working state for one rule evaluation.
///
/// Every catalog index is in exactly one place: the active sequence, the
/// available pool, or neither (excluded).
#[derive(Debug, Clone)]
pub struct SelectionState {
    states: Vec<SuiteState>,
    active: Vec<ActiveEntry>,
    pool: Vec<usize>,
    next_group: u32,
}

impl SelectionState {
    pub fn new() -> Self {
        let mut states = Vec::with_capacity(SUITES.len());
        let mut pool = Vec::with_capacity(SUITES.len());
        for (index, suite) in SUITES.iter().enumerate() {
            if suite.is_configurable() {
                states.push(SuiteState::Unused);
                pool.push(index);
            } else {
                states.push(SuiteState::Excluded);
            }
        }

        Self {
            states,
            active: Vec::new(),
            pool,
            next_group: 0,
        }
    }

    pub fn state(&self, index: usize) -> SuiteState {
        self.states[index]
    }

    pub fn active(&self) -> &[ActiveEntry] {
        &self.active
    }

    pub fn pool(&self) -> &[usize] {
        &self.pool
    }

    fn fresh_group(&mut self) -> u32 {
        let group = self.next_group;
        self.next_group += 1;
        group
    }

    fn activate(&mut self, index: usize, group: u32) {
        self.states[index] = SuiteState::Active;
        self.active.push(ActiveEntry { index, group });
    }

    /// Members of `set` still in the pool, in pool order.
    pub fn pooled(&self, set: SuiteSet) -> Vec<usize> {
        self.pool
            .iter()
            .copied()
            .filter(|&index| set.contains(index))
            .collect()
    }

    /// Appends every unused member of `set` as its own group. Returns how
    /// many suites were activated.
    pub fn select(&mut self, set: SuiteSet) -> usize {
        let picked = self.pooled(set);
        self.pool.retain(|&index| !set.contains(index));
        for &index in &picked {
            let group = self.fresh_group();
            self.activate(index, group);
        }
        picked.len()
    }

    /// Moves active members of `set` to the tail.
    pub fn add(&mut self, set: SuiteSet) -> usize {
        let (moved, kept): (Vec<_>, Vec<_>) = self
            .active
            .drain(..)
            .partition(|entry| set.contains(entry.index));
        self.active = kept;
        for entry in &moved {
            let group = self.fresh_group();
            self.active.push(ActiveEntry {
                index: entry.index,
                group,
            });
        }
        moved.len()
    }

    /// Returns active members of `set` to the front of the pool.
    pub fn remove(&mut self, set: SuiteSet) -> usize {
        let (removed, kept): (Vec<_>, Vec<_>) = self
            .active
            .drain(..)
            .partition(|entry| set.contains(entry.index));
        self.active = kept;

        let mut pool: Vec<usize> = removed.iter().map(|entry| entry.index).collect();
        for &index in &pool {
            self.states[index] = SuiteState::Unused;
        }
        pool.append(&mut self.pool);
        self.pool = pool;
        removed.len()
    }

    /// Excludes every member of `set` for the rest of the evaluation.
    pub fn delete(&mut self, set: SuiteSet) -> usize {
        let mut count = 0;
        for index in set.iter() {
            if self.states[index] != SuiteState::Excluded {
                self.states[index] = SuiteState::Excluded;
                count += 1;
            }
        }
        self.active.retain(|entry| !set.contains(entry.index));
        self.pool.retain(|&index| !set.contains(index));
        count
    }

    pub fn sort_by_strength(&mut self) {
        self.active
            .sort_by_key(|entry| Reverse(SUITES[entry.index].strength_bits));
    }

    /// Appends the unused suites among `indices` as a single group.
    pub fn push_group(&mut self, indices: &[usize]) -> usize {
        let mut usable = Vec::new();
        for &index in indices {
            if self.states[index] == SuiteState::Unused && !usable.contains(&index) {
                usable.push(index);
            }
        }
        if usable.is_empty() {
            return 0;
        }

        let group = self.fresh_group();
        self.pool.retain(|index| !usable.contains(index));
        for &index in &usable {
            self.activate(index, group);
        }
        usable.len()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
