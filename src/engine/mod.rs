//! Selection engine: evaluates parsed rule items against the catalog.

mod preference;
mod state;

pub use preference::{PreferenceEntry, PreferenceList};
pub use state::{ActiveEntry, SelectionState, SuiteState};

use tracing::{debug, trace};

use crate::catalog::{self, resolve_atom, ProtocolFamily, Selector, SuiteSet};
use crate::error::CipherListError;
use crate::rules::{parse_rules, RuleItem};

/// Compiles a rule string for TLS.
pub fn compile(rule: &str) -> Result<PreferenceList, CipherListError> {
    Engine::new().compile(rule)
}

/// Compiles a rule string for the given protocol family.
pub fn compile_with(
    rule: &str,
    protocol: ProtocolFamily,
) -> Result<PreferenceList, CipherListError> {
    Engine::builder().protocol(protocol).build().compile(rule)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    protocol: ProtocolFamily,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn protocol(&self) -> ProtocolFamily {
        self.protocol
    }

    pub fn compile(&self, rule: &str) -> Result<PreferenceList, CipherListError> {
        let items = parse_rules(rule)?;
        self.evaluate(&items)
    }

    /// Runs already-parsed items from a fresh state.
    pub fn evaluate(&self, items: &[RuleItem]) -> Result<PreferenceList, CipherListError> {
        let mut state = SelectionState::new();
        for item in items {
            self.apply(&mut state, item);
        }

        let list = finish(&state);
        if list.is_empty() {
            return Err(CipherListError::EmptySelection);
        }

        debug!(
            protocol = self.protocol.as_str(),
            suites = list.len(),
            groups = list.groups().len(),
            "compiled cipher list"
        );
        Ok(list)
    }

    fn apply(&self, state: &mut SelectionState, item: &RuleItem) {
        let affected = match item {
            RuleItem::Select(atoms) => state.select(self.compound(atoms)),
            RuleItem::Add(atoms) => state.add(self.compound(atoms)),
            RuleItem::Remove(atoms) => state.remove(self.compound(atoms)),
            RuleItem::Delete(atoms) => state.delete(self.compound(atoms)),
            RuleItem::Strength => {
                state.sort_by_strength();
                state.active().len()
            }
            RuleItem::Group(names) => {
                let indices = self.group_members(state, names);
                state.push_group(&indices)
            }
        };
        trace!(item = ?item, affected, active = state.active().len(), "applied rule item");
    }

    /// Intersection of the atoms' suite sets. Exact names only stand alone.
    fn compound(&self, atoms: &[String]) -> SuiteSet {
        let selectors: Vec<Selector> = atoms.iter().map(|atom| self.resolve(atom)).collect();
        if selectors.len() > 1 && selectors.iter().any(Selector::is_exact) {
            debug!(atoms = ?atoms, "exact suite name in compound selects nothing");
            return SuiteSet::EMPTY;
        }

        selectors
            .iter()
            .map(Selector::suites)
            .reduce(SuiteSet::intersect)
            .unwrap_or(SuiteSet::EMPTY)
    }

    fn group_members(&self, state: &SelectionState, names: &[String]) -> Vec<usize> {
        let mut indices = Vec::new();
        for name in names {
            let selector = self.resolve(name);
            match selector.exact_indices() {
                Some(exact) => indices.extend(exact),
                None => indices.extend(state.pooled(selector.suites())),
            }
        }
        indices
    }

    fn resolve(&self, atom: &str) -> Selector {
        let selector = resolve_atom(atom, self.protocol);
        if matches!(selector, Selector::Unknown) {
            debug!(atom, protocol = self.protocol.as_str(), "ignoring unknown selector");
        }
        selector
    }
}

fn finish(state: &SelectionState) -> PreferenceList {
    let active = state.active();
    let entries = active
        .iter()
        .enumerate()
        .map(|(i, entry)| PreferenceEntry {
            suite: catalog::suite(entry.index),
            in_group: active
                .get(i + 1)
                .is_some_and(|next| next.group == entry.group),
        })
        .collect();
    PreferenceList::new(entries)
}

#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    protocol: ProtocolFamily,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protocol(mut self, protocol: ProtocolFamily) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            protocol: self.protocol,
        }
    }
}
