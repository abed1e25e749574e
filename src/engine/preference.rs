use std::fmt;

use crate::catalog::{CipherSuite, SUITES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceEntry {
    pub suite: &'static CipherSuite,
    /// True when the next entry shares this entry's preference group.
    pub in_group: bool,
}

/// An ordered cipher list with equal-preference groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceList {
    entries: Vec<PreferenceEntry>,
}

impl PreferenceList {
    pub(crate) fn new(entries: Vec<PreferenceEntry>) -> Self {
        Self { entries }
    }

    /// Every configurable non-NULL suite in catalog order, one per group.
    /// Same result as compiling `ALL`.
    pub fn all_configurable() -> Self {
        let entries = SUITES
            .iter()
            .filter(|suite| suite.is_configurable() && !suite.is_null())
            .map(|suite| PreferenceEntry {
                suite,
                in_group: false,
            })
            .collect();
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PreferenceEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreferenceEntry> {
        self.entries.iter()
    }

    pub fn suites(&self) -> impl Iterator<Item = &'static CipherSuite> + '_ {
        self.entries.iter().map(|entry| entry.suite)
    }

    pub fn ids(&self) -> Vec<u16> {
        self.suites().map(|suite| suite.id).collect()
    }

    pub fn in_group_flags(&self) -> Vec<bool> {
        self.entries.iter().map(|entry| entry.in_group).collect()
    }

    pub fn contains(&self, id: u16) -> bool {
        self.suites().any(|suite| suite.id == id)
    }

    /// Entries split into their preference groups, most preferred first.
    pub fn groups(&self) -> Vec<&[PreferenceEntry]> {
        let mut groups = Vec::new();
        let mut start = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.in_group {
                groups.push(&self.entries[start..=i]);
                start = i + 1;
            }
        }
        groups
    }

    /// Picks the suite to negotiate against a peer's offered ids.
    ///
    /// With `prefer_local`, the first local group containing any offered
    /// suite wins, and the peer's order breaks ties inside that group.
    /// Otherwise the peer's first offered suite we support wins.
    pub fn choose(&self, peer: &[u16], prefer_local: bool) -> Option<&'static CipherSuite> {
        if !prefer_local {
            return peer
                .iter()
                .find_map(|&id| self.suites().find(|suite| suite.id == id));
        }

        for group in self.groups() {
            let best = group
                .iter()
                .filter_map(|entry| {
                    peer.iter()
                        .position(|&id| id == entry.suite.id)
                        .map(|rank| (rank, entry.suite))
                })
                .min_by_key(|(rank, _)| *rank);
            if let Some((_, suite)) = best {
                return Some(suite);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a PreferenceList {
    type Item = &'a PreferenceEntry;
    type IntoIter = std::slice::Iter<'a, PreferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for PreferenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut in_group = false;
        for entry in &self.entries {
            if !in_group && entry.in_group {
                writeln!(f, "[")?;
                in_group = true;
            }
            if in_group {
                write!(f, "  ")?;
            }
            writeln!(f, "{}", entry.suite.name)?;
            if in_group && !entry.in_group {
                writeln!(f, "]")?;
                in_group = false;
            }
        }
        Ok(())
    }
}
