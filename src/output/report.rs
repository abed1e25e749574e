use serde::Serialize;

use crate::catalog::ProtocolFamily;
use crate::config::{PolicyConfig, TlsPolicy};
use crate::curves::curve_by_id;
use crate::engine::PreferenceEntry;

#[derive(Debug, Clone, Serialize)]
pub struct SuiteEntry {
    pub id: u16,
    pub name: String,
    pub standard_name: String,
    pub in_group: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveEntry {
    pub id: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Serializable view of an evaluated policy. Only the parts the policy
/// configured are present.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    pub protocol: ProtocolFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphers: Option<Vec<SuiteEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curves: Option<Vec<CurveEntry>>,
}

impl SuiteEntry {
    pub fn from_entry(entry: &PreferenceEntry) -> Self {
        Self {
            id: entry.suite.id,
            name: entry.suite.name.to_string(),
            standard_name: entry.suite.standard_name().to_string(),
            in_group: entry.in_group,
        }
    }
}

impl CurveEntry {
    pub fn from_id(id: u16) -> Self {
        Self {
            id,
            name: curve_by_id(id).map(|curve| curve.name.to_string()),
        }
    }
}

impl PolicyReport {
    pub fn build(config: &PolicyConfig, policy: &TlsPolicy) -> Self {
        let ciphers = config
            .cipher_list
            .as_ref()
            .map(|_| policy.cipher_list().iter().map(SuiteEntry::from_entry).collect());

        let curves = config
            .curves
            .as_ref()
            .map(|_| policy.curves().iter().copied().map(CurveEntry::from_id).collect());

        Self {
            protocol: policy.protocol(),
            cipher_rule: config.cipher_list.clone(),
            ciphers,
            curves,
        }
    }
}
