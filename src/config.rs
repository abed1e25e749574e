use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::catalog::{CipherSuite, ProtocolFamily};
use crate::curves::parse_curves_list;
use crate::engine::{Engine, PreferenceList};
use crate::error::{CipherListError, ConfigError, CurveError};

pub const DEFAULT_CIPHER_LIST: &str = "ALL";
pub const DEFAULT_CURVES: &str = "X25519:P-256:P-384";

/// On-disk policy file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default)]
    pub protocol: ProtocolFamily,
    #[serde(default)]
    pub cipher_list: Option<String>,
    #[serde(default)]
    pub curves: Option<String>,
}

impl PolicyConfig {
    /// Loads a policy from `.json`, `.yaml` or `.yml`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading policy file");

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config = match extension {
            "json" => Self::from_json(&content, path),
            "yaml" | "yml" => Self::from_yaml(&content, path),
            _ => Err(ConfigError::unsupported_format(extension)),
        }?;

        trace!(
            protocol = config.protocol.as_str(),
            cipher_list = ?config.cipher_list,
            curves = ?config.curves,
            "loaded policy"
        );
        Ok(config)
    }

    fn from_json(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::parse_error(path, e.to_string()))
    }

    fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::parse_error(path, e.to_string()))
    }
}

/// Cipher and curve preferences for one TLS context.
///
/// Setters are all-or-nothing: a rejected rule or curve list leaves the
/// previous value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPolicy {
    engine: Engine,
    cipher_list: PreferenceList,
    curves: Vec<u16>,
}

impl TlsPolicy {
    pub fn new() -> Self {
        Self::for_protocol(ProtocolFamily::Tls)
    }

    pub fn for_protocol(protocol: ProtocolFamily) -> Self {
        Self {
            engine: Engine::builder().protocol(protocol).build(),
            cipher_list: PreferenceList::all_configurable(),
            curves: default_curves(),
        }
    }

    pub fn from_config(config: &PolicyConfig) -> Result<Self, ConfigError> {
        let mut policy = Self::for_protocol(config.protocol);
        if let Some(rule) = &config.cipher_list {
            policy.set_cipher_list(rule)?;
        }
        if let Some(curves) = &config.curves {
            policy.set_curves_list(curves)?;
        }
        Ok(policy)
    }

    /// Loads a policy file and builds the policy it describes.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let config = PolicyConfig::load(path)?;
        Ok(Self::from_config(&config)?)
    }

    pub fn protocol(&self) -> ProtocolFamily {
        self.engine.protocol()
    }

    pub fn cipher_list(&self) -> &PreferenceList {
        &self.cipher_list
    }

    pub fn curves(&self) -> &[u16] {
        &self.curves
    }

    pub fn set_cipher_list(&mut self, rule: &str) -> Result<(), CipherListError> {
        self.cipher_list = self.engine.compile(rule)?;
        Ok(())
    }

    pub fn set_curves_list(&mut self, list: &str) -> Result<(), CurveError> {
        self.curves = parse_curves_list(list)?;
        Ok(())
    }

    pub fn choose_cipher(&self, peer: &[u16], prefer_local: bool) -> Option<&'static CipherSuite> {
        self.cipher_list.choose(peer, prefer_local)
    }
}

impl Default for TlsPolicy {
    fn default() -> Self {
        Self::new()
    }
}

fn default_curves() -> Vec<u16> {
    // X25519, P-256, P-384
    vec![29, 23, 24]
}
