//! Cipher-suite preference configuration for TLS.
//!
//! A rule string such as `ECDHE+AESGCM:!kRSA:@STRENGTH` compiles into an
//! ordered list of cipher suites with equal-preference groups. Curve lists
//! like `X25519:P-256` are validated into NamedGroup ids.
pub mod catalog;
pub mod cli;
pub mod config;
pub mod curves;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod rules;

pub use catalog::{suite_by_name, suite_by_value, CipherSuite, ProtocolFamily};
pub use config::{PolicyConfig, TlsPolicy};
pub use curves::{curve_by_id, curve_by_name, parse_curves_list, Curve};
pub use engine::{compile, compile_with, Engine, PreferenceEntry, PreferenceList};
pub use error::{CipherListError, ConfigError, CurveError, Error, ParseError, Result};
pub use rules::{parse_rules, RuleItem};
