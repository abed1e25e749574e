//! Static cipher-suite catalog and selector aliases.
//!
//! The catalog is a fixed table ordered by default preference. Every
//! operation that does not explicitly reorder suites falls back to this order.

pub mod aliases;
mod suites;

pub use aliases::{resolve_atom, AliasGroup, ProtocolFamily, Selector, ALIASES};
pub use suites::SUITES;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyExchange {
    Rsa,
    Dhe,
    Ecdhe,
    Psk,
    /// TLS 1.3 suites do not fix a key exchange.
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authentication {
    Rsa,
    Ecdsa,
    Psk,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkCipher {
    TripleDes,
    Aes128,
    Aes256,
    Aes128Gcm,
    Aes256Gcm,
    ChaCha20Poly1305,
    /// Pre-standard draft construction of ChaCha20-Poly1305.
    ChaCha20Poly1305Old,
    Null,
}

impl BulkCipher {
    pub fn is_chacha20(&self) -> bool {
        matches!(self, Self::ChaCha20Poly1305 | Self::ChaCha20Poly1305Old)
    }

    pub fn is_aes(&self) -> bool {
        matches!(
            self,
            Self::Aes128 | Self::Aes256 | Self::Aes128Gcm | Self::Aes256Gcm
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mac {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    /// The AEAD construction authenticates records itself.
    Aead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolVersion {
    Ssl3,
    Tls1_2,
    Tls1_3,
}

impl ProtocolVersion {
    pub fn wire_value(&self) -> u16 {
        match self {
            Self::Ssl3 => 0x0300,
            Self::Tls1_2 => 0x0303,
            Self::Tls1_3 => 0x0304,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ssl3 => "SSLv3",
            Self::Tls1_2 => "TLSv1.2",
            Self::Tls1_3 => "TLSv1.3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSuite {
    pub id: u16,
    pub name: &'static str,
    /// Legacy name shared with a sibling suite; selecting it yields both.
    pub shared_name: Option<&'static str>,
    pub standard_name: &'static str,
    pub key_exchange: KeyExchange,
    pub auth: Authentication,
    pub cipher: BulkCipher,
    pub mac: Mac,
    pub min_version: ProtocolVersion,
    /// Symmetric strength in bits, used by `@STRENGTH`.
    pub strength_bits: u16,
}

impl CipherSuite {
    pub fn standard_name(&self) -> &'static str {
        self.standard_name
    }

    pub fn is_null(&self) -> bool {
        self.cipher == BulkCipher::Null
    }

    pub fn is_aead(&self) -> bool {
        self.mac == Mac::Aead
    }

    pub fn is_forward_secret(&self) -> bool {
        matches!(self.key_exchange, KeyExchange::Dhe | KeyExchange::Ecdhe)
    }

    /// Whether rule strings may select this suite. TLS 1.3 suites are
    /// always enabled by the handshake layer and never configured here.
    pub fn is_configurable(&self) -> bool {
        self.min_version < ProtocolVersion::Tls1_3
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const _: () = assert!(SUITES.len() <= 64, "SuiteSet is a 64-bit mask");

/// A set of catalog indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuiteSet(u64);

impl SuiteSet {
    pub const EMPTY: Self = Self(0);

    pub fn single(index: usize) -> Self {
        Self(1 << index)
    }

    pub fn from_indices(indices: &[usize]) -> Self {
        indices
            .iter()
            .fold(Self::EMPTY, |set, &index| set.union(Self::single(index)))
    }

    pub fn matching(predicate: impl Fn(&CipherSuite) -> bool) -> Self {
        let mut set = Self::EMPTY;
        for (index, suite) in SUITES.iter().enumerate() {
            if predicate(suite) {
                set = set.union(Self::single(index));
            }
        }
        set
    }

    pub fn contains(&self, index: usize) -> bool {
        index < 64 && self.0 & (1 << index) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Indices in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SUITES.len()).filter(move |&index| self.contains(index))
    }
}

static VALUE_INDEX: OnceLock<HashMap<u16, usize>> = OnceLock::new();
static NAME_INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

fn value_index() -> &'static HashMap<u16, usize> {
    VALUE_INDEX.get_or_init(|| {
        SUITES
            .iter()
            .enumerate()
            .map(|(index, suite)| (suite.id, index))
            .collect()
    })
}

fn name_index() -> &'static HashMap<&'static str, usize> {
    NAME_INDEX.get_or_init(|| {
        SUITES
            .iter()
            .enumerate()
            .map(|(index, suite)| (suite.name, index))
            .collect()
    })
}

pub fn suite(index: usize) -> &'static CipherSuite {
    &SUITES[index]
}

pub fn index_of(id: u16) -> Option<usize> {
    value_index().get(&id).copied()
}

pub fn suite_by_value(id: u16) -> Option<&'static CipherSuite> {
    index_of(id).map(suite)
}

/// Looks up a suite by its canonical name. Shared names are not accepted
/// here since they do not identify a single suite.
pub fn suite_by_name(name: &str) -> Option<&'static CipherSuite> {
    name_index().get(name).copied().map(suite)
}
