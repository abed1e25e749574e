use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use super::{
    Authentication as Au, BulkCipher as Enc, CipherSuite, KeyExchange as Kx, Mac,
    ProtocolVersion, SuiteSet, SUITES,
};

/// Protocol family a rule string is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolFamily {
    #[default]
    Tls,
    Dtls,
}

impl ProtocolFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tls => "tls",
            Self::Dtls => "dtls",
        }
    }
}

#[derive(Debug)]
pub struct AliasGroup {
    pub name: &'static str,
    pub matches: fn(&CipherSuite) -> bool,
    /// Protocol-version pseudo-alias; only meaningful for TLS.
    pub version_alias: bool,
    /// Only the NULL aliases may select NULL-encryption suites.
    pub includes_null: bool,
}

impl AliasGroup {
    const fn new(name: &'static str, matches: fn(&CipherSuite) -> bool) -> Self {
        Self {
            name,
            matches,
            version_alias: false,
            includes_null: false,
        }
    }

    const fn version(name: &'static str, matches: fn(&CipherSuite) -> bool) -> Self {
        Self {
            version_alias: true,
            ..Self::new(name, matches)
        }
    }

    const fn null(name: &'static str) -> Self {
        Self {
            includes_null: true,
            ..Self::new(name, CipherSuite::is_null)
        }
    }

    pub fn suites(&self) -> SuiteSet {
        SuiteSet::matching(|suite| {
            (self.matches)(suite) && (self.includes_null || !suite.is_null())
        })
    }
}

pub static ALIASES: &[AliasGroup] = &[
    AliasGroup::new("ALL", |_| true),
    AliasGroup::new("DEFAULT", |_| true),
    AliasGroup::new("COMPLEMENTOFDEFAULT", |_| false),
    // Key exchange
    AliasGroup::new("kRSA", |s| s.key_exchange == Kx::Rsa),
    AliasGroup::new("kDHE", |s| s.key_exchange == Kx::Dhe),
    AliasGroup::new("kEDH", |s| s.key_exchange == Kx::Dhe),
    AliasGroup::new("DH", |s| s.key_exchange == Kx::Dhe),
    AliasGroup::new("kECDHE", |s| s.key_exchange == Kx::Ecdhe),
    AliasGroup::new("kEECDH", |s| s.key_exchange == Kx::Ecdhe),
    AliasGroup::new("ECDH", |s| s.key_exchange == Kx::Ecdhe),
    AliasGroup::new("kPSK", |s| s.key_exchange == Kx::Psk),
    // Authentication
    AliasGroup::new("aRSA", |s| s.auth == Au::Rsa),
    AliasGroup::new("aECDSA", |s| s.auth == Au::Ecdsa),
    AliasGroup::new("ECDSA", |s| s.auth == Au::Ecdsa),
    AliasGroup::new("aPSK", |s| s.auth == Au::Psk),
    // Key exchange and authentication
    AliasGroup::new("DHE", |s| s.key_exchange == Kx::Dhe),
    AliasGroup::new("EDH", |s| s.key_exchange == Kx::Dhe),
    AliasGroup::new("ECDHE", |s| s.key_exchange == Kx::Ecdhe),
    AliasGroup::new("EECDH", |s| s.key_exchange == Kx::Ecdhe),
    AliasGroup::new("RSA", |s| s.key_exchange == Kx::Rsa && s.auth == Au::Rsa),
    AliasGroup::new("PSK", |s| s.key_exchange == Kx::Psk && s.auth == Au::Psk),
    // Bulk ciphers
    AliasGroup::new("3DES", |s| s.cipher == Enc::TripleDes),
    AliasGroup::new("AES128", |s| {
        matches!(s.cipher, Enc::Aes128 | Enc::Aes128Gcm)
    }),
    AliasGroup::new("AES256", |s| {
        matches!(s.cipher, Enc::Aes256 | Enc::Aes256Gcm)
    }),
    AliasGroup::new("AES", |s| s.cipher.is_aes()),
    AliasGroup::new("AESGCM", |s| {
        matches!(s.cipher, Enc::Aes128Gcm | Enc::Aes256Gcm)
    }),
    AliasGroup::new("CHACHA20", |s| s.cipher.is_chacha20()),
    // MACs
    AliasGroup::new("MD5", |s| s.mac == Mac::Md5),
    AliasGroup::new("SHA1", |s| s.mac == Mac::Sha1),
    AliasGroup::new("SHA", |s| s.mac == Mac::Sha1),
    AliasGroup::new("SHA256", |s| s.mac == Mac::Sha256),
    AliasGroup::new("SHA384", |s| s.mac == Mac::Sha384),
    // Minimum protocol version. TLSv1 matches the same suites as SSLv3.
    AliasGroup::version("SSLv3", |s| s.min_version == ProtocolVersion::Ssl3),
    AliasGroup::version("TLSv1", |s| s.min_version == ProtocolVersion::Ssl3),
    AliasGroup::version("TLSv1.2", |s| s.min_version == ProtocolVersion::Tls1_2),
    // Legacy strength classes
    AliasGroup::new("HIGH", |_| true),
    AliasGroup::new("FIPS", |s| !s.cipher.is_chacha20()),
    AliasGroup::null("eNULL"),
    AliasGroup::null("NULL"),
];

/// What a single rule atom denotes.
#[derive(Debug, Clone, Copy)]
pub enum Selector {
    /// An exact suite name.
    ExactOne(usize),
    /// A shared legacy name covering a standard suite and its draft variant,
    /// standard first.
    ExactPair(usize, usize),
    Alias(&'static AliasGroup),
    /// Unrecognized atoms select nothing.
    Unknown,
}

impl Selector {
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::ExactOne(_) | Self::ExactPair(..))
    }

    pub fn suites(&self) -> SuiteSet {
        match *self {
            Self::ExactOne(index) => SuiteSet::single(index),
            Self::ExactPair(first, second) => SuiteSet::from_indices(&[first, second]),
            Self::Alias(alias) => alias.suites(),
            Self::Unknown => SuiteSet::EMPTY,
        }
    }

    /// Catalog indices an exact selector names, in the name's own order.
    pub fn exact_indices(&self) -> Option<Vec<usize>> {
        match *self {
            Self::ExactOne(index) => Some(vec![index]),
            Self::ExactPair(first, second) => Some(vec![first, second]),
            Self::Alias(_) | Self::Unknown => None,
        }
    }
}

static EXACT_NAMES: OnceLock<HashMap<&'static str, Selector>> = OnceLock::new();

fn exact_names() -> &'static HashMap<&'static str, Selector> {
    EXACT_NAMES.get_or_init(|| {
        let mut by_name: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (index, suite) in SUITES.iter().enumerate() {
            by_name.entry(suite.name).or_default().push(index);
            if let Some(shared) = suite.shared_name {
                by_name.entry(shared).or_default().push(index);
            }
        }

        by_name
            .into_iter()
            .map(|(name, indices)| {
                let selector = match indices.as_slice() {
                    [only] => Selector::ExactOne(*only),
                    [first, second, ..] => Selector::ExactPair(*first, *second),
                    [] => Selector::Unknown,
                };
                (name, selector)
            })
            .collect()
    })
}

pub fn find_alias(name: &str) -> Option<&'static AliasGroup> {
    ALIASES.iter().find(|alias| alias.name == name)
}

/// Resolves one atom: exact suite names first, then aliases.
pub fn resolve_atom(atom: &str, family: ProtocolFamily) -> Selector {
    if let Some(selector) = exact_names().get(atom) {
        return *selector;
    }

    match find_alias(atom) {
        Some(alias) if alias.version_alias && family != ProtocolFamily::Tls => Selector::Unknown,
        Some(alias) => Selector::Alias(alias),
        None => Selector::Unknown,
    }
}
