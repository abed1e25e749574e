use super::{
    Authentication as Au, BulkCipher as Enc, CipherSuite, KeyExchange as Kx, Mac,
    ProtocolVersion as V,
};

#[allow(clippy::too_many_arguments)]
const fn entry(
    id: u16,
    name: &'static str,
    shared_name: Option<&'static str>,
    standard_name: &'static str,
    key_exchange: Kx,
    auth: Au,
    cipher: Enc,
    mac: Mac,
    min_version: V,
    strength_bits: u16,
) -> CipherSuite {
    CipherSuite {
        id,
        name,
        shared_name,
        standard_name,
        key_exchange,
        auth,
        cipher,
        mac,
        min_version,
        strength_bits,
    }
}

/// Every known suite, in default preference order.
///
/// ECDHE comes first (ECDSA, then RSA, then PSK authentication), ordered by
/// bulk cipher: ChaCha20-Poly1305, AES-128-GCM, AES-256-GCM, AES-128-CBC,
/// AES-256-CBC, 3DES, NULL. Suites without forward secrecy follow in the same
/// cipher order. TLS 1.3 suites close the table and are not configurable.
#[rustfmt::skip]
pub const SUITES: &[CipherSuite] = &[
    entry(0xCCA9, "ECDHE-ECDSA-CHACHA20-POLY1305", None,
        "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Ecdhe, Au::Ecdsa, Enc::ChaCha20Poly1305, Mac::Aead, V::Tls1_2, 256),
    entry(0xCCA8, "ECDHE-RSA-CHACHA20-POLY1305", None,
        "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Ecdhe, Au::Rsa, Enc::ChaCha20Poly1305, Mac::Aead, V::Tls1_2, 256),
    entry(0xCCAC, "ECDHE-PSK-CHACHA20-POLY1305", None,
        "TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Ecdhe, Au::Psk, Enc::ChaCha20Poly1305, Mac::Aead, V::Tls1_2, 256),
    entry(0xCC14, "ECDHE-ECDSA-CHACHA20-POLY1305-OLD",
        Some("ECDHE-ECDSA-CHACHA20-POLY1305"),
        "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Ecdhe, Au::Ecdsa, Enc::ChaCha20Poly1305Old, Mac::Aead, V::Tls1_2, 256),
    entry(0xCC13, "ECDHE-RSA-CHACHA20-POLY1305-OLD",
        Some("ECDHE-RSA-CHACHA20-POLY1305"),
        "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
        Kx::Ecdhe, Au::Rsa, Enc::ChaCha20Poly1305Old, Mac::Aead, V::Tls1_2, 256),
    entry(0xC02B, "ECDHE-ECDSA-AES128-GCM-SHA256", None,
        "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        Kx::Ecdhe, Au::Ecdsa, Enc::Aes128Gcm, Mac::Aead, V::Tls1_2, 128),
    entry(0xC02F, "ECDHE-RSA-AES128-GCM-SHA256", None,
        "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        Kx::Ecdhe, Au::Rsa, Enc::Aes128Gcm, Mac::Aead, V::Tls1_2, 128),
    entry(0x009E, "DHE-RSA-AES128-GCM-SHA256", None,
        "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256",
        Kx::Dhe, Au::Rsa, Enc::Aes128Gcm, Mac::Aead, V::Tls1_2, 128),
    entry(0xC02C, "ECDHE-ECDSA-AES256-GCM-SHA384", None,
        "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        Kx::Ecdhe, Au::Ecdsa, Enc::Aes256Gcm, Mac::Aead, V::Tls1_2, 256),
    entry(0xC030, "ECDHE-RSA-AES256-GCM-SHA384", None,
        "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        Kx::Ecdhe, Au::Rsa, Enc::Aes256Gcm, Mac::Aead, V::Tls1_2, 256),
    entry(0x009F, "DHE-RSA-AES256-GCM-SHA384", None,
        "TLS_DHE_RSA_WITH_AES_256_GCM_SHA384",
        Kx::Dhe, Au::Rsa, Enc::Aes256Gcm, Mac::Aead, V::Tls1_2, 256),
    entry(0xC009, "ECDHE-ECDSA-AES128-SHA", None,
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
        Kx::Ecdhe, Au::Ecdsa, Enc::Aes128, Mac::Sha1, V::Ssl3, 128),
    entry(0xC023, "ECDHE-ECDSA-AES128-SHA256", None,
        "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256",
        Kx::Ecdhe, Au::Ecdsa, Enc::Aes128, Mac::Sha256, V::Tls1_2, 128),
    entry(0xC013, "ECDHE-RSA-AES128-SHA", None,
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
        Kx::Ecdhe, Au::Rsa, Enc::Aes128, Mac::Sha1, V::Ssl3, 128),
    entry(0xC027, "ECDHE-RSA-AES128-SHA256", None,
        "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256",
        Kx::Ecdhe, Au::Rsa, Enc::Aes128, Mac::Sha256, V::Tls1_2, 128),
    entry(0xC035, "ECDHE-PSK-AES128-CBC-SHA", None,
        "TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA",
        Kx::Ecdhe, Au::Psk, Enc::Aes128, Mac::Sha1, V::Ssl3, 128),
    entry(0x0033, "DHE-RSA-AES128-SHA", None,
        "TLS_DHE_RSA_WITH_AES_128_CBC_SHA",
        Kx::Dhe, Au::Rsa, Enc::Aes128, Mac::Sha1, V::Ssl3, 128),
    entry(0x0067, "DHE-RSA-AES128-SHA256", None,
        "TLS_DHE_RSA_WITH_AES_128_CBC_SHA256",
        Kx::Dhe, Au::Rsa, Enc::Aes128, Mac::Sha256, V::Tls1_2, 128),
    entry(0xC00A, "ECDHE-ECDSA-AES256-SHA", None,
        "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA",
        Kx::Ecdhe, Au::Ecdsa, Enc::Aes256, Mac::Sha1, V::Ssl3, 256),
    entry(0xC024, "ECDHE-ECDSA-AES256-SHA384", None,
        "TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384",
        Kx::Ecdhe, Au::Ecdsa, Enc::Aes256, Mac::Sha384, V::Tls1_2, 256),
    entry(0xC014, "ECDHE-RSA-AES256-SHA", None,
        "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA",
        Kx::Ecdhe, Au::Rsa, Enc::Aes256, Mac::Sha1, V::Ssl3, 256),
    entry(0xC028, "ECDHE-RSA-AES256-SHA384", None,
        "TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384",
        Kx::Ecdhe, Au::Rsa, Enc::Aes256, Mac::Sha384, V::Tls1_2, 256),
    entry(0xC036, "ECDHE-PSK-AES256-CBC-SHA", None,
        "TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA",
        Kx::Ecdhe, Au::Psk, Enc::Aes256, Mac::Sha1, V::Ssl3, 256),
    entry(0x0039, "DHE-RSA-AES256-SHA", None,
        "TLS_DHE_RSA_WITH_AES_256_CBC_SHA",
        Kx::Dhe, Au::Rsa, Enc::Aes256, Mac::Sha1, V::Ssl3, 256),
    entry(0x006B, "DHE-RSA-AES256-SHA256", None,
        "TLS_DHE_RSA_WITH_AES_256_CBC_SHA256",
        Kx::Dhe, Au::Rsa, Enc::Aes256, Mac::Sha256, V::Tls1_2, 256),
    // No forward secrecy.
    entry(0x009C, "AES128-GCM-SHA256", None,
        "TLS_RSA_WITH_AES_128_GCM_SHA256",
        Kx::Rsa, Au::Rsa, Enc::Aes128Gcm, Mac::Aead, V::Tls1_2, 128),
    entry(0x009D, "AES256-GCM-SHA384", None,
        "TLS_RSA_WITH_AES_256_GCM_SHA384",
        Kx::Rsa, Au::Rsa, Enc::Aes256Gcm, Mac::Aead, V::Tls1_2, 256),
    entry(0x002F, "AES128-SHA", None,
        "TLS_RSA_WITH_AES_128_CBC_SHA",
        Kx::Rsa, Au::Rsa, Enc::Aes128, Mac::Sha1, V::Ssl3, 128),
    entry(0x003C, "AES128-SHA256", None,
        "TLS_RSA_WITH_AES_128_CBC_SHA256",
        Kx::Rsa, Au::Rsa, Enc::Aes128, Mac::Sha256, V::Tls1_2, 128),
    entry(0x008C, "PSK-AES128-CBC-SHA", None,
        "TLS_PSK_WITH_AES_128_CBC_SHA",
        Kx::Psk, Au::Psk, Enc::Aes128, Mac::Sha1, V::Ssl3, 128),
    entry(0x0035, "AES256-SHA", None,
        "TLS_RSA_WITH_AES_256_CBC_SHA",
        Kx::Rsa, Au::Rsa, Enc::Aes256, Mac::Sha1, V::Ssl3, 256),
    entry(0x003D, "AES256-SHA256", None,
        "TLS_RSA_WITH_AES_256_CBC_SHA256",
        Kx::Rsa, Au::Rsa, Enc::Aes256, Mac::Sha256, V::Tls1_2, 256),
    entry(0x008D, "PSK-AES256-CBC-SHA", None,
        "TLS_PSK_WITH_AES_256_CBC_SHA",
        Kx::Psk, Au::Psk, Enc::Aes256, Mac::Sha1, V::Ssl3, 256),
    entry(0x000A, "DES-CBC3-SHA", None,
        "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
        Kx::Rsa, Au::Rsa, Enc::TripleDes, Mac::Sha1, V::Ssl3, 112),
    entry(0x0002, "NULL-SHA", None,
        "TLS_RSA_WITH_NULL_SHA",
        Kx::Rsa, Au::Rsa, Enc::Null, Mac::Sha1, V::Ssl3, 0),
    // TLS 1.3
    entry(0x1301, "AEAD-AES128-GCM-SHA256", None,
        "TLS_AES_128_GCM_SHA256",
        Kx::Generic, Au::Generic, Enc::Aes128Gcm, Mac::Aead, V::Tls1_3, 128),
    entry(0x1302, "AEAD-AES256-GCM-SHA384", None,
        "TLS_AES_256_GCM_SHA384",
        Kx::Generic, Au::Generic, Enc::Aes256Gcm, Mac::Aead, V::Tls1_3, 256),
    entry(0x1303, "AEAD-CHACHA20-POLY1305-SHA256", None,
        "TLS_CHACHA20_POLY1305_SHA256",
        Kx::Generic, Au::Generic, Enc::ChaCha20Poly1305, Mac::Aead, V::Tls1_3, 256),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_secret_suites_come_first() {
        let configurable: Vec<_> = SUITES.iter().filter(|s| s.is_configurable()).collect();
        let first_plain = configurable
            .iter()
            .position(|s| !s.is_forward_secret())
            .unwrap();
        assert!(configurable[first_plain..]
            .iter()
            .all(|s| !s.is_forward_secret()));
    }

    #[test]
    fn test_shared_names_follow_standard_suite() {
        for (index, suite) in SUITES.iter().enumerate() {
            if let Some(shared) = suite.shared_name {
                let sibling = SUITES.iter().position(|s| s.name == shared).unwrap();
                assert!(sibling < index, "{shared} must precede its draft variant");
                assert_eq!(SUITES[sibling].standard_name, suite.standard_name);
            }
        }
    }

    #[test]
    fn test_strength_matches_cipher() {
        for suite in SUITES {
            let expected = match suite.cipher {
                Enc::Null => 0,
                Enc::TripleDes => 112,
                Enc::Aes128 | Enc::Aes128Gcm => 128,
                Enc::Aes256 | Enc::Aes256Gcm => 256,
                Enc::ChaCha20Poly1305 | Enc::ChaCha20Poly1305Old => 256,
            };
            assert_eq!(suite.strength_bits, expected, "{}", suite.name);
        }
    }
}
