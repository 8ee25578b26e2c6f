//! Identifier generation for players, monsters, and battle sessions.
//!
//! Durable, externally visible ids (players, owned monsters) are version-4
//! UUIDs built from the OS randomness source; if that source is missing the
//! call fails loudly instead of degrading, since it signals a broken
//! environment. Battle session tokens are short alphanumeric strings where
//! a collision costs nothing (the client just re-requests), so those may
//! fall back to the thread-local PRNG.

use crate::errors::InfrastructureError;
use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

const ALPHANUMERIC: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of a battle session token.
pub const BATTLE_TOKEN_LEN: usize = 12;

/// Process-wide id generator.
///
/// The randomness source is probed once at construction and never
/// re-branched per call.
#[derive(Debug, Clone, Copy)]
pub struct IdGenerator {
    crypto_available: bool,
}

impl IdGenerator {
    /// Probes the OS randomness source and remembers the verdict.
    pub fn detect() -> Self {
        let mut probe = [0u8; 1];
        let crypto_available = OsRng.try_fill_bytes(&mut probe).is_ok();
        if !crypto_available {
            log::warn!("OS randomness source unavailable; short ids fall back to the thread PRNG");
        }
        Self { crypto_available }
    }

    /// Constructor for tests that need the degraded path.
    #[cfg(test)]
    pub fn without_crypto() -> Self {
        Self {
            crypto_available: false,
        }
    }

    /// Returns a canonical hyphenated version-4 UUID string.
    pub fn uuid(&self) -> Result<String, InfrastructureError> {
        if !self.crypto_available {
            return Err(InfrastructureError::RandomnessUnavailable);
        }
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| InfrastructureError::RandomnessUnavailable)?;
        // Builder stamps the version-4 and RFC 4122 variant nibbles.
        Ok(uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string())
    }

    /// Returns `len` characters over the 62-character alphanumeric alphabet.
    ///
    /// The modulo mapping has a slight bias toward the low end of the
    /// alphabet, which is acceptable for ephemeral session tokens.
    pub fn short_id(&self, len: usize) -> String {
        if len == 0 {
            return String::new();
        }
        let mut bytes = vec![0u8; len];
        let filled = self.crypto_available && OsRng.try_fill_bytes(&mut bytes).is_ok();
        if !filled {
            rand::rng().fill_bytes(&mut bytes);
        }
        bytes
            .iter()
            .map(|b| ALPHANUMERIC[usize::from(b % 62)] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_canonical_v4(id: &str) {
        assert_eq!(id.len(), 36);
        let parts: Vec<&str> = id.split('-').collect();
        let lengths: Vec<usize> = parts.iter().map(|p| p.len()).collect();
        assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
        for part in &parts {
            assert!(part.chars().all(|c| c.is_ascii_hexdigit()));
        }
        // Version nibble is fixed to 4, variant nibble to {8, 9, a, b}.
        assert_eq!(parts[2].chars().next(), Some('4'));
        let variant = parts[3].chars().next().unwrap();
        assert!(matches!(variant, '8' | '9' | 'a' | 'b'));
    }

    #[test]
    fn uuids_are_canonical_and_distinct() {
        let ids = IdGenerator::detect();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let id = ids.uuid().expect("strong randomness available in tests");
            assert_canonical_v4(&id);
            assert!(seen.insert(id), "uuid collision");
        }
    }

    #[test]
    fn uuid_fails_loudly_without_a_strong_source() {
        let ids = IdGenerator::without_crypto();
        assert_eq!(
            ids.uuid(),
            Err(InfrastructureError::RandomnessUnavailable)
        );
    }

    #[test]
    fn short_id_of_length_zero_is_empty() {
        let ids = IdGenerator::detect();
        assert_eq!(ids.short_id(0), "");
    }

    #[test]
    fn short_ids_use_only_the_alphanumeric_alphabet() {
        let ids = IdGenerator::detect();
        for len in [1, 8, BATTLE_TOKEN_LEN, 64] {
            let token = ids.short_id(len);
            assert_eq!(token.len(), len);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn short_ids_still_work_on_the_fallback_source() {
        let ids = IdGenerator::without_crypto();
        let token = ids.short_id(16);
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
