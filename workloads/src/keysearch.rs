use std::hash::Hasher;

use log::debug;
use twox_hash::XxHash64;

use crate::{
    Result,
    config::{KeyScheme, KeySearchConfig},
    error::at_least,
    timer::{Timed, measure},
};

/// The string whose hash the default searches look for.
pub const SECRET: &str = "SECRET_KEY_12345";

const STRING_HASH_SEED: u64 = 0;

/// Deterministic 64-bit hash of a string's UTF-8 bytes (XxHash64, seed 0).
///
/// Unlike `std`'s `DefaultHasher` this is stable across processes and platforms, so a search
/// target is the same on every run.
pub fn string_hash(s: &str) -> u64 {
    let mut hasher = XxHash64::with_seed(STRING_HASH_SEED);
    hasher.write(s.as_bytes());
    hasher.finish()
}

/// Maps a candidate key into the space its target lives in.
pub trait KeyHasher {
    /// Should hash `key`, the result must be below `modulus()`.
    fn hash_key(&self, key: u64) -> u64;

    /// Should return the size of the hash's output range.
    fn modulus(&self) -> u64;

    /// The hash value a search for `secret` has to hit.
    fn target(&self, secret: &str) -> u64 {
        string_hash(secret) % self.modulus()
    }
}

/// `(key * multiplier) mod modulus`.
#[derive(Debug, Clone, Copy)]
pub struct Multiplicative {
    multiplier: u64,
    modulus: u64,
}

impl Multiplicative {
    pub fn new(multiplier: u64, modulus: u64) -> Result<Self> {
        at_least("hash modulus", modulus, 1)?;
        Ok(Self {
            multiplier,
            modulus,
        })
    }
}

impl KeyHasher for Multiplicative {
    fn hash_key(&self, key: u64) -> u64 {
        (key as u128 * self.multiplier as u128 % self.modulus as u128) as u64
    }

    fn modulus(&self) -> u64 {
        self.modulus
    }
}

/// Hashes the string `"{prefix}{key}"` and reduces it modulo the keyspace.
#[derive(Debug, Clone, Copy)]
pub struct Prefixed {
    prefix: &'static str,
    keyspace: u64,
}

impl Prefixed {
    pub fn new(prefix: &'static str, keyspace: u64) -> Result<Self> {
        at_least("keyspace", keyspace, 1)?;
        Ok(Self { prefix, keyspace })
    }
}

impl KeyHasher for Prefixed {
    fn hash_key(&self, key: u64) -> u64 {
        string_hash(&format!("{}{key}", self.prefix)) % self.keyspace
    }

    fn modulus(&self) -> u64 {
        self.keyspace
    }
}

/// Outcome of scanning a keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    pub keys_tested: u64,
    /// Every key whose hash hit the target, in ascending order.
    pub matches: Vec<u64>,
}

/// Tests every key in `[0, keyspace)` against `target`.
///
/// The scan never stops early, a match is recorded and the search moves on so the elapsed time
/// always covers the whole keyspace.
pub fn search<H: KeyHasher>(keyspace: u64, target: u64, hasher: &H) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();

    for key in 0..keyspace {
        if hasher.hash_key(key) == target {
            outcome.matches.push(key);
        }
        outcome.keys_tested += 1;
    }

    outcome
}

fn timed_search<H: KeyHasher>(cfg: &KeySearchConfig, hasher: H) -> Timed<SearchOutcome> {
    let target = hasher.target(cfg.secret);
    debug!(keyspace = cfg.keyspace, target = target; "starting key search");

    measure(|| search(cfg.keyspace, target, &hasher))
}

/// Runs the key search workload with the configured hash scheme.
pub fn run(cfg: &KeySearchConfig) -> Result<Timed<SearchOutcome>> {
    at_least("keyspace", cfg.keyspace, 1)?;

    let timed = match cfg.scheme {
        KeyScheme::Multiplicative {
            multiplier,
            modulus,
        } => timed_search(cfg, Multiplicative::new(multiplier, modulus)?),
        KeyScheme::Prefixed { prefix } => timed_search(cfg, Prefixed::new(prefix, cfg.keyspace)?),
    };

    Ok(timed)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Recording {
        visited: RefCell<Vec<u64>>,
    }

    impl KeyHasher for Recording {
        fn hash_key(&self, key: u64) -> u64 {
            self.visited.borrow_mut().push(key);
            key
        }

        fn modulus(&self) -> u64 {
            u64::MAX
        }
    }

    #[test]
    fn every_key_is_visited_once() {
        let hasher = Recording {
            visited: RefCell::new(Vec::new()),
        };
        let outcome = search(1000, u64::MAX, &hasher);

        assert_eq!(outcome.keys_tested, 1000);
        assert!(outcome.matches.is_empty());
        assert_eq!(hasher.visited.into_inner(), (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn finds_the_unique_known_key() {
        // 999983 is prime, so the transform is a bijection on [0, 999983).
        let hasher = Multiplicative::new(31337, 999_983).unwrap();
        let known = 424_242;
        let target = hasher.hash_key(known);

        let outcome = search(999_983, target, &hasher);

        assert_eq!(outcome.matches, vec![known]);
        assert_eq!(outcome.keys_tested, 999_983);
    }

    #[test]
    fn multiplicative_wraps_past_the_modulus() {
        let hasher = Multiplicative::new(31337, 999_983).unwrap();
        assert_eq!(hasher.hash_key(999_983 + 7), hasher.hash_key(7));
    }

    #[test]
    fn string_hash_is_stable() {
        assert_eq!(string_hash(SECRET), string_hash("SECRET_KEY_12345"));
        assert_ne!(string_hash("KEY_1"), string_hash("KEY_2"));
    }

    #[test]
    fn prefixed_hash_stays_in_keyspace() {
        let hasher = Prefixed::new("KEY_", 1000).unwrap();
        assert!((0..500).all(|k| hasher.hash_key(k) < 1000));
        assert!(hasher.target(SECRET) < 1000);
    }

    #[test]
    fn prefixed_search_finds_planted_key() {
        let hasher = Prefixed::new("KEY_", 5000).unwrap();
        let target = hasher.hash_key(1234);

        let outcome = search(5000, target, &hasher);

        assert!(outcome.matches.contains(&1234));
        assert_eq!(outcome.keys_tested, 5000);
    }

    #[test]
    fn run_scans_the_whole_keyspace() {
        let cfg = KeySearchConfig {
            keyspace: 20_000,
            scheme: KeyScheme::Prefixed { prefix: "KEY_" },
            secret: SECRET,
        };
        assert_eq!(run(&cfg).unwrap().value.keys_tested, 20_000);
    }

    #[test]
    fn empty_keyspace_is_rejected() {
        let cfg = KeySearchConfig {
            keyspace: 0,
            scheme: KeyScheme::Multiplicative {
                multiplier: 31337,
                modulus: 999_983,
            },
            secret: SECRET,
        };
        assert!(run(&cfg).is_err());
    }
}
