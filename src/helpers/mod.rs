//! Free-standing helper functions
//!
//! Dot-path access, URL building, random strings, truthiness and the
//! crypto-backed hash/encrypt pair. Anything that used to read process-wide
//! settings takes a [`SupportConfig`](crate::config::SupportConfig) instead.

pub mod conditional;
pub mod crypto;
pub mod object;
pub mod random;
pub mod url;

pub use conditional::{truthy, when, when_has, Blank, Truthy};
pub use crypto::{decrypt, encrypt, hash, verify_hash, CipherAlgorithm, Encrypted, IvSource};
pub use object::{except, get, only, value_retriever};
pub use random::random;
pub use url::{mongo_url, query_string, url};

use crate::config::SupportConfig;

/// Whether `config` describes a production deployment
pub const fn is_production(config: &SupportConfig) -> bool {
    config.environment.is_production()
}
