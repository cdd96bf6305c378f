//! Password hashing and symmetric encryption
//!
//! Hashing delegates to bcrypt; encryption to the RustCrypto `cbc` (PKCS#7
//! padded) and `aes-gcm` implementations.
//!
//! Every decryption failure after the key and IV checks surfaces as the same
//! [`SupportError::Decryption`] value, whether padding, authentication or
//! UTF-8 decoding failed.

use aes::{Aes128, Aes256};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::{engine::general_purpose, Engine as _};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::warn;

use crate::config::SupportConfig;
use crate::error::{Result, SupportError};

const BLOCK_SIZE: usize = 16;

/// Hash `value` with bcrypt using `config.hash_rounds` as the cost factor
///
/// Runs on the blocking thread pool, so a Tokio runtime must be active.
pub async fn hash(value: &str, config: &SupportConfig) -> Result<String> {
    let value = value.to_owned();
    let cost = config.hash_rounds;

    tokio::task::spawn_blocking(move || bcrypt::hash(value, cost))
        .await
        .map_err(|e| SupportError::Hashing(e.to_string()))?
        .map_err(SupportError::from)
}

/// Check `value` against a bcrypt hash produced by [`hash`]
pub async fn verify_hash(value: &str, hashed: &str) -> Result<bool> {
    let value = value.to_owned();
    let hashed = hashed.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::verify(value, &hashed))
        .await
        .map_err(|e| SupportError::Hashing(e.to_string()))?
        .map_err(SupportError::from)
}

/// Supported symmetric ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CipherAlgorithm {
    /// AES-128 in CBC mode with PKCS#7 padding
    #[default]
    Aes128Cbc,
    /// AES-256 in CBC mode with PKCS#7 padding
    Aes256Cbc,
    /// AES-256 in GCM mode (authenticated)
    Aes256Gcm,
}

impl CipherAlgorithm {
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128Cbc => 16,
            Self::Aes256Cbc | Self::Aes256Gcm => 32,
        }
    }

    pub const fn iv_len(self) -> usize {
        match self {
            Self::Aes128Cbc | Self::Aes256Cbc => BLOCK_SIZE,
            Self::Aes256Gcm => 12,
        }
    }
}

/// Where the initialisation vector comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IvSource {
    /// Fresh bytes from the OS random source
    #[default]
    Random,
    /// Caller-supplied IV; must be exactly [`CipherAlgorithm::iv_len`] bytes
    Explicit(Vec<u8>),
    /// Leading bytes of the key.
    ///
    /// Reusing the key as IV makes equal plaintexts encrypt identically and is
    /// only here to read or produce ciphertext for systems that already do it.
    KeyDerived,
}

/// Ciphertext together with the parameters needed to decrypt it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encrypted {
    pub algorithm: CipherAlgorithm,
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl Encrypted {
    /// Base64 of `iv || ciphertext`
    pub fn to_base64(&self) -> String {
        let mut packed = Vec::with_capacity(self.iv.len() + self.ciphertext.len());
        packed.extend_from_slice(&self.iv);
        packed.extend_from_slice(&self.ciphertext);
        general_purpose::STANDARD.encode(packed)
    }

    /// Inverse of [`Self::to_base64`]
    pub fn from_base64(algorithm: CipherAlgorithm, data: &str) -> Result<Self> {
        let mut packed = general_purpose::STANDARD.decode(data)?;
        let iv_len = algorithm.iv_len();
        if packed.len() <= iv_len {
            return Err(SupportError::Decryption("payload shorter than IV".to_string()));
        }

        let ciphertext = packed.split_off(iv_len);
        Ok(Self {
            algorithm,
            iv: packed,
            ciphertext,
        })
    }
}

/// Encrypt UTF-8 `plain_text` with a key given as UTF-8 text
///
/// The key's byte length must match the algorithm (16 bytes for AES-128,
/// 32 for AES-256).
///
/// # Example
///
/// ```rust
/// use support_kit::helpers::{decrypt, encrypt, CipherAlgorithm, IvSource};
///
/// let key = "0123456789abcdef";
/// let sealed = encrypt("hello", key, CipherAlgorithm::Aes128Cbc, IvSource::Random)?;
/// assert_eq!(decrypt(&sealed, key)?, "hello");
/// # Ok::<(), support_kit::SupportError>(())
/// ```
pub fn encrypt(
    plain_text: &str,
    key: &str,
    algorithm: CipherAlgorithm,
    iv: IvSource,
) -> Result<Encrypted> {
    let key = checked_key(key, algorithm)?;
    let iv = resolve_iv(iv, key, algorithm)?;
    let plain = plain_text.as_bytes();

    let ciphertext = match algorithm {
        CipherAlgorithm::Aes128Cbc => cbc::Encryptor::<Aes128>::new_from_slices(key, &iv)
            .map_err(invalid_key(algorithm, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
        CipherAlgorithm::Aes256Cbc => cbc::Encryptor::<Aes256>::new_from_slices(key, &iv)
            .map_err(invalid_key(algorithm, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
        CipherAlgorithm::Aes256Gcm => {
            let cipher = Aes256Gcm::new_from_slice(key).map_err(invalid_key(algorithm, key))?;
            cipher
                .encrypt(Nonce::from_slice(&iv), plain)
                .map_err(|e| SupportError::Encryption(e.to_string()))?
        }
    };

    Ok(Encrypted {
        algorithm,
        iv,
        ciphertext,
    })
}

/// Decrypt the output of [`encrypt`] back into UTF-8 text
pub fn decrypt(encrypted: &Encrypted, key: &str) -> Result<String> {
    let algorithm = encrypted.algorithm;
    let key = checked_key(key, algorithm)?;
    if encrypted.iv.len() != algorithm.iv_len() {
        return Err(SupportError::InvalidIv {
            expected: algorithm.iv_len(),
            actual: encrypted.iv.len(),
        });
    }

    let iv = encrypted.iv.as_slice();
    let ciphertext = encrypted.ciphertext.as_slice();
    let plain = match algorithm {
        CipherAlgorithm::Aes128Cbc => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(invalid_key(algorithm, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| decryption_failed())?,
        CipherAlgorithm::Aes256Cbc => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(invalid_key(algorithm, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| decryption_failed())?,
        CipherAlgorithm::Aes256Gcm => Aes256Gcm::new_from_slice(key)
            .map_err(invalid_key(algorithm, key))?
            .decrypt(Nonce::from_slice(iv), ciphertext)
            .map_err(|_| decryption_failed())?,
    };

    String::from_utf8(plain).map_err(|_| decryption_failed())
}

// Single opaque value so callers cannot distinguish padding from decoding failures
fn decryption_failed() -> SupportError {
    SupportError::Decryption("unable to decrypt payload".to_string())
}

fn checked_key(key: &str, algorithm: CipherAlgorithm) -> Result<&[u8]> {
    let bytes = key.as_bytes();
    if bytes.len() == algorithm.key_len() {
        Ok(bytes)
    } else {
        Err(SupportError::InvalidKey {
            expected: algorithm.key_len(),
            actual: bytes.len(),
        })
    }
}

fn invalid_key<E>(algorithm: CipherAlgorithm, key: &[u8]) -> impl FnOnce(E) -> SupportError {
    let actual = key.len();
    move |_| SupportError::InvalidKey {
        expected: algorithm.key_len(),
        actual,
    }
}

fn resolve_iv(source: IvSource, key: &[u8], algorithm: CipherAlgorithm) -> Result<Vec<u8>> {
    let expected = algorithm.iv_len();
    match source {
        IvSource::Random => {
            let mut iv = vec![0u8; expected];
            OsRng.fill_bytes(&mut iv);
            Ok(iv)
        }
        IvSource::Explicit(iv) if iv.len() == expected => Ok(iv),
        IvSource::Explicit(iv) => Err(SupportError::InvalidIv {
            expected,
            actual: iv.len(),
        }),
        IvSource::KeyDerived => {
            warn!(?algorithm, "encrypting with a key-derived IV; ciphertext is deterministic");
            Ok(key[..expected].to_vec())
        }
    }
}
