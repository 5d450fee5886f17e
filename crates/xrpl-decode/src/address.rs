//! Checksummed base58 encoding of account identifiers.
//!
//! The checksum is the first four bytes of a double hash over
//! `version || payload`. The hash is supplied by the caller through
//! [`ChecksumHash`]; [`Sha256`] is the standard choice.

use sha2::Digest;

use crate::error::AddressError;
use crate::limits::ACCOUNT_ID_LEN;

/// Version byte for classic account addresses.
pub const ACCOUNT_VERSION: u8 = 0;

/// Number of checksum bytes appended before base58 encoding.
const CHECKSUM_LEN: usize = 4;

/// Hash used to compute the address checksum.
pub trait ChecksumHash {
    fn digest(&self, data: &[u8]) -> [u8; 32];
}

/// SHA-256 checksum hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl ChecksumHash for Sha256 {
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        let hash = sha2::Sha256::digest(data);
        let mut out = [0u8; 32];
        out.copy_from_slice(&hash);
        out
    }
}

impl<F> ChecksumHash for F
where
    F: Fn(&[u8]) -> [u8; 32],
{
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        self(data)
    }
}

/// Base58 alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Bitcoin ordering. Account addresses get their first character
    /// overwritten with `r`, matching older inspection tools.
    #[default]
    Bitcoin,
    /// Ledger ordering, where version 0 already yields a leading `r`.
    Ripple,
}

impl Alphabet {
    fn base58(self) -> &'static bs58::Alphabet {
        match self {
            Alphabet::Bitcoin => bs58::Alphabet::BITCOIN,
            Alphabet::Ripple => bs58::Alphabet::RIPPLE,
        }
    }
}

/// Encodes account identifiers as checksummed base58 text.
#[derive(Debug, Clone, Default)]
pub struct AddressCodec<H = Sha256> {
    hash: H,
    alphabet: Alphabet,
}

impl AddressCodec<Sha256> {
    /// Creates a codec using SHA-256 and the Bitcoin alphabet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: ChecksumHash> AddressCodec<H> {
    /// Creates a codec with a caller-supplied hash.
    pub fn with_hash(hash: H) -> Self {
        Self {
            hash,
            alphabet: Alphabet::default(),
        }
    }

    /// Sets the base58 alphabet.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Encodes `version || payload || checksum` in base58.
    ///
    /// The payload must be an account id (20 bytes).
    pub fn encode(&self, version: u8, payload: &[u8]) -> Result<String, AddressError> {
        if payload.len() != ACCOUNT_ID_LEN {
            return Err(AddressError::InvalidPayloadLength {
                len: payload.len(),
                expected: ACCOUNT_ID_LEN,
            });
        }

        let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
        data.push(version);
        data.extend_from_slice(payload);
        let checksum = self.hash.digest(&self.hash.digest(&data));
        data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

        Ok(bs58::encode(data)
            .with_alphabet(self.alphabet.base58())
            .into_string())
    }

    /// Encodes an account id, forcing the first character to `r`.
    pub fn encode_account(&self, payload: &[u8]) -> Result<String, AddressError> {
        let encoded = self.encode(ACCOUNT_VERSION, payload)?;
        let mut chars = encoded.chars();
        if chars.next().is_none() {
            return Err(AddressError::EmptyOutput);
        }
        let mut address = String::with_capacity(encoded.len());
        address.push('r');
        address.push_str(chars.as_str());
        Ok(address)
    }
}
