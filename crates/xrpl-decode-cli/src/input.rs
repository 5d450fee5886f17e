use anyhow::{bail, Result};

/// Converts a case-insensitive hex string to bytes.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    match hex::decode(text.trim()) {
        Ok(bytes) => Ok(bytes),
        Err(hex::FromHexError::OddLength) => bail!("hex length must be even"),
        Err(hex::FromHexError::InvalidHexCharacter { c, index }) => {
            bail!("non-hex character {:?} at position {}", c, index)
        }
        Err(e) => bail!("invalid hex input: {}", e),
    }
}
