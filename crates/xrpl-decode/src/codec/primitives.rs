//! Byte cursor for decoding XRPL binary data.
//!
//! Every read is bounds checked against the remaining input; the position
//! only moves forward.

use crate::error::DecodeError;

/// Reader for decoding binary data.
///
/// Wraps a byte slice and tracks the read offset. Reads fail with
/// [`DecodeError::ShortInput`] instead of running past the end.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current offset into the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Fails unless at least `n` bytes remain.
    #[inline]
    pub fn require(&self, n: usize) -> Result<(), DecodeError> {
        if self.remaining_len() < n {
            return Err(DecodeError::ShortInput {
                offset: self.pos,
                needed: n,
            });
        }
        Ok(())
    }

    /// Moves past `n` bytes. Callers must `require` first.
    #[inline]
    fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining_len());
        self.pos += n;
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek_byte(&self) -> Result<u8, DecodeError> {
        self.require(1)?;
        Ok(self.data[self.pos])
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = self.peek_byte()?;
        self.advance(1);
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.require(n)?;
        let bytes = &self.data[self.pos..self.pos + n];
        self.advance(n);
        Ok(bytes)
    }

    /// Reads a fixed-size byte array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads a big-endian u16.
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian u32.
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Reads a big-endian u64.
    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }
}
