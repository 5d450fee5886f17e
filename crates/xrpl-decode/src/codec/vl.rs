//! Variable-length prefixes for blob and vector fields.

use crate::codec::primitives::Reader;
use crate::error::DecodeError;

/// Threshold rules for the variable-length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VlScheme {
    /// Rules used by the original inspection tool:
    ///
    /// ```text
    /// L <= 129    1 byte   length = L
    /// otherwise   2 bytes  length = 193 + (L - 193) * 256 + L2
    /// ```
    ///
    /// Its 3-byte tier starts above 12480, which a single byte never reaches.
    /// First bytes 130..=192 produce a negative length and are rejected.
    #[default]
    Legacy,
    /// Rules from the ledger's binary format:
    ///
    /// ```text
    /// L <= 192    1 byte   length = L
    /// L <= 240    2 bytes  length = 193 + (L - 193) * 256 + L2
    /// L <= 254    3 bytes  length = 12481 + (L - 241) * 65536 + L2 * 256 + L3
    /// ```
    Canonical,
}

impl VlScheme {
    /// Returns the prefix width for a first length byte, or `None` if the
    /// byte cannot start a prefix.
    pub fn prefix_width(self, first: u8) -> Option<usize> {
        match self {
            VlScheme::Legacy => Some(if first <= 129 { 1 } else { 2 }),
            VlScheme::Canonical => match first {
                0..=192 => Some(1),
                193..=240 => Some(2),
                241..=254 => Some(3),
                255 => None,
            },
        }
    }

    /// Computes the length encoded by a complete prefix.
    ///
    /// `prefix` must be exactly `prefix_width(prefix[0])` bytes long.
    pub fn length(self, prefix: &[u8]) -> i64 {
        let l = |i: usize| prefix[i] as i64;
        match prefix.len() {
            1 => l(0),
            2 => 193 + (l(0) - 193) * 256 + l(1),
            _ => 12481 + (l(0) - 241) * 65536 + l(1) * 256 + l(2),
        }
    }
}

/// Reads a variable-length prefix and returns the payload length.
///
/// The payload itself is not checked here; callers `require` it.
pub fn read_vl_length(reader: &mut Reader<'_>, scheme: VlScheme) -> Result<usize, DecodeError> {
    let offset = reader.position();
    let first = reader.peek_byte()?;
    let width = scheme
        .prefix_width(first)
        .ok_or(DecodeError::InvalidLength {
            length: first as i64,
            offset,
        })?;
    let prefix = reader.read_bytes(width)?;
    let length = scheme.length(prefix);
    usize::try_from(length).map_err(|_| DecodeError::InvalidLength {
        length,
        offset: reader.position(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(data: &[u8], scheme: VlScheme) -> (Result<usize, DecodeError>, usize) {
        let mut reader = Reader::new(data);
        let result = read_vl_length(&mut reader, scheme);
        (result, reader.position())
    }

    #[test]
    fn test_legacy_single_byte_boundary() {
        assert_eq!(VlScheme::Legacy.prefix_width(129), Some(1));
        assert_eq!(read(&[129], VlScheme::Legacy), (Ok(129), 1));
        assert_eq!(read(&[0], VlScheme::Legacy), (Ok(0), 1));
    }

    #[test]
    fn test_legacy_continuation_engaged_at_130() {
        assert_eq!(VlScheme::Legacy.prefix_width(130), Some(2));
        // 193 + (130 - 193) * 256 + 0 is negative; both prefix bytes are consumed first.
        let (result, pos) = read(&[130, 0], VlScheme::Legacy);
        assert_eq!(pos, 2);
        assert_eq!(
            result,
            Err(DecodeError::InvalidLength { length: 193 - 63 * 256, offset: 2 })
        );
    }

    #[test]
    fn test_legacy_two_byte_lengths() {
        assert_eq!(read(&[193, 0], VlScheme::Legacy), (Ok(193), 2));
        assert_eq!(read(&[194, 5], VlScheme::Legacy), (Ok(193 + 256 + 5), 2));
        assert_eq!(read(&[255, 255], VlScheme::Legacy), (Ok(193 + 62 * 256 + 255), 2));
    }

    #[test]
    fn test_legacy_truncated_prefix() {
        let (result, pos) = read(&[200], VlScheme::Legacy);
        assert_eq!(result, Err(DecodeError::ShortInput { offset: 0, needed: 2 }));
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_canonical_tiers() {
        assert_eq!(read(&[192], VlScheme::Canonical), (Ok(192), 1));
        assert_eq!(read(&[193, 0], VlScheme::Canonical), (Ok(193), 2));
        assert_eq!(read(&[240, 255], VlScheme::Canonical), (Ok(12480), 2));
        assert_eq!(read(&[241, 0, 0], VlScheme::Canonical), (Ok(12481), 3));
        assert_eq!(read(&[254, 212, 23], VlScheme::Canonical), (Ok(918744), 3));
    }

    #[test]
    fn test_canonical_rejects_255() {
        let (result, pos) = read(&[255, 0, 0], VlScheme::Canonical);
        assert_eq!(result, Err(DecodeError::InvalidLength { length: 255, offset: 0 }));
        assert_eq!(pos, 0);
    }
}
