//! Field header decoding.
//!
//! The first byte's nibbles select the header width:
//!
//! ```text
//! high  low   width  type_code      field_code
//! 0     0     3      byte[1]        byte[2]
//! 0     !=0   2      byte[1]        low nibble
//! !=0   0     2      high nibble    byte[1]
//! !=0   !=0   1      high nibble    low nibble
//! ```

use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::model::FieldHeader;

/// Decodes a field header, consuming 1 to 3 bytes.
///
/// A type code of zero is rejected regardless of header width.
pub fn decode_field_header(reader: &mut Reader<'_>) -> Result<FieldHeader, DecodeError> {
    let offset = reader.position();
    let first = reader.peek_byte()?;
    let high = first >> 4;
    let low = first & 0x0F;

    let header = match (high, low) {
        (0, 0) => {
            let bytes = reader.read_bytes(3)?;
            FieldHeader {
                type_code: bytes[1],
                field_code: bytes[2],
                width: 3,
            }
        }
        (0, _) => {
            let bytes = reader.read_bytes(2)?;
            FieldHeader {
                type_code: bytes[1],
                field_code: low,
                width: 2,
            }
        }
        (_, 0) => {
            let bytes = reader.read_bytes(2)?;
            FieldHeader {
                type_code: high,
                field_code: bytes[1],
                width: 2,
            }
        }
        _ => {
            reader.read_byte()?;
            FieldHeader {
                type_code: high,
                field_code: low,
                width: 1,
            }
        }
    };

    if header.type_code == 0 {
        return Err(DecodeError::InvalidTypeCode { offset });
    }
    Ok(header)
}
