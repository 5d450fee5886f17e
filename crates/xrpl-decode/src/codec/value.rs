//! Scalar value decoding for XRPL binary format.
//!
//! Integers, hashes, variable-length blobs, account ids and amounts.
//! Objects and arrays are structural and handled by the object decoder.

use tracing::debug;

use crate::address::{AddressCodec, ChecksumHash};
use crate::codec::primitives::Reader;
use crate::codec::vl::{read_vl_length, VlScheme};
use crate::error::DecodeError;
use crate::limits::{
    ACCOUNT_ID_LEN, CURRENCY_CODE_LEN, EXPONENT_BIAS, ISSUED_AMOUNT_LEN, NATIVE_AMOUNT_LEN,
};
use crate::model::{AccountId, Amount, Currency, FieldValue, TypeCode};

/// Set on the first amount byte for issued currencies.
const ISSUED_BIT: u8 = 0x80;
/// Set on the first amount byte for non-negative amounts.
const POSITIVE_BIT: u8 = 0x40;
/// Exponent bits of the first two issued-amount bytes, big-endian.
const EXPONENT_MASK: u16 = 0b0011_1111_1100_0000;
/// Magnitude bits of a native amount.
const DROPS_MASK: u64 = 0x3FFF_FFFF_FFFF_FFFF;

/// Decodes a scalar value of the given type.
pub fn decode_value<H: ChecksumHash>(
    reader: &mut Reader<'_>,
    type_code: TypeCode,
    vl_scheme: VlScheme,
    addresses: &AddressCodec<H>,
) -> Result<FieldValue, DecodeError> {
    match type_code {
        TypeCode::UInt8 => Ok(FieldValue::UInt8(reader.read_byte()?)),
        TypeCode::UInt16 => Ok(FieldValue::UInt16(reader.read_u16()?)),
        TypeCode::UInt32 => Ok(FieldValue::UInt32(reader.read_u32()?)),
        TypeCode::UInt64 => Ok(FieldValue::UInt64(reader.read_u64()?)),
        TypeCode::Hash128 => Ok(FieldValue::Hash128(reader.read_array()?)),
        TypeCode::Hash160 => Ok(FieldValue::Hash160(reader.read_array()?)),
        TypeCode::Hash256 => Ok(FieldValue::Hash256(reader.read_array()?)),
        TypeCode::Blob => Ok(FieldValue::Blob(decode_vl_bytes(reader, vl_scheme)?)),
        TypeCode::Vector256 => Ok(FieldValue::Vector256(decode_vl_bytes(reader, vl_scheme)?)),
        TypeCode::AccountId => Ok(FieldValue::AccountId(decode_account(reader, addresses)?)),
        TypeCode::Amount => Ok(FieldValue::Amount(decode_amount(reader, addresses)?)),
        TypeCode::Object | TypeCode::Array | TypeCode::PathSet => {
            Err(DecodeError::UnsupportedType {
                type_code: type_code as u8,
                name: type_code.name(),
                offset: reader.position(),
            })
        }
    }
}

fn decode_vl_bytes(reader: &mut Reader<'_>, scheme: VlScheme) -> Result<Vec<u8>, DecodeError> {
    let len = read_vl_length(reader, scheme)?;
    Ok(reader.read_bytes(len)?.to_vec())
}

/// Decodes a length-prefixed account id (1 length byte + 20 bytes).
///
/// The length byte is not validated; the payload is always 20 bytes.
pub fn decode_account<H: ChecksumHash>(
    reader: &mut Reader<'_>,
    addresses: &AddressCodec<H>,
) -> Result<AccountId, DecodeError> {
    let offset = reader.position();
    reader.require(1 + ACCOUNT_ID_LEN)?;
    let declared = reader.read_byte()?;
    if declared as usize != ACCOUNT_ID_LEN {
        debug!(offset, declared, "account length byte is not 20");
    }
    let bytes: [u8; ACCOUNT_ID_LEN] = reader.read_array()?;
    encode_account(bytes, offset, addresses)
}

fn encode_account<H: ChecksumHash>(
    bytes: [u8; ACCOUNT_ID_LEN],
    offset: usize,
    addresses: &AddressCodec<H>,
) -> Result<AccountId, DecodeError> {
    let address = addresses
        .encode_account(&bytes)
        .map_err(|source| DecodeError::EncodingFailure { offset, source })?;
    Ok(AccountId { bytes, address })
}

/// Decodes an amount: 8 bytes for drops, 48 bytes for issued currency.
pub fn decode_amount<H: ChecksumHash>(
    reader: &mut Reader<'_>,
    addresses: &AddressCodec<H>,
) -> Result<Amount, DecodeError> {
    let offset = reader.position();
    let first = reader.peek_byte()?;
    let negative = first & POSITIVE_BIT == 0;

    if first & ISSUED_BIT == 0 {
        let bytes: [u8; NATIVE_AMOUNT_LEN] = reader.read_array()?;
        let magnitude = u64::from_be_bytes(bytes) & DROPS_MASK;
        return Ok(Amount::Drops { negative, magnitude });
    }

    let bytes: [u8; ISSUED_AMOUNT_LEN] = reader.read_array()?;

    let raw_exponent = (u16::from_be_bytes([bytes[0], bytes[1]]) & EXPONENT_MASK) >> 6;
    let exponent = raw_exponent as i32 - EXPONENT_BIAS;

    let mantissa = bytes[2..8]
        .iter()
        .fold((bytes[1] & 0x3F) as u64, |acc, &b| (acc << 8) | b as u64);

    let mut code = [0u8; CURRENCY_CODE_LEN];
    code.copy_from_slice(&bytes[8..28]);
    let currency = decode_currency(code);

    let mut issuer = [0u8; ACCOUNT_ID_LEN];
    issuer.copy_from_slice(&bytes[28..ISSUED_AMOUNT_LEN]);
    let issuer = encode_account(issuer, offset + 28, addresses)?;

    Ok(Amount::Issued {
        negative,
        mantissa,
        exponent,
        currency,
        issuer,
    })
}

/// Classifies a 20-byte currency code.
///
/// Standard codes are 12 zero bytes, three ASCII alphanumerics, 5 zero bytes.
pub fn decode_currency(raw: [u8; CURRENCY_CODE_LEN]) -> Currency {
    let standard = raw[..12].iter().all(|&b| b == 0)
        && raw[12..15].iter().all(|b| b.is_ascii_alphanumeric())
        && raw[15..].iter().all(|&b| b == 0);

    if standard {
        Currency::Standard([raw[12], raw[13], raw[14]])
    } else {
        Currency::NonStandard(raw)
    }
}
