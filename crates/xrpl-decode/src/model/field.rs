//! Field and value types produced by the decoder.

use std::fmt;

use crate::model::names::field_name;

/// Wire type codes for serialized fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeCode {
    UInt16 = 1,
    UInt32 = 2,
    UInt64 = 3,
    Hash128 = 4,
    Hash256 = 5,
    Amount = 6,
    Blob = 7,
    AccountId = 8,
    Object = 14,
    Array = 15,
    UInt8 = 16,
    Hash160 = 17,
    PathSet = 18,
    Vector256 = 19,
}

impl TypeCode {
    /// Creates a TypeCode from its wire representation.
    pub fn from_u8(v: u8) -> Option<TypeCode> {
        match v {
            1 => Some(TypeCode::UInt16),
            2 => Some(TypeCode::UInt32),
            3 => Some(TypeCode::UInt64),
            4 => Some(TypeCode::Hash128),
            5 => Some(TypeCode::Hash256),
            6 => Some(TypeCode::Amount),
            7 => Some(TypeCode::Blob),
            8 => Some(TypeCode::AccountId),
            14 => Some(TypeCode::Object),
            15 => Some(TypeCode::Array),
            16 => Some(TypeCode::UInt8),
            17 => Some(TypeCode::Hash160),
            18 => Some(TypeCode::PathSet),
            19 => Some(TypeCode::Vector256),
            _ => None,
        }
    }

    /// Returns the protocol name of this type.
    pub fn name(self) -> &'static str {
        match self {
            TypeCode::UInt16 => "UInt16",
            TypeCode::UInt32 => "UInt32",
            TypeCode::UInt64 => "UInt64",
            TypeCode::Hash128 => "Hash128",
            TypeCode::Hash256 => "Hash256",
            TypeCode::Amount => "Amount",
            TypeCode::Blob => "Blob",
            TypeCode::AccountId => "AccountID",
            TypeCode::Object => "STObject",
            TypeCode::Array => "STArray",
            TypeCode::UInt8 => "UInt8",
            TypeCode::Hash160 => "Hash160",
            TypeCode::PathSet => "PathSet",
            TypeCode::Vector256 => "Vector256",
        }
    }
}

/// Composite field identifier: `(type_code << 16) + field_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl FieldId {
    /// Field code that marks the end of an object or array.
    pub const END_MARKER: u8 = 1;

    pub fn new(type_code: u8, field_code: u8) -> Self {
        FieldId(((type_code as u32) << 16) + field_code as u32)
    }

    pub fn type_code(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn field_code(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Returns the canonical label for this field, if known.
    pub fn name(self) -> Option<&'static str> {
        field_name(self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A decoded field header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHeader {
    pub type_code: u8,
    pub field_code: u8,
    /// Header width on the wire (1, 2 or 3 bytes).
    pub width: usize,
}

impl FieldHeader {
    pub fn id(&self) -> FieldId {
        FieldId::new(self.type_code, self.field_code)
    }

    /// True for an object or array end marker.
    pub fn is_end_marker(&self) -> bool {
        self.field_code == FieldId::END_MARKER
            && matches!(
                TypeCode::from_u8(self.type_code),
                Some(TypeCode::Object | TypeCode::Array)
            )
    }
}

/// Kind of an open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    pub fn open_char(self) -> char {
        match self {
            ContainerKind::Object => '{',
            ContainerKind::Array => '[',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            ContainerKind::Object => '}',
            ContainerKind::Array => ']',
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Object => f.write_str("object"),
            ContainerKind::Array => f.write_str("array"),
        }
    }
}

/// A 20-byte account identifier with its rendered address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountId {
    pub bytes: [u8; 20],
    pub address: String,
}

/// Currency code of an issued amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    /// Three printable alphanumeric ASCII characters (e.g. "USD").
    Standard([u8; 3]),
    /// Any other 20-byte code, rendered as hex.
    NonStandard([u8; 20]),
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Standard(code) => {
                for &c in code {
                    write!(f, "{}", c as char)?;
                }
                Ok(())
            }
            Currency::NonStandard(bytes) => f.write_str(&format_hex(bytes)),
        }
    }
}

/// A decoded amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    /// Native currency, in drops.
    Drops { negative: bool, magnitude: u64 },
    /// Issued currency: `mantissa * 10^exponent` of `currency` issued by `issuer`.
    Issued {
        negative: bool,
        mantissa: u64,
        exponent: i32,
        currency: Currency,
        issuer: AccountId,
    },
}

impl Amount {
    /// Renders the numeric part: `-1` for drops, `-1E-15` for issued amounts.
    pub fn value_text(&self) -> String {
        match self {
            Amount::Drops { negative, magnitude } => {
                format!("{}{}", if *negative { "-" } else { "" }, magnitude)
            }
            Amount::Issued {
                negative,
                mantissa,
                exponent,
                ..
            } => format!("{}{}E{}", if *negative { "-" } else { "" }, mantissa, exponent),
        }
    }
}

/// Decoded value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Hash128([u8; 16]),
    Hash160([u8; 20]),
    Hash256([u8; 32]),
    Blob(Vec<u8>),
    Vector256(Vec<u8>),
    AccountId(AccountId),
    Amount(Amount),
    /// Nested object; fields in wire order.
    Object(Vec<Field>),
    /// Array; each element is normally an object-typed wrapper field.
    Array(Vec<Field>),
}

/// A decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub name: Option<&'static str>,
    /// Offset of the field header in the input.
    pub offset: usize,
    pub value: FieldValue,
}

impl Field {
    pub fn type_code(&self) -> u8 {
        self.id.type_code()
    }

    pub fn field_code(&self) -> u8 {
        self.id.field_code()
    }

    /// Returns the child fields of an object or array.
    pub fn children(&self) -> Option<&[Field]> {
        match &self.value {
            FieldValue::Object(fields) | FieldValue::Array(fields) => Some(fields),
            _ => None,
        }
    }

    /// Finds a direct child by label.
    pub fn child(&self, name: &str) -> Option<&Field> {
        self.children()?.iter().find(|f| f.name == Some(name))
    }
}

/// Formats bytes as uppercase hex.
pub fn format_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_parts() {
        let id = FieldId::new(2, 4);
        assert_eq!(id.0, 0x20004);
        assert_eq!(id.type_code(), 2);
        assert_eq!(id.field_code(), 4);
        assert_eq!(id.to_string(), "0x20004");
        assert_eq!(id.name(), Some("Sequence"));
    }

    #[test]
    fn test_type_code_from_u8() {
        assert_eq!(TypeCode::from_u8(8), Some(TypeCode::AccountId));
        assert_eq!(TypeCode::from_u8(19), Some(TypeCode::Vector256));
        assert_eq!(TypeCode::from_u8(0), None);
        assert_eq!(TypeCode::from_u8(9), None);
        assert_eq!(TypeCode::from_u8(20), None);
    }

    #[test]
    fn test_end_marker() {
        let header = FieldHeader { type_code: 14, field_code: 1, width: 1 };
        assert!(header.is_end_marker());
        let header = FieldHeader { type_code: 15, field_code: 1, width: 1 };
        assert!(header.is_end_marker());
        let header = FieldHeader { type_code: 2, field_code: 1, width: 1 };
        assert!(!header.is_end_marker());
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[]), "");
        assert_eq!(format_hex(&[0x00, 0xAB, 0x0f, 0xff]), "00AB0FFF");
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Standard(*b"USD").to_string(), "USD");
        let mut raw = [0u8; 20];
        raw[0] = 0x01;
        assert_eq!(
            Currency::NonStandard(raw).to_string(),
            "0100000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_amount_value_text() {
        let drops = Amount::Drops { negative: true, magnitude: 25 };
        assert_eq!(drops.value_text(), "-25");
        let issued = Amount::Issued {
            negative: false,
            mantissa: 1_000_000_000_000_000,
            exponent: -15,
            currency: Currency::Standard(*b"USD"),
            issuer: AccountId { bytes: [0; 20], address: String::new() },
        };
        assert_eq!(issued.value_text(), "1000000000000000E-15");
    }
}
