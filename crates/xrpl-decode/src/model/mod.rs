//! Data model types for decoded XRPL objects.
//!
//! - Field headers and composite ids
//! - Decoded values (integers, hashes, blobs, accounts, amounts)
//! - Nested objects and arrays
//! - The field name table

pub mod field;
pub mod names;

pub use field::{
    format_hex, AccountId, Amount, ContainerKind, Currency, Field, FieldHeader, FieldId,
    FieldValue, TypeCode,
};
pub use names::{field_name, known_field_count};
