//! Decoder for the XRP Ledger canonical binary format.
//!
//! Turns a serialized ledger object (transaction, ledger entry, metadata)
//! into a tree of named fields, or into an indented text dump for
//! inspection.
//!
//! # Quick Start
//!
//! ```rust
//! use xrpl_decode::decode_to_text;
//!
//! // Sequence (UInt32, type 2, field 4) = 7
//! let text = decode_to_text(&[0x24, 0x00, 0x00, 0x00, 0x07]).unwrap();
//! assert_eq!(text, "{\n\tSequence: 7\n}\n");
//! ```
//!
//! For structured access use [`decode_fields`]:
//!
//! ```rust
//! use xrpl_decode::{decode_fields, FieldValue};
//!
//! let fields = decode_fields(&[0x24, 0x00, 0x00, 0x00, 0x07]).unwrap();
//! assert_eq!(fields[0].name, Some("Sequence"));
//! assert_eq!(fields[0].value, FieldValue::UInt32(7));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Field ids, headers, values and the field name table
//! - [`codec`]: Byte cursor, header and value decoders, the object loop
//! - [`address`]: Checksummed base58 account addresses
//! - [`render`]: Text output
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Every read is bounds checked; short input is an error, never a panic
//! - Container nesting and output size are bounded
//! - The first error aborts the decode and reports its input offset

pub mod address;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod render;

// Re-export commonly used types at crate root
pub use address::{AddressCodec, Alphabet, ChecksumHash, Sha256};
pub use codec::{
    decode_fields, decode_to_text, decode_to_text_with_options, DecodeOptions, Decoder, VlScheme,
};
pub use error::{AddressError, DecodeError, ErrorCode};
pub use model::{
    AccountId, Amount, ContainerKind, Currency, Field, FieldHeader, FieldId, FieldValue, TypeCode,
};
pub use render::{render_text, RenderOptions};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
