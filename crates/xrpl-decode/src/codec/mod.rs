//! Binary decoding for XRPL serialized objects.
//!
//! Field headers, variable-length prefixes, scalar values and the object
//! loop that ties them together.

pub mod header;
pub mod object;
pub mod primitives;
pub mod value;
pub mod vl;

pub use header::decode_field_header;
pub use object::{
    decode_fields, decode_to_text, decode_to_text_with_options, DecodeOptions, Decoder,
};
pub use primitives::Reader;
pub use value::{decode_account, decode_amount, decode_currency, decode_value};
pub use vl::{read_vl_length, VlScheme};
