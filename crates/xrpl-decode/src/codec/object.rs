//! Object decoding: the field loop that turns a serialized object into a
//! tree of fields.
//!
//! The input is the body of an implicit root object. Fields are read until
//! the input is exhausted. Object (type 14) and array (type 15) fields with
//! field code 1 close the innermost container; other object and array
//! fields open one.

use tracing::{debug, trace};

use crate::address::{AddressCodec, Alphabet, ChecksumHash, Sha256};
use crate::codec::header::decode_field_header;
use crate::codec::primitives::Reader;
use crate::codec::value::decode_value;
use crate::codec::vl::VlScheme;
use crate::error::DecodeError;
use crate::limits::{
    DEFAULT_OUTPUT_CAPACITY, MAX_NESTING_DEPTH, MAX_OUTPUT_LEN, MIN_OUTPUT_CAPACITY,
    OUTPUT_BYTES_PER_INPUT_BYTE,
};
use crate::model::{ContainerKind, Field, FieldHeader, FieldId, FieldValue, TypeCode};
use crate::render::{render_text, RenderOptions};

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Variable-length prefix rules for blobs and vectors.
    pub vl_scheme: VlScheme,
    /// Base58 alphabet for account addresses.
    pub alphabet: Alphabet,
    /// Initial size of the text buffer.
    pub initial_capacity: usize,
    /// Upper bound on rendered text.
    pub max_output_len: usize,
    /// Upper bound on container nesting.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            vl_scheme: VlScheme::default(),
            alphabet: Alphabet::default(),
            initial_capacity: DEFAULT_OUTPUT_CAPACITY,
            max_output_len: MAX_OUTPUT_LEN,
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Creates default options (legacy length prefixes, Bitcoin alphabet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options following the ledger's published encoding rules.
    pub fn canonical() -> Self {
        Self {
            vl_scheme: VlScheme::Canonical,
            alphabet: Alphabet::Ripple,
            ..Self::default()
        }
    }

    pub fn vl_scheme(mut self, vl_scheme: VlScheme) -> Self {
        self.vl_scheme = vl_scheme;
        self
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn max_output_len(mut self, max_output_len: usize) -> Self {
        self.max_output_len = max_output_len;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Output buffer settings for an input of `input_len` bytes.
    /// `initial_capacity` caps the first reservation.
    fn render_options(&self, input_len: usize) -> RenderOptions {
        let estimate = input_len
            .saturating_mul(OUTPUT_BYTES_PER_INPUT_BYTE)
            .max(MIN_OUTPUT_CAPACITY);
        RenderOptions {
            initial_capacity: estimate.min(self.initial_capacity),
            max_output_len: self.max_output_len,
        }
    }
}

/// Decodes serialized objects with a fixed set of options and address hash.
#[derive(Debug, Clone)]
pub struct Decoder<H = Sha256> {
    options: DecodeOptions,
    addresses: AddressCodec<H>,
}

impl Decoder<Sha256> {
    /// Creates a decoder with default options and SHA-256 checksums.
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self::with_hash(Sha256, options)
    }
}

impl Default for Decoder<Sha256> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ChecksumHash> Decoder<H> {
    /// Creates a decoder that checksums addresses with `hash`.
    pub fn with_hash(hash: H, options: DecodeOptions) -> Self {
        Self {
            options,
            addresses: AddressCodec::with_hash(hash).alphabet(options.alphabet),
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes the input into a tree of fields.
    pub fn decode_fields(&self, input: &[u8]) -> Result<Vec<Field>, DecodeError> {
        debug!(len = input.len(), "decoding object");
        let result = self.decode_loop(input);
        match &result {
            Ok(fields) => debug!(fields = fields.len(), "decoded object"),
            Err(e) => debug!(offset = e.offset(), error = %e, "decode failed"),
        }
        result
    }

    /// Decodes the input and renders it as text.
    pub fn decode_to_text(&self, input: &[u8]) -> Result<String, DecodeError> {
        let fields = self.decode_fields(input)?;
        render_text(&fields, &self.options.render_options(input.len()))
    }

    fn decode_loop(&self, input: &[u8]) -> Result<Vec<Field>, DecodeError> {
        let mut reader = Reader::new(input);
        let mut tree = ContainerStack::new(self.options.max_depth);

        while !reader.is_empty() {
            let offset = reader.position();
            let header = decode_field_header(&mut reader)?;
            let id = header.id();
            let type_code = TypeCode::from_u8(header.type_code).ok_or(
                DecodeError::UnknownTypeCode {
                    type_code: header.type_code,
                    offset,
                },
            )?;
            let name = id.name();
            trace!(
                offset,
                type_code = header.type_code,
                field_code = header.field_code,
                name = name.unwrap_or(""),
                "field"
            );

            match type_code {
                TypeCode::Object | TypeCode::Array => {
                    let kind = if type_code == TypeCode::Object {
                        ContainerKind::Object
                    } else {
                        ContainerKind::Array
                    };
                    if header.is_end_marker() {
                        tree.close(kind, offset)?;
                    } else {
                        tree.open(kind, &header, offset)?;
                    }
                }
                TypeCode::PathSet => {
                    return Err(DecodeError::UnsupportedType {
                        type_code: header.type_code,
                        name: type_code.name(),
                        offset,
                    });
                }
                _ => {
                    let value = decode_value(
                        &mut reader,
                        type_code,
                        self.options.vl_scheme,
                        &self.addresses,
                    )?;
                    tree.push(Field {
                        id,
                        name,
                        offset,
                        value,
                    });
                }
            }
        }

        tree.finish(reader.position())
    }
}

/// An open container awaiting its end marker.
#[derive(Debug)]
struct Frame {
    kind: ContainerKind,
    id: FieldId,
    offset: usize,
    fields: Vec<Field>,
}

/// Typed stack of open containers above the implicit root.
#[derive(Debug)]
struct ContainerStack {
    root: Vec<Field>,
    open: Vec<Frame>,
    max_depth: usize,
}

impl ContainerStack {
    fn new(max_depth: usize) -> Self {
        Self {
            root: Vec::new(),
            open: Vec::new(),
            max_depth,
        }
    }

    fn current(&mut self) -> &mut Vec<Field> {
        match self.open.last_mut() {
            Some(frame) => &mut frame.fields,
            None => &mut self.root,
        }
    }

    fn push(&mut self, field: Field) {
        self.current().push(field);
    }

    fn open(
        &mut self,
        kind: ContainerKind,
        header: &FieldHeader,
        offset: usize,
    ) -> Result<(), DecodeError> {
        if self.open.len() >= self.max_depth {
            return Err(DecodeError::NestingTooDeep {
                max: self.max_depth,
                offset,
            });
        }
        self.open.push(Frame {
            kind,
            id: header.id(),
            offset,
            fields: Vec::new(),
        });
        Ok(())
    }

    /// Closes the innermost container.
    ///
    /// Closing a kind with no open instance is unbalanced; closing a kind
    /// that is open but not innermost is a mismatch.
    fn close(&mut self, kind: ContainerKind, offset: usize) -> Result<(), DecodeError> {
        let innermost = match self.open.last() {
            Some(frame) => frame.kind,
            None => return Err(DecodeError::UnbalancedContainer { kind, offset }),
        };
        if innermost != kind {
            if self.open.iter().any(|frame| frame.kind == kind) {
                return Err(DecodeError::MismatchedContainer {
                    open: innermost,
                    found: kind,
                    offset,
                });
            }
            return Err(DecodeError::UnbalancedContainer { kind, offset });
        }

        let Some(frame) = self.open.pop() else {
            return Err(DecodeError::UnbalancedContainer { kind, offset });
        };
        let value = match frame.kind {
            ContainerKind::Object => FieldValue::Object(frame.fields),
            ContainerKind::Array => FieldValue::Array(frame.fields),
        };
        self.push(Field {
            id: frame.id,
            name: frame.id.name(),
            offset: frame.offset,
            value,
        });
        Ok(())
    }

    fn finish(self, offset: usize) -> Result<Vec<Field>, DecodeError> {
        if !self.open.is_empty() {
            return Err(DecodeError::UnclosedContainer {
                depth: self.open.len(),
                offset,
            });
        }
        Ok(self.root)
    }
}

/// Decodes the input into a tree of fields with default options.
pub fn decode_fields(input: &[u8]) -> Result<Vec<Field>, DecodeError> {
    Decoder::new().decode_fields(input)
}

/// Decodes the input and renders it as text with default options.
pub fn decode_to_text(input: &[u8]) -> Result<String, DecodeError> {
    Decoder::new().decode_to_text(input)
}

/// Decodes the input and renders it as text with the given options.
pub fn decode_to_text_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<String, DecodeError> {
    Decoder::with_options(options).decode_to_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ACCOUNT: &str = "r111111111111111111114oLvT2";

    fn account_field(header: u8) -> Vec<u8> {
        let mut data = vec![header, 0x14];
        data.extend_from_slice(&[0u8; 20]);
        data
    }

    #[test]
    fn test_single_uint32_field() {
        // Sequence = 7
        let text = decode_to_text(&[0x24, 0x00, 0x00, 0x00, 0x07]).unwrap();
        assert_eq!(text, "{\n\tSequence: 7\n}\n");
    }

    #[test]
    fn test_initial_reservation_scales_with_input() {
        let options = DecodeOptions::new();
        assert_eq!(options.render_options(5).initial_capacity, 64);
        assert_eq!(options.render_options(1000).initial_capacity, 8000);
        assert_eq!(
            options.render_options(10 * 1024 * 1024).initial_capacity,
            DEFAULT_OUTPUT_CAPACITY
        );

        let small = DecodeOptions::new().initial_capacity(16);
        assert_eq!(small.render_options(1000).initial_capacity, 16);

        let text = decode_to_text(&[0x24, 0x00, 0x00, 0x00, 0x07]).unwrap();
        assert!(text.capacity() < 1024);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_to_text(&[]).unwrap(), "{\n\n}\n");
        assert!(decode_fields(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_drops_amount_is_bare() {
        // Fee = 1 drop
        let text = decode_to_text(&[0x68, 0x40, 0, 0, 0, 0, 0, 0, 1]).unwrap();
        assert_eq!(text, "{\n\tFee: 1\n}\n");
    }

    #[test]
    fn test_zero_account() {
        let text = decode_to_text(&account_field(0x81)).unwrap();
        assert_eq!(text, format!("{{\n\tAccount: \"{}\"\n}}\n", ZERO_ACCOUNT));
    }

    #[test]
    fn test_type_code_zero_anywhere() {
        assert_eq!(
            decode_fields(&[0x00, 0x00, 0x01]),
            Err(DecodeError::InvalidTypeCode { offset: 0 })
        );
        assert_eq!(
            decode_fields(&[0x24, 0, 0, 0, 1, 0x03, 0x00]),
            Err(DecodeError::InvalidTypeCode { offset: 5 })
        );
    }

    #[test]
    fn test_unknown_type_code() {
        // type 9 does not exist
        assert_eq!(
            decode_fields(&[0x91]),
            Err(DecodeError::UnknownTypeCode { type_code: 9, offset: 0 })
        );
        // type 200 via a three-byte header
        assert_eq!(
            decode_fields(&[0x00, 200, 1]),
            Err(DecodeError::UnknownTypeCode { type_code: 200, offset: 0 })
        );
    }

    #[test]
    fn test_path_set_unsupported() {
        assert!(matches!(
            decode_fields(&[0x01, 0x12, 0x00]),
            Err(DecodeError::UnsupportedType { type_code: 18, offset: 0, .. })
        ));
    }

    #[test]
    fn test_lone_array_close() {
        assert_eq!(
            decode_fields(&[0xF1, 0x24, 0, 0, 0, 1]),
            Err(DecodeError::UnbalancedContainer { kind: ContainerKind::Array, offset: 0 })
        );
    }

    #[test]
    fn test_lone_object_close_after_field() {
        assert_eq!(
            decode_fields(&[0x24, 0, 0, 0, 1, 0xE1]),
            Err(DecodeError::UnbalancedContainer { kind: ContainerKind::Object, offset: 5 })
        );
    }

    #[test]
    fn test_mismatched_close() {
        // Memos: [ Memo: { ... ] -- array closed while the object is innermost
        assert_eq!(
            decode_fields(&[0xF9, 0xEA, 0xF1]),
            Err(DecodeError::MismatchedContainer {
                open: ContainerKind::Object,
                found: ContainerKind::Array,
                offset: 2,
            })
        );
    }

    #[test]
    fn test_unclosed_container() {
        assert_eq!(
            decode_fields(&[0xEA, 0x24, 0, 0, 0, 1]),
            Err(DecodeError::UnclosedContainer { depth: 1, offset: 6 })
        );
    }

    #[test]
    fn test_nesting_limit() {
        let decoder = Decoder::with_options(DecodeOptions::new().max_depth(2));
        assert!(decoder.decode_fields(&[0xEA, 0xEA, 0xE1, 0xE1]).is_ok());
        assert_eq!(
            decoder.decode_fields(&[0xEA, 0xEA, 0xEA]),
            Err(DecodeError::NestingTooDeep { max: 2, offset: 2 })
        );
    }

    #[test]
    fn test_tree_structure() {
        // Memos: [ Memo: { MemoData: 0102 } ]
        let data = [0xF9, 0xEA, 0x7D, 0x02, 0x01, 0x02, 0xE1, 0xF1];
        let fields = decode_fields(&data).unwrap();
        assert_eq!(fields.len(), 1);
        let memos = &fields[0];
        assert_eq!(memos.name, Some("Memos"));
        let memo = &memos.children().unwrap()[0];
        assert_eq!(memo.name, Some("Memo"));
        assert_eq!(memo.offset, 1);
        let data_field = memo.child("MemoData").unwrap();
        assert_eq!(data_field.value, FieldValue::Blob(vec![0x01, 0x02]));
        assert_eq!(data_field.offset, 2);
    }

    #[test]
    fn test_nested_text() {
        let data = [0xF9, 0xEA, 0x7D, 0x02, 0x01, 0x02, 0xE1, 0xF1];
        assert_eq!(
            decode_to_text(&data).unwrap(),
            "{\n\tMemos: [\n\t\tMemo: {\n\t\t\tMemoData: \"0102\",\n\t\t},\n\t]\n}\n"
        );
    }

    #[test]
    fn test_short_value_reports_offset() {
        assert_eq!(
            decode_fields(&[0x24, 0x00, 0x01]),
            Err(DecodeError::ShortInput { offset: 1, needed: 4 })
        );
    }

    #[test]
    fn test_injected_hash() {
        let decoder = Decoder::with_hash(|_: &[u8]| [0u8; 32], DecodeOptions::default());
        let text = decoder.decode_to_text(&account_field(0x81)).unwrap();
        assert_eq!(text, format!("{{\n\tAccount: \"r{}\"\n}}\n", "1".repeat(24)));
    }

    #[test]
    fn test_canonical_options() {
        let decoder = Decoder::with_options(DecodeOptions::canonical());
        let text = decoder.decode_to_text(&account_field(0x81)).unwrap();
        assert_eq!(text, "{\n\tAccount: \"rrrrrrrrrrrrrrrrrrrrrhoLvTp\"\n}\n");

        // 150-byte blob: single-byte prefix under the canonical rules only
        let mut data = vec![0x7D, 150];
        data.extend_from_slice(&[0xAA; 150]);
        assert!(decoder.decode_fields(&data).is_ok());
        assert!(matches!(
            decode_fields(&data),
            Err(DecodeError::InvalidLength { .. })
        ));
    }
}
