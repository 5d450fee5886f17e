//! Renders decoded fields as indented, JSON-like text.
//!
//! ```text
//! {
//! 	TransactionType: 0,
//! 	Account: "r...",
//! 	Memos: [
//! 		Memo: {
//! 			MemoData: "0102",
//! 		},
//! 	]
//! }
//! ```
//!
//! Keys are unquoted and close braces are separated like items, so the
//! output is not strict JSON.

use crate::error::{DecodeError, OutputOverflow};
use crate::limits::{DEFAULT_OUTPUT_CAPACITY, MAX_OUTPUT_LEN};
use crate::model::{format_hex, AccountId, Amount, ContainerKind, Currency, Field, FieldValue};
use crate::render::emitter::TextEmitter;

/// Output buffer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub initial_capacity: usize,
    pub max_output_len: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_OUTPUT_CAPACITY,
            max_output_len: MAX_OUTPUT_LEN,
        }
    }
}

/// Renders top-level fields inside the root `{ ... }` wrapper.
pub fn render_text(fields: &[Field], options: &RenderOptions) -> Result<String, DecodeError> {
    let mut emitter = TextEmitter::new(options.initial_capacity, options.max_output_len);
    emitter.begin_document().map_err(|e| e.at(0))?;
    for field in fields {
        render_field(&mut emitter, field)?;
    }
    let end = fields.last().map_or(0, |f| f.offset);
    emitter.finish().map_err(|e| e.at(end))
}

fn render_field(emitter: &mut TextEmitter, field: &Field) -> Result<(), DecodeError> {
    let at = |e: OutputOverflow| e.at(field.offset);

    emitter.begin_item().map_err(at)?;
    if let Some(name) = field.name {
        emitter.write(name).map_err(at)?;
        emitter.write(": ").map_err(at)?;
    }

    let text = match &field.value {
        FieldValue::Object(children) => {
            return render_container(emitter, ContainerKind::Object, children, field.offset);
        }
        FieldValue::Array(children) => {
            return render_container(emitter, ContainerKind::Array, children, field.offset);
        }
        FieldValue::Amount(
            amount @ Amount::Issued {
                currency, issuer, ..
            },
        ) => return render_issued(emitter, amount, currency, issuer).map_err(at),
        FieldValue::Amount(amount) => amount.value_text(),
        FieldValue::UInt8(v) => v.to_string(),
        FieldValue::UInt16(v) => v.to_string(),
        FieldValue::UInt32(v) => v.to_string(),
        FieldValue::UInt64(v) => v.to_string(),
        FieldValue::Hash128(bytes) => quoted(&format_hex(bytes)),
        FieldValue::Hash160(bytes) => quoted(&format_hex(bytes)),
        FieldValue::Hash256(bytes) => quoted(&format_hex(bytes)),
        FieldValue::Blob(bytes) | FieldValue::Vector256(bytes) => quoted(&format_hex(bytes)),
        FieldValue::AccountId(account) => quoted(&account.address),
    };
    emitter.write(&text).map_err(at)
}

fn render_container(
    emitter: &mut TextEmitter,
    kind: ContainerKind,
    children: &[Field],
    offset: usize,
) -> Result<(), DecodeError> {
    emitter.open(kind).map_err(|e| e.at(offset))?;
    for child in children {
        render_field(emitter, child)?;
    }
    let end = children.last().map_or(offset, |f| f.offset);
    emitter.close(kind).map_err(|e| e.at(end))
}

/// Issued amounts render as a fixed three-line object with no trailing separator.
fn render_issued(
    emitter: &mut TextEmitter,
    amount: &Amount,
    currency: &Currency,
    issuer: &AccountId,
) -> Result<(), OutputOverflow> {
    emitter.write("{\n")?;
    emitter.write_indented(1, &format!("Amount: \"{}\",\n", amount.value_text()))?;
    emitter.write_indented(1, &format!("Currency: \"{}\",\n", currency))?;
    emitter.write_indented(1, &format!("Issuer: \"{}\"\n", issuer.address))?;
    emitter.write_indented(0, "}")
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldId;

    fn field(type_code: u8, field_code: u8, value: FieldValue) -> Field {
        let id = FieldId::new(type_code, field_code);
        Field {
            id,
            name: id.name(),
            offset: 0,
            value,
        }
    }

    fn render(fields: &[Field]) -> String {
        render_text(fields, &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_single_field() {
        let fields = [field(2, 4, FieldValue::UInt32(7))];
        assert_eq!(render(&fields), "{\n\tSequence: 7\n}\n");
    }

    #[test]
    fn test_unlabelled_field() {
        let fields = [field(2, 250, FieldValue::UInt32(7))];
        assert_eq!(render(&fields), "{\n\t7\n}\n");
    }

    #[test]
    fn test_scalars_quoting() {
        let fields = [
            field(5, 9, FieldValue::Hash256([0xAB; 32])),
            field(7, 12, FieldValue::Blob(vec![0x74, 0x65, 0x78, 0x74])),
            field(6, 8, FieldValue::Amount(Amount::Drops { negative: false, magnitude: 12 })),
        ];
        let expected = format!(
            "{{\n\tAccountTxnID: \"{}\",\n\tMemoType: \"74657874\",\n\tFee: 12\n}}\n",
            "AB".repeat(32)
        );
        assert_eq!(render(&fields), expected);
    }

    #[test]
    fn test_issued_amount_layout() {
        let amount = Amount::Issued {
            negative: false,
            mantissa: 5,
            exponent: -1,
            currency: Currency::Standard(*b"USD"),
            issuer: AccountId {
                bytes: [0; 20],
                address: "rISSUER".to_string(),
            },
        };
        let fields = [
            field(6, 3, FieldValue::Amount(amount)),
            field(2, 2, FieldValue::UInt32(0)),
        ];
        assert_eq!(
            render(&fields),
            "{\n\tLimitAmount: {\n\t\tAmount: \"5E-1\",\n\t\tCurrency: \"USD\",\n\t\tIssuer: \"rISSUER\"\n\t},\n\tFlags: 0\n}\n"
        );
    }

    #[test]
    fn test_nested_containers() {
        let memo = field(
            14,
            10,
            FieldValue::Object(vec![field(7, 13, FieldValue::Blob(vec![0x01, 0x02]))]),
        );
        let fields = [
            field(15, 9, FieldValue::Array(vec![memo])),
            field(2, 4, FieldValue::UInt32(1)),
        ];
        assert_eq!(
            render(&fields),
            "{\n\tMemos: [\n\t\tMemo: {\n\t\t\tMemoData: \"0102\",\n\t\t},\n\t],\n\tSequence: 1\n}\n"
        );
    }

    #[test]
    fn test_output_limit() {
        let fields = [field(7, 13, FieldValue::Blob(vec![0u8; 64]))];
        let options = RenderOptions {
            initial_capacity: 8,
            max_output_len: 32,
        };
        assert!(matches!(
            render_text(&fields, &options),
            Err(DecodeError::AllocationFailure { max: 32, offset: 0, .. })
        ));
    }
}
