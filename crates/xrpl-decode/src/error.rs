//! Error types for XRPL binary decoding and address encoding.

use thiserror::Error;

use crate::model::ContainerKind;

/// Stable error codes reported alongside decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input ended before a value was complete
    ShortInput,
    /// E002: Type code is zero, unknown, or unsupported
    BadTypeCode,
    /// E003: Container markers do not nest
    BadNesting,
    /// E004: Variable-length prefix is malformed
    BadLength,
    /// E005: Address encoding failed
    EncodingFailure,
    /// E006: Output could not grow
    AllocationFailure,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ShortInput => "E001",
            ErrorCode::BadTypeCode => "E002",
            ErrorCode::BadNesting => "E003",
            ErrorCode::BadLength => "E004",
            ErrorCode::EncodingFailure => "E005",
            ErrorCode::AllocationFailure => "E006",
        }
    }
}

/// Error during binary decoding.
///
/// Every variant records the byte offset into the input at which decoding
/// stopped. Any error aborts the whole decode; partial output is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // === E001 ===
    #[error("[E001] expecting {needed} bytes at {offset} but input was short")]
    ShortInput { offset: usize, needed: usize },

    // === E002 ===
    #[error("[E002] invalid type code 0 at {offset}")]
    InvalidTypeCode { offset: usize },

    #[error("[E002] unknown type code {type_code} at {offset}")]
    UnknownTypeCode { type_code: u8, offset: usize },

    #[error("[E002] type code {type_code} ({name}) is not supported, at {offset}")]
    UnsupportedType {
        type_code: u8,
        name: &'static str,
        offset: usize,
    },

    // === E003 ===
    #[error("[E003] more {kind} closes than opens at {offset}")]
    UnbalancedContainer { kind: ContainerKind, offset: usize },

    #[error("[E003] {found} close marker at {offset} but innermost open container is {open}")]
    MismatchedContainer {
        open: ContainerKind,
        found: ContainerKind,
        offset: usize,
    },

    #[error("[E003] input ended at {offset} with {depth} container(s) still open")]
    UnclosedContainer { depth: usize, offset: usize },

    #[error("[E003] container nesting exceeds maximum depth {max} at {offset}")]
    NestingTooDeep { max: usize, offset: usize },

    // === E004 ===
    #[error("[E004] variable-length prefix at {offset} yields invalid length {length}")]
    InvalidLength { length: i64, offset: usize },

    // === E005 ===
    #[error("[E005] could not base58 encode account at {offset}: {source}")]
    EncodingFailure {
        offset: usize,
        #[source]
        source: AddressError,
    },

    // === E006 ===
    #[error("[E006] output of {requested} bytes exceeds limit {max} at {offset}")]
    AllocationFailure {
        requested: usize,
        max: usize,
        offset: usize,
    },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::ShortInput { .. } => ErrorCode::ShortInput,
            DecodeError::InvalidTypeCode { .. }
            | DecodeError::UnknownTypeCode { .. }
            | DecodeError::UnsupportedType { .. } => ErrorCode::BadTypeCode,
            DecodeError::UnbalancedContainer { .. }
            | DecodeError::MismatchedContainer { .. }
            | DecodeError::UnclosedContainer { .. }
            | DecodeError::NestingTooDeep { .. } => ErrorCode::BadNesting,
            DecodeError::InvalidLength { .. } => ErrorCode::BadLength,
            DecodeError::EncodingFailure { .. } => ErrorCode::EncodingFailure,
            DecodeError::AllocationFailure { .. } => ErrorCode::AllocationFailure,
        }
    }

    /// Returns the input offset at which the error occurred.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::ShortInput { offset, .. }
            | DecodeError::InvalidTypeCode { offset }
            | DecodeError::UnknownTypeCode { offset, .. }
            | DecodeError::UnsupportedType { offset, .. }
            | DecodeError::UnbalancedContainer { offset, .. }
            | DecodeError::MismatchedContainer { offset, .. }
            | DecodeError::UnclosedContainer { offset, .. }
            | DecodeError::NestingTooDeep { offset, .. }
            | DecodeError::InvalidLength { offset, .. }
            | DecodeError::EncodingFailure { offset, .. }
            | DecodeError::AllocationFailure { offset, .. } => *offset,
        }
    }
}

/// The text output could not grow to the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("output of {requested} bytes exceeds limit {max}")]
pub struct OutputOverflow {
    pub requested: usize,
    pub max: usize,
}

impl OutputOverflow {
    /// Attaches the input offset being rendered when the overflow happened.
    pub fn at(self, offset: usize) -> DecodeError {
        DecodeError::AllocationFailure {
            requested: self.requested,
            max: self.max,
            offset,
        }
    }
}

/// Error from the checksummed address encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("payload length {len} doesn't match expected {expected}")]
    InvalidPayloadLength { len: usize, expected: usize },

    #[error("encoded address is empty")]
    EmptyOutput,
}
