//! Security limits and fixed sizes for decoding.
//!
//! Input is attacker controlled; these bound what a single decode may
//! allocate or recurse into.

/// Upper bound on the initial text output reservation (2 MiB).
pub const DEFAULT_OUTPUT_CAPACITY: usize = 2048 * 1024;

/// Output bytes reserved per input byte, before the initial capacity cap.
pub const OUTPUT_BYTES_PER_INPUT_BYTE: usize = 8;

/// Smallest initial output reservation.
pub const MIN_OUTPUT_CAPACITY: usize = 64;

/// Maximum size of the rendered text (256 MiB).
pub const MAX_OUTPUT_LEN: usize = 256 * 1024 * 1024;

/// Maximum container nesting depth, root excluded.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Length of an account identifier payload.
pub const ACCOUNT_ID_LEN: usize = 20;

/// Wire size of an issued-currency amount.
pub const ISSUED_AMOUNT_LEN: usize = 48;

/// Wire size of a native (drops) amount.
pub const NATIVE_AMOUNT_LEN: usize = 8;

/// Length of a currency code field inside an issued amount.
pub const CURRENCY_CODE_LEN: usize = 20;

/// Bias subtracted from the raw issued-amount exponent.
pub const EXPONENT_BIAS: i32 = 97;
