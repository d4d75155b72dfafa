//! mpack — a MessagePack-family wire codec over caller-owned byte buffers.
//!
//! The crate provides primitive encode/decode routines for
//! {nil, bool, uint, int, float32, float64, str, bin, array, map, ext}
//! with canonical minimum-width output, a table-driven non-recursive
//! skipper and validator, a printf-like assembler for composing structured
//! objects, and a JSON-like pretty-printer. There is no object model and
//! no allocation: values live in the caller's buffers, and decoded str/bin
//! slices borrow from the input.

pub mod cli;
pub mod codec;
pub mod format;
pub mod print;

// ─────────────────────────────────────────────────────────────────────────────
// Types and classifier
// ─────────────────────────────────────────────────────────────────────────────

/// Logical value types, as classified from a first byte.
pub use codec::types::{type_of, CheckError, Type};

/// The constant dispatch tables (exposed because their values are part of
/// the wire contract).
pub use codec::tables::{PARSER_HINT, TYPE_HINT};

// ─────────────────────────────────────────────────────────────────────────────
// Sizers
// ─────────────────────────────────────────────────────────────────────────────

pub use codec::size::{
    sizeof_array, sizeof_bin, sizeof_binl, sizeof_bool, sizeof_double, sizeof_float, sizeof_int,
    sizeof_map, sizeof_nil, sizeof_str, sizeof_strl, sizeof_uint,
};

// ─────────────────────────────────────────────────────────────────────────────
// Encoders (canonical minimum-width on emit)
// ─────────────────────────────────────────────────────────────────────────────

pub use codec::encode::{
    encode_array, encode_bin, encode_binl, encode_bool, encode_double, encode_float, encode_int,
    encode_map, encode_nil, encode_str, encode_strl, encode_uint,
};

// ─────────────────────────────────────────────────────────────────────────────
// Decoders (permissive width on accept)
// ─────────────────────────────────────────────────────────────────────────────

pub use codec::decode::{
    decode_array, decode_bin, decode_binl, decode_bool, decode_double, decode_float, decode_int,
    decode_map, decode_nil, decode_str, decode_strbin, decode_strbinl, decode_strl, decode_uint,
};

// ─────────────────────────────────────────────────────────────────────────────
// Bounded header probes for incremental readers
// ─────────────────────────────────────────────────────────────────────────────

pub use codec::check::{
    check_array, check_binl, check_bool, check_double, check_float, check_int, check_map,
    check_nil, check_strl, check_uint,
};

// ─────────────────────────────────────────────────────────────────────────────
// Traversal, validation, comparison
// ─────────────────────────────────────────────────────────────────────────────

/// Skip one value (trusted input) / validate and skip one value.
pub use codec::skip::{check, next};

/// Total order on encoded uints without full decode.
pub use codec::compare::compare_uint;

// ─────────────────────────────────────────────────────────────────────────────
// Assembler and pretty-printer
// ─────────────────────────────────────────────────────────────────────────────

pub use format::{format, FormatArg};

pub use print::escape::CHAR2ESCAPE;
pub use print::{fprint, print};
