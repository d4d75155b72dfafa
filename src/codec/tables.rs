//! The two 256-entry dispatch tables that drive decoding.
//!
//! [`TYPE_HINT`] classifies any first byte into a [`Type`]; [`PARSER_HINT`]
//! gives the flat skipper its per-byte skip cost. Both are immutable
//! constants, safe to share across threads. Their values are load-bearing:
//! the skipper, the validator, and the bounded header probes all index them
//! directly, so every entry is written out literally rather than derived.

use super::types::Type::{self, *};

// ─────────────────────────────────────────────────────────────────────────────
// Variable-length family sentinels for PARSER_HINT
// ─────────────────────────────────────────────────────────────────────────────

/// Sentinel base: hints at or below this name a variable-length family that
/// the skipper resolves with a dispatch switch. Hints strictly between
/// `HINT` and 0 are fix-array/fix-map child counts, negated.
pub const HINT: i8 = -32;
/// str8 length prefix follows (also used for bin8).
pub const HINT_STR_8: i8 = HINT;
/// str16 length prefix follows (also used for bin16).
pub const HINT_STR_16: i8 = HINT - 1;
/// str32 length prefix follows (also used for bin32).
pub const HINT_STR_32: i8 = HINT - 2;
/// array16 element count follows.
pub const HINT_ARRAY_16: i8 = HINT - 3;
/// array32 element count follows.
pub const HINT_ARRAY_32: i8 = HINT - 4;
/// map16 pair count follows (2·count children).
pub const HINT_MAP_16: i8 = HINT - 5;
/// map32 pair count follows (2·count children).
pub const HINT_MAP_32: i8 = HINT - 6;
/// ext8: u8 length, then one type byte and the payload.
pub const HINT_EXT_8: i8 = HINT - 7;
/// ext16: u16 length, then one type byte and the payload.
pub const HINT_EXT_16: i8 = HINT - 8;
/// ext32: u32 length, then one type byte and the payload.
pub const HINT_EXT_32: i8 = HINT - 9;

// ─────────────────────────────────────────────────────────────────────────────
// First-byte type classifier
// ─────────────────────────────────────────────────────────────────────────────

/// Logical type of an encoded value, indexed by its first byte.
/// See [`type_of`](crate::type_of).
pub static TYPE_HINT: [Type; 256] = [
    // 0x00..0x7f: positive fixint
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x00
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x08
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x10
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x18
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x20
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x28
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x30
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x38
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x40
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x48
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x50
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x58
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x60
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x68
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x70
    Uint, Uint, Uint, Uint, Uint, Uint, Uint, Uint, // 0x78
    // 0x80..0x8f: fixmap
    Map, Map, Map, Map, Map, Map, Map, Map, // 0x80
    Map, Map, Map, Map, Map, Map, Map, Map, // 0x88
    // 0x90..0x9f: fixarray
    Array, Array, Array, Array, Array, Array, Array, Array, // 0x90
    Array, Array, Array, Array, Array, Array, Array, Array, // 0x98
    // 0xa0..0xbf: fixstr
    Str, Str, Str, Str, Str, Str, Str, Str, // 0xa0
    Str, Str, Str, Str, Str, Str, Str, Str, // 0xa8
    Str, Str, Str, Str, Str, Str, Str, Str, // 0xb0
    Str, Str, Str, Str, Str, Str, Str, Str, // 0xb8
    // 0xc0: nil, 0xc1: reserved (never emitted), 0xc2/0xc3: bool
    Nil, Ext, Bool, Bool, // 0xc0
    // 0xc4..0xc6: bin8/16/32
    Bin, Bin, Bin, // 0xc4
    // 0xc7..0xc9: ext8/16/32
    Ext, Ext, Ext, // 0xc7
    // 0xca: float32, 0xcb: float64
    Float, Double, // 0xca
    // 0xcc..0xcf: uint8/16/32/64
    Uint, Uint, Uint, Uint, // 0xcc
    // 0xd0..0xd3: int8/16/32/64
    Int, Int, Int, Int, // 0xd0
    // 0xd4..0xd8: fixext 1/2/4/8/16
    Ext, Ext, Ext, Ext, Ext, // 0xd4
    // 0xd9..0xdb: str8/16/32
    Str, Str, Str, // 0xd9
    // 0xdc/0xdd: array16/32, 0xde/0xdf: map16/32
    Array, Array, Map, Map, // 0xdc
    // 0xe0..0xff: negative fixint
    Int, Int, Int, Int, Int, Int, Int, Int, // 0xe0
    Int, Int, Int, Int, Int, Int, Int, Int, // 0xe8
    Int, Int, Int, Int, Int, Int, Int, Int, // 0xf0
    Int, Int, Int, Int, Int, Int, Int, Int, // 0xf8
];

// ─────────────────────────────────────────────────────────────────────────────
// Skip-cost hints
// ─────────────────────────────────────────────────────────────────────────────

/// Per-first-byte skip cost for [`next`](crate::next) and
/// [`check`](crate::check).
///
/// * `hint >= 0` — fixed trailing payload: the whole value occupies
///   `1 + hint` bytes.
/// * `HINT < hint < 0` — fix-array of `-hint` elements, or fix-map of
///   `-hint / 2` pairs; the skipper owes `-hint` more child values.
/// * `hint <= HINT` — one of the `HINT_*` sentinels above: a length or
///   count field follows and must be read before the cursor can move.
///
/// Note the fixext rows: the hint covers the one-byte ext type code plus
/// the 1/2/4/8/16-byte payload, hence 2/3/5/9/17.
pub static PARSER_HINT: [i8; 256] = [
    // 0x00..0x7f: positive fixint, payload is in the prefix byte
    0, 0, 0, 0, 0, 0, 0, 0, // 0x00
    0, 0, 0, 0, 0, 0, 0, 0, // 0x08
    0, 0, 0, 0, 0, 0, 0, 0, // 0x10
    0, 0, 0, 0, 0, 0, 0, 0, // 0x18
    0, 0, 0, 0, 0, 0, 0, 0, // 0x20
    0, 0, 0, 0, 0, 0, 0, 0, // 0x28
    0, 0, 0, 0, 0, 0, 0, 0, // 0x30
    0, 0, 0, 0, 0, 0, 0, 0, // 0x38
    0, 0, 0, 0, 0, 0, 0, 0, // 0x40
    0, 0, 0, 0, 0, 0, 0, 0, // 0x48
    0, 0, 0, 0, 0, 0, 0, 0, // 0x50
    0, 0, 0, 0, 0, 0, 0, 0, // 0x58
    0, 0, 0, 0, 0, 0, 0, 0, // 0x60
    0, 0, 0, 0, 0, 0, 0, 0, // 0x68
    0, 0, 0, 0, 0, 0, 0, 0, // 0x70
    0, 0, 0, 0, 0, 0, 0, 0, // 0x78
    // 0x80..0x8f: fixmap of k pairs owes 2k children
    0, -2, -4, -6, -8, -10, -12, -14, // 0x80
    -16, -18, -20, -22, -24, -26, -28, -30, // 0x88
    // 0x90..0x9f: fixarray of k elements owes k children
    0, -1, -2, -3, -4, -5, -6, -7, // 0x90
    -8, -9, -10, -11, -12, -13, -14, -15, // 0x98
    // 0xa0..0xbf: fixstr, hint is the payload length
    0, 1, 2, 3, 4, 5, 6, 7, // 0xa0
    8, 9, 10, 11, 12, 13, 14, 15, // 0xa8
    16, 17, 18, 19, 20, 21, 22, 23, // 0xb0
    24, 25, 26, 27, 28, 29, 30, 31, // 0xb8
    // 0xc0: nil, 0xc1: reserved, 0xc2/0xc3: bool
    0, 0, 0, 0, // 0xc0
    // 0xc4..0xc6: bin8/16/32 share the str length-prefix sentinels
    HINT_STR_8, HINT_STR_16, HINT_STR_32, // 0xc4
    // 0xc7..0xc9: ext8/16/32
    HINT_EXT_8, HINT_EXT_16, HINT_EXT_32, // 0xc7
    // 0xca: float32, 0xcb: float64
    4, 8, // 0xca
    // 0xcc..0xcf: uint8/16/32/64
    1, 2, 4, 8, // 0xcc
    // 0xd0..0xd3: int8/16/32/64
    1, 2, 4, 8, // 0xd0
    // 0xd4..0xd8: fixext 1/2/4/8/16 (ext type byte + payload)
    2, 3, 5, 9, 17, // 0xd4
    // 0xd9..0xdb: str8/16/32
    HINT_STR_8, HINT_STR_16, HINT_STR_32, // 0xd9
    // 0xdc/0xdd: array16/32, 0xde/0xdf: map16/32
    HINT_ARRAY_16, HINT_ARRAY_32, HINT_MAP_16, HINT_MAP_32, // 0xdc
    // 0xe0..0xff: negative fixint
    0, 0, 0, 0, 0, 0, 0, 0, // 0xe0
    0, 0, 0, 0, 0, 0, 0, 0, // 0xe8
    0, 0, 0, 0, 0, 0, 0, 0, // 0xf0
    0, 0, 0, 0, 0, 0, 0, 0, // 0xf8
];
