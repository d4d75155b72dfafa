//! Flat, counter-driven value traversal.
//!
//! [`next`] advances a cursor past exactly one (possibly compound) value
//! without recursion: a single work counter tracks how many values are still
//! owed, and the parser-hint table turns each prefix byte into either a
//! fixed cursor bump or an addition to the counter. Stack depth stays O(1)
//! no matter how deeply arrays and maps nest.
//!
//! [`check`] runs the same state machine with bounds guards at every prefix
//! read, every length field, and every advance. It is the safe gate for
//! untrusted input: once a buffer passes `check`, the unguarded decoders and
//! `next` may walk it freely.

use super::bytes::{load_u16, load_u32, load_u8};
use super::tables::{
    HINT, HINT_ARRAY_16, HINT_ARRAY_32, HINT_EXT_16, HINT_EXT_32, HINT_EXT_8, HINT_MAP_16,
    HINT_MAP_32, HINT_STR_16, HINT_STR_32, HINT_STR_8, PARSER_HINT,
};
use super::types::CheckError;

/// Skip one encoded value, advancing the cursor past it and all of its
/// children.
///
/// Faster than pairing [`type_of`](crate::type_of) with the matching
/// decoder, and the only way to step over a value whose type the caller
/// does not care about. The input is trusted: the buffer must hold one
/// complete value (malformed input panics on a slice bound rather than
/// walking out of the buffer). Run [`check`] first on untrusted bytes.
///
/// ```
/// use mpack::{encode_array, encode_str, encode_uint, next};
///
/// let mut buf = [0u8; 32];
/// let w = encode_array(&mut buf, 2);
/// let w = encode_str(w, b"ab");
/// let w = encode_uint(w, 7);
/// let end = 32 - w.len();
///
/// let mut cur: &[u8] = &buf[..end];
/// next(&mut cur); // steps over the whole array, members included
/// assert!(cur.is_empty());
/// ```
pub fn next(data: &mut &[u8]) {
    let mut k: u64 = 1;
    while k > 0 {
        let c = data[0];
        let l = PARSER_HINT[c as usize];
        if l >= 0 {
            *data = &data[1 + l as usize..];
        } else if c == 0xd9 {
            // str8 is frequent enough to keep on the fast path
            let len = data[1] as usize;
            *data = &data[2 + len..];
        } else if l > HINT {
            // fix-array / fix-map: the children are owed, the header is done
            *data = &data[1..];
            k += (-l) as u64;
        } else {
            // variable-length families share the cold path, which finishes
            // the remainder of the walk itself
            return next_slowpath(data, k);
        }
        k -= 1;
    }
}

fn next_slowpath(data: &mut &[u8], mut k: u64) {
    while k > 0 {
        let c = load_u8(data);
        let l = PARSER_HINT[c as usize];
        if l >= 0 {
            *data = &data[l as usize..];
        } else if l > HINT {
            k += (-l) as u64;
        } else {
            match l {
                HINT_STR_8 => {
                    let len = load_u8(data) as usize;
                    *data = &data[len..];
                }
                HINT_STR_16 => {
                    let len = load_u16(data) as usize;
                    *data = &data[len..];
                }
                HINT_STR_32 => {
                    let len = load_u32(data) as usize;
                    *data = &data[len..];
                }
                HINT_ARRAY_16 => k += load_u16(data) as u64,
                HINT_ARRAY_32 => k += load_u32(data) as u64,
                HINT_MAP_16 => k += 2 * load_u16(data) as u64,
                HINT_MAP_32 => k += 2 * load_u32(data) as u64,
                HINT_EXT_8 => {
                    let len = load_u8(data) as usize;
                    *data = &data[1 + len..]; // ext type byte + payload
                }
                HINT_EXT_16 => {
                    let len = load_u16(data) as usize;
                    *data = &data[1 + len..];
                }
                HINT_EXT_32 => {
                    let len = load_u32(data) as usize;
                    *data = &data[1 + len..];
                }
                _ => debug_assert!(false, "unhandled parser hint {l}"),
            }
        }
        k -= 1;
    }
}

/// Validating variant of [`next`].
///
/// Walks one value with the same counter-driven state machine, but guards
/// every read against the end of the buffer. Returns `Ok(())` and leaves
/// the cursor just past the value iff the buffer starts with exactly one
/// complete, in-bounds value; otherwise returns [`CheckError`] and leaves
/// the cursor in an unspecified position.
pub fn check(data: &mut &[u8]) -> Result<(), CheckError> {
    let mut k: u64 = 1;
    while k > 0 {
        if data.is_empty() {
            return Err(CheckError);
        }
        let c = load_u8(data);
        let l = PARSER_HINT[c as usize];
        if l >= 0 {
            if l as usize > data.len() {
                return Err(CheckError);
            }
            *data = &data[l as usize..];
        } else if l > HINT {
            k += (-l) as u64;
        } else {
            match l {
                HINT_STR_8 => {
                    if data.is_empty() {
                        return Err(CheckError);
                    }
                    let len = load_u8(data) as usize;
                    if len > data.len() {
                        return Err(CheckError);
                    }
                    *data = &data[len..];
                }
                HINT_STR_16 => {
                    if data.len() < 2 {
                        return Err(CheckError);
                    }
                    let len = load_u16(data) as usize;
                    if len > data.len() {
                        return Err(CheckError);
                    }
                    *data = &data[len..];
                }
                HINT_STR_32 => {
                    if data.len() < 4 {
                        return Err(CheckError);
                    }
                    let len = load_u32(data) as usize;
                    if len > data.len() {
                        return Err(CheckError);
                    }
                    *data = &data[len..];
                }
                HINT_ARRAY_16 => {
                    if data.len() < 2 {
                        return Err(CheckError);
                    }
                    k += load_u16(data) as u64;
                }
                HINT_ARRAY_32 => {
                    if data.len() < 4 {
                        return Err(CheckError);
                    }
                    k += load_u32(data) as u64;
                }
                HINT_MAP_16 => {
                    if data.len() < 2 {
                        return Err(CheckError);
                    }
                    k += 2 * load_u16(data) as u64;
                }
                HINT_MAP_32 => {
                    if data.len() < 4 {
                        return Err(CheckError);
                    }
                    k += 2 * load_u32(data) as u64;
                }
                HINT_EXT_8 => {
                    if data.len() < 1 + 1 {
                        return Err(CheckError);
                    }
                    let len = load_u8(data) as usize;
                    load_u8(data); // ext type byte
                    if len > data.len() {
                        return Err(CheckError);
                    }
                    *data = &data[len..];
                }
                HINT_EXT_16 => {
                    if data.len() < 2 + 1 {
                        return Err(CheckError);
                    }
                    let len = load_u16(data) as usize;
                    load_u8(data);
                    if len > data.len() {
                        return Err(CheckError);
                    }
                    *data = &data[len..];
                }
                HINT_EXT_32 => {
                    if data.len() < 4 + 1 {
                        return Err(CheckError);
                    }
                    let len = load_u32(data) as usize;
                    load_u8(data);
                    if len > data.len() {
                        return Err(CheckError);
                    }
                    *data = &data[len..];
                }
                _ => {
                    debug_assert!(false, "unhandled parser hint {l}");
                    return Err(CheckError);
                }
            }
        }
        k -= 1;
    }
    Ok(())
}
