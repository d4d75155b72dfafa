//! Total order on encoded unsigned integers, without full decode.

use core::cmp::Ordering;

use super::bytes::{load_u16, load_u32, load_u64, load_u8};

/// Compare two encoded unsigned integers.
///
/// Faster than two `decode_uint` calls. Works because, under canonical
/// encoding, the prefix byte is monotone in value across the fix range and
/// distinct width families never overlap in value range: comparing first
/// bytes settles everything except a same-family payload comparison.
///
/// Both inputs must be canonically (minimum-width) encoded uints;
/// non-canonical inputs may compare incorrectly, and that is the documented
/// contract.
pub fn compare_uint(data_a: &[u8], data_b: &[u8]) -> Ordering {
    let ca = data_a[0];
    let cb = data_b[0];
    if ca != cb {
        return ca.cmp(&cb);
    }
    if ca <= 0x7f {
        // both fix: the prefix byte was the whole value
        return Ordering::Equal;
    }

    let mut a = &data_a[1..];
    let mut b = &data_b[1..];
    match ca {
        0xcc => load_u8(&mut a).cmp(&load_u8(&mut b)),
        0xcd => load_u16(&mut a).cmp(&load_u16(&mut b)),
        0xce => load_u32(&mut a).cmp(&load_u32(&mut b)),
        0xcf => load_u64(&mut a).cmp(&load_u64(&mut b)),
        _ => {
            debug_assert!(false, "not an encoded uint");
            Ordering::Equal
        }
    }
}
