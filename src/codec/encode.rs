//! Canonical (minimum-width) encoders.
//!
//! Every encoder writes the shortest admissible wire form of its value at
//! the front of `data` and returns the unwritten tail, so calls chain into a
//! single write cursor:
//!
//! ```
//! use mpack::{encode_array, encode_uint};
//!
//! let mut buf = [0u8; 16];
//! let w = encode_array(&mut buf, 2);
//! let w = encode_uint(w, 10);
//! let w = encode_uint(w, 15);
//! let written = 16 - w.len();
//! assert_eq!(&buf[..written], &[0x92, 0x0a, 0x0f]);
//! ```
//!
//! Buffers must hold at least `sizeof_T(value)` bytes at the cursor;
//! encoders perform no bounds checks of their own beyond the panics built
//! into slice indexing. Size the buffer with the sizers, or with the
//! documented per-type maxima.

use super::bytes::{store_f32, store_f64, store_u16, store_u32, store_u64, store_u8};

/// Encode the nil value (1 byte).
#[inline]
pub fn encode_nil(data: &mut [u8]) -> &mut [u8] {
    store_u8(data, 0xc0)
}

/// Encode a boolean (1 byte).
#[inline]
pub fn encode_bool(data: &mut [u8], val: bool) -> &mut [u8] {
    store_u8(data, 0xc2 | val as u8)
}

/// Encode an unsigned integer in its minimum-width family.
pub fn encode_uint(data: &mut [u8], num: u64) -> &mut [u8] {
    if num <= 0x7f {
        store_u8(data, num as u8)
    } else if num <= u8::MAX as u64 {
        let data = store_u8(data, 0xcc);
        store_u8(data, num as u8)
    } else if num <= u16::MAX as u64 {
        let data = store_u8(data, 0xcd);
        store_u16(data, num as u16)
    } else if num <= u32::MAX as u64 {
        let data = store_u8(data, 0xce);
        store_u32(data, num as u32)
    } else {
        let data = store_u8(data, 0xcf);
        store_u64(data, num)
    }
}

/// Encode a strictly negative integer in its minimum-width family.
///
/// Non-negative values must take [`encode_uint`]; passing one here is a
/// caller bug.
pub fn encode_int(data: &mut [u8], num: i64) -> &mut [u8] {
    debug_assert!(num < 0);
    if num >= -0x20 {
        // negative fixint: the low 5 bits of the two's complement are the
        // value, the top 3 bits are the 0xe0 marker
        store_u8(data, num as u8)
    } else if num >= i8::MIN as i64 {
        let data = store_u8(data, 0xd0);
        store_u8(data, num as u8)
    } else if num >= i16::MIN as i64 {
        let data = store_u8(data, 0xd1);
        store_u16(data, num as u16)
    } else if num >= i32::MIN as i64 {
        let data = store_u8(data, 0xd2);
        store_u32(data, num as u32)
    } else {
        let data = store_u8(data, 0xd3);
        store_u64(data, num as u64)
    }
}

/// Encode a binary32 float (always 5 bytes).
#[inline]
pub fn encode_float(data: &mut [u8], num: f32) -> &mut [u8] {
    let data = store_u8(data, 0xca);
    store_f32(data, num)
}

/// Encode a binary64 float (always 9 bytes; never downcast to binary32).
#[inline]
pub fn encode_double(data: &mut [u8], num: f64) -> &mut [u8] {
    let data = store_u8(data, 0xcb);
    store_f64(data, num)
}

/// Encode a string header for a payload of `len` bytes.
///
/// The payload itself is appended by the caller, which is the useful shape
/// when the total length is known up front but the bytes arrive in pieces.
/// [`encode_str`] is the one-shot form.
pub fn encode_strl(data: &mut [u8], len: u32) -> &mut [u8] {
    if len <= 31 {
        store_u8(data, 0xa0 | len as u8)
    } else if len <= u8::MAX as u32 {
        let data = store_u8(data, 0xd9);
        store_u8(data, len as u8)
    } else if len <= u16::MAX as u32 {
        let data = store_u8(data, 0xda);
        store_u16(data, len as u16)
    } else {
        let data = store_u8(data, 0xdb);
        store_u32(data, len)
    }
}

/// Encode a whole string: header plus payload bytes.
pub fn encode_str<'a>(data: &'a mut [u8], str: &[u8]) -> &'a mut [u8] {
    debug_assert!(str.len() <= u32::MAX as usize);
    let data = encode_strl(data, str.len() as u32);
    data[..str.len()].copy_from_slice(str);
    &mut data[str.len()..]
}

/// Encode a binary header for a payload of `len` bytes.
pub fn encode_binl(data: &mut [u8], len: u32) -> &mut [u8] {
    if len <= u8::MAX as u32 {
        let data = store_u8(data, 0xc4);
        store_u8(data, len as u8)
    } else if len <= u16::MAX as u32 {
        let data = store_u8(data, 0xc5);
        store_u16(data, len as u16)
    } else {
        let data = store_u8(data, 0xc6);
        store_u32(data, len)
    }
}

/// Encode a whole binary: header plus payload bytes.
pub fn encode_bin<'a>(data: &'a mut [u8], bin: &[u8]) -> &'a mut [u8] {
    debug_assert!(bin.len() <= u32::MAX as usize);
    let data = encode_binl(data, bin.len() as u32);
    data[..bin.len()].copy_from_slice(bin);
    &mut data[bin.len()..]
}

/// Encode an array header of `size` elements.
///
/// All members are encoded after the header by further encoder calls.
pub fn encode_array(data: &mut [u8], size: u32) -> &mut [u8] {
    if size <= 15 {
        store_u8(data, 0x90 | size as u8)
    } else if size <= u16::MAX as u32 {
        let data = store_u8(data, 0xdc);
        store_u16(data, size as u16)
    } else {
        let data = store_u8(data, 0xdd);
        store_u32(data, size)
    }
}

/// Encode a map header of `size` key-value pairs.
///
/// All `2 * size` children (alternating key, value) follow the header.
pub fn encode_map(data: &mut [u8], size: u32) -> &mut [u8] {
    if size <= 15 {
        store_u8(data, 0x80 | size as u8)
    } else if size <= u16::MAX as u32 {
        let data = store_u8(data, 0xde);
        store_u16(data, size as u16)
    } else {
        let data = store_u8(data, 0xdf);
        store_u32(data, size)
    }
}
