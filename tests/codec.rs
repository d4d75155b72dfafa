//! Round-trip, canonicality, and cursor-advancement checks for the scalar
//! and header codecs.
//!
//! The laws exercised here:
//! - decode(encode(v)) == v, bit-identically, for every supported type
//! - sizeof_T(v) equals the emitted byte count, and the emitted first byte
//!   is the minimum-width family admissible for v
//! - after a decode the cursor has advanced by exactly sizeof_T(result)
//! - decoders accept non-canonical (wider than necessary) input

use mpack::{
    decode_array, decode_bin, decode_bool, decode_double, decode_float, decode_int, decode_map,
    decode_nil, decode_str, decode_strbin, decode_uint, encode_array, encode_bin, encode_binl,
    encode_bool, encode_double, encode_float, encode_int, encode_map, encode_nil, encode_str,
    encode_strl, encode_uint, sizeof_array, sizeof_bin, sizeof_int, sizeof_map, sizeof_str,
    sizeof_uint, type_of, Type,
};

/// Run one encoder into a scratch buffer and return the emitted bytes.
fn emit(f: impl for<'a> FnOnce(&'a mut [u8]) -> &'a mut [u8]) -> Vec<u8> {
    let mut buf = vec![0u8; 128];
    let rest = f(&mut buf).len();
    let len = buf.len() - rest;
    buf.truncate(len);
    buf
}

// ─────────────────────────────────────────────────────────────────────────────
// nil / bool
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn nil_roundtrip() {
    let bytes = emit(encode_nil);
    assert_eq!(bytes, [0xc0]);
    assert_eq!(type_of(bytes[0]), Type::Nil);

    let mut cur: &[u8] = &bytes;
    decode_nil(&mut cur);
    assert!(cur.is_empty());
}

#[test]
fn bool_roundtrip() {
    let f = emit(|b| encode_bool(b, false));
    let t = emit(|b| encode_bool(b, true));
    assert_eq!(f, [0xc2]);
    assert_eq!(t, [0xc3]);

    let mut cur: &[u8] = &f;
    assert!(!decode_bool(&mut cur));
    let mut cur: &[u8] = &t;
    assert!(decode_bool(&mut cur));
}

// ─────────────────────────────────────────────────────────────────────────────
// uint
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn uint_roundtrip_across_widths() {
    let samples = [
        0u64,
        1,
        0x7f,
        0x80,
        200,
        0xff,
        0x100,
        0xffff,
        0x1_0000,
        0xffff_ffff,
        0x1_0000_0000,
        u64::MAX,
    ];
    for &v in &samples {
        let bytes = emit(|b| encode_uint(b, v));
        assert_eq!(bytes.len(), sizeof_uint(v) as usize, "canonical size of {v}");
        assert_eq!(type_of(bytes[0]), Type::Uint);

        let mut cur: &[u8] = &bytes;
        assert_eq!(decode_uint(&mut cur), v);
        assert!(cur.is_empty(), "cursor advanced past the value for {v}");
    }
}

#[test]
fn uint_emits_minimum_width_family() {
    assert_eq!(emit(|b| encode_uint(b, 0x7f)), [0x7f]);
    // 200 must be u8-family, never u16
    assert_eq!(emit(|b| encode_uint(b, 200)), [0xcc, 0xc8]);
    assert_eq!(emit(|b| encode_uint(b, 0x100)), [0xcd, 0x01, 0x00]);
    assert_eq!(
        emit(|b| encode_uint(b, 0x1_0000)),
        [0xce, 0x00, 0x01, 0x00, 0x00]
    );
    assert_eq!(
        emit(|b| encode_uint(b, u64::MAX)),
        [0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
    );
}

#[test]
fn uint_decoder_accepts_non_canonical_widths() {
    // 5 encoded as u16 and u32, wider than necessary
    let mut cur: &[u8] = &[0xcd, 0x00, 0x05];
    assert_eq!(decode_uint(&mut cur), 5);
    let mut cur: &[u8] = &[0xce, 0x00, 0x00, 0x00, 0x05];
    assert_eq!(decode_uint(&mut cur), 5);
}

// ─────────────────────────────────────────────────────────────────────────────
// int
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn int_width_boundary_vectors() {
    assert_eq!(emit(|b| encode_int(b, -32)), [0xe0]);
    assert_eq!(emit(|b| encode_int(b, -33)), [0xd0, 0xdf]);
    assert_eq!(emit(|b| encode_int(b, -129)), [0xd1, 0xff, 0x7f]);
    assert_eq!(
        emit(|b| encode_int(b, -32769)),
        [0xd2, 0xff, 0xff, 0x7f, 0xff]
    );
    assert_eq!(
        emit(|b| encode_int(b, i64::MIN)),
        [0xd3, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn int_roundtrip_across_widths() {
    let samples = [
        -1i64,
        -31,
        -32,
        -33,
        -128,
        -129,
        -32768,
        -32769,
        i32::MIN as i64,
        i32::MIN as i64 - 1,
        i64::MIN,
    ];
    for &v in &samples {
        let bytes = emit(|b| encode_int(b, v));
        assert_eq!(bytes.len(), sizeof_int(v) as usize, "canonical size of {v}");
        assert_eq!(type_of(bytes[0]), Type::Int);

        let mut cur: &[u8] = &bytes;
        assert_eq!(decode_int(&mut cur), v);
        assert!(cur.is_empty());
    }
}

#[test]
fn int_decoder_accepts_non_canonical_widths() {
    let mut cur: &[u8] = &[0xd1, 0xff, 0xff]; // -1 as i16
    assert_eq!(decode_int(&mut cur), -1);
    let mut cur: &[u8] = &[0xd3, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xde];
    assert_eq!(decode_int(&mut cur), -34);
}

// ─────────────────────────────────────────────────────────────────────────────
// float / double
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn float_wire_format() {
    assert_eq!(emit(|b| encode_float(b, 1.0)), [0xca, 0x3f, 0x80, 0x00, 0x00]);
    let bytes = emit(|b| encode_float(b, -2.5));
    let mut cur: &[u8] = &bytes;
    assert_eq!(decode_float(&mut cur).to_bits(), (-2.5f32).to_bits());
}

#[test]
fn double_wire_format() {
    assert_eq!(
        emit(|b| encode_double(b, 1.0)),
        [0xcb, 0x3f, 0xf0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    let bytes = emit(|b| encode_double(b, f64::MIN_POSITIVE));
    let mut cur: &[u8] = &bytes;
    assert_eq!(
        decode_double(&mut cur).to_bits(),
        f64::MIN_POSITIVE.to_bits()
    );
}

#[test]
fn double_is_never_downcast() {
    // a double that would fit a float still encodes as 9 bytes
    let bytes = emit(|b| encode_double(b, 0.5));
    assert_eq!(bytes.len(), 9);
    assert_eq!(bytes[0], 0xcb);
}

// ─────────────────────────────────────────────────────────────────────────────
// str / bin
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn str_fix_boundary_at_31_bytes() {
    let s31 = [b'a'; 31];
    let bytes = emit(|b| encode_str(b, &s31));
    assert_eq!(bytes.len(), 32);
    assert_eq!(bytes[0], 0xbf);
    assert_eq!(bytes.len(), sizeof_str(31) as usize);

    let s32 = [b'a'; 32];
    let bytes = emit(|b| encode_str(b, &s32));
    assert_eq!(bytes.len(), 34);
    assert_eq!(&bytes[..2], &[0xd9, 0x20]);
    assert_eq!(bytes.len(), sizeof_str(32) as usize);
}

#[test]
fn str_roundtrip_borrows_payload() {
    let bytes = emit(|b| encode_str(b, b"hello"));
    let mut cur: &[u8] = &bytes;
    let s = decode_str(&mut cur);
    assert_eq!(s, b"hello");
    assert!(cur.is_empty());
}

#[test]
fn str_header_only_encoding() {
    // header now, payload appended by the caller afterwards
    let header = emit(|b| encode_strl(b, 300));
    assert_eq!(header, [0xda, 0x01, 0x2c]);
}

#[test]
fn bin_headers_have_no_fix_family() {
    let bytes = emit(|b| encode_bin(b, b""));
    assert_eq!(bytes, [0xc4, 0x00]);
    assert_eq!(bytes.len(), sizeof_bin(0) as usize);

    let header = emit(|b| encode_binl(b, 256));
    assert_eq!(header, [0xc5, 0x01, 0x00]);
}

#[test]
fn bin_roundtrip() {
    let payload = [0u8, 1, 2, 0xff, 0xfe];
    let bytes = emit(|b| encode_bin(b, &payload));
    assert_eq!(type_of(bytes[0]), Type::Bin);

    let mut cur: &[u8] = &bytes;
    assert_eq!(decode_bin(&mut cur), payload);
    assert!(cur.is_empty());
}

#[test]
fn strbin_decoder_accepts_both_families() {
    let str_bytes = emit(|b| encode_str(b, b"abc"));
    let bin_bytes = emit(|b| encode_bin(b, b"abc"));

    let mut cur: &[u8] = &str_bytes;
    assert_eq!(decode_strbin(&mut cur), b"abc");
    let mut cur: &[u8] = &bin_bytes;
    assert_eq!(decode_strbin(&mut cur), b"abc");
}

// ─────────────────────────────────────────────────────────────────────────────
// array / map
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_array_is_one_byte() {
    let bytes = emit(|b| encode_array(b, 0));
    assert_eq!(bytes, [0x90]);

    let mut cur: &[u8] = &bytes;
    assert_eq!(decode_array(&mut cur), 0);
    assert!(cur.is_empty());
}

#[test]
fn nested_uints_wire_bytes() {
    let mut buf = [0u8; 8];
    let w = encode_array(&mut buf, 2);
    let w = encode_uint(w, 10);
    let w = encode_uint(w, 15);
    let wlen = w.len();
    let len = buf.len() - wlen;
    assert_eq!(&buf[..len], &[0x92, 0x0a, 0x0f]);

    let mut cur: &[u8] = &buf[..len];
    assert_eq!(decode_array(&mut cur), 2);
    assert_eq!(decode_uint(&mut cur), 10);
    assert_eq!(decode_uint(&mut cur), 15);
    assert!(cur.is_empty());
}

#[test]
fn container_header_width_boundaries() {
    assert_eq!(emit(|b| encode_array(b, 15)), [0x9f]);
    assert_eq!(emit(|b| encode_array(b, 16)), [0xdc, 0x00, 0x10]);
    assert_eq!(
        emit(|b| encode_array(b, 0x1_0000)),
        [0xdd, 0x00, 0x01, 0x00, 0x00]
    );
    assert_eq!(emit(|b| encode_map(b, 15)), [0x8f]);
    assert_eq!(emit(|b| encode_map(b, 16)), [0xde, 0x00, 0x10]);
    assert_eq!(
        emit(|b| encode_map(b, 0x1_0000)),
        [0xdf, 0x00, 0x01, 0x00, 0x00]
    );

    for size in [0u32, 15, 16, 0xffff, 0x1_0000] {
        assert_eq!(
            emit(|b| encode_array(b, size)).len(),
            sizeof_array(size) as usize
        );
        assert_eq!(
            emit(|b| encode_map(b, size)).len(),
            sizeof_map(size) as usize
        );
    }
}

#[test]
fn container_decoders_accept_non_canonical_widths() {
    let mut cur: &[u8] = &[0xdc, 0x00, 0x05];
    assert_eq!(decode_array(&mut cur), 5);
    let mut cur: &[u8] = &[0xde, 0x00, 0x03];
    assert_eq!(decode_map(&mut cur), 3);
}

#[test]
fn map_roundtrip_with_mixed_values() {
    let mut buf = [0u8; 64];
    let w = encode_map(&mut buf, 2);
    let w = encode_str(w, b"key1");
    let w = encode_uint(w, 1);
    let w = encode_str(w, b"key2");
    let w = encode_bool(w, true);
    let wlen = w.len();
    let len = buf.len() - wlen;

    let mut cur: &[u8] = &buf[..len];
    assert_eq!(decode_map(&mut cur), 2);
    assert_eq!(decode_str(&mut cur), b"key1");
    assert_eq!(decode_uint(&mut cur), 1);
    assert_eq!(decode_str(&mut cur), b"key2");
    assert!(decode_bool(&mut cur));
    assert!(cur.is_empty());
}
