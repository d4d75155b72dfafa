//! Big-endian load/store primitives over byte cursors.
//!
//! These twelve helpers are the only place raw wire bytes are touched; every
//! higher layer (sizers, encoders, decoders, the skipper) goes through them,
//! which keeps width handling and byte order in one file.
//!
//! Loads take a `&mut &[u8]` read cursor and advance the borrowed slice past
//! the consumed bytes. Stores take a `&mut [u8]` write cursor and return the
//! unwritten tail, so calls chain the way a pointer-bumping encoder would.
//!
//! Every multi-byte field is big-endian on the wire regardless of host byte
//! order, and no natural alignment of the buffer is assumed: all accesses go
//! through `copy_from_slice` / `to_be_bytes`, never through wider typed
//! reads.

// ─────────────────────────────────────────────────────────────────────────────
// Loads
// ─────────────────────────────────────────────────────────────────────────────

/// Read one byte and advance the cursor.
#[inline(always)]
pub fn load_u8(data: &mut &[u8]) -> u8 {
    let val = data[0];
    *data = &data[1..];
    val
}

/// Read a big-endian `u16` and advance the cursor.
#[inline(always)]
pub fn load_u16(data: &mut &[u8]) -> u16 {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(&data[..2]);
    *data = &data[2..];
    u16::from_be_bytes(raw)
}

/// Read a big-endian `u32` and advance the cursor.
#[inline(always)]
pub fn load_u32(data: &mut &[u8]) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&data[..4]);
    *data = &data[4..];
    u32::from_be_bytes(raw)
}

/// Read a big-endian `u64` and advance the cursor.
#[inline(always)]
pub fn load_u64(data: &mut &[u8]) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&data[..8]);
    *data = &data[8..];
    u64::from_be_bytes(raw)
}

/// Read a big-endian IEEE-754 binary32 and advance the cursor.
#[inline(always)]
pub fn load_f32(data: &mut &[u8]) -> f32 {
    f32::from_bits(load_u32(data))
}

/// Read a big-endian IEEE-754 binary64 and advance the cursor.
#[inline(always)]
pub fn load_f64(data: &mut &[u8]) -> f64 {
    f64::from_bits(load_u64(data))
}

// ─────────────────────────────────────────────────────────────────────────────
// Stores
// ─────────────────────────────────────────────────────────────────────────────

/// Write one byte; returns the tail after it.
#[inline(always)]
pub fn store_u8(data: &mut [u8], val: u8) -> &mut [u8] {
    data[0] = val;
    &mut data[1..]
}

/// Write a big-endian `u16`; returns the tail after it.
#[inline(always)]
pub fn store_u16(data: &mut [u8], val: u16) -> &mut [u8] {
    data[..2].copy_from_slice(&val.to_be_bytes());
    &mut data[2..]
}

/// Write a big-endian `u32`; returns the tail after it.
#[inline(always)]
pub fn store_u32(data: &mut [u8], val: u32) -> &mut [u8] {
    data[..4].copy_from_slice(&val.to_be_bytes());
    &mut data[4..]
}

/// Write a big-endian `u64`; returns the tail after it.
#[inline(always)]
pub fn store_u64(data: &mut [u8], val: u64) -> &mut [u8] {
    data[..8].copy_from_slice(&val.to_be_bytes());
    &mut data[8..]
}

/// Write a big-endian IEEE-754 binary32; returns the tail after it.
#[inline(always)]
pub fn store_f32(data: &mut [u8], val: f32) -> &mut [u8] {
    store_u32(data, val.to_bits())
}

/// Write a big-endian IEEE-754 binary64; returns the tail after it.
#[inline(always)]
pub fn store_f64(data: &mut [u8], val: f64) -> &mut [u8] {
    store_u64(data, val.to_bits())
}
