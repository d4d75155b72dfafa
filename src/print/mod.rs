//! JSON-like textual rendering of encoded values.
//!
//! The printer decodes recursively and writes through any [`io::Write`]
//! sink. Nil renders as `null`, integers and floats in decimal, str/bin
//! payloads double-quoted through the escape table, arrays and maps with
//! `", "` separators. Ext values are never interpreted: the skipper steps
//! over them and the literal token `undefined` is emitted in their place.
//!
//! Input is trusted, like the decoders it is built on; run
//! [`check`](crate::check) first on untrusted bytes. The only error surface
//! is the sink: a failed write short-circuits the rest of the output.

pub mod escape;

use std::io::{self, Write};

use crate::codec::decode::{
    decode_array, decode_bool, decode_double, decode_float, decode_int, decode_map, decode_nil,
    decode_strbin, decode_uint,
};
use crate::codec::skip::next;
use crate::codec::types::{type_of, Type};

use escape::CHAR2ESCAPE;

/// Pretty-print the encoded value at the front of `data` to `file`.
///
/// ```
/// use mpack::{encode_array, encode_uint, fprint};
///
/// let mut buf = [0u8; 8];
/// let w = encode_array(&mut buf, 2);
/// let w = encode_uint(w, 10);
/// let w = encode_uint(w, 15);
/// let len = 8 - w.len();
///
/// let mut out = Vec::new();
/// fprint(&mut out, &buf[..len]).unwrap();
/// assert_eq!(out, b"[10, 15]");
/// ```
pub fn fprint<W: Write>(file: &mut W, data: &[u8]) -> io::Result<()> {
    let mut cur = data;
    fprint_value(file, &mut cur)
}

/// Pretty-print the encoded value at the front of `data` to stdout.
pub fn print(data: &[u8]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    fprint(&mut out, data)
}

fn fprint_value<W: Write>(file: &mut W, data: &mut &[u8]) -> io::Result<()> {
    match type_of(data[0]) {
        Type::Nil => {
            decode_nil(data);
            file.write_all(b"null")?;
        }
        Type::Uint => write!(file, "{}", decode_uint(data))?,
        Type::Int => write!(file, "{}", decode_int(data))?,
        Type::Str | Type::Bin => {
            let raw = decode_strbin(data);
            file.write_all(b"\"")?;
            for &c in raw {
                match CHAR2ESCAPE.get(c as usize).copied().flatten() {
                    Some(esc) => file.write_all(esc.as_bytes())?,
                    None => file.write_all(&[c])?,
                }
            }
            file.write_all(b"\"")?;
        }
        Type::Array => {
            let size = decode_array(data);
            file.write_all(b"[")?;
            for i in 0..size {
                if i > 0 {
                    file.write_all(b", ")?;
                }
                fprint_value(file, data)?;
            }
            file.write_all(b"]")?;
        }
        Type::Map => {
            let size = decode_map(data);
            file.write_all(b"{")?;
            for i in 0..size {
                if i > 0 {
                    file.write_all(b", ")?;
                }
                fprint_value(file, data)?;
                file.write_all(b": ")?;
                fprint_value(file, data)?;
            }
            file.write_all(b"}")?;
        }
        Type::Bool => {
            let s: &[u8] = if decode_bool(data) { b"true" } else { b"false" };
            file.write_all(s)?;
        }
        Type::Float => write!(file, "{}", decode_float(data))?,
        Type::Double => write!(file, "{}", decode_double(data))?,
        Type::Ext => {
            next(data);
            file.write_all(b"undefined")?;
        }
    }
    Ok(())
}
