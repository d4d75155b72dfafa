//! Template-driven assembly of structured values.
//!
//! [`format`] composes an encoded object from a printf-like template plus a
//! slice of tagged arguments: `[` … `]` wrap arrays, `{` … `}` wrap maps,
//! each conversion specifier emits one value from the argument stream, the
//! literal token `NIL` emits a nil, and every other template byte is
//! ignored. Array and map arities are computed by lookahead over the
//! bracketed region, so headers come out right without the caller counting.
//!
//! ```
//! use mpack::mp_format;
//!
//! let mut buf = [0u8; 64];
//! let need = mp_format!(&mut buf, "[%d %s]", 7, "hi");
//! assert_eq!(&buf[..need], &[0x92, 0x07, 0xa2, b'h', b'i']);
//! ```
//!
//! The return value is the byte count the full encoding requires. Output is
//! written only while it fits the buffer, so a return greater than
//! `data.len()` is not an error: it is the size probe telling the caller
//! what buffer to retry with (passing an empty buffer sizes the encoding
//! without writing anything).
//!
//! Template bugs — an unknown specifier, unbalanced brackets, an odd number
//! of direct children in a map region, or an argument of the wrong kind —
//! panic with a diagnostic; they are caller errors, not input errors.

use core::slice;

use crate::codec::encode::{
    encode_array, encode_bool, encode_double, encode_float, encode_int, encode_map, encode_nil,
    encode_str, encode_uint,
};
use crate::codec::size::{
    sizeof_array, sizeof_bool, sizeof_double, sizeof_float, sizeof_int, sizeof_map, sizeof_nil,
    sizeof_str, sizeof_uint,
};

/// One tagged argument for [`format`].
///
/// The integer-family specifiers (`%d`, `%u`, and the `l`/`ll`/`h`/`hh`
/// width spellings) accept either `Int` or `Uint`; the specifier decides
/// signedness, exactly as a C varargs reader would. `%s` and `%.*s` both
/// take `Str` — a Rust `&str` already carries its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatArg<'a> {
    Int(i64),
    Uint(u64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Str(&'a str),
}

macro_rules! arg_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for FormatArg<'_> {
            fn from(v: $t) -> Self {
                FormatArg::Int(v as i64)
            }
        }
    )*};
}

macro_rules! arg_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for FormatArg<'_> {
            fn from(v: $t) -> Self {
                FormatArg::Uint(v as u64)
            }
        }
    )*};
}

arg_from_signed!(i8 i16 i32 i64);
arg_from_unsigned!(u8 u16 u32 u64);

impl From<f32> for FormatArg<'_> {
    fn from(v: f32) -> Self {
        FormatArg::Float(v)
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(v: f64) -> Self {
        FormatArg::Double(v)
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(v: bool) -> Self {
        FormatArg::Bool(v)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(v: &'a str) -> Self {
        FormatArg::Str(v)
    }
}

/// Build a [`format`] call from plain Rust expressions.
///
/// Each extra expression is converted into a [`FormatArg`] via `From`, so
/// the call site reads like a variadic printf:
/// `mp_format!(&mut buf, "[%d %s]", 42, "answer")`.
#[macro_export]
macro_rules! mp_format {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($buf, $fmt, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Encode a sequence of values according to `format`, consuming `args` in
/// order.
///
/// Returns the number of bytes the full encoding requires. Values are
/// written to `data` only while the running total fits `data.len()`; a
/// return greater than `data.len()` means the output was truncated and
/// reports the buffer size that would suffice on retry. See the module
/// docs for the template language.
pub fn format(data: &mut [u8], format: &str, args: &[FormatArg<'_>]) -> usize {
    let fmt = format.as_bytes();
    let data_size = data.len();
    let mut w: &mut [u8] = data;
    let mut result: usize = 0;
    let mut args = args.iter();

    let mut i = 0;
    while i < fmt.len() {
        match fmt[i] {
            b'[' => {
                let size = count_children(fmt, i, b']');
                result += sizeof_array(size) as usize;
                if result <= data_size {
                    w = encode_array(w, size);
                }
            }
            b'{' => {
                let count = count_children(fmt, i, b'}');
                // a map region is a flat pair list, so its direct-child
                // count must be even
                assert!(
                    count % 2 == 0,
                    "format: map region holds an odd number of values"
                );
                let size = count / 2;
                result += sizeof_map(size) as usize;
                if result <= data_size {
                    w = encode_map(w, size);
                }
            }
            b'%' => {
                let spec = &fmt[i + 1..];
                assert!(!spec.is_empty(), "format: dangling '%'");

                let mut int_value: i64 = 0;
                // 0 = not an integer specifier; 1 = signed; 2 = unsigned
                let mut int_status = 0u8;
                // specifier bytes consumed after the '%'
                let mut skip = 1usize;

                if spec.starts_with(b"d") || spec.starts_with(b"i") {
                    int_value = next_int(&mut args, "%d");
                    int_status = 1;
                } else if spec.starts_with(b"u") {
                    int_value = next_int(&mut args, "%u");
                    int_status = 2;
                } else if spec.starts_with(b".*s") {
                    let str = next_str(&mut args, "%.*s");
                    result += sizeof_str(str.len() as u32) as usize;
                    if result <= data_size {
                        w = encode_str(w, str.as_bytes());
                    }
                    skip = 3;
                } else if spec.starts_with(b"s") {
                    let str = next_str(&mut args, "%s");
                    result += sizeof_str(str.len() as u32) as usize;
                    if result <= data_size {
                        w = encode_str(w, str.as_bytes());
                    }
                } else if spec.starts_with(b"lf") {
                    let v = next_double(&mut args);
                    result += sizeof_double(v) as usize;
                    if result <= data_size {
                        w = encode_double(w, v);
                    }
                    skip = 2;
                } else if spec.starts_with(b"f") {
                    let v = next_float(&mut args);
                    result += sizeof_float(v) as usize;
                    if result <= data_size {
                        w = encode_float(w, v);
                    }
                } else if spec.starts_with(b"b") {
                    let v = next_bool(&mut args);
                    result += sizeof_bool(v) as usize;
                    if result <= data_size {
                        w = encode_bool(w, v);
                    }
                } else if spec.starts_with(b"lld") || spec.starts_with(b"lli") {
                    int_value = next_int(&mut args, "%lld");
                    int_status = 1;
                    skip = 3;
                } else if spec.starts_with(b"llu") {
                    int_value = next_int(&mut args, "%llu");
                    int_status = 2;
                    skip = 3;
                } else if spec.starts_with(b"ld") || spec.starts_with(b"li") {
                    int_value = next_int(&mut args, "%ld");
                    int_status = 1;
                    skip = 2;
                } else if spec.starts_with(b"lu") {
                    int_value = next_int(&mut args, "%lu");
                    int_status = 2;
                    skip = 2;
                } else if spec.starts_with(b"hhd") || spec.starts_with(b"hhi") {
                    int_value = next_int(&mut args, "%hhd");
                    int_status = 1;
                    skip = 3;
                } else if spec.starts_with(b"hhu") {
                    int_value = next_int(&mut args, "%hhu");
                    int_status = 2;
                    skip = 3;
                } else if spec.starts_with(b"hd") || spec.starts_with(b"hi") {
                    int_value = next_int(&mut args, "%hd");
                    int_status = 1;
                    skip = 2;
                } else if spec.starts_with(b"hu") {
                    int_value = next_int(&mut args, "%hu");
                    int_status = 2;
                    skip = 2;
                } else if spec.starts_with(b"%") {
                    // literal escape: consumes no argument, emits nothing
                } else {
                    panic!(
                        "format: unknown conversion specifier %{}",
                        spec[0] as char
                    );
                }

                if int_status == 1 && int_value < 0 {
                    result += sizeof_int(int_value) as usize;
                    if result <= data_size {
                        w = encode_int(w, int_value);
                    }
                } else if int_status != 0 {
                    result += sizeof_uint(int_value as u64) as usize;
                    if result <= data_size {
                        w = encode_uint(w, int_value as u64);
                    }
                }
                i += skip;
            }
            b'N' if fmt[i..].starts_with(b"NIL") => {
                result += sizeof_nil() as usize;
                if result <= data_size {
                    w = encode_nil(w);
                }
                i += 2;
            }
            _ => {}
        }
        i += 1;
    }
    result
}

/// Count the direct children of the bracketed region opening at `open`.
///
/// `%%` is a literal escape and contributes nothing; every other `%<spec>`
/// and each `NIL` counts once. Nested regions count once at this level and
/// are otherwise skipped.
fn count_children(fmt: &[u8], open: usize, closer: u8) -> u32 {
    let mut level = 1u32;
    let mut count = 0u32;
    let mut e = open + 1;
    while level > 0 && e < fmt.len() {
        let c = fmt[e];
        if c == b'[' || c == b'{' {
            if level == 1 {
                count += 1;
            }
            level += 1;
        } else if c == b']' || c == b'}' {
            level -= 1;
            // the bracket closing this region must match its opener
            assert!(
                level > 0 || c == closer,
                "format: '{}' region closed by '{}'",
                if closer == b']' { '[' } else { '{' },
                c as char
            );
        } else if c == b'%' {
            if fmt.get(e + 1) == Some(&b'%') {
                e += 1;
            } else if level == 1 {
                count += 1;
            }
        } else if c == b'N' && level == 1 && fmt[e..].starts_with(b"NIL") {
            count += 1;
        }
        e += 1;
    }
    assert!(level == 0, "format: unbalanced bracket");
    count
}

fn next_int<'a>(args: &mut slice::Iter<'_, FormatArg<'a>>, spec: &str) -> i64 {
    match args.next() {
        Some(FormatArg::Int(v)) => *v,
        Some(FormatArg::Uint(v)) => *v as i64,
        Some(other) => panic!("format: {spec} expects an integer argument, got {other:?}"),
        None => panic!("format: {spec}: argument list exhausted"),
    }
}

fn next_float(args: &mut slice::Iter<'_, FormatArg<'_>>) -> f32 {
    match args.next() {
        Some(FormatArg::Float(v)) => *v,
        Some(FormatArg::Double(v)) => *v as f32,
        Some(other) => panic!("format: %f expects a float argument, got {other:?}"),
        None => panic!("format: %f: argument list exhausted"),
    }
}

fn next_double(args: &mut slice::Iter<'_, FormatArg<'_>>) -> f64 {
    match args.next() {
        Some(FormatArg::Double(v)) => *v,
        Some(FormatArg::Float(v)) => *v as f64,
        Some(other) => panic!("format: %lf expects a float argument, got {other:?}"),
        None => panic!("format: %lf: argument list exhausted"),
    }
}

fn next_bool(args: &mut slice::Iter<'_, FormatArg<'_>>) -> bool {
    match args.next() {
        Some(FormatArg::Bool(v)) => *v,
        Some(other) => panic!("format: %b expects a bool argument, got {other:?}"),
        None => panic!("format: %b: argument list exhausted"),
    }
}

fn next_str<'a>(args: &mut slice::Iter<'_, FormatArg<'a>>, spec: &str) -> &'a str {
    match args.next() {
        Some(FormatArg::Str(v)) => v,
        Some(other) => panic!("format: {spec} expects a string argument, got {other:?}"),
        None => panic!("format: {spec}: argument list exhausted"),
    }
}
