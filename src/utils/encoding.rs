//! Percent-encoding helpers for baggage values.
//!
//! Values on the wire must escape anything that could be read as framing
//! (`,`, `;`, `=`), the escape character itself (`%`), quotes, whitespace,
//! control characters, and any byte outside printable ASCII. Decoding is
//! deliberately permissive: an invalid escape (`%` not followed by two hex
//! digits) passes through literally instead of failing, because inbound
//! baggage is best-effort metadata.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;

/// Bytes escaped in values: controls, space, `"`, `%`, `,`, `;`, `=`.
/// Non-ASCII bytes are always escaped by the encoder regardless of set.
const VALUE_ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'=');

/// Percent-encode a value for the wire. Returns the input unchanged when
/// nothing needs escaping.
pub fn encode_value(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, VALUE_ESCAPE_SET).into()
}

/// Percent-decode a wire value token. `%XX` hex escapes decode to the
/// corresponding byte; invalid escapes are kept literally. Byte sequences
/// that do not form valid UTF-8 are replaced, never rejected.
pub fn decode_value(token: &str) -> String {
    percent_decode_str(token).decode_utf8_lossy().into_owned()
}
