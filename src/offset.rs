//! Byte-offset to character-offset conversion.
//!
//! Parsers report positions in encoded bytes; the rendering surface counts
//! characters. Offsets that land inside a multi-byte sequence come from
//! upstream bugs and are absorbed here rather than failing the render.

use std::str;

/// Convert a byte offset in `bytes` to a character index.
///
/// When `byte_offset` is a codepoint boundary this is the character count
/// of the decoded prefix. When it lands mid-codepoint the nearest lower
/// boundary is used, scanning backward one byte at a time; 0 if none
/// decodes. Offsets past the end are clamped to the full length.
pub fn byte_to_char_index(bytes: &[u8], byte_offset: usize) -> usize {
    let upper = byte_offset.min(bytes.len());
    match str::from_utf8(&bytes[..upper]) {
        Ok(prefix) => prefix.chars().count(),
        Err(_) => {
            for end in (0..upper).rev() {
                if let Ok(prefix) = str::from_utf8(&bytes[..end]) {
                    return prefix.chars().count();
                }
            }
            0
        }
    }
}
