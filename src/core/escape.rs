//! HTML escaping core: the two-pass scan and substitute algorithm

use std::borrow::Cow;
use tracing::debug;

use crate::config::constants::{ESCAPE_TABLE_SIZE, ESCAPED_CHARS};

/// Length added by each replacement relative to the single byte it replaces,
/// indexed by byte value. Zero means the byte passes through untouched.
static ESCAPE_DELTA: [u8; ESCAPE_TABLE_SIZE] = delta_table();

/// Replacement text indexed by byte value. Only meaningful where the delta
/// table is non-zero.
static ESCAPE_REPLACEMENT: [&str; ESCAPE_TABLE_SIZE] = replacement_table();

const fn delta_table() -> [u8; ESCAPE_TABLE_SIZE] {
    let mut table = [0u8; ESCAPE_TABLE_SIZE];
    let mut i = 0;
    while i < ESCAPED_CHARS.len() {
        table[ESCAPED_CHARS[i].0 as usize] = (ESCAPED_CHARS[i].1.len() - 1) as u8;
        i += 1;
    }
    table
}

const fn replacement_table() -> [&'static str; ESCAPE_TABLE_SIZE] {
    let mut table = [""; ESCAPE_TABLE_SIZE];
    let mut i = 0;
    while i < ESCAPED_CHARS.len() {
        table[ESCAPED_CHARS[i].0 as usize] = ESCAPED_CHARS[i].1;
        i += 1;
    }
    table
}

/// Escape the characters `&`, `<`, `>`, `"` and `'` in `input` so the result
/// can be embedded in HTML markup verbatim.
///
/// Scans the input once to compute the exact output size, then copies
/// unmatched runs and replacement texts into a single pre-sized buffer. Input
/// without any escapable character is returned borrowed, without allocating.
///
/// The scan works on bytes: the five characters are ASCII, and in UTF-8 an
/// ASCII byte never occurs inside a multi-byte sequence, so every other
/// codepoint passes through unchanged.
///
/// # Examples
///
/// ```
/// use safemark::escape_text;
///
/// assert_eq!(escape_text("Tom & Jerry"), "Tom &amp; Jerry");
/// assert_eq!(escape_text("no markup here"), "no markup here");
/// ```
pub fn escape_text(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();

    // First pass: count replacements and the total length they add.
    let mut delta = 0usize;
    let mut replacements = 0usize;
    for &byte in bytes {
        if (byte as usize) < ESCAPE_TABLE_SIZE {
            let d = ESCAPE_DELTA[byte as usize];
            if d != 0 {
                delta += d as usize;
                replacements += 1;
            }
        }
    }

    if replacements == 0 {
        return Cow::Borrowed(input);
    }

    debug!(
        "Escaping {} characters in {} bytes of input",
        replacements,
        bytes.len()
    );

    // Second pass: copy unmatched runs verbatim, substitute each match.
    let mut output = String::with_capacity(bytes.len() + delta);
    let mut run_start = 0;
    for (index, &byte) in bytes.iter().enumerate() {
        if (byte as usize) < ESCAPE_TABLE_SIZE && ESCAPE_DELTA[byte as usize] != 0 {
            output.push_str(&input[run_start..index]);
            output.push_str(ESCAPE_REPLACEMENT[byte as usize]);
            run_start = index + 1;
        }
    }
    output.push_str(&input[run_start..]);

    debug_assert_eq!(output.len(), bytes.len() + delta);
    Cow::Owned(output)
}
