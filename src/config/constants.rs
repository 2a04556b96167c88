//! Constants for safemark

/// Exclusive upper bound on byte values that may have a replacement.
///
/// All five escaped characters are ASCII punctuation below this value, so any
/// byte at or above it can never match and must skip the table lookup
/// entirely.
pub const ESCAPE_TABLE_SIZE: usize = 63;

/// Characters replaced by the escaper, paired with their character references.
pub const ESCAPED_CHARS: &[(char, &str)] = &[
    ('"', "&#34;"),
    ('\'', "&#39;"),
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
];
