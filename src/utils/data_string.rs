/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from the data-string codec and the comment stripper.
///
/// Positions are byte offsets into the input string.
#[derive(Debug)]
pub enum DataStringError {
    /// A character no grammar rule accepts.
    UnexpectedChar { pos: usize, ch: char },
    /// The input ended in the middle of a byte (odd number of nibbles).
    TrailingNibble,
    /// A quoted literal or file reference starting in the middle of a byte.
    Misaligned { pos: usize },
    /// A quoted literal with no closing quote.
    UnterminatedLiteral { pos: usize },
    /// A file reference with no closing bracket.
    UnterminatedFileRef { pos: usize },
    /// A file reference in an input parsed without file substitution.
    FilesNotAllowed { pos: usize },
    /// A `/*` with no matching `*/`, in strict mode.
    UnterminatedComment,
    /// Reading a referenced file failed.
    File { path: PathBuf, source: io::Error },
}

impl core::error::Error for DataStringError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            DataStringError::File { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for DataStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataStringError::UnexpectedChar { pos, ch } => {
                write!(f, "unexpected character {ch:?} at position {pos}")
            }
            DataStringError::TrailingNibble => {
                write!(f, "odd number of hex digits")
            }
            DataStringError::Misaligned { pos } => {
                write!(f, "literal at position {pos} does not start on a byte boundary")
            }
            DataStringError::UnterminatedLiteral { pos } => {
                write!(f, "unterminated quoted literal starting at position {pos}")
            }
            DataStringError::UnterminatedFileRef { pos } => {
                write!(f, "unterminated file reference starting at position {pos}")
            }
            DataStringError::FilesNotAllowed { pos } => {
                write!(f, "file reference at position {pos}, but file substitution is not allowed")
            }
            DataStringError::UnterminatedComment => {
                write!(f, "unterminated multiline comment")
            }
            DataStringError::File { path, .. } => {
                write!(f, "cannot read referenced file {}", path.display())
            }
        }
    }
}

/// Options for [`parse_data_string_masked`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseDataOptions {
    /// Honor `<path>` file references, substituting the file's bytes.
    pub allow_files: bool,
}

#[inline]
fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

/// Decodes a data string into bytes, with file substitution disabled.
///
/// Equivalent to [`parse_data_string_masked`] with default options,
/// discarding the mask. Wildcard nibbles decode as zero bits; use the
/// masked form when the wildcard positions matter.
pub fn parse_data_string(s: &str) -> Result<Vec<u8>, DataStringError> {
    Ok(parse_data_string_masked(s, &ParseDataOptions::default())?.0)
}

/// Decodes a data string into a byte buffer plus a parallel wildcard mask.
///
/// The grammar, outside quotes, ignores ASCII whitespace everywhere:
///
/// - a pair of hex digits (either case) is one literal byte;
/// - `?` is one wildcard nibble: its data bits are zero and its mask nibble
///   is `0xF`, so `??` wildcards a whole byte and `0?` half of one;
/// - `"..."` appends the bytes between the quotes verbatim (no escape
///   processing); it must start on a byte boundary;
/// - `<path>` appends the contents of the named file when
///   [`allow_files`](ParseDataOptions::allow_files) is set, and is an error
///   otherwise; it must start on a byte boundary.
///
/// The returned buffers always have equal length; mask bits are `1` exactly
/// at wildcard positions.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let opts = ParseDataOptions::default();
/// let (data, mask) = parse_data_string_masked("0?1?", &opts)?;
/// assert_eq!(data, [0x00, 0x10]);
/// assert_eq!(mask, [0x0F, 0x0F]);
///
/// let (data, _) = parse_data_string_masked("03 \"AB\" ff", &opts)?;
/// assert_eq!(data, [0x03, 0x41, 0x42, 0xFF]);
/// # Ok::<(), DataStringError>(())
/// ```
pub fn parse_data_string_masked(
    s: &str,
    options: &ParseDataOptions,
) -> Result<(Vec<u8>, Vec<u8>), DataStringError> {
    let b = s.as_bytes();
    let mut data = Vec::new();
    let mut mask = Vec::new();
    // High nibble of a half-parsed byte, as (data_nibble, mask_nibble).
    let mut pending: Option<(u8, u8)> = None;
    let mut i = 0;

    while i < b.len() {
        match b[i] {
            c if c.is_ascii_whitespace() => {
                i += 1;
            }
            c if c.is_ascii_hexdigit() || c == b'?' => {
                let (nv, nm) = if c == b'?' { (0, 0xF) } else { (hex_value(c), 0) };
                match pending.take() {
                    None => pending = Some((nv, nm)),
                    Some((hv, hm)) => {
                        data.push((hv << 4) | nv);
                        mask.push((hm << 4) | nm);
                    }
                }
                i += 1;
            }
            b'"' => {
                if pending.is_some() {
                    return Err(DataStringError::Misaligned { pos: i });
                }
                let start = i;
                i += 1;
                loop {
                    if i >= b.len() {
                        return Err(DataStringError::UnterminatedLiteral { pos: start });
                    }
                    if b[i] == b'"' {
                        i += 1;
                        break;
                    }
                    data.push(b[i]);
                    mask.push(0);
                    i += 1;
                }
            }
            b'<' => {
                if pending.is_some() {
                    return Err(DataStringError::Misaligned { pos: i });
                }
                let start = i;
                let Some(rel) = b[i + 1..].iter().position(|&c| c == b'>') else {
                    return Err(DataStringError::UnterminatedFileRef { pos: start });
                };
                if !options.allow_files {
                    return Err(DataStringError::FilesNotAllowed { pos: start });
                }
                let path = &s[i + 1..i + 1 + rel];
                let contents = std::fs::read(path).map_err(|source| DataStringError::File {
                    path: PathBuf::from(path),
                    source,
                })?;
                log::debug!(
                    "substituting {} bytes from {path} into data string",
                    contents.len()
                );
                data.extend_from_slice(&contents);
                mask.resize(data.len(), 0);
                i += rel + 2;
            }
            _ => {
                let ch = s[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(DataStringError::UnexpectedChar { pos: i, ch });
            }
        }
    }
    if pending.is_some() {
        return Err(DataStringError::TrailingNibble);
    }
    Ok((data, mask))
}

/// Renders a byte buffer back to data-string notation.
///
/// The output is continuous uppercase hex pairs; a nibble whose mask nibble
/// is non-zero renders as `?`. A missing or short mask means all-literal.
/// For wildcard-free buffers this is the exact inverse of
/// [`parse_data_string`] on normalized input (uppercase, no whitespace, no
/// quoted literals or file references).
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// assert_eq!(format_data_string(&[0xAB, 0x01], None), "AB01");
/// assert_eq!(
///     format_data_string(&[0x00, 0x10], Some(&[0x0F, 0x0F])),
///     "0?1?",
/// );
/// ```
pub fn format_data_string(data: &[u8], mask: Option<&[u8]>) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(data.len() * 2);
    for (i, &byte) in data.iter().enumerate() {
        let m = mask.and_then(|m| m.get(i).copied()).unwrap_or(0);
        for (shift, mask_nibble) in [(4, m >> 4), (0, m & 0x0F)] {
            if mask_nibble != 0 {
                out.push('?');
            } else {
                out.push(HEX[((byte >> shift) & 0x0F) as usize] as char);
            }
        }
    }
    out
}

/// Removes `/* ... */` comments, keeping the newlines inside them so the
/// line numbering of the surviving text is stable.
///
/// Comments do not nest. An unterminated comment is an error unless
/// `allow_unterminated` is set, in which case everything from the opening
/// `/*` is dropped.
pub fn strip_multiline_comments(
    s: &str,
    allow_unterminated: bool,
) -> Result<String, DataStringError> {
    let mut out = String::with_capacity(s.len());
    let mut in_comment = false;
    let mut iter = s.chars().peekable();
    while let Some(c) = iter.next() {
        if in_comment {
            if c == '*' && iter.peek() == Some(&'/') {
                iter.next();
                in_comment = false;
            } else if c == '\n' {
                out.push('\n');
            }
        } else if c == '/' && iter.peek() == Some(&'*') {
            iter.next();
            in_comment = true;
        } else {
            out.push(c);
        }
    }
    if in_comment && !allow_unterminated {
        return Err(DataStringError::UnterminatedComment);
    }
    Ok(out)
}
