/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt;
use std::io::{self, IsTerminal};

const BYTES_PER_ROW: usize = 16;

/// SGR escapes wrapping changed bytes in diff output.
const CHANGED_SGR: &str = "\x1b[1;31m";
const RESET_SGR: &str = "\x1b[0m";

/// Color policy for dump output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color if the sink is a terminal. [`write_data`] and [`format_data`]
    /// cannot tell, so they treat `Auto` as off; [`print_data`] resolves it
    /// through [`IsTerminal`].
    #[default]
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

impl ColorMode {
    /// Resolves the policy against the sink's terminal capability.
    #[inline]
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Width of the address column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetWidth {
    /// The smallest of 2/4/8/16 hex digits that fits the largest address
    /// printed.
    #[default]
    Auto,
    /// Always 2 hex digits.
    Bits8,
    /// Always 4 hex digits.
    Bits16,
    /// Always 8 hex digits.
    Bits32,
    /// Always 16 hex digits.
    Bits64,
}

impl OffsetWidth {
    fn digits(self, max_address: u64) -> usize {
        match self {
            OffsetWidth::Bits8 => 2,
            OffsetWidth::Bits16 => 4,
            OffsetWidth::Bits32 => 8,
            OffsetWidth::Bits64 => 16,
            OffsetWidth::Auto => {
                if max_address < 0x100 {
                    2
                } else if max_address < 0x1_0000 {
                    4
                } else if max_address < 0x1_0000_0000 {
                    8
                } else {
                    16
                }
            }
        }
    }
}

/// Options controlling the dump layout.
///
/// The default prints the ASCII column, no color (unless [`print_data`]
/// detects a terminal), no zero-row collapsing, the `" | "` separator, and
/// an auto-sized address column.
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
    pub color: ColorMode,
    /// Print the ASCII rendering to the right of the hex columns.
    pub ascii: bool,
    /// Replace runs of all-zero, unchanged rows with a single `...` line.
    pub collapse_zero_rows: bool,
    /// Separate the columns with `" "` instead of `" | "`.
    pub skip_separator: bool,
    pub offset_width: OffsetWidth,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            color: ColorMode::Auto,
            ascii: true,
            collapse_zero_rows: false,
            skip_separator: false,
            offset_width: OffsetWidth::Auto,
        }
    }
}

/// Renders memory segments as address + hex + ASCII rows into a
/// [`fmt::Write`] sink.
///
/// `segments` are treated as one logical contiguous stream by concatenation,
/// dumped in 16-byte rows starting at `start_address` (the first row is not
/// realigned to a 16-byte boundary). If `prev` is given, it is concatenated
/// the same way and compared byte-by-byte at matching logical offsets: a
/// byte that differs from, or has no counterpart in, the previous stream
/// counts as changed, which exempts its row from zero collapsing and, with
/// color enabled, wraps its cells in bold red.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let data = *b"ABCDEFGHIJKLMNOP";
/// assert_eq!(
///     format_data(&[&data], 0, None, &DumpOptions::default()),
///     "00 | 41 42 43 44 45 46 47 48 49 4A 4B 4C 4D 4E 4F 50 | ABCDEFGHIJKLMNOP\n",
/// );
/// ```
pub fn write_data<W: fmt::Write>(
    out: &mut W,
    segments: &[&[u8]],
    start_address: u64,
    prev: Option<&[&[u8]]>,
    options: &DumpOptions,
) -> fmt::Result {
    let total: usize = segments.iter().map(|s| s.len()).sum();
    let use_color = options.color.resolve(false);
    let max_address = start_address.saturating_add(total.saturating_sub(1) as u64);
    let digits = options.offset_width.digits(max_address);
    let sep = if options.skip_separator { " " } else { " | " };

    let diffing = prev.is_some();
    let mut cur = segments.iter().flat_map(|s| s.iter().copied());
    let mut prev_bytes = prev.unwrap_or(&[]).iter().flat_map(|s| s.iter().copied());

    let mut row = [0u8; BYTES_PER_ROW];
    let mut changed = [false; BYTES_PER_ROW];
    let mut offset = 0;
    let mut pending_collapse = false;

    while offset < total {
        let row_len = BYTES_PER_ROW.min(total - offset);
        for i in 0..row_len {
            row[i] = cur.next().unwrap_or(0);
            changed[i] = diffing && prev_bytes.next() != Some(row[i]);
        }
        let all_zero = row[..row_len].iter().all(|&b| b == 0);
        let any_changed = changed[..row_len].iter().any(|&c| c);

        if options.collapse_zero_rows && all_zero && !any_changed {
            pending_collapse = true;
        } else {
            if pending_collapse {
                out.write_str("...\n")?;
                pending_collapse = false;
            }
            write_row(
                out,
                start_address + offset as u64,
                &row[..row_len],
                &changed[..row_len],
                digits,
                sep,
                options.ascii,
                use_color,
            )?;
        }
        offset += row_len;
    }
    if pending_collapse {
        out.write_str("...\n")?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_row<W: fmt::Write>(
    out: &mut W,
    address: u64,
    bytes: &[u8],
    changed: &[bool],
    digits: usize,
    sep: &str,
    ascii: bool,
    use_color: bool,
) -> fmt::Result {
    write!(out, "{:0width$X}", address, width = digits)?;
    out.write_str(sep)?;
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            out.write_str(" ")?;
        }
        if use_color && changed[i] {
            write!(out, "{}{:02X}{}", CHANGED_SGR, b, RESET_SGR)?;
        } else {
            write!(out, "{:02X}", b)?;
        }
    }
    if ascii {
        for _ in bytes.len()..BYTES_PER_ROW {
            out.write_str("   ")?;
        }
        out.write_str(sep)?;
        for (i, &b) in bytes.iter().enumerate() {
            let ch = if (0x20..=0x7E).contains(&b) {
                b as char
            } else {
                '.'
            };
            if use_color && changed[i] {
                write!(out, "{}{}{}", CHANGED_SGR, ch, RESET_SGR)?;
            } else {
                out.write_char(ch)?;
            }
        }
    }
    out.write_str("\n")
}

/// Renders memory segments as a dump string; see [`write_data`].
pub fn format_data(
    segments: &[&[u8]],
    start_address: u64,
    prev: Option<&[&[u8]]>,
    options: &DumpOptions,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_data(&mut out, segments, start_address, prev, options);
    out
}

/// Prints a dump to an output stream, resolving [`ColorMode::Auto`] through
/// the stream's terminal capability; see [`write_data`].
pub fn print_data<W: io::Write + IsTerminal>(
    out: &mut W,
    segments: &[&[u8]],
    start_address: u64,
    prev: Option<&[&[u8]]>,
    options: &DumpOptions,
) -> io::Result<()> {
    let color = if options.color.resolve(out.is_terminal()) {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let resolved = DumpOptions { color, ..*options };
    let mut text = String::new();
    let _ = write_data(&mut text, segments, start_address, prev, &resolved);
    out.write_all(text.as_bytes())
}
