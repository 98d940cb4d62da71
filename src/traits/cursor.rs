/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Error returned when a requested span does not fit the accessed buffer.
///
/// `offset` and `size` describe the requested span, `len` the length of the
/// buffer (or the capacity of a fixed-size writer) it was checked against.
/// Units are bytes for byte-granularity types and bits for bit-granularity
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub offset: usize,
    pub size: usize,
    pub len: usize,
}

impl OutOfRange {
    /// Validates that `[offset, offset + size)` lies within `[0, len)`.
    ///
    /// The end of the span is computed with overflow checking, so a span
    /// that wraps around the address space is out of range rather than
    /// spuriously valid.
    #[inline(always)]
    pub fn check(offset: usize, size: usize, len: usize) -> Result<(), OutOfRange> {
        match offset.checked_add(size) {
            Some(end) if end <= len => Ok(()),
            _ => Err(OutOfRange { offset, size, len }),
        }
    }
}

impl core::error::Error for OutOfRange {}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "access of size {} at offset {} is out of range for length {}",
            self.size, self.offset, self.len
        )
    }
}

/// Sequential-access interface shared by the reader types.
///
/// Units are bytes for [`ByteReader`](crate::impls::ByteReader) and bits for
/// [`BitReader`](crate::impls::BitReader). The position is always within
/// `[0, size]`; `position() == size()` is the eof state, not an error.
pub trait Cursor {
    /// Returns the current position within the readable window.
    fn position(&self) -> usize;

    /// Returns the length of the readable window.
    fn size(&self) -> usize;

    /// Moves the cursor to an absolute position.
    ///
    /// `offset == size()` is allowed and leaves the cursor at eof; anything
    /// beyond fails without moving the cursor.
    fn go(&mut self, offset: usize) -> Result<(), OutOfRange>;

    /// Returns the number of units between the cursor and the end.
    #[inline(always)]
    fn remaining(&self) -> usize {
        self.size() - self.position()
    }

    /// Returns true if the cursor is at the end of the window.
    #[inline(always)]
    fn eof(&self) -> bool {
        self.position() >= self.size()
    }

    /// Returns true if the window has length zero.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Advances the cursor by `n` units.
    #[inline(always)]
    fn skip(&mut self, n: usize) -> Result<(), OutOfRange> {
        match self.position().checked_add(n) {
            Some(target) => self.go(target),
            None => Err(OutOfRange {
                offset: self.position(),
                size: n,
                len: self.size(),
            }),
        }
    }
}
