/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::Arc;

use super::Backing;
use crate::traits::{Cursor, OutOfRange};

/// A bit-granularity cursor over an immutable buffer.
///
/// Ownership works exactly as in [`ByteReader`](super::ByteReader): the
/// buffer is either borrowed or shared through a refcount, and
/// [`ByteReader::sub_bits`](super::ByteReader::sub_bits) hands out bit
/// readers over a byte window without copying. Position and length are
/// measured in bits; bits are numbered MSB-first within each byte, matching
/// the packing of [`BitWriter`](super::BitWriter).
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// // 0b1011_0000: three reads of 1, 2, and 3 bits.
/// let mut r = BitReader::new(&[0xB0]);
/// assert_eq!(r.read(1)?, 0b1);
/// assert_eq!(r.read(2)?, 0b01);
/// assert_eq!(r.read(3)?, 0b100);
/// assert_eq!(r.remaining(), 2);
/// # Ok::<(), OutOfRange>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    backing: Backing<'a>,
    start: usize,
    len: usize,
    offset: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader borrowing `data`, spanning all of its bits.
    pub fn new(data: &'a [u8]) -> Self {
        BitReader {
            backing: Backing::Borrowed(data),
            start: 0,
            len: data.len() * 8,
            offset: 0,
        }
    }
}

impl BitReader<'static> {
    /// Creates a reader owning a shared copy of the bytes.
    pub fn from_shared(data: Arc<[u8]>) -> Self {
        let len = data.len() * 8;
        BitReader {
            backing: Backing::Owned(data),
            start: 0,
            len,
            offset: 0,
        }
    }

    /// Creates an owning reader from a vector, without copying.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self::from_shared(data.into())
    }
}

impl Cursor for BitReader<'_> {
    #[inline(always)]
    fn position(&self) -> usize {
        self.offset
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn go(&mut self, offset: usize) -> Result<(), OutOfRange> {
        if offset > self.len {
            return Err(OutOfRange {
                offset,
                size: 0,
                len: self.len,
            });
        }
        self.offset = offset;
        Ok(())
    }
}

impl<'a> BitReader<'a> {
    /// Window constructor used by `ByteReader::sub_bits`; `start` is a byte
    /// offset into the backing, `len` a bit count.
    pub(crate) fn from_window(backing: Backing<'a>, start: usize, len: usize) -> Self {
        #[cfg(feature = "checks")]
        assert!(start * 8 + len <= backing.as_slice().len() * 8);
        BitReader {
            backing,
            start,
            len,
            offset: 0,
        }
    }

    /// Consumes `size` bits and returns them packed MSB-first into a `u64`,
    /// so the first bit read ends up as the most significant bit of the
    /// result.
    ///
    /// Fails without moving the cursor if fewer than `size` bits remain.
    ///
    /// # Panics
    ///
    /// Panics if `size > 64`.
    #[inline]
    pub fn read(&mut self, size: usize) -> Result<u64, OutOfRange> {
        let value = self.pread(self.offset, size)?;
        self.offset += size;
        Ok(value)
    }

    /// Returns the next `size` bits without advancing.
    ///
    /// # Panics
    ///
    /// Panics if `size > 64`.
    #[inline]
    pub fn peek(&self, size: usize) -> Result<u64, OutOfRange> {
        self.pread(self.offset, size)
    }

    /// Returns `size` bits at bit offset `offset`, packed MSB-first; the
    /// cursor does not move.
    ///
    /// # Panics
    ///
    /// Panics if `size > 64`.
    pub fn pread(&self, offset: usize, size: usize) -> Result<u64, OutOfRange> {
        assert!(size <= 64, "cannot read more than 64 bits at a time");
        OutOfRange::check(offset, size, self.len)?;
        if size == 0 {
            return Ok(0);
        }
        let data = &self.backing.as_slice()[self.start..];
        let mut value = 0;
        for i in offset..offset + size {
            let bit = (data[i / 8] >> (7 - (i % 8))) & 1;
            value = (value << 1) | bit as u64;
        }
        Ok(value)
    }

    /// Shrinks the logical length to `new_size` bits.
    ///
    /// Fails if `new_size` exceeds the current length; on success a cursor
    /// past the new end is pulled back to it.
    pub fn truncate(&mut self, new_size: usize) -> Result<(), OutOfRange> {
        if new_size > self.len {
            return Err(OutOfRange {
                offset: new_size,
                size: 0,
                len: self.len,
            });
        }
        self.len = new_size;
        self.offset = self.offset.min(new_size);
        Ok(())
    }
}
