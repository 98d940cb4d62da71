/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// An append-only bit-granularity writer producing a packed byte sequence.
///
/// Bits fill each byte MSB-first, so the first bit written to a byte lands
/// in bit 7; [`BitReader`](super::BitReader) reads the same packing back.
/// The writer tracks how many bits of the trailing byte are still unset
/// (invariant: `0 <= unset < 8`, with an empty buffer counting as 0), and
/// [`as_bytes`](BitWriter::as_bytes) always shows those unset positions as
/// zero.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut w = BitWriter::new();
/// for bit in [true, false, true, true] {
///     w.write(bit);
/// }
/// assert_eq!(w.size(), 4);
/// assert_eq!(w.as_bytes(), &[0b1011_0000]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    data: Vec<u8>,
    last_byte_unset_bits: u8,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one bit.
    #[inline]
    pub fn write(&mut self, bit: bool) {
        if self.last_byte_unset_bits == 0 {
            self.data.push(0);
            self.last_byte_unset_bits = 8;
        }
        if bit {
            let last = self.data.len() - 1;
            self.data[last] |= 1 << (self.last_byte_unset_bits - 1);
        }
        self.last_byte_unset_bits -= 1;
    }

    /// Returns the total number of bits written.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len() * 8 - self.last_byte_unset_bits as usize
    }

    /// Returns true if no bit has been written.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the packed bytes; unset positions of a partially-filled
    /// trailing byte read as zero.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the writer and returns the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Clears the writer, keeping the allocation.
    pub fn reset(&mut self) {
        self.data.clear();
        self.last_byte_unset_bits = 0;
    }

    /// Removes trailing bits so that exactly `bits` remain; does nothing if
    /// `bits >= size()`.
    ///
    /// The freed positions of the new trailing byte are re-zeroed, so
    /// [`as_bytes`](BitWriter::as_bytes) keeps its zero-padding guarantee.
    pub fn truncate(&mut self, bits: usize) {
        if bits >= self.size() {
            return;
        }
        let bytes = bits.div_ceil(8);
        self.data.truncate(bytes);
        self.last_byte_unset_bits = (bytes * 8 - bits) as u8;
        if self.last_byte_unset_bits > 0 {
            let last = self.data.len() - 1;
            self.data[last] &= 0xFF << self.last_byte_unset_bits;
        }
    }
}
