/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// An append/positional writer over a growable owned buffer.
///
/// Appending (`write`, the `put_*` family) always succeeds. Positional
/// writes (`pwrite`, the `pput_*` family) auto-grow the buffer with zero
/// fill whenever the target span ends past the current size, so they never
/// fail either: a writer describes what should exist, while a reader
/// describes what does exist, and the bounds asymmetry between the two is
/// deliberate. For a writer that must not grow, see
/// [`SliceWriter`](super::SliceWriter).
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut w = ByteWriter::new();
/// w.put_u16::<BE>(0x1234);
/// w.pput_u8(5, 0xFF);
/// assert_eq!(w.as_slice(), &[0x12, 0x34, 0, 0, 0, 0xFF]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
    data: Vec<u8>,
}

macro_rules! impl_put {
    ($put:ident, $pput:ident, $ty:ty) => {
        #[doc = concat!("Appends a `", stringify!($ty), "` with byte order `E`.")]
        #[inline(always)]
        pub fn $put<E: Endianness>(&mut self, value: $ty) {
            self.put::<$ty, E>(value)
        }

        #[doc = concat!("Writes a `", stringify!($ty), "` with byte order `E` at `offset`, growing the buffer with zero fill if needed.")]
        #[inline(always)]
        pub fn $pput<E: Endianness>(&mut self, offset: usize, value: $ty) {
            self.pput::<$ty, E>(offset, value)
        }
    };
}

impl ByteWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with at least `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    fn ensure(&mut self, size: usize) {
        if self.data.len() < size {
            self.data.resize(size, 0);
        }
    }

    /// Returns the number of bytes written so far.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been written.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the written bytes.
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the writer and returns the buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Clears the buffer, keeping its allocation.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// Appends raw bytes.
    #[inline]
    pub fn write(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }

    /// Grows the buffer to `size` bytes, padding with `fill`; does nothing
    /// if the buffer is already that long.
    pub fn extend_to(&mut self, size: usize, fill: u8) {
        if size > self.data.len() {
            self.data.resize(size, fill);
        }
    }

    /// Appends `n` copies of `fill`.
    pub fn extend_by(&mut self, n: usize, fill: u8) {
        let target = self.data.len() + n;
        self.data.resize(target, fill);
    }

    /// Writes raw bytes at `offset`, growing the buffer with zero fill if
    /// the span ends past the current size.
    pub fn pwrite(&mut self, offset: usize, data: &[u8]) {
        self.ensure(offset + data.len());
        self.data[offset..offset + data.len()].copy_from_slice(data);
    }

    /// Appends a scalar `T` with byte order `E`.
    #[inline(always)]
    pub fn put<T: Scalar, E: Endianness>(&mut self, value: T) {
        let mut buf = [0u8; 8];
        value.encode::<E>(&mut buf);
        self.data.extend_from_slice(&buf[..T::SIZE]);
    }

    /// Writes a scalar `T` with byte order `E` at `offset`, growing the
    /// buffer with zero fill if the span ends past the current size.
    #[inline(always)]
    pub fn pput<T: Scalar, E: Endianness>(&mut self, offset: usize, value: T) {
        self.ensure(offset + T::SIZE);
        value.encode::<E>(&mut self.data[offset..]);
    }

    /// Appends a `u8`.
    #[inline(always)]
    pub fn put_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    /// Writes a `u8` at `offset`, growing the buffer if needed.
    #[inline(always)]
    pub fn pput_u8(&mut self, offset: usize, value: u8) {
        self.pput::<u8, NE>(offset, value)
    }

    /// Appends an `i8`.
    #[inline(always)]
    pub fn put_i8(&mut self, value: i8) {
        self.data.push(value as u8);
    }

    /// Writes an `i8` at `offset`, growing the buffer if needed.
    #[inline(always)]
    pub fn pput_i8(&mut self, offset: usize, value: i8) {
        self.pput::<i8, NE>(offset, value)
    }

    impl_put!(put_u16, pput_u16, u16);
    impl_put!(put_i16, pput_i16, i16);
    impl_put!(put_u32, pput_u32, u32);
    impl_put!(put_i32, pput_i32, i32);
    impl_put!(put_u64, pput_u64, u64);
    impl_put!(put_i64, pput_i64, i64);
    impl_put!(put_f32, pput_f32, f32);
    impl_put!(put_f64, pput_f64, f64);

    /// Appends a 24-bit unsigned field with byte order `E`; the high byte
    /// of `value` is ignored.
    #[inline]
    pub fn put_u24<E: Endianness>(&mut self, value: u32) {
        self.data.extend_from_slice(&E::write_u24(value));
    }

    /// Writes a 24-bit unsigned field with byte order `E` at `offset`,
    /// growing the buffer if needed; the high byte of `value` is ignored.
    #[inline]
    pub fn pput_u24<E: Endianness>(&mut self, offset: usize, value: u32) {
        self.ensure(offset + 3);
        self.data[offset..offset + 3].copy_from_slice(&E::write_u24(value));
    }

    /// Appends a 24-bit signed field with byte order `E`; values outside
    /// the 24-bit range are truncated to their low 24 bits.
    #[inline]
    pub fn put_i24<E: Endianness>(&mut self, value: i32) {
        self.put_u24::<E>(value as u32)
    }

    /// Writes a 24-bit signed field with byte order `E` at `offset`,
    /// growing the buffer if needed.
    #[inline]
    pub fn pput_i24<E: Endianness>(&mut self, offset: usize, value: i32) {
        self.pput_u24::<E>(offset, value as u32)
    }

    /// Appends a 48-bit unsigned field with byte order `E`; the high two
    /// bytes of `value` are ignored.
    #[inline]
    pub fn put_u48<E: Endianness>(&mut self, value: u64) {
        self.data.extend_from_slice(&E::write_u48(value));
    }

    /// Writes a 48-bit unsigned field with byte order `E` at `offset`,
    /// growing the buffer if needed; the high two bytes of `value` are
    /// ignored.
    #[inline]
    pub fn pput_u48<E: Endianness>(&mut self, offset: usize, value: u64) {
        self.ensure(offset + 6);
        self.data[offset..offset + 6].copy_from_slice(&E::write_u48(value));
    }

    /// Appends a 48-bit signed field with byte order `E`; values outside
    /// the 48-bit range are truncated to their low 48 bits.
    #[inline]
    pub fn put_i48<E: Endianness>(&mut self, value: i64) {
        self.put_u48::<E>(value as u64)
    }

    /// Writes a 48-bit signed field with byte order `E` at `offset`,
    /// growing the buffer if needed.
    #[inline]
    pub fn pput_i48<E: Endianness>(&mut self, offset: usize, value: i64) {
        self.pput_u48::<E>(offset, value as u64)
    }
}
