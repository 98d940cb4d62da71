/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// An append/positional writer over a caller-supplied fixed-capacity slice.
///
/// Unlike [`ByteWriter`](super::ByteWriter), this writer never grows: any
/// write whose span would exceed the wrapped slice's length fails with
/// [`OutOfRange`] and touches nothing, so there are no partial writes. Use
/// it when the destination's size and lifetime are controlled externally,
/// such as a pre-sized region inside a larger output buffer.
///
/// Sequential writes (`write`, the `put_*` family) go through an internal
/// cursor that only advances on success; positional writes (`pwrite`, the
/// `pput_*` family) leave the cursor alone.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut buf = [0u8; 4];
/// let mut w = SliceWriter::new(&mut buf);
/// w.put_u16::<BE>(0x0102)?;
/// assert!(w.put_u32::<BE>(0xDEAD_BEEF).is_err());
/// assert_eq!(w.position(), 2);
/// # Ok::<(), OutOfRange>(())
/// ```
#[derive(Debug)]
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

macro_rules! impl_put {
    ($put:ident, $pput:ident, $ty:ty) => {
        #[doc = concat!("Writes a `", stringify!($ty), "` with byte order `E` at the cursor and advances past it.")]
        #[inline(always)]
        pub fn $put<E: Endianness>(&mut self, value: $ty) -> Result<(), OutOfRange> {
            self.put::<$ty, E>(value)
        }

        #[doc = concat!("Writes a `", stringify!($ty), "` with byte order `E` at `offset`; the cursor does not move.")]
        #[inline(always)]
        pub fn $pput<E: Endianness>(&mut self, offset: usize, value: $ty) -> Result<(), OutOfRange> {
            self.pput::<$ty, E>(offset, value)
        }
    };
}

impl<'a> SliceWriter<'a> {
    /// Creates a writer over `buf` with the cursor at 0.
    pub fn new(buf: &'a mut [u8]) -> Self {
        SliceWriter { buf, offset: 0 }
    }

    /// Returns the fixed capacity of the wrapped slice.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the cursor position.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes between the cursor and the end.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Returns the whole wrapped buffer, including any untouched bytes.
    #[inline(always)]
    pub fn as_slice(&self) -> &[u8] {
        self.buf
    }

    /// Writes raw bytes at the cursor and advances past them, or fails
    /// without writing anything.
    pub fn write(&mut self, data: &[u8]) -> Result<(), OutOfRange> {
        self.pwrite(self.offset, data)?;
        self.offset += data.len();
        Ok(())
    }

    /// Writes raw bytes at `offset`, or fails without writing anything;
    /// the cursor does not move.
    pub fn pwrite(&mut self, offset: usize, data: &[u8]) -> Result<(), OutOfRange> {
        OutOfRange::check(offset, data.len(), self.buf.len())?;
        self.buf[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Writes a scalar `T` with byte order `E` at the cursor and advances
    /// past it, or fails without writing anything.
    #[inline(always)]
    pub fn put<T: Scalar, E: Endianness>(&mut self, value: T) -> Result<(), OutOfRange> {
        self.pput::<T, E>(self.offset, value)?;
        self.offset += T::SIZE;
        Ok(())
    }

    /// Writes a scalar `T` with byte order `E` at `offset`; the cursor does
    /// not move.
    #[inline(always)]
    pub fn pput<T: Scalar, E: Endianness>(
        &mut self,
        offset: usize,
        value: T,
    ) -> Result<(), OutOfRange> {
        OutOfRange::check(offset, T::SIZE, self.buf.len())?;
        value.encode::<E>(&mut self.buf[offset..]);
        Ok(())
    }

    /// Writes a `u8` at the cursor and advances past it.
    #[inline(always)]
    pub fn put_u8(&mut self, value: u8) -> Result<(), OutOfRange> {
        self.put::<u8, NE>(value)
    }

    /// Writes a `u8` at `offset`; the cursor does not move.
    #[inline(always)]
    pub fn pput_u8(&mut self, offset: usize, value: u8) -> Result<(), OutOfRange> {
        self.pput::<u8, NE>(offset, value)
    }

    /// Writes an `i8` at the cursor and advances past it.
    #[inline(always)]
    pub fn put_i8(&mut self, value: i8) -> Result<(), OutOfRange> {
        self.put::<i8, NE>(value)
    }

    /// Writes an `i8` at `offset`; the cursor does not move.
    #[inline(always)]
    pub fn pput_i8(&mut self, offset: usize, value: i8) -> Result<(), OutOfRange> {
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

    /// Writes a 24-bit unsigned field with byte order `E` at the cursor and
    /// advances past it; the high byte of `value` is ignored.
    #[inline]
    pub fn put_u24<E: Endianness>(&mut self, value: u32) -> Result<(), OutOfRange> {
        self.pput_u24::<E>(self.offset, value)?;
        self.offset += 3;
        Ok(())
    }

    /// Writes a 24-bit unsigned field with byte order `E` at `offset`; the
    /// high byte of `value` is ignored.
    #[inline]
    pub fn pput_u24<E: Endianness>(&mut self, offset: usize, value: u32) -> Result<(), OutOfRange> {
        OutOfRange::check(offset, 3, self.buf.len())?;
        self.buf[offset..offset + 3].copy_from_slice(&E::write_u24(value));
        Ok(())
    }

    /// Writes a 24-bit signed field with byte order `E` at the cursor and
    /// advances past it; values outside the 24-bit range are truncated.
    #[inline]
    pub fn put_i24<E: Endianness>(&mut self, value: i32) -> Result<(), OutOfRange> {
        self.put_u24::<E>(value as u32)
    }

    /// Writes a 24-bit signed field with byte order `E` at `offset`.
    #[inline]
    pub fn pput_i24<E: Endianness>(&mut self, offset: usize, value: i32) -> Result<(), OutOfRange> {
        self.pput_u24::<E>(offset, value as u32)
    }

    /// Writes a 48-bit unsigned field with byte order `E` at the cursor and
    /// advances past it; the high two bytes of `value` are ignored.
    #[inline]
    pub fn put_u48<E: Endianness>(&mut self, value: u64) -> Result<(), OutOfRange> {
        self.pput_u48::<E>(self.offset, value)?;
        self.offset += 6;
        Ok(())
    }

    /// Writes a 48-bit unsigned field with byte order `E` at `offset`; the
    /// high two bytes of `value` are ignored.
    #[inline]
    pub fn pput_u48<E: Endianness>(&mut self, offset: usize, value: u64) -> Result<(), OutOfRange> {
        OutOfRange::check(offset, 6, self.buf.len())?;
        self.buf[offset..offset + 6].copy_from_slice(&E::write_u48(value));
        Ok(())
    }

    /// Writes a 48-bit signed field with byte order `E` at the cursor and
    /// advances past it; values outside the 48-bit range are truncated.
    #[inline]
    pub fn put_i48<E: Endianness>(&mut self, value: i64) -> Result<(), OutOfRange> {
        self.put_u48::<E>(value as u64)
    }

    /// Writes a 48-bit signed field with byte order `E` at `offset`.
    #[inline]
    pub fn pput_i48<E: Endianness>(&mut self, offset: usize, value: i64) -> Result<(), OutOfRange> {
        self.pput_u48::<E>(offset, value as u64)
    }
}
