/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::ops::{Bound, RangeBounds};
use std::sync::Arc;

use super::{Backing, BitReader};
use crate::traits::*;

/// A byte-granularity cursor over an immutable buffer.
///
/// The reader either borrows the buffer (`new`) or owns a reference-counted
/// copy (`from_shared`, `from_vec`). Sub-readers created with [`sub`] and
/// [`subx`] share the owned allocation through a refcount increment and
/// never copy bytes; in borrowed mode the compiler ties every sub-reader to
/// the original borrow.
///
/// All accessors validate `offset + size <= size()` before touching the
/// buffer; a failed operation returns [`OutOfRange`] and leaves the cursor
/// where it was. The raw `read`/`pread` methods are the one exception to
/// strict bounds checking: they are best-effort and clamp to the available
/// bytes, while their `readx`/`preadx` twins demand the exact amount. Typed
/// accessors cover unsigned and signed 8/16/24/32/48/64-bit integers and
/// 32/64-bit floats in every byte order; the 24- and 48-bit widths are
/// assembled byte by byte and sign-extended when signed.
///
/// [`sub`]: ByteReader::sub
/// [`subx`]: ByteReader::subx
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut r = ByteReader::new(&[0x12, 0x34, 0x56, 0x78]);
/// assert_eq!(r.get_u16::<BE>()?, 0x1234);
/// assert_eq!(r.get_u16::<LE>()?, 0x7856);
/// assert!(r.eof());
/// # Ok::<(), OutOfRange>(())
/// ```
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    backing: Backing<'a>,
    start: usize,
    len: usize,
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader borrowing `data`.
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader {
            backing: Backing::Borrowed(data),
            start: 0,
            len: data.len(),
            offset: 0,
        }
    }
}

impl ByteReader<'static> {
    /// Creates a reader owning a shared copy of the bytes.
    pub fn from_shared(data: Arc<[u8]>) -> Self {
        let len = data.len();
        ByteReader {
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

impl Cursor for ByteReader<'_> {
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

macro_rules! impl_get {
    ($get:ident, $pget:ident, $ty:ty) => {
        #[doc = concat!("Reads a `", stringify!($ty), "` with byte order `E` at the cursor and advances past it.")]
        #[inline(always)]
        pub fn $get<E: Endianness>(&mut self) -> Result<$ty, OutOfRange> {
            self.get::<$ty, E>()
        }

        #[doc = concat!("Reads a `", stringify!($ty), "` with byte order `E` at `offset`; the cursor does not move.")]
        #[inline(always)]
        pub fn $pget<E: Endianness>(&self, offset: usize) -> Result<$ty, OutOfRange> {
            self.pget::<$ty, E>(offset)
        }
    };
}

impl<'a> ByteReader<'a> {
    #[inline(always)]
    fn data(&self) -> &[u8] {
        &self.backing.as_slice()[self.start..self.start + self.len]
    }

    #[inline(always)]
    fn view(&self, start: usize, len: usize) -> ByteReader<'a> {
        ByteReader {
            backing: self.backing.clone(),
            start: self.start + start,
            len,
            offset: 0,
        }
    }

    #[inline]
    fn resolve_bounds(range: &impl RangeBounds<usize>) -> (usize, Option<usize>) {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => Some(e.saturating_add(1)),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        (start, end)
    }

    /// Returns the whole readable window, ignoring the cursor.
    #[inline(always)]
    pub fn all(&self) -> &[u8] {
        self.data()
    }

    /// Shrinks the logical length to `new_size` bytes.
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

    /// Returns the next `size` bytes without advancing and without copying.
    #[inline]
    pub fn peek(&self, size: usize) -> Result<&[u8], OutOfRange> {
        OutOfRange::check(self.offset, size, self.len)?;
        Ok(&self.data()[self.offset..self.offset + size])
    }

    /// Advances past `data` and returns true if the bytes at the cursor
    /// exactly match it; otherwise leaves the cursor untouched and returns
    /// false.
    pub fn skip_if(&mut self, data: &[u8]) -> bool {
        let matches = match self.peek(data.len()) {
            Ok(head) => head == data,
            Err(_) => false,
        };
        if matches {
            self.offset += data.len();
        }
        matches
    }

    /// Copies out up to `size` bytes at the cursor, best-effort.
    ///
    /// Clamps to the available bytes (possibly returning fewer than asked,
    /// or none at eof) and advances by the amount actually returned. Use
    /// [`readx`](ByteReader::readx) when the full amount is required.
    pub fn read(&mut self, size: usize) -> Vec<u8> {
        let take = size.min(self.len - self.offset);
        let out = self.data()[self.offset..self.offset + take].to_vec();
        self.offset += take;
        out
    }

    /// Copies out exactly `size` bytes at the cursor and advances, or fails
    /// without moving the cursor.
    pub fn readx(&mut self, size: usize) -> Result<Vec<u8>, OutOfRange> {
        let out = self.peek(size)?.to_vec();
        self.offset += size;
        Ok(out)
    }

    /// Fills as much of `buf` as possible from the cursor, best-effort.
    ///
    /// Returns the number of bytes copied and advances by that amount.
    pub fn read_into(&mut self, buf: &mut [u8]) -> usize {
        let take = buf.len().min(self.len - self.offset);
        buf[..take].copy_from_slice(&self.data()[self.offset..self.offset + take]);
        self.offset += take;
        take
    }

    /// Fills all of `buf` from the cursor and advances, or fails without
    /// moving the cursor.
    pub fn readx_into(&mut self, buf: &mut [u8]) -> Result<(), OutOfRange> {
        let src = self.peek(buf.len())?;
        buf.copy_from_slice(src);
        self.offset += buf.len();
        Ok(())
    }

    /// Copies out up to `size` bytes at `offset`, best-effort; the cursor
    /// does not move.
    ///
    /// An `offset` at or beyond the end yields an empty buffer.
    pub fn pread(&self, offset: usize, size: usize) -> Vec<u8> {
        let take = size.min(self.len.saturating_sub(offset));
        if take == 0 {
            return Vec::new();
        }
        self.data()[offset..offset + take].to_vec()
    }

    /// Copies out exactly `size` bytes at `offset`, or fails; the cursor
    /// does not move.
    pub fn preadx(&self, offset: usize, size: usize) -> Result<Vec<u8>, OutOfRange> {
        OutOfRange::check(offset, size, self.len)?;
        Ok(self.data()[offset..offset + size].to_vec())
    }

    /// Fills as much of `buf` as possible from `offset`, best-effort,
    /// returning the number of bytes copied; the cursor does not move.
    ///
    /// An `offset` at or beyond the end copies nothing.
    pub fn pread_into(&self, offset: usize, buf: &mut [u8]) -> usize {
        let take = buf.len().min(self.len.saturating_sub(offset));
        if take == 0 {
            return 0;
        }
        buf[..take].copy_from_slice(&self.data()[offset..offset + take]);
        take
    }

    /// Fills all of `buf` from `offset`, or fails; the cursor does not
    /// move.
    pub fn preadx_into(&self, offset: usize, buf: &mut [u8]) -> Result<(), OutOfRange> {
        OutOfRange::check(offset, buf.len(), self.len)?;
        buf.copy_from_slice(&self.data()[offset..offset + buf.len()]);
        Ok(())
    }

    /// Reads a scalar `T` with byte order `E` at the cursor and advances
    /// past it, or fails without moving the cursor.
    #[inline(always)]
    pub fn get<T: Scalar, E: Endianness>(&mut self) -> Result<T, OutOfRange> {
        let value = self.pget::<T, E>(self.offset)?;
        self.offset += T::SIZE;
        Ok(value)
    }

    /// Reads a scalar `T` with byte order `E` at `offset`; the cursor does
    /// not move.
    #[inline(always)]
    pub fn pget<T: Scalar, E: Endianness>(&self, offset: usize) -> Result<T, OutOfRange> {
        OutOfRange::check(offset, T::SIZE, self.len)?;
        Ok(T::decode::<E>(&self.data()[offset..]))
    }

    /// Reads a `u8` at the cursor and advances past it.
    #[inline(always)]
    pub fn get_u8(&mut self) -> Result<u8, OutOfRange> {
        self.get::<u8, NE>()
    }

    /// Reads a `u8` at `offset`; the cursor does not move.
    #[inline(always)]
    pub fn pget_u8(&self, offset: usize) -> Result<u8, OutOfRange> {
        self.pget::<u8, NE>(offset)
    }

    /// Reads an `i8` at the cursor and advances past it.
    #[inline(always)]
    pub fn get_i8(&mut self) -> Result<i8, OutOfRange> {
        self.get::<i8, NE>()
    }

    /// Reads an `i8` at `offset`; the cursor does not move.
    #[inline(always)]
    pub fn pget_i8(&self, offset: usize) -> Result<i8, OutOfRange> {
        self.pget::<i8, NE>(offset)
    }

    impl_get!(get_u16, pget_u16, u16);
    impl_get!(get_i16, pget_i16, i16);
    impl_get!(get_u32, pget_u32, u32);
    impl_get!(get_i32, pget_i32, i32);
    impl_get!(get_u64, pget_u64, u64);
    impl_get!(get_i64, pget_i64, i64);
    impl_get!(get_f32, pget_f32, f32);
    impl_get!(get_f64, pget_f64, f64);

    /// Reads a 24-bit unsigned field with byte order `E` at `offset` into
    /// the low bits of a `u32`; the cursor does not move.
    #[inline]
    pub fn pget_u24<E: Endianness>(&self, offset: usize) -> Result<u32, OutOfRange> {
        OutOfRange::check(offset, 3, self.len)?;
        let d = self.data();
        Ok(E::read_u24([d[offset], d[offset + 1], d[offset + 2]]))
    }

    /// Reads a 24-bit unsigned field with byte order `E` at the cursor and
    /// advances past it.
    #[inline]
    pub fn get_u24<E: Endianness>(&mut self) -> Result<u32, OutOfRange> {
        let value = self.pget_u24::<E>(self.offset)?;
        self.offset += 3;
        Ok(value)
    }

    /// Reads a 24-bit signed field with byte order `E` at `offset`,
    /// sign-extended to `i32`; the cursor does not move.
    #[inline]
    pub fn pget_i24<E: Endianness>(&self, offset: usize) -> Result<i32, OutOfRange> {
        Ok(sign_extend_24(self.pget_u24::<E>(offset)?))
    }

    /// Reads a 24-bit signed field with byte order `E` at the cursor,
    /// sign-extended to `i32`, and advances past it.
    #[inline]
    pub fn get_i24<E: Endianness>(&mut self) -> Result<i32, OutOfRange> {
        Ok(sign_extend_24(self.get_u24::<E>()?))
    }

    /// Reads a 48-bit unsigned field with byte order `E` at `offset` into
    /// the low bits of a `u64`; the cursor does not move.
    #[inline]
    pub fn pget_u48<E: Endianness>(&self, offset: usize) -> Result<u64, OutOfRange> {
        OutOfRange::check(offset, 6, self.len)?;
        let d = self.data();
        Ok(E::read_u48([
            d[offset],
            d[offset + 1],
            d[offset + 2],
            d[offset + 3],
            d[offset + 4],
            d[offset + 5],
        ]))
    }

    /// Reads a 48-bit unsigned field with byte order `E` at the cursor and
    /// advances past it.
    #[inline]
    pub fn get_u48<E: Endianness>(&mut self) -> Result<u64, OutOfRange> {
        let value = self.pget_u48::<E>(self.offset)?;
        self.offset += 6;
        Ok(value)
    }

    /// Reads a 48-bit signed field with byte order `E` at `offset`,
    /// sign-extended to `i64`; the cursor does not move.
    #[inline]
    pub fn pget_i48<E: Endianness>(&self, offset: usize) -> Result<i64, OutOfRange> {
        Ok(sign_extend_48(self.pget_u48::<E>(offset)?))
    }

    /// Reads a 48-bit signed field with byte order `E` at the cursor,
    /// sign-extended to `i64`, and advances past it.
    #[inline]
    pub fn get_i48<E: Endianness>(&mut self) -> Result<i64, OutOfRange> {
        Ok(sign_extend_48(self.get_u48::<E>()?))
    }

    /// Reads up to and including the next `\n`, returning the line without
    /// its terminator; one `\r` before the `\n` is stripped too.
    ///
    /// If no terminator follows the cursor, returns the rest of the buffer;
    /// at eof, returns an empty buffer. Always advances past what it
    /// returned (and the terminator, if any).
    pub fn get_line(&mut self) -> Vec<u8> {
        let rest = &self.data()[self.offset..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                let mut end = pos;
                if end > 0 && rest[end - 1] == b'\r' {
                    end -= 1;
                }
                let line = rest[..end].to_vec();
                self.offset += pos + 1;
                line
            }
            None => {
                let line = rest.to_vec();
                self.offset = self.len;
                line
            }
        }
    }

    /// Reads up to and including a NUL terminator, returning the content
    /// without it, and advances past the terminator.
    ///
    /// Fails with [`OutOfRange`] if no NUL precedes the end of the buffer;
    /// the cursor does not move in that case.
    pub fn get_cstr(&mut self) -> Result<Vec<u8>, OutOfRange> {
        let content = self.pget_cstr(self.offset)?;
        self.offset += content.len() + 1;
        Ok(content)
    }

    /// Reads a NUL-terminated string at `offset`, returning the content
    /// without the terminator; the cursor does not move.
    pub fn pget_cstr(&self, offset: usize) -> Result<Vec<u8>, OutOfRange> {
        OutOfRange::check(offset, 0, self.len)?;
        let rest = &self.data()[offset..];
        match rest.iter().position(|&b| b == 0) {
            Some(pos) => Ok(rest[..pos].to_vec()),
            None => Err(OutOfRange {
                offset,
                size: rest.len() + 1,
                len: self.len,
            }),
        }
    }

    /// Returns a sub-reader over `range`, clamped to the available length.
    ///
    /// The sub-reader shares the backing buffer (no bytes are copied) and
    /// starts with its cursor at 0. Out-of-bounds parts of the range are
    /// silently dropped, so the result may be shorter than asked, or empty.
    /// Use [`subx`](ByteReader::subx) for the exact-length form.
    pub fn sub(&self, range: impl RangeBounds<usize>) -> ByteReader<'a> {
        let (start, end) = Self::resolve_bounds(&range);
        let start = start.min(self.len);
        let end = end.unwrap_or(self.len).min(self.len).max(start);
        self.view(start, end - start)
    }

    /// Returns a sub-reader over `range`, requiring every byte of the range
    /// to be in bounds.
    pub fn subx(&self, range: impl RangeBounds<usize>) -> Result<ByteReader<'a>, OutOfRange> {
        let (start, end) = Self::resolve_bounds(&range);
        let end = end.unwrap_or(self.len);
        if start > end {
            return Err(OutOfRange {
                offset: start,
                size: 0,
                len: self.len,
            });
        }
        OutOfRange::check(start, end - start, self.len)?;
        Ok(self.view(start, end - start))
    }

    /// Returns a bit-granularity reader over the byte `range`, clamped like
    /// [`sub`](ByteReader::sub).
    pub fn sub_bits(&self, range: impl RangeBounds<usize>) -> BitReader<'a> {
        let r = self.sub(range);
        BitReader::from_window(r.backing, r.start, r.len * 8)
    }

    /// Returns a bit-granularity reader over the byte `range`, exact like
    /// [`subx`](ByteReader::subx).
    pub fn subx_bits(&self, range: impl RangeBounds<usize>) -> Result<BitReader<'a>, OutOfRange> {
        let r = self.subx(range)?;
        Ok(BitReader::from_window(r.backing, r.start, r.len * 8))
    }
}
