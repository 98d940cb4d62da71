/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Endianness;

/// Inner private trait used to make implementing [`Scalar`]
/// impossible for other types.
mod private {
    pub trait Scalar {}
}

/// The closed family of fixed-width primitives understood by the typed
/// accessors: `u8`/`i8`, `u16`/`i16`, `u32`/`i32`, `u64`/`i64`, `f32`,
/// `f64`.
///
/// Decoding and encoding go through an [`Endianness`] selector; signed types
/// travel through their unsigned twin's byte codec, floats through their bit
/// representation. The 24- and 48-bit field widths are not scalars (they
/// have no native type) and are handled by dedicated reader/writer methods.
///
/// Both methods assume `bytes` holds at least [`Scalar::SIZE`] bytes and
/// panic otherwise; the reader/writer types validate bounds before calling
/// them.
pub trait Scalar: private::Scalar + Copy + 'static {
    /// The number of bytes this type occupies on the wire.
    const SIZE: usize;

    /// Decodes a value from the first [`Scalar::SIZE`] bytes of `bytes`.
    fn decode<E: Endianness>(bytes: &[u8]) -> Self;

    /// Encodes the value into the first [`Scalar::SIZE`] bytes of `bytes`.
    fn encode<E: Endianness>(self, bytes: &mut [u8]);
}

impl private::Scalar for u8 {}
impl private::Scalar for i8 {}
impl private::Scalar for u16 {}
impl private::Scalar for i16 {}
impl private::Scalar for u32 {}
impl private::Scalar for i32 {}
impl private::Scalar for u64 {}
impl private::Scalar for i64 {}
impl private::Scalar for f32 {}
impl private::Scalar for f64 {}

impl Scalar for u8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn decode<E: Endianness>(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline(always)]
    fn encode<E: Endianness>(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }
}

impl Scalar for i8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn decode<E: Endianness>(bytes: &[u8]) -> Self {
        bytes[0] as i8
    }

    #[inline(always)]
    fn encode<E: Endianness>(self, bytes: &mut [u8]) {
        bytes[0] = self as u8;
    }
}

macro_rules! impl_scalar {
    ($ty:ty, $size:literal, $read:ident, $write:ident) => {
        impl Scalar for $ty {
            const SIZE: usize = $size;

            #[inline(always)]
            fn decode<E: Endianness>(bytes: &[u8]) -> Self {
                let mut buf = [0; $size];
                buf.copy_from_slice(&bytes[..$size]);
                E::$read(buf)
            }

            #[inline(always)]
            fn encode<E: Endianness>(self, bytes: &mut [u8]) {
                bytes[..$size].copy_from_slice(&E::$write(self));
            }
        }
    };
    ($ty:ty as $un:ty, $size:literal, $read:ident, $write:ident) => {
        impl Scalar for $ty {
            const SIZE: usize = $size;

            #[inline(always)]
            fn decode<E: Endianness>(bytes: &[u8]) -> Self {
                let mut buf = [0; $size];
                buf.copy_from_slice(&bytes[..$size]);
                E::$read(buf) as $ty
            }

            #[inline(always)]
            fn encode<E: Endianness>(self, bytes: &mut [u8]) {
                bytes[..$size].copy_from_slice(&E::$write(self as $un));
            }
        }
    };
}

impl_scalar!(u16, 2, read_u16, write_u16);
impl_scalar!(u32, 4, read_u32, write_u32);
impl_scalar!(u64, 8, read_u64, write_u64);
impl_scalar!(f32, 4, read_f32, write_f32);
impl_scalar!(f64, 8, read_f64, write_f64);
impl_scalar!(i16 as u16, 2, read_u16, write_u16);
impl_scalar!(i32 as u32, 4, read_u32, write_u32);
impl_scalar!(i64 as u64, 8, read_u64, write_u64);
