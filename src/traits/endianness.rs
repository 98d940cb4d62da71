/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Endianness {}
}

/// Marker trait for byte-order selector types.
///
/// Its only implementations are [`BigEndian`], [`LittleEndian`],
/// [`NativeEndian`], and [`ReorderedEndian`]. Typed accessors take one of
/// these as a type parameter, so the byte layout of every field is fixed at
/// compile time, independent of host processor order.
///
/// The trait also carries the per-width byte codecs so that generic code can
/// assemble and disassemble values without naming a concrete order. The
/// 24- and 48-bit widths have no native Rust type; they travel in the low
/// bits of `u32`/`u64` and the unused high bits are ignored on write.
pub trait Endianness: private::Endianness + 'static {
    fn read_u16(bytes: [u8; 2]) -> u16;
    fn write_u16(value: u16) -> [u8; 2];

    fn read_u24(bytes: [u8; 3]) -> u32;
    fn write_u24(value: u32) -> [u8; 3];

    fn read_u32(bytes: [u8; 4]) -> u32;
    fn write_u32(value: u32) -> [u8; 4];

    fn read_u48(bytes: [u8; 6]) -> u64;
    fn write_u48(value: u64) -> [u8; 6];

    fn read_u64(bytes: [u8; 8]) -> u64;
    fn write_u64(value: u64) -> [u8; 8];

    #[inline(always)]
    fn read_f32(bytes: [u8; 4]) -> f32 {
        f32::from_bits(Self::read_u32(bytes))
    }

    #[inline(always)]
    fn write_f32(value: f32) -> [u8; 4] {
        Self::write_u32(value.to_bits())
    }

    #[inline(always)]
    fn read_f64(bytes: [u8; 8]) -> f64 {
        f64::from_bits(Self::read_u64(bytes))
    }

    #[inline(always)]
    fn write_f64(value: f64) -> [u8; 8] {
        Self::write_u64(value.to_bits())
    }
}

/// Selector type for big-endian fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigEndian;

/// Selector type for little-endian fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LittleEndian;

/// Selector type for host-order fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeEndian;

/// Selector type for fields stored in the order opposite to the host's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderedEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

/// Alias for [`NativeEndian`]
pub type NE = NativeEndian;

/// Alias for [`ReorderedEndian`]
pub type RE = ReorderedEndian;

impl private::Endianness for BigEndian {}
impl private::Endianness for LittleEndian {}
impl private::Endianness for NativeEndian {}
impl private::Endianness for ReorderedEndian {}

impl Endianness for BigEndian {
    #[inline(always)]
    fn read_u16(bytes: [u8; 2]) -> u16 {
        u16::from_be_bytes(bytes)
    }

    #[inline(always)]
    fn write_u16(value: u16) -> [u8; 2] {
        value.to_be_bytes()
    }

    #[inline(always)]
    fn read_u24(bytes: [u8; 3]) -> u32 {
        ((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32)
    }

    #[inline(always)]
    fn write_u24(value: u32) -> [u8; 3] {
        [(value >> 16) as u8, (value >> 8) as u8, value as u8]
    }

    #[inline(always)]
    fn read_u32(bytes: [u8; 4]) -> u32 {
        u32::from_be_bytes(bytes)
    }

    #[inline(always)]
    fn write_u32(value: u32) -> [u8; 4] {
        value.to_be_bytes()
    }

    #[inline(always)]
    fn read_u48(bytes: [u8; 6]) -> u64 {
        ((bytes[0] as u64) << 40)
            | ((bytes[1] as u64) << 32)
            | ((bytes[2] as u64) << 24)
            | ((bytes[3] as u64) << 16)
            | ((bytes[4] as u64) << 8)
            | (bytes[5] as u64)
    }

    #[inline(always)]
    fn write_u48(value: u64) -> [u8; 6] {
        [
            (value >> 40) as u8,
            (value >> 32) as u8,
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ]
    }

    #[inline(always)]
    fn read_u64(bytes: [u8; 8]) -> u64 {
        u64::from_be_bytes(bytes)
    }

    #[inline(always)]
    fn write_u64(value: u64) -> [u8; 8] {
        value.to_be_bytes()
    }
}

impl Endianness for LittleEndian {
    #[inline(always)]
    fn read_u16(bytes: [u8; 2]) -> u16 {
        u16::from_le_bytes(bytes)
    }

    #[inline(always)]
    fn write_u16(value: u16) -> [u8; 2] {
        value.to_le_bytes()
    }

    #[inline(always)]
    fn read_u24(bytes: [u8; 3]) -> u32 {
        (bytes[0] as u32) | ((bytes[1] as u32) << 8) | ((bytes[2] as u32) << 16)
    }

    #[inline(always)]
    fn write_u24(value: u32) -> [u8; 3] {
        [value as u8, (value >> 8) as u8, (value >> 16) as u8]
    }

    #[inline(always)]
    fn read_u32(bytes: [u8; 4]) -> u32 {
        u32::from_le_bytes(bytes)
    }

    #[inline(always)]
    fn write_u32(value: u32) -> [u8; 4] {
        value.to_le_bytes()
    }

    #[inline(always)]
    fn read_u48(bytes: [u8; 6]) -> u64 {
        (bytes[0] as u64)
            | ((bytes[1] as u64) << 8)
            | ((bytes[2] as u64) << 16)
            | ((bytes[3] as u64) << 24)
            | ((bytes[4] as u64) << 32)
            | ((bytes[5] as u64) << 40)
    }

    #[inline(always)]
    fn write_u48(value: u64) -> [u8; 6] {
        [
            value as u8,
            (value >> 8) as u8,
            (value >> 16) as u8,
            (value >> 24) as u8,
            (value >> 32) as u8,
            (value >> 40) as u8,
        ]
    }

    #[inline(always)]
    fn read_u64(bytes: [u8; 8]) -> u64 {
        u64::from_le_bytes(bytes)
    }

    #[inline(always)]
    fn write_u64(value: u64) -> [u8; 8] {
        value.to_le_bytes()
    }
}

impl Endianness for NativeEndian {
    #[inline(always)]
    fn read_u16(bytes: [u8; 2]) -> u16 {
        u16::from_ne_bytes(bytes)
    }

    #[inline(always)]
    fn write_u16(value: u16) -> [u8; 2] {
        value.to_ne_bytes()
    }

    #[inline(always)]
    fn read_u24(bytes: [u8; 3]) -> u32 {
        if cfg!(target_endian = "little") {
            LittleEndian::read_u24(bytes)
        } else {
            BigEndian::read_u24(bytes)
        }
    }

    #[inline(always)]
    fn write_u24(value: u32) -> [u8; 3] {
        if cfg!(target_endian = "little") {
            LittleEndian::write_u24(value)
        } else {
            BigEndian::write_u24(value)
        }
    }

    #[inline(always)]
    fn read_u32(bytes: [u8; 4]) -> u32 {
        u32::from_ne_bytes(bytes)
    }

    #[inline(always)]
    fn write_u32(value: u32) -> [u8; 4] {
        value.to_ne_bytes()
    }

    #[inline(always)]
    fn read_u48(bytes: [u8; 6]) -> u64 {
        if cfg!(target_endian = "little") {
            LittleEndian::read_u48(bytes)
        } else {
            BigEndian::read_u48(bytes)
        }
    }

    #[inline(always)]
    fn write_u48(value: u64) -> [u8; 6] {
        if cfg!(target_endian = "little") {
            LittleEndian::write_u48(value)
        } else {
            BigEndian::write_u48(value)
        }
    }

    #[inline(always)]
    fn read_u64(bytes: [u8; 8]) -> u64 {
        u64::from_ne_bytes(bytes)
    }

    #[inline(always)]
    fn write_u64(value: u64) -> [u8; 8] {
        value.to_ne_bytes()
    }
}

impl Endianness for ReorderedEndian {
    #[inline(always)]
    fn read_u16(bytes: [u8; 2]) -> u16 {
        u16::from_ne_bytes(bytes).swap_bytes()
    }

    #[inline(always)]
    fn write_u16(value: u16) -> [u8; 2] {
        value.swap_bytes().to_ne_bytes()
    }

    #[inline(always)]
    fn read_u24(bytes: [u8; 3]) -> u32 {
        if cfg!(target_endian = "little") {
            BigEndian::read_u24(bytes)
        } else {
            LittleEndian::read_u24(bytes)
        }
    }

    #[inline(always)]
    fn write_u24(value: u32) -> [u8; 3] {
        if cfg!(target_endian = "little") {
            BigEndian::write_u24(value)
        } else {
            LittleEndian::write_u24(value)
        }
    }

    #[inline(always)]
    fn read_u32(bytes: [u8; 4]) -> u32 {
        u32::from_ne_bytes(bytes).swap_bytes()
    }

    #[inline(always)]
    fn write_u32(value: u32) -> [u8; 4] {
        value.swap_bytes().to_ne_bytes()
    }

    #[inline(always)]
    fn read_u48(bytes: [u8; 6]) -> u64 {
        if cfg!(target_endian = "little") {
            BigEndian::read_u48(bytes)
        } else {
            LittleEndian::read_u48(bytes)
        }
    }

    #[inline(always)]
    fn write_u48(value: u64) -> [u8; 6] {
        if cfg!(target_endian = "little") {
            BigEndian::write_u48(value)
        } else {
            LittleEndian::write_u48(value)
        }
    }

    #[inline(always)]
    fn read_u64(bytes: [u8; 8]) -> u64 {
        u64::from_ne_bytes(bytes).swap_bytes()
    }

    #[inline(always)]
    fn write_u64(value: u64) -> [u8; 8] {
        value.swap_bytes().to_ne_bytes()
    }
}

/// Sign-extends a 24-bit two's-complement value to [`i32`].
///
/// Bits above the 24th of `value` are ignored.
#[inline(always)]
pub const fn sign_extend_24(value: u32) -> i32 {
    ((value << 8) as i32) >> 8
}

/// Sign-extends a 48-bit two's-complement value to [`i64`].
///
/// Bits above the 48th of `value` are ignored.
#[inline(always)]
pub const fn sign_extend_48(value: u64) -> i64 {
    ((value << 16) as i64) >> 16
}
