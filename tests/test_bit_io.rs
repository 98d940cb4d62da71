/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use bincursor::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_reader_msb_first() -> Result<()> {
    // 0xB3 0x7F = 1011_0011 0111_1111
    let mut r = BitReader::new(&[0xB3, 0x7F]);
    assert_eq!(r.size(), 16);
    assert_eq!(r.read(1)?, 0b1);
    assert_eq!(r.read(3)?, 0b011);
    assert_eq!(r.read(4)?, 0b0011);
    assert_eq!(r.read(8)?, 0x7F);
    assert!(r.eof());
    Ok(())
}

#[test]
fn test_reader_across_bytes() -> Result<()> {
    let mut r = BitReader::new(&[0xB3, 0x7F]);
    // A single read may straddle the byte boundary.
    assert_eq!(r.read(12)?, 0xB37);
    assert_eq!(r.remaining(), 4);
    assert_eq!(r.read(4)?, 0xF);
    Ok(())
}

#[test]
fn test_reader_positional() -> Result<()> {
    let r = BitReader::new(&[0xB3, 0x7F]);
    assert_eq!(r.pread(0, 16)?, 0xB37F);
    assert_eq!(r.pread(4, 8)?, 0x37);
    assert_eq!(r.pread(15, 1)?, 1);
    assert!(r.pread(15, 2).is_err());
    assert_eq!(r.position(), 0);

    let mut r = r;
    r.go(4)?;
    assert_eq!(r.peek(4)?, 0b0011);
    assert_eq!(r.position(), 4);
    assert_eq!(r.read(0)?, 0);
    assert_eq!(r.position(), 4);
    Ok(())
}

#[test]
fn test_reader_failure_leaves_cursor() -> Result<()> {
    let mut r = BitReader::new(&[0xFF]);
    r.go(5)?;
    assert!(r.read(4).is_err());
    assert_eq!(r.position(), 5);
    assert_eq!(r.read(3)?, 0b111);
    assert!(r.read(1).is_err());
    assert!(r.go(9).is_err());
    assert_eq!(r.position(), 8);
    Ok(())
}

#[test]
#[should_panic(expected = "cannot read more than 64 bits")]
fn test_reader_rejects_overlong_read() {
    let mut r = BitReader::new(&[0u8; 16]);
    let _ = r.read(65);
}

#[test]
fn test_reader_full_width() -> Result<()> {
    let mut r = BitReader::new(&[0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x23, 0x45, 0x67]);
    assert_eq!(r.read(64)?, 0xDEADBEEF01234567);
    Ok(())
}

#[test]
fn test_reader_truncate() -> Result<()> {
    let mut r = BitReader::new(&[0xFF, 0xFF]);
    r.go(10)?;
    r.truncate(6)?;
    assert_eq!(r.size(), 6);
    assert_eq!(r.position(), 6);
    assert!(r.truncate(7).is_err());
    r.go(0)?;
    assert_eq!(r.read(6)?, 0b111111);
    assert!(r.read(1).is_err());
    Ok(())
}

#[test]
fn test_writer_packing() {
    let mut w = BitWriter::new();
    assert!(w.is_empty());
    for bit in [true, false, true, true] {
        w.write(bit);
    }
    assert_eq!(w.size(), 4);
    assert_eq!(w.as_bytes(), &[0b1011_0000]);
    for bit in [false, false, true, true, true] {
        w.write(bit);
    }
    assert_eq!(w.size(), 9);
    assert_eq!(w.as_bytes(), &[0b1011_0011, 0b1000_0000]);
}

#[test]
fn test_writer_truncate_rezeroes() {
    let mut w = BitWriter::new();
    for _ in 0..6 {
        w.write(true);
    }
    assert_eq!(w.as_bytes(), &[0xFC]);
    w.truncate(3);
    assert_eq!(w.size(), 3);
    // The freed positions must read as zero again.
    assert_eq!(w.as_bytes(), &[0xE0]);
    // Growing back after the cut keeps the packing consistent.
    w.write(false);
    w.write(true);
    assert_eq!(w.as_bytes(), &[0b1110_1000]);

    w.truncate(100);
    assert_eq!(w.size(), 5);
    w.truncate(0);
    assert_eq!(w.size(), 0);
    assert_eq!(w.as_bytes(), &[] as &[u8]);
}

#[test]
fn test_writer_reset() {
    let mut w = BitWriter::new();
    for _ in 0..12 {
        w.write(true);
    }
    w.reset();
    assert!(w.is_empty());
    w.write(true);
    assert_eq!(w.into_bytes(), vec![0x80]);
}

#[test]
fn test_round_trip() -> Result<()> {
    const N: usize = 1000;
    let mut r = StdRng::seed_from_u64(0);
    let mut v = StdRng::seed_from_u64(1);
    let mut w = BitWriter::new();

    for _ in 0..N {
        let size = r.random_range(1..=64_usize);
        let value = if size == 64 {
            v.random()
        } else {
            v.random::<u64>() & ((1 << size) - 1)
        };
        for i in (0..size).rev() {
            w.write((value >> i) & 1 == 1);
        }
    }

    let mut reader = BitReader::new(w.as_bytes());
    let mut r = StdRng::seed_from_u64(0);
    let mut v = StdRng::seed_from_u64(1);

    for _ in 0..N {
        let size = r.random_range(1..=64_usize);
        let value = if size == 64 {
            v.random()
        } else {
            v.random::<u64>() & ((1 << size) - 1)
        };
        assert_eq!(reader.read(size)?, value);
    }
    // Only the zero padding of the trailing byte may remain.
    assert!(reader.remaining() < 8);
    assert_eq!(reader.read(reader.remaining())?, 0);
    Ok(())
}

#[test]
fn test_all_small_lengths() -> Result<()> {
    // Every length, aligned or not, must survive the writer/reader pair.
    for n in 0..=100_usize {
        let mut w = BitWriter::new();
        let bits: Vec<bool> = (0..n).map(|i| (i * 7 + 3) % 5 < 2).collect();
        for &bit in &bits {
            w.write(bit);
        }
        assert_eq!(w.size(), n);
        assert_eq!(w.as_bytes().len(), n.div_ceil(8));

        let mut r = BitReader::new(w.as_bytes());
        for (i, &bit) in bits.iter().enumerate() {
            assert_eq!(r.read(1)?, bit as u64, "length {n}, bit {i}");
        }
        // The partial trailing byte pads with zeros.
        while !r.eof() {
            assert_eq!(r.read(1)?, 0);
        }
    }
    Ok(())
}

#[test]
fn test_sub_bits() -> Result<()> {
    let data = [0x12, 0x34, 0x56];
    let r = ByteReader::new(&data);
    let mut bits = r.sub_bits(1..2);
    assert_eq!(bits.size(), 8);
    assert_eq!(bits.read(4)?, 0x3);
    assert_eq!(bits.read(4)?, 0x4);
    assert!(bits.read(1).is_err());

    // Clamping mirrors sub: the overlong range shrinks to what exists.
    let bits = r.sub_bits(2..100);
    assert_eq!(bits.size(), 8);

    assert!(r.subx_bits(2..100).is_err());
    let mut bits = r.subx_bits(..)?;
    assert_eq!(bits.size(), 24);
    assert_eq!(bits.read(24)?, 0x123456);
    Ok(())
}

#[test]
fn test_sub_bits_owned() -> Result<()> {
    let r = ByteReader::from_vec(vec![0xAB, 0xCD]);
    let mut bits = r.sub_bits(..);
    drop(r);
    assert_eq!(bits.read(16)?, 0xABCD);
    Ok(())
}

#[test]
fn test_owning_reader() -> Result<()> {
    let mut r = BitReader::from_vec(vec![0x80, 0x01]);
    assert_eq!(r.read(1)?, 1);
    r.go(15)?;
    assert_eq!(r.read(1)?, 1);

    let r = BitReader::from_shared(vec![0xF0].into());
    assert_eq!(r.pread(0, 4)?, 0xF);
    Ok(())
}
