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

const DATA: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

#[test]
fn test_widths_be() -> Result<()> {
    let r = ByteReader::new(&DATA);
    assert_eq!(r.pget_u16::<BE>(0)?, 0x0123);
    assert_eq!(r.pget_u24::<BE>(0)?, 0x012345);
    assert_eq!(r.pget_u32::<BE>(0)?, 0x01234567);
    assert_eq!(r.pget_u48::<BE>(0)?, 0x0123456789AB);
    assert_eq!(r.pget_u64::<BE>(0)?, 0x0123456789ABCDEF);
    assert_eq!(r.pget_i16::<BE>(6)?, 0xCDEF_u16 as i16);
    assert_eq!(r.pget_i64::<BE>(0)?, 0x0123456789ABCDEF_i64);
    Ok(())
}

#[test]
fn test_widths_le() -> Result<()> {
    let r = ByteReader::new(&DATA);
    assert_eq!(r.pget_u16::<LE>(0)?, 0x2301);
    assert_eq!(r.pget_u24::<LE>(0)?, 0x452301);
    assert_eq!(r.pget_u32::<LE>(0)?, 0x67452301);
    assert_eq!(r.pget_u48::<LE>(0)?, 0xAB8967452301);
    assert_eq!(r.pget_u64::<LE>(0)?, 0xEFCDAB8967452301);
    Ok(())
}

#[test]
fn test_native_and_reordered() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..1000 {
        let bytes: [u8; 8] = rng.random();
        let r = ByteReader::new(&bytes);
        assert_eq!(r.pget_u16::<NE>(0)?, u16::from_ne_bytes([bytes[0], bytes[1]]));
        assert_eq!(
            r.pget_u16::<RE>(0)?,
            u16::from_ne_bytes([bytes[0], bytes[1]]).swap_bytes()
        );
        assert_eq!(r.pget_u32::<NE>(0)?, u32::from_ne_bytes(bytes[..4].try_into()?));
        assert_eq!(
            r.pget_u32::<RE>(0)?,
            u32::from_ne_bytes(bytes[..4].try_into()?).swap_bytes()
        );
        assert_eq!(r.pget_u64::<NE>(0)?, u64::from_ne_bytes(bytes));
        assert_eq!(r.pget_u64::<RE>(0)?, u64::from_ne_bytes(bytes).swap_bytes());
        // The widths with no native type fall back to the per-target order.
        if cfg!(target_endian = "little") {
            assert_eq!(r.pget_u24::<NE>(0)?, r.pget_u24::<LE>(0)?);
            assert_eq!(r.pget_u24::<RE>(0)?, r.pget_u24::<BE>(0)?);
            assert_eq!(r.pget_u48::<NE>(0)?, r.pget_u48::<LE>(0)?);
            assert_eq!(r.pget_u48::<RE>(0)?, r.pget_u48::<BE>(0)?);
        } else {
            assert_eq!(r.pget_u24::<NE>(0)?, r.pget_u24::<BE>(0)?);
            assert_eq!(r.pget_u24::<RE>(0)?, r.pget_u24::<LE>(0)?);
            assert_eq!(r.pget_u48::<NE>(0)?, r.pget_u48::<BE>(0)?);
            assert_eq!(r.pget_u48::<RE>(0)?, r.pget_u48::<LE>(0)?);
        }
    }
    Ok(())
}

#[test]
fn test_sign_extension() -> Result<()> {
    let r = ByteReader::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(r.pget_i24::<BE>(0)?, -1);
    assert_eq!(r.pget_i48::<BE>(0)?, -1);

    let r = ByteReader::new(&[0x80, 0x00, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(r.pget_i24::<BE>(0)?, -(1 << 23));
    assert_eq!(r.pget_i48::<BE>(0)?, -(1 << 47));

    let r = ByteReader::new(&[0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(r.pget_i24::<BE>(0)?, (1 << 23) - 1);
    assert_eq!(r.pget_i48::<BE>(0)?, (1 << 47) - 1);

    // The same bytes read little-endian put the sign at the other end.
    let r = ByteReader::new(&[0x00, 0x00, 0x80]);
    assert_eq!(r.pget_i24::<LE>(0)?, -(1 << 23));
    Ok(())
}

#[test]
fn test_floats() -> Result<()> {
    let r = ByteReader::new(&[0x3F, 0x80, 0x00, 0x00]);
    assert_eq!(r.pget_f32::<BE>(0)?, 1.0);
    let r = ByteReader::new(&[0x00, 0x00, 0x80, 0x3F]);
    assert_eq!(r.pget_f32::<LE>(0)?, 1.0);
    let bytes = (-2.5_f64).to_be_bytes();
    let r = ByteReader::new(&bytes);
    assert_eq!(r.pget_f64::<BE>(0)?, -2.5);
    Ok(())
}

#[test]
fn test_sequential_and_positional() -> Result<()> {
    let mut r = ByteReader::new(&DATA);
    assert_eq!(r.get_u8()?, 0x01);
    assert_eq!(r.position(), 1);
    // Positional reads never move the cursor.
    assert_eq!(r.pget_u16::<BE>(4)?, 0x89AB);
    assert_eq!(r.position(), 1);
    assert_eq!(r.get_u16::<BE>()?, 0x2345);
    assert_eq!(r.position(), 3);
    assert_eq!(r.remaining(), 5);
    r.go(6)?;
    assert_eq!(r.get_u16::<LE>()?, 0xEFCD);
    assert!(r.eof());
    Ok(())
}

#[test]
fn test_failure_leaves_cursor() -> Result<()> {
    let mut r = ByteReader::new(&[0x01, 0x02, 0x03]);
    r.go(1)?;
    assert!(r.get_u32::<BE>().is_err());
    assert_eq!(r.position(), 1);
    assert!(r.get_u24::<BE>().is_err());
    assert_eq!(r.position(), 1);
    assert!(r.readx(3).is_err());
    assert_eq!(r.position(), 1);
    assert!(r.skip(5).is_err());
    assert_eq!(r.position(), 1);
    // A failure reports the requested span and the window length.
    assert_eq!(
        r.pget_u32::<BE>(2).unwrap_err(),
        OutOfRange {
            offset: 2,
            size: 4,
            len: 3
        }
    );
    // The same request still works where it fits.
    assert_eq!(r.get_u16::<BE>()?, 0x0203);
    Ok(())
}

#[test]
fn test_bounds_overflow() {
    let r = ByteReader::new(&[0u8; 4]);
    // offset + size wrapping around usize must not pass the bounds check.
    assert!(r.pget_u64::<BE>(usize::MAX - 2).is_err());
    assert!(r.preadx(usize::MAX, 2).is_err());
}

#[test]
fn test_read_clamps_readx_exact() -> Result<()> {
    let mut r = ByteReader::new(&[1, 2, 3, 4, 5]);
    assert_eq!(r.read(3), vec![1, 2, 3]);
    assert_eq!(r.read(10), vec![4, 5]);
    assert_eq!(r.read(10), vec![]);
    assert!(r.eof());

    r.go(0)?;
    assert_eq!(r.readx(5)?, vec![1, 2, 3, 4, 5]);
    assert!(r.readx(1).is_err());

    r.go(3)?;
    let mut buf = [0u8; 4];
    assert_eq!(r.read_into(&mut buf), 2);
    assert_eq!(buf, [4, 5, 0, 0]);
    assert!(r.eof());

    r.go(1)?;
    r.readx_into(&mut buf)?;
    assert_eq!(buf, [2, 3, 4, 5]);
    Ok(())
}

#[test]
fn test_pread_clamps_preadx_exact() -> Result<()> {
    let r = ByteReader::new(&[1, 2, 3, 4, 5]);
    assert_eq!(r.pread(3, 10), vec![4, 5]);
    assert_eq!(r.pread(5, 10), vec![]);
    assert_eq!(r.pread(100, 10), vec![]);
    assert_eq!(r.preadx(3, 2)?, vec![4, 5]);
    assert!(r.preadx(3, 3).is_err());

    let mut buf = [0u8; 2];
    assert_eq!(r.pread_into(4, &mut buf), 1);
    assert_eq!(buf, [5, 0]);
    r.preadx_into(0, &mut buf)?;
    assert_eq!(buf, [1, 2]);
    assert!(r.preadx_into(4, &mut buf).is_err());
    // A start at or past the end copies nothing and leaves the buffer
    // alone.
    let mut buf = [0xAAu8; 2];
    assert_eq!(r.pread_into(5, &mut buf), 0);
    assert_eq!(r.pread_into(100, &mut buf), 0);
    assert_eq!(buf, [0xAA, 0xAA]);
    // Nothing above moved the cursor.
    assert_eq!(r.position(), 0);
    Ok(())
}

#[test]
fn test_peek_and_skip_if() -> Result<()> {
    let mut r = ByteReader::new(b"MAGIC:payload");
    assert_eq!(r.peek(5)?, b"MAGIC");
    assert_eq!(r.position(), 0);
    assert!(!r.skip_if(b"OTHER"));
    assert_eq!(r.position(), 0);
    assert!(r.skip_if(b"MAGIC:"));
    assert_eq!(r.read(100), b"payload");
    // A needle longer than what remains never matches.
    r.go(7)?;
    assert!(!r.skip_if(b"payload-and-more"));
    assert_eq!(r.position(), 7);
    Ok(())
}

#[test]
fn test_truncate() -> Result<()> {
    let mut r = ByteReader::new(&DATA);
    r.go(6)?;
    r.truncate(4)?;
    assert_eq!(r.size(), 4);
    // The cursor is pulled back to the new end.
    assert_eq!(r.position(), 4);
    assert!(r.truncate(5).is_err());
    assert_eq!(r.all(), &DATA[..4]);
    Ok(())
}

#[test]
fn test_get_line() {
    let mut r = ByteReader::new(b"one\ntwo\r\nthree");
    assert_eq!(r.get_line(), b"one");
    assert_eq!(r.get_line(), b"two");
    assert_eq!(r.get_line(), b"three");
    assert!(r.eof());
    assert_eq!(r.get_line(), b"");

    // Only one carriage return is stripped, and only before the newline.
    let mut r = ByteReader::new(b"a\r\r\nb\rc\n");
    assert_eq!(r.get_line(), b"a\r");
    assert_eq!(r.get_line(), b"b\rc");

    let mut r = ByteReader::new(b"\n\n");
    assert_eq!(r.get_line(), b"");
    assert_eq!(r.get_line(), b"");
    assert!(r.eof());
}

#[test]
fn test_cstr() -> Result<()> {
    let mut r = ByteReader::new(b"abc\0def\0tail");
    assert_eq!(r.get_cstr()?, b"abc");
    assert_eq!(r.position(), 4);
    assert_eq!(r.get_cstr()?, b"def");
    assert_eq!(r.position(), 8);
    // No terminator ahead: the read fails and the cursor stays.
    assert!(r.get_cstr().is_err());
    assert_eq!(r.position(), 8);

    assert_eq!(r.pget_cstr(4)?, b"def");
    assert_eq!(r.pget_cstr(3)?, b"");
    assert!(r.pget_cstr(8).is_err());
    assert!(r.pget_cstr(100).is_err());
    Ok(())
}

#[test]
fn test_sub_clamps_subx_exact() -> Result<()> {
    let r = ByteReader::new(&DATA);
    let s = r.sub(2..5);
    assert_eq!(s.all(), &DATA[2..5]);
    assert_eq!(s.position(), 0);

    // Out-of-bounds parts of the range are dropped.
    assert_eq!(r.sub(6..100).all(), &DATA[6..]);
    assert_eq!(r.sub(100..).all(), b"");
    assert_eq!(r.sub(..).all(), &DATA);

    assert_eq!(r.subx(2..=4)?.all(), &DATA[2..5]);
    assert!(r.subx(6..100).is_err());
    assert!(r.subx(9..).is_err());

    // A sub-view exposes the same bytes a positional read returns.
    assert_eq!(r.subx(2..5)?.size(), 3);
    assert_eq!(r.preadx(2, 3)?, r.subx(2..5)?.all());

    // Sub-readers window independently of the parent's cursor.
    let mut s = r.sub(4..);
    assert_eq!(s.get_u16::<BE>()?, 0x89AB);
    assert_eq!(r.position(), 0);
    Ok(())
}

#[test]
fn test_nested_sub() -> Result<()> {
    let r = ByteReader::new(&DATA);
    let s = r.sub(2..8);
    let t = s.sub(1..3);
    assert_eq!(t.all(), &DATA[3..5]);
    // Clamping in the inner window is relative to the outer one.
    assert_eq!(s.sub(4..100).all(), &DATA[6..8]);
    Ok(())
}

#[test]
fn test_owned_backing_outlives_parent() -> Result<()> {
    let r = ByteReader::from_vec(DATA.to_vec());
    let s = r.sub(4..);
    drop(r);
    // The sub-reader keeps the shared allocation alive.
    assert_eq!(s.all(), &DATA[4..]);

    let r = ByteReader::from_shared(DATA.to_vec().into());
    let mut s = r.subx(0..2)?;
    drop(r);
    assert_eq!(s.get_u16::<BE>()?, 0x0123);
    Ok(())
}

#[test]
fn test_random_against_model() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<u8> = (0..4096).map(|_| rng.random()).collect();
    let r = ByteReader::new(&data);
    for _ in 0..10000 {
        let offset = rng.random_range(0..data.len() - 8);
        let mut expect_be = 0_u64;
        let mut expect_le = 0_u64;
        for i in 0..8 {
            expect_be = (expect_be << 8) | data[offset + i] as u64;
            expect_le |= (data[offset + i] as u64) << (8 * i);
        }
        assert_eq!(r.pget_u64::<BE>(offset)?, expect_be);
        assert_eq!(r.pget_u64::<LE>(offset)?, expect_le);
        assert_eq!(r.pget_u32::<BE>(offset)?, (expect_be >> 32) as u32);
        assert_eq!(r.pget_u32::<LE>(offset)?, expect_le as u32);
        assert_eq!(r.pget_u24::<BE>(offset)?, (expect_be >> 40) as u32);
        assert_eq!(r.pget_u24::<LE>(offset)?, expect_le as u32 & 0xFF_FFFF);
        assert_eq!(r.pget_u48::<BE>(offset)?, expect_be >> 16);
        assert_eq!(r.pget_u48::<LE>(offset)?, expect_le & 0xFFFF_FFFF_FFFF);
        assert_eq!(r.pget_i32::<BE>(offset)?, (expect_be >> 32) as i32);
        assert_eq!(
            r.pget_i48::<LE>(offset)?,
            ((expect_le << 16) as i64) >> 16
        );
    }
    Ok(())
}
