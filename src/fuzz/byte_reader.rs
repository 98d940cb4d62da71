/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    GetU8,
    GetU32Be,
    GetU24Le,
    Go(usize),
    Skip(usize),
    Read(usize),
    Pread(usize, usize),
}

pub fn harness(data: FuzzCase) {
    let mut reader = ByteReader::new(&data.init);
    let len = data.init.len();
    // Model cursor; the reader must track it exactly, including across
    // failed accesses, which must not move it.
    let mut pos = 0;
    for command in data.commands {
        match command {
            RandomCommand::GetU8 => {
                if pos < len {
                    assert_eq!(reader.get_u8().unwrap(), data.init[pos]);
                    pos += 1;
                } else {
                    assert!(reader.get_u8().is_err());
                }
            }
            RandomCommand::GetU32Be => {
                if pos + 4 <= len {
                    let mut value = 0_u32;
                    for i in 0..4 {
                        value = (value << 8) | data.init[pos + i] as u32;
                    }
                    assert_eq!(reader.get_u32::<BE>().unwrap(), value);
                    pos += 4;
                } else {
                    assert!(reader.get_u32::<BE>().is_err());
                }
            }
            RandomCommand::GetU24Le => {
                if pos + 3 <= len {
                    let value = data.init[pos] as u32
                        | (data.init[pos + 1] as u32) << 8
                        | (data.init[pos + 2] as u32) << 16;
                    assert_eq!(reader.get_u24::<LE>().unwrap(), value);
                    pos += 3;
                } else {
                    assert!(reader.get_u24::<LE>().is_err());
                }
            }
            RandomCommand::Go(offset) => {
                if reader.go(offset).is_ok() {
                    assert!(offset <= len);
                    pos = offset;
                } else {
                    assert!(offset > len);
                }
            }
            RandomCommand::Skip(size) => {
                if reader.skip(size).is_ok() {
                    pos += size;
                    assert!(pos <= len);
                } else {
                    assert!(pos.checked_add(size).is_none_or(|end| end > len));
                }
            }
            RandomCommand::Read(size) => {
                let bytes = reader.read(size);
                let end = len.min(pos.saturating_add(size));
                assert_eq!(bytes, &data.init[pos..end]);
                pos = end;
            }
            RandomCommand::Pread(offset, size) => {
                let bytes = reader.pread(offset, size);
                let start = offset.min(len);
                let end = len.min(offset.saturating_add(size));
                assert_eq!(bytes, &data.init[start..end]);
            }
        }
        assert_eq!(reader.position(), pos);
        assert_eq!(reader.remaining(), len - pos);
    }
}
