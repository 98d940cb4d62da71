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
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Write(bool),
    Truncate(usize),
}

pub fn harness(data: FuzzCase) {
    let mut writer = BitWriter::new();
    let mut model: Vec<bool> = vec![];
    for command in data.commands {
        match command {
            RandomCommand::Write(bit) => {
                writer.write(bit);
                model.push(bit);
            }
            RandomCommand::Truncate(size) => {
                writer.truncate(size);
                model.truncate(size);
            }
        }
        assert_eq!(writer.size(), model.len());
    }
    // Every written bit must read back, and the padding bits of the last
    // partial byte must be zero even after truncation.
    let bytes = writer.as_bytes().to_vec();
    let mut reader = BitReader::new(&bytes);
    assert_eq!(reader.size(), bytes.len() * 8);
    for (i, &bit) in model.iter().enumerate() {
        assert_eq!(reader.read(1).unwrap(), bit as u64, "bit {i}");
    }
    for i in model.len()..bytes.len() * 8 {
        assert_eq!(reader.read(1).unwrap(), 0, "padding bit {i}");
    }
    assert!(reader.read(1).is_err());
}
