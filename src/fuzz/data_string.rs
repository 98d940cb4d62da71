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
    input: String,
    data: Vec<u8>,
}

pub fn harness(data: FuzzCase) {
    // Arbitrary text must parse or fail cleanly, never panic. File
    // substitution stays off so the harness cannot touch the filesystem.
    let opts = ParseDataOptions::default();
    if let Ok((bytes, mask)) = parse_data_string_masked(&data.input, &opts) {
        assert_eq!(bytes.len(), mask.len());
        // Wildcard data bits are zeroed by the parser, so rendering and
        // reparsing reproduces both buffers exactly.
        let rendered = format_data_string(&bytes, Some(&mask));
        let (bytes2, mask2) = parse_data_string_masked(&rendered, &opts).unwrap();
        assert_eq!(bytes2, bytes);
        assert_eq!(mask2, mask);
    }

    // With unterminated comments allowed the stripper accepts anything.
    strip_multiline_comments(&data.input, true).unwrap();

    // Hex rendering of raw bytes always reparses to the same bytes.
    let rendered = format_data_string(&data.data, None);
    assert_eq!(parse_data_string(&rendered).unwrap(), data.data);
}
