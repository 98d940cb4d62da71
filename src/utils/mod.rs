/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Diagnostic formatting and the data-string notation.

[`format_data`], [`print_data`], and the underlying [`write_data`] render one
or more memory segments as address + hex + ASCII rows, optionally diffed
against a previous snapshot, with color, zero-row collapsing, and
offset-width control through [`DumpOptions`].

[`parse_data_string`] and [`format_data_string`] convert between byte buffers
and the compact hex-with-wildcards notation used for byte-pattern fixtures
and signatures; [`strip_multiline_comments`] preprocesses pattern files that
carry `/* ... */` commentary.

*/

mod dump;
pub use dump::*;

mod data_string;
pub use data_string::*;
