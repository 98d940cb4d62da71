/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of the byte- and bit-granularity cursors.

[`ByteReader`] is the random-access and sequential reader over an immutable
buffer, which it either owns (reference-counted, so sub-readers share the
allocation) or borrows from the caller. [`BitReader`] layers a bit-granularity
cursor over the same buffer model; the two convert into each other through
[`ByteReader::sub_bits`].

On the writing side, [`ByteWriter`] appends to a growable owned buffer and
supports positional writes that auto-grow with zero fill; [`SliceWriter`]
writes into a caller-supplied fixed-capacity slice and fails instead of
growing; [`BlockWriter`] collects fragments and concatenates them once on
[`close`](BlockWriter::close); [`BitWriter`] packs single bits MSB-first into
a byte sequence.

Typed access on readers and writers is generic over the byte-order markers in
[`crate::traits`]; the full width matrix, including the 24- and 48-bit
fields, is available as `get_*`/`pget_*` and `put_*`/`pput_*` method
families.

*/

mod backing;
pub(crate) use backing::Backing;

mod byte_reader;
pub use byte_reader::*;

mod bit_reader;
pub use bit_reader::*;

mod byte_writer;
pub use byte_writer::*;

mod slice_writer;
pub use slice_writer::*;

mod block_writer;
pub use block_writer::*;

mod bit_writer;
pub use bit_writer::*;
