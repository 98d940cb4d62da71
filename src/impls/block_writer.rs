/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt;

/// An append-only writer that defers concatenation to a single finalize
/// pass.
///
/// Each `write` stores one fragment (copied, or taken as-is by
/// [`write_owned`](BlockWriter::write_owned)) in an ordered sequence;
/// nothing is concatenated until [`close`](BlockWriter::close), which makes
/// exactly one allocation of the final size. Building a large output from
/// many small appends therefore never pays for repeated reallocation and
/// re-copying of the accumulated prefix.
///
/// The writer implements [`core::fmt::Write`], so `write!` appends a
/// formatted fragment.
///
/// # Examples
///
/// ```
/// use bincursor::prelude::*;
///
/// let mut w = BlockWriter::new();
/// w.write(b"size");
/// w.write_owned(vec![b'4', b'2']);
/// assert_eq!(w.close(b", "), b"size, 42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockWriter {
    blocks: Vec<Vec<u8>>,
}

impl BlockWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment by copy.
    pub fn write(&mut self, data: &[u8]) {
        self.blocks.push(data.to_vec());
    }

    /// Appends a fragment, taking ownership of the buffer without copying.
    pub fn write_owned(&mut self, data: Vec<u8>) {
        self.blocks.push(data);
    }

    /// Returns the total payload length, separators excluded.
    pub fn size(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Returns the number of fragments written so far.
    #[inline(always)]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no fragment has been written.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Concatenates all fragments in order, interleaving `separator`
    /// between consecutive fragments (not before the first or after the
    /// last), and returns the result.
    pub fn close(self, separator: &[u8]) -> Vec<u8> {
        if self.blocks.is_empty() {
            return Vec::new();
        }
        let total = self.size() + separator.len() * (self.blocks.len() - 1);
        let mut out = Vec::with_capacity(total);
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(separator);
            }
            out.extend_from_slice(block);
        }
        out
    }
}

impl fmt::Write for BlockWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s.as_bytes());
        Ok(())
    }

    // The default implementation hands over one piece per format
    // fragment; a formatted write must land as a single block.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.write_owned(args.to_string().into_bytes());
        Ok(())
    }
}
