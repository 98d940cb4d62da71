/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::Arc;

/// Ownership variant behind [`ByteReader`](super::ByteReader) and
/// [`BitReader`](super::BitReader).
///
/// Cloning is cheap in both modes: a refcount increment for `Owned`, a copy
/// of the reference for `Borrowed`. Sub-views clone the backing and narrow
/// their own window, so no byte is ever copied when slicing.
#[derive(Debug, Clone)]
pub(crate) enum Backing<'a> {
    Owned(Arc<[u8]>),
    Borrowed(&'a [u8]),
}

impl Backing<'_> {
    #[inline(always)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            Backing::Owned(data) => data,
            Backing::Borrowed(data) => data,
        }
    }
}
