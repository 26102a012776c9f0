// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Readable byte ranges with a known length.

/// Anything that can be read as a contiguous byte range: literals, slices,
/// vectors, [`ByteBuffer`](crate::ByteBuffer)s and [`ByteView`](crate::ByteView)s.
///
/// Operations that copy bytes in (append, assign, replace, copy_slice,
/// concat) and views accept any `ByteSource`.
pub trait ByteSource {
    /// The readable bytes, without any terminator.
    fn source_bytes(&self) -> &[u8];

    /// Number of readable bytes.
    fn source_len(&self) -> usize {
        self.source_bytes().len()
    }
}

impl ByteSource for [u8] {
    fn source_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn source_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for Vec<u8> {
    fn source_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for str {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ByteSource for String {
    fn source_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}
