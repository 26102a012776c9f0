// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property tests for buffer invariants.
//!
//! After every operation, successful or not, a buffer must satisfy
//! `len() <= capacity()` and carry a `0` byte right after its content.

use byte_alloc::HeapAllocator;
use bytestr::{ops, BufferError, ByteBuffer, ByteView};
use proptest::prelude::*;

// ── Helpers ────────────────────────────────────────────────────

fn content() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=255, 0..64)
}

fn assert_invariants(buffer: &ByteBuffer) {
    assert!(buffer.len() <= buffer.capacity());
    assert_eq!(buffer.as_bytes_with_nul()[buffer.len()], 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_create_sizes_to_content(bytes in content()) {
        let heap = HeapAllocator::new();
        let b = ByteBuffer::new(&bytes, &heap).unwrap();
        prop_assert_eq!(b.len(), bytes.len());
        prop_assert!(b.capacity() >= bytes.len());
        prop_assert_eq!(b.as_bytes(), &bytes[..]);
        assert_invariants(&b);
    }

    #[test]
    fn prop_push_never_shrinks_capacity(bytes in content(), pushes in content()) {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new(&bytes, &heap).unwrap();
        let mut capacity = b.capacity();
        for &c in &pushes {
            ops::push_back(&mut b, c, &heap).unwrap();
            prop_assert!(b.capacity() >= capacity);
            capacity = b.capacity();
            assert_invariants(&b);
        }
        prop_assert_eq!(b.len(), bytes.len() + pushes.len());
    }

    #[test]
    fn prop_push_then_pop_restores(bytes in content(), c in any::<u8>()) {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new(&bytes, &heap).unwrap();
        ops::push_back(&mut b, c, &heap).unwrap();
        prop_assert_eq!(ops::pop_back(&mut b).unwrap(), c);
        prop_assert_eq!(b.as_bytes(), &bytes[..]);
        assert_invariants(&b);
    }

    #[test]
    fn prop_insert_then_erase_restores(bytes in content(), index in any::<prop::sample::Index>(), count in 0usize..8, c in any::<u8>()) {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new(&bytes, &heap).unwrap();
        let i = index.index(bytes.len() + 1);
        ops::insert(&mut b, i, count, c, &heap).unwrap();
        prop_assert_eq!(b.len(), bytes.len() + count);
        prop_assert!(b.as_bytes()[i..i + count].iter().all(|&x| x == c));
        ops::erase(&mut b, i, count).unwrap();
        prop_assert_eq!(b.as_bytes(), &bytes[..]);
        assert_invariants(&b);
    }

    #[test]
    fn prop_resize_yields_copies(bytes in content(), k in 0usize..100, c in any::<u8>()) {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new(&bytes, &heap).unwrap();
        ops::resize(&mut b, k, c, &heap).unwrap();
        prop_assert_eq!(b.len(), k);
        prop_assert!(b.iter().all(|x| x == c));
        assert_invariants(&b);
    }

    #[test]
    fn prop_erase_past_end_fails_unchanged(bytes in content(), index in 0usize..80, count in 0usize..80) {
        prop_assume!(index + count > bytes.len());
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new(&bytes, &heap).unwrap();
        let is_bounds_violation = matches!(
            ops::erase(&mut b, index, count),
            Err(BufferError::BoundsViolation { .. })
        );
        prop_assert!(is_bounds_violation);
        prop_assert_eq!(b.as_bytes(), &bytes[..]);
        assert_invariants(&b);
    }

    #[test]
    fn prop_copy_slice_rest_of_source(dest in content(), source in content(), start in any::<prop::sample::Index>()) {
        let heap = HeapAllocator::new();
        let mut b = ByteBuffer::new(&dest, &heap).unwrap();
        let s = start.index(source.len() + 1);
        ops::copy_slice(&mut b, s, 0, &source, &heap).unwrap();
        prop_assert_eq!(b.as_bytes(), &source[s..]);
        assert_invariants(&b);
    }

    #[test]
    fn prop_replace_splices(bytes in prop::collection::vec(1u8..=255, 1..64), replacement in content(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let heap = HeapAllocator::new();
        let mut buf = ByteBuffer::new(&bytes, &heap).unwrap();
        let index = a.index(bytes.len());
        let count = 1 + b.index(bytes.len() - index);
        ops::replace(&mut buf, index, count, &replacement, &heap).unwrap();

        let mut expected = bytes[..index].to_vec();
        expected.extend_from_slice(&replacement);
        expected.extend_from_slice(&bytes[index + count..]);
        prop_assert_eq!(buf.as_bytes(), &expected[..]);
        assert_invariants(&buf);
    }

    #[test]
    fn prop_view_concat_joins(left in content(), right in content()) {
        let heap = HeapAllocator::new();
        let a = ByteView::whole(&left);
        let b = ByteView::whole(&right);
        let joined = a.concat(&b, &heap).unwrap();
        prop_assert_eq!(joined.len(), left.len() + right.len());
        prop_assert_eq!(&joined.as_bytes()[..left.len()], &left[..]);
        prop_assert_eq!(&joined.as_bytes()[left.len()..], &right[..]);
        assert_invariants(&joined);
    }
}
