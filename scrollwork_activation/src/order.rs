// Copyright 2025 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-position comparison for flush ordering.

use core::cmp::Ordering;

/// A source of document order between registration keys.
///
/// An implementation answers "which of these two keys comes first in a
/// pre-order traversal of the document?". The queue consults it at flush time,
/// not at registration time, so positions may settle after registration.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a `DocumentOrder<K>`; use
/// [`NaturalOrder`] when keys already encode their position.
pub trait DocumentOrder<K> {
    /// Compares the document positions of two keys.
    ///
    /// `Ordering::Less` means `a` precedes `b` in pre-order traversal.
    /// Equal positions are allowed; the queue keeps registration order for
    /// them.
    fn cmp_position(&self, a: &K, b: &K) -> Ordering;
}

impl<K, F> DocumentOrder<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn cmp_position(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their `Ord` implementation.
///
/// Suitable when keys are pre-order ranks or otherwise encode document
/// position directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<K: Ord> DocumentOrder<K> for NaturalOrder {
    fn cmp_position(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}
