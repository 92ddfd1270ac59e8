//! Total-order function values.

use std::cmp::Ordering;
use std::sync::Arc;

/// A cloneable total-order function over `T`.
///
/// Must be consistent (antisymmetric, transitive) for every combinator that
/// relies on it: sort, the sorted key index, and ordered min/max.
pub struct Comparator<T> {
    cmp: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            cmp: Arc::clone(&self.cmp),
        }
    }
}

impl<T: 'static> Comparator<T> {
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        Self { cmp: Arc::new(cmp) }
    }

    /// The type's own `Ord` ordering.
    pub fn natural() -> Self
    where
        T: Ord,
    {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }

    /// Order by a derived key.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |a: &T, b: &T| key(a).cmp(&key(b)))
    }

    /// The same order, reversed.
    pub fn reversed(&self) -> Self {
        let inner = self.clone();
        Self::new(move |a: &T, b: &T| inner.compare(b, a))
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp.as_ref())(a, b)
    }
}
