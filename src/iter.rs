//! Iterators over [`FlatMap`](crate::FlatMap), all in ascending key order.

use std::iter::FusedIterator;
use std::{slice, vec};

macro_rules! impl_double_ended {
    ($name:ident<$($gen:tt),*> => $item_ty:ty, |$item:pat_param| $map:expr) => {
        impl<$($gen),*> Iterator for $name<$($gen),*> {
            type Item = $item_ty;

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$item| $map)
            }
        }

        impl<$($gen),*> DoubleEndedIterator for $name<$($gen),*> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$item| $map)
            }
        }

        impl<$($gen),*> ExactSizeIterator for $name<$($gen),*> {}
        impl<$($gen),*> FusedIterator for $name<$($gen),*> {}
    };
}

/// Returned by [`FlatMap::iter`](crate::FlatMap::iter)
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, (K, V)>,
}

impl_double_ended!(Iter<'a, K, V> => (&'a K, &'a V), |(k, v)| (k, v));

/// Returned by [`FlatMap::iter_mut`](crate::FlatMap::iter_mut). Keys stay read only.
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    pub(crate) inner: slice::IterMut<'a, (K, V)>,
}

impl_double_ended!(IterMut<'a, K, V> => (&'a K, &'a mut V), |(k, v)| (&*k, v));

/// Returned by [`FlatMap::into_iter`](crate::FlatMap::into_iter)
#[derive(Debug)]
pub struct IntoIter<K, V> {
    pub(crate) inner: vec::IntoIter<(K, V)>,
}

impl_double_ended!(IntoIter<K, V> => (K, V), |kv| kv);

/// Returned by [`FlatMap::keys`](crate::FlatMap::keys)
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, (K, V)>,
}

impl_double_ended!(Keys<'a, K, V> => &'a K, |(k, _)| k);

/// Returned by [`FlatMap::values`](crate::FlatMap::values)
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, (K, V)>,
}

impl_double_ended!(Values<'a, K, V> => &'a V, |(_, v)| v);

/// Returned by [`FlatMap::values_mut`](crate::FlatMap::values_mut)
#[derive(Debug)]
pub struct ValuesMut<'a, K, V> {
    pub(crate) inner: slice::IterMut<'a, (K, V)>,
}

impl_double_ended!(ValuesMut<'a, K, V> => &'a mut V, |(_, v)| v);
