use std::{borrow::Borrow, cmp::Ordering};

/// Locates a key inside a slice of entries sorted strictly ascending by key.
///
/// `Ok(idx)` is the position of the matching entry, `Err(idx)` is the position where an
/// entry with that key has to be inserted to keep the slice sorted. Same contract as
/// [`slice::binary_search`].
pub trait KeySearcher {
    fn search<K, V, Q>(entries: &[(K, V)], k: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;
}

/// O(log n) comparisons, the default searcher of [`FlatMap`](crate::FlatMap)
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl KeySearcher for BinarySearch {
    #[inline]
    fn search<K, V, Q>(entries: &[(K, V)], k: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        entries.binary_search_by(|(key, _)| key.borrow().cmp(k))
    }
}

/// Scans from the front. Only worth it for a handful of entries with cheap keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl KeySearcher for LinearSearch {
    #[inline]
    fn search<K, V, Q>(entries: &[(K, V)], k: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        entries
            .iter()
            .enumerate()
            .find_map(|(idx, (key, _))| match key.borrow().cmp(k) {
                Ordering::Less => None,
                Ordering::Equal => Some(Ok(idx)),
                Ordering::Greater => Some(Err(idx)),
            })
            .unwrap_or(Err(entries.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::any::type_name;

    use super::*;

    fn test_searcher<S: KeySearcher>() {
        println!("testing {}", type_name::<S>());
        let entries = (0..64u32).map(|i| ((i + 1) * 2, ())).collect::<Vec<_>>();

        assert_eq!(S::search(&entries, &1), Err(0));
        assert_eq!(S::search(&entries, &2), Ok(0));
        assert_eq!(S::search(&entries, &3), Err(1));
        assert_eq!(S::search(&entries, &4), Ok(1));
        assert_eq!(S::search(&entries, &5), Err(2));
        assert_eq!(S::search(&entries, &6), Ok(2));
        assert_eq!(S::search(&entries, &127), Err(63));
        assert_eq!(S::search(&entries, &128), Ok(63));
        assert_eq!(S::search(&entries, &129), Err(64));
        assert_eq!(S::search(&entries, &130), Err(64));
    }

    #[test]
    fn test_searchers() {
        test_searcher::<BinarySearch>();
        test_searcher::<LinearSearch>();
    }

    #[test]
    fn test_search_empty() {
        let entries: Vec<(u32, ())> = vec![];
        assert_eq!(BinarySearch::search(&entries, &1), Err(0));
        assert_eq!(LinearSearch::search(&entries, &1), Err(0));
    }

    #[test]
    fn test_search_borrowed_key() {
        let entries = vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("d".to_string(), 4),
        ];
        assert_eq!(BinarySearch::search(&entries, "b"), Ok(1));
        assert_eq!(BinarySearch::search(&entries, "c"), Err(2));
        assert_eq!(LinearSearch::search(&entries, "d"), Ok(2));
        assert_eq!(LinearSearch::search(&entries, "e"), Err(3));
    }
}
