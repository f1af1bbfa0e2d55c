use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Index,
};

use crate::{
    iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut},
    BinarySearch, KeyNotFound, KeySearcher,
};

/// Ordered map backed by one contiguous `Vec<(K, V)>`.
///
/// Entries are kept sorted strictly ascending by key, with no duplicate keys. Every keyed
/// operation locates its slot with `S` (binary search by default), then inserts or removes in
/// place, shifting the tail by one. Lookups are `O(log n)`, insert and remove are `O(n)` moves
/// over a cache friendly buffer.
///
/// Any mutating call may move entries, so references returned by lookups never outlive the
/// next mutation. The borrow checker enforces this.
///
/// # Example
/// ```rust
/// use sweep_flatmap::FlatMap;
///
/// let mut map = FlatMap::<&str, i32>::new();
/// assert!(map.insert("b", 2));
/// assert!(map.insert("a", 1));
/// assert!(map.insert("c", 3));
///
/// // existing keys are never overwritten by insert
/// assert!(!map.insert("a", 100));
///
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// assert_eq!(map.at("a"), Ok(&1));
///
/// assert!(map.remove("b"));
/// assert!(!map.contains_key("b"));
/// assert_eq!(map.len(), 2);
/// ```
pub struct FlatMap<K, V, S: KeySearcher = BinarySearch> {
    entries: Vec<(K, V)>,
    _searcher: PhantomData<S>,
}

impl<K, V, S: KeySearcher> Default for FlatMap<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S: KeySearcher> FlatMap<K, V, S> {
    /// Create an empty map, does not allocate
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            _searcher: PhantomData,
        }
    }

    /// Create an empty map able to hold `capacity` entries without reallocating
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            _searcher: PhantomData,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional)
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit()
    }

    /// Returns entry count in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains no entry
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let map = FlatMap::<i32, i32>::new();
    ///
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Exchange the content of two maps. Only the buffer handles move, no entry is touched.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut a = FlatMap::<i32, i32>::new();
    /// let mut b = FlatMap::<i32, i32>::new();
    /// a.insert(1, 1);
    ///
    /// a.swap(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(b.at(&1), Ok(&1));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.entries, &mut other.entries)
    }

    /// Move the whole content out, leaving `self` empty and ready for reuse.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut a = FlatMap::<i32, i32>::new();
    /// a.insert(1, 10);
    ///
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.len(), 1);
    ///
    /// assert!(a.insert(1, 20));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the entry at `idx` in key order.
    ///
    /// Positions shift on every insert and remove, an index is only meaningful until the next
    /// mutation.
    #[inline]
    pub fn get_index(&self, idx: usize) -> Option<(&K, &V)> {
        self.entries.get(idx).map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Returns an iterator over the map, in ascending key order.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, i32>::new();
    /// map.insert(2, 3);
    /// map.insert(1, 2);
    ///
    /// let kvs = map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
    /// assert_eq!(kvs, vec![(1, 2), (2, 3)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Like [`iter`](Self::iter), values are mutable. Keys are not, which keeps the order intact.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.iter(),
        }
    }

    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.entries.iter_mut(),
        }
    }
}

impl<K: Ord, V, S: KeySearcher> FlatMap<K, V, S> {
    /// `Ok(idx)` if the key sits at `idx`, `Err(idx)` for the slot a new entry would take
    #[inline]
    fn locate<Q>(&self, k: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        S::search(&self.entries, k)
    }

    /// Get the rank for key, the same way [`slice::binary_search`] reports it.
    ///
    /// The rank is a position in the current layout. Any later insert or remove may shift it,
    /// so re-query instead of keeping it across mutations.
    ///
    /// # Example
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let map = [(1, 2), (2, 3), (3, 4)].into_iter().collect::<FlatMap<i32, i32>>();
    ///
    /// // 0 does not exist
    /// assert_eq!(map.rank(&0), Err(0));
    ///
    /// // 1's rank is 0
    /// assert_eq!(map.rank(&1), Ok(0));
    /// assert_eq!(map.rank(&3), Ok(2));
    ///
    /// // 4 does not exist
    /// assert_eq!(map.rank(&4), Err(3));
    /// ```
    #[inline]
    pub fn rank<Q>(&self, k: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.locate(k)
    }

    /// Returns true if the map holds an entry for the key. Never mutates.
    #[inline]
    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.locate(k).is_ok()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, i32>::new();
    /// map.insert(1, 2);
    ///
    /// assert_eq!(map.get(&1).unwrap(), &2);
    /// assert!(map.get(&2).is_none());
    /// ```
    #[inline]
    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let idx = self.locate(k).ok()?;
        Some(&self.entries[idx].1)
    }

    #[inline]
    pub fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let idx = self.locate(k).ok()?;
        Some(&mut self.entries[idx].1)
    }

    #[inline]
    pub fn get_key_value<Q>(&self, k: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let idx = self.locate(k).ok()?;
        self.get_index(idx)
    }

    /// Checked lookup, fails with [`KeyNotFound`] instead of inserting.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::{FlatMap, KeyNotFound};
    ///
    /// let mut map = FlatMap::<String, i32>::new();
    /// map.insert("x".to_string(), 10);
    ///
    /// assert_eq!(map.at("x"), Ok(&10));
    /// assert_eq!(map.at("y"), Err(KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    pub fn at<Q>(&self, k: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get(k).ok_or(KeyNotFound)
    }

    /// Mutable flavor of [`at`](Self::at)
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, i32>::new();
    /// map.insert(1, 2);
    /// *map.at_mut(&1).unwrap() += 1;
    ///
    /// assert_eq!(map.at(&1), Ok(&3));
    /// assert!(map.at_mut(&2).is_err());
    /// ```
    #[inline]
    pub fn at_mut<Q>(&mut self, k: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get_mut(k).ok_or(KeyNotFound)
    }

    /// Insert a key-value pair if the key is absent.
    /// Returns true if inserted, false if the key already existed, in which case the stored
    /// value is left untouched and `v` is dropped.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32>::new();
    /// assert!(map.insert("x", 10));
    /// assert!(!map.insert("x", 20));
    ///
    /// assert_eq!(map.at("x"), Ok(&10));
    /// ```
    pub fn insert(&mut self, k: K, v: V) -> bool {
        match self.locate(&k) {
            Ok(_) => false,
            Err(idx) => {
                self.entries.insert(idx, (k, v));
                true
            }
        }
    }

    /// Same as [`insert`](Self::insert), taking the pair as one value
    #[inline]
    pub fn insert_pair(&mut self, (k, v): (K, V)) -> bool {
        self.insert(k, v)
    }

    /// Returns the value for `k`, inserting `V::default()` first if the key is absent.
    ///
    /// This is not a pure lookup: a missing key grows the map by one entry.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut counts = FlatMap::<&str, usize>::new();
    /// for word in ["b", "a", "b"] {
    ///     *counts.get_or_insert_default(word) += 1;
    /// }
    ///
    /// assert_eq!(counts.at("a"), Ok(&1));
    /// assert_eq!(counts.at("b"), Ok(&2));
    /// ```
    #[inline]
    pub fn get_or_insert_default(&mut self, k: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(k, V::default)
    }

    /// Returns the value for `k`, inserting `f()` first if the key is absent
    pub fn get_or_insert_with<F>(&mut self, k: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = match self.locate(&k) {
            Ok(idx) => idx,
            Err(idx) => {
                self.entries.insert(idx, (k, f()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// Remove the entry for the key.
    /// Returns true if it was removed, false if the map held no such key.
    ///
    /// # Examples
    /// ```rust
    /// use sweep_flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, i32>::new();
    /// map.insert(1, 2);
    ///
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&2));
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(k).is_some()
    }

    /// Remove the entry for the key and hand it back
    pub fn remove_entry<Q>(&mut self, k: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let idx = self.locate(k).ok()?;
        Some(self.entries.remove(idx))
    }

    /// Stable sort then drop later duplicates, so the first occurrence of a key wins
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self.entries.dedup_by(|later, earlier| later.0 == earlier.0);
    }

    #[cfg(test)]
    pub(crate) fn validate(&self) {
        for pair in self.entries.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}

impl<K: Clone, V: Clone, S: KeySearcher> Clone for FlatMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _searcher: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.entries.clone_from(&source.entries)
    }
}

impl<K: PartialEq, V: PartialEq, S: KeySearcher> PartialEq for FlatMap<K, V, S> {
    /// Both sides are sorted, so entry-wise comparison is map equality.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq, S: KeySearcher> Eq for FlatMap<K, V, S> {}

impl<K: Hash, V: Hash, S: KeySearcher> Hash for FlatMap<K, V, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S: KeySearcher> fmt::Debug for FlatMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Panics if the key is absent, use [`FlatMap::at`] for a checked lookup or
/// [`FlatMap::get_or_insert_default`] to insert on miss.
impl<K, V, S, Q> Index<&Q> for FlatMap<K, V, S>
where
    K: Ord + Borrow<Q>,
    Q: ?Sized + Ord,
    S: KeySearcher,
{
    type Output = V;

    #[inline]
    fn index(&self, k: &Q) -> &V {
        self.get(k).expect("key not found in FlatMap")
    }
}

impl<K: Ord, V, S: KeySearcher> FromIterator<(K, V)> for FlatMap<K, V, S> {
    /// First occurrence of a key wins, same as repeated [`FlatMap::insert`]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self {
            entries: iter.into_iter().collect(),
            _searcher: PhantomData,
        };
        map.normalize();
        map
    }
}

impl<K: Ord, V, S: KeySearcher> Extend<(K, V)> for FlatMap<K, V, S> {
    /// Existing keys are kept, as with [`FlatMap::insert`]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        // drain the caller's iterator before touching entries, it may panic
        let mut incoming = iter.into_iter().collect::<Vec<_>>();
        if !incoming.is_empty() {
            self.entries.append(&mut incoming);
            self.normalize();
        }
    }
}

impl<K: Ord, V, S: KeySearcher, const N: usize> From<[(K, V); N]> for FlatMap<K, V, S> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, V, S: KeySearcher> IntoIterator for FlatMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V, S: KeySearcher> IntoIterator for &'a FlatMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S: KeySearcher> IntoIterator for &'a mut FlatMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
