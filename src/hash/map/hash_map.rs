use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::{cmp, iter, mem};

use super::{CapacityOverflow, IntoKeys, IntoValues, Iter, Keys, Values, ValuesMut};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// No allocation may exceed `isize::MAX` bytes.
const MAX_CAP_BYTES: usize = isize::MAX as usize;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Collisions are resolved with linear probing, and removal shifts displaced entries backwards so
/// that no tombstones are needed. A custom load factor is not supported at this point, with the
/// default being 4/5. Because of the load factor, there is always at least one empty bucket in an
/// allocated map.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(cap)` |
/// | `retain` | `O(cap)` |
/// | `reserve` | `O(n)`***, `O(1)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while a valid
/// / correct location is found. This additional time is kept at a minimum and hash collisions are
/// unlikely especially with a large capacity.
///
/// \** If the HashMap doesn't have enough capacity for the new element, `insert` will take `O(n)`.
/// \* applies as well.
///
/// \*** If the HashMap has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = Option<(K, V)>;

impl<K: Hash + Eq, V> HashMap<K, V> {
    /// Creates a new HashMap with capacity 0 and a [`RandomState`] hasher. Memory will be
    /// allocated when the capacity changes.
    pub fn new() -> HashMap<K, V> {
        HashMap::with_hasher(RandomState::new())
    }

    /// Creates a new HashMap which can hold at least `cap` entries without reallocating. A
    /// [`RandomState`] hasher will be used.
    ///
    /// # Panics
    /// Panics if the required capacity overflows. See [`HashMap::try_reserve`].
    pub fn with_cap(cap: usize) -> HashMap<K, V> {
        HashMap::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: Box::new([]),
            len: 0,
            hasher,
        }
    }

    /// Creates a new HashMap with the provided `hasher`, which can hold at least `cap` entries
    /// without reallocating.
    ///
    /// # Panics
    /// Panics if the required capacity overflows. See [`HashMap::try_reserve`].
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        let mut map = HashMap::with_hasher(hasher);
        if cap > 0 {
            map.reserve(cap);
        }
        map
    }

    /// Returns the length of the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap.
    pub fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Returns a reference to the map's [`BuildHasher`].
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow()
        }

        // SAFETY: We've just grown if necessary, so the capacity isn't 0.
        let index = unsafe { self.find_index_for_key(&key).unreachable() };

        // The bucket at index is either empty or contains an equal key.
        match &mut self.arr[index] {
            Some(existing) => {
                // Replace the value with the provided one.
                Some(mem::replace(&mut existing.1, value))
            },
            None => {
                // Create a new bucket with the provided values.
                self.arr[index] = Some((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key.
        self.arr[index].as_ref().map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;

        self.arr[index].as_mut().map(|(_, v)| v)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut hole = self.find_index_for_key(key)?;

        // If the bucket at index is empty, the map doesn't contain the key and nothing has moved.
        let removed = self.arr[hole].take()?;
        self.len -= 1;

        // UNCHECKED: find_index_for_key returned some, so the cap is not 0.
        let mut next = (hole + 1) % self.cap();

        // Walk the rest of the probe run. Any entry whose ideal bucket doesn't lie cyclically in
        // (hole, next] is now unreachable from its ideal bucket, so it moves into the hole, which
        // then moves to where that entry was. The run always ends, because the load factor keeps
        // at least one bucket empty.
        while let Some(entry) = &self.arr[next] {
            let Some(ideal) = self.index_from_key(&entry.0) else {
                break;
            };

            if !cyclically_within(hole, ideal, next) {
                self.arr[hole] = self.arr[next].take();
                hole = next;
            }

            next = (next + 1) % self.cap();
        }

        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.find_index_for_key(key) {
            Some(i) => self.arr[i].is_some(),
            None => false,
        }
    }

    /// Removes all entries from the HashMap, keeping the allocated capacity.
    pub fn clear(&mut self) {
        for bucket in self.arr.iter_mut() {
            *bucket = None;
        }
        self.len = 0;
    }

    /// Retains only the entries for which `f` returns true, keeping the allocated capacity.
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut f: F) {
        // Removing in place would require a backward shift per entry, so the survivors are
        // reinserted into fresh buckets of the same capacity instead.
        let cap = self.cap();
        let old_arr = mem::replace(&mut self.arr, empty_buckets(cap));
        self.len = 0;

        for (key, mut value) in old_arr.into_vec().into_iter().flatten() {
            if f(&key, &mut value) {
                self.place(key, value);
            }
        }
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor.
    ///
    /// # Panics
    /// Panics if the new capacity can't be allocated. See [`HashMap::try_reserve`] for a
    /// non-panicking alternative.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Increases the capacity of the HashMap to ensure that len + `extra` entries will fit without
    /// exceeding the load factor, or returns an error if that many buckets can't be allocated.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        let new_cap = self.len.checked_add(extra)
            .and_then(|required| required.checked_mul(LOAD_FACTOR_DENOMINATOR))
            .and_then(|scaled| (scaled / LOAD_FACTOR_NUMERATOR).checked_add(1))
            .filter(|&cap| cap <= MAX_CAP_BYTES / size_of::<Bucket<K, V>>())
            .ok_or(CapacityOverflow)?;

        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
        Ok(())
    }

    /// Returns and iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns and iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns and iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.into_iter())
    }

    /// Returns and iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length exceeds the load capacity, suggesting that it should
    /// grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= self.arr.len() * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }

    /// Grows the HashMap by the growth factor, ensuring that it can hold additional entries.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap)
    }

    /// Reallocates the HashMap to have capacity equal to `new_cap`, if doing so wouldn't cause the
    /// map to overload. (There isn't a logical way for the map to shrink and drop entries, so this
    /// isn't allowed.)
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        // A capacity too large to scale always fits the current entries.
        if new_cap.checked_mul(LOAD_FACTOR_NUMERATOR)
            .is_some_and(|scaled| scaled / LOAD_FACTOR_DENOMINATOR < self.len)
        {
            return;
        }

        // Replace the buckets first so that the old ones can be consumed.
        let old_arr = mem::replace(&mut self.arr, empty_buckets(new_cap));
        self.len = 0;

        for (key, value) in old_arr.into_vec().into_iter().flatten() {
            self.place(key, value);
        }
    }

    /// Moves an entry whose key is known to be absent into the first free bucket of its probe run.
    /// Used when rebuilding the table, where no key can be present twice.
    fn place(&mut self, key: K, value: V) {
        // SAFETY: Only called while rebuilding the table for entries that the old Array held, and
        // the new Array is never sized below the number of entries, so the capacity isn't 0.
        let index = unsafe { self.find_index_for_key(&key).unreachable() };

        self.arr[index] = Some((key, value));
        self.len += 1;
    }

    /// Calculates the ideal index of a bucket for the provided `hashable` (or None if the HashMap
    /// has 0 capacity). This method doesn't consider hash collisions, see
    /// [`HashMap::find_index_for_key`] for that functionality.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let key_hash = self.hasher.hash_one(hashable);
        key_hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Finds the first valid index for the provided `key` (or None if the HashMap has 0 capacity).
    /// This is done by calculating the ideal index and then iterating until a bucket is found that
    /// is empty or has an equal key.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // This is where Eq comes in: while there is a value at the current index, but the key
        // isn't equal, increment the index (wrapping at the capacity) and check again.
        while let Some(existing) = &self.arr[index]
            && existing.0.borrow() != key
        {
            // UNCHECKED: index_from_key returned some, so the cap is not 0.
            index = (index + 1) % self.cap();
        }

        // After that loop, index is either empty or contains an equal key.
        Some(index)
    }
}

/// Creates an Array of `cap` empty buckets.
fn empty_buckets<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

/// Returns true if `index` lies in the cyclic range `(start, end]`.
const fn cyclically_within(start: usize, index: usize, end: usize) -> bool {
    if start <= end {
        start < index && index <= end
    } else {
        start < index || index <= end
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            arr: self.arr.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.arr.iter()
            .map(|o| DebugRaw(match o {
                Some((k, v)) => format!("({k:?}: {v:?})"),
                None => "-".into(),
            }))
            .collect::<Vec<_>>();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}
