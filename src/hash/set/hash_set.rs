use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{Indexed, Iter, SetDisplay};
use crate::hash::map::CapacityOverflow;
use crate::hash::HashMap;
use crate::traits::{Render, Set};
use crate::util::fmt::DebugRaw;

/// An unordered set of values which relies on the values implementing [`Hash`].
///
/// A HashSet is a [`HashMap`] whose values are `()`: an item is in the set if and only if it is a
/// key of the map. The set owns its map exclusively, so cloning a set copies every key and the two
/// sets diverge from then on.
///
/// Set algebra methods, like [`union`](HashSet::union), never modify either operand and return a
/// new set instead, which inherits the receiver's hasher. [`unite`](HashSet::unite) is the only
/// in-place counterpart, modifying the receiver alone. For lazy iteration over the results of set
/// algebra, see the methods provided by [`Set`].
///
/// It is a logic error for items in a HashSet to be manipulated in a way that changes their hash.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
/// - `m`: The number of items in the other HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `difference` | `O(n)` |
/// | `intersection` | `O(min(n, m))` |
/// | `union` | `O(n + m)` |
/// | `symmetric_difference` | `O(n + m)` |
/// | `is_subset` | `O(n)` |
/// | `is_disjoint` | `O(min(n, m))` |
///
/// \* Amortized, see [`HashMap`] for details.
///
/// # Examples
/// ```
/// # use unordered_set::hash_set;
/// let evens = hash_set![0, 2, 4, 6, 8];
/// let small = hash_set![0, 1, 2, 3, 4];
///
/// assert_eq!(evens.intersection(&small), hash_set![0, 2, 4]);
/// assert_eq!(small.difference(&evens).to_string(), "{1 3}");
/// ```
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates a new, empty HashSet. Nothing is allocated until the first insertion.
    ///
    /// The element type can't always be inferred for an empty set, in which case it needs to be
    /// annotated, e.g. `HashSet::<u32>::new()`.
    pub fn new() -> HashSet<T> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty HashSet which can hold at least `cap` items without reallocating.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        let mut set = HashSet::new();
        set.reserve(cap);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of items in the set.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set has no items.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of buckets in the backing [`HashMap`].
    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    pub const fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. An equal item that is
    /// already present is left as is.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Adds every one of `items` to the set. Items which are already present are ignored.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items)
    }

    /// Removes `item` from the set, returning the stored item if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    /// Removes every one of `items` from the set. Items which aren't present are ignored.
    pub fn delete<'q, Q, I>(&mut self, items: I)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        for item in items {
            self.inner.remove_entry(item);
        }
    }

    /// Removes all items, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Retains only the items for which `f` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.inner.retain(|item, _| f(item))
    }

    /// Returns true if the set contains `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Increases the capacity of the set to ensure that len + `extra` items will fit without
    /// reallocating.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Like [`reserve`](HashSet::reserve), but returns an error rather than panicking.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), CapacityOverflow> {
        self.inner.try_reserve(extra)
    }

    /// Returns an iterator over all items in the set, as references, in no particular order.
    ///
    /// The order is stable for as long as the set isn't modified, so the iterator can be restarted
    /// by calling this method again, or by cloning it.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all items paired with an index, counting from 0.
    pub fn indexed(&self) -> Indexed<'_, T> {
        self.indexed_from(0)
    }

    /// Returns an iterator over all items paired with an index, counting from `offset`. Indices
    /// wrap around to 0 after [`usize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use unordered_set::hash_set;
    /// let set = hash_set![10, 20, 30];
    /// let indices: u32 = set.indexed_from(1).map(|(i, _)| i as u32).sum();
    /// assert_eq!(indices, 1 + 2 + 3);
    /// ```
    pub fn indexed_from(&self, offset: usize) -> Indexed<'_, T> {
        Indexed {
            inner: self.iter(),
            index: offset,
        }
    }

    /// Returns a [`Display`] adapter, which renders the set's items in iteration order. The
    /// adapter can be configured to sort the items or to change the size at which the set is
    /// summarized by its length.
    pub const fn display(&self) -> SetDisplay<'_, T, B> {
        SetDisplay::new(self)
    }

    /// Returns true if the sets contain exactly the same items.
    pub fn set_eq(&self, other: &HashSet<T, B>) -> bool {
        Set::set_eq(self, other)
    }

    /// Returns true if `other` contains all items of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &HashSet<T, B>) -> bool {
        Set::is_subset(self, other)
    }

    /// Returns true if `self` contains all items of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &HashSet<T, B>) -> bool {
        Set::is_superset(self, other)
    }

    /// Returns true if `self` and `other` have no items in common.
    pub fn is_disjoint(&self, other: &HashSet<T, B>) -> bool {
        Set::is_disjoint(self, other)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher> HashSet<T, B> {
    /// Returns all items in the set, in no particular order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns all items in the set, sorted in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Ord,
    {
        let mut vec = self.to_vec();
        vec.sort_unstable();
        vec
    }

    /// Adds every item of `other` to `self`, leaving `other` unchanged. (`self ← self ∪ other`)
    pub fn unite(&mut self, other: &HashSet<T, B>) {
        self.extend(other.iter().cloned())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> HashSet<T, B> {
    /// Returns a new set of the items that are in `self` but not `other`. (`self \ other`)
    pub fn difference(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        self.collect_with_hasher(self.iter_difference(other))
    }

    /// Returns a new set of the items that are in exactly one of `self` and `other`. (`self △
    /// other`)
    pub fn symmetric_difference(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        self.collect_with_hasher(self.iter_symmetric_difference(other))
    }

    /// Returns a new set of the items that are in both `self` and `other`. (`self ∩ other`)
    pub fn intersection(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        if self.len() <= other.len() {
            self.collect_with_hasher(self.iter_intersection(other))
        } else {
            self.collect_with_hasher(other.iter_intersection(self))
        }
    }

    /// Returns a new set of the items that are in either `self` or `other`. (`self ∪ other`)
    pub fn union(&self, other: &HashSet<T, B>) -> HashSet<T, B> {
        self.collect_with_hasher(self.iter_union(other))
    }

    fn collect_with_hasher<'a, I>(&self, items: I) -> HashSet<T, B>
    where
        I: Iterator<Item = &'a T>,
        T: 'a,
    {
        let mut set = HashSet::with_hasher(self.hasher().clone());
        set.extend(items.cloned());
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        HashSet::with_hasher(B::default())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(value: [T; N]) -> Self {
        let mut set = HashSet::with_cap(N);
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::default();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Items may already be present, so only the lower bound is a safe estimate.
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if self.remove(&item).is_none() {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents = self.iter()
            .map(|i| format!("{i:?}"))
            .collect::<Vec<_>>()
            .join(", ");

        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!("{{{contents}}}")))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

/// Renders the set with its items sorted, e.g. `{1 2 4 8}`, or as `{…N elements…}` once it holds
/// more than [`DEFAULT_DISPLAY_LIMIT`](super::DEFAULT_DISPLAY_LIMIT) items. See
/// [`HashSet::display`] for other configurations.
impl<T: Hash + Eq + Render + Ord, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display().sorted(), f)
    }
}
