use std::fmt::{self, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::HashSet;
use crate::traits::Render;
use crate::util::fmt::write_separated;

/// The number of items above which a displayed set is summarized by its length instead of being
/// enumerated.
pub const DEFAULT_DISPLAY_LIMIT: usize = 100;

/// Marks a [`SetDisplay`] which writes items in the set's iteration order.
#[derive(Debug, Clone, Copy)]
pub struct Unsorted;

/// Marks a [`SetDisplay`] which writes items in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct Sorted;

/// A [`Display`] adapter for a [`HashSet`], created by [`HashSet::display`].
///
/// Items are written with [`Render`], separated by single spaces and surrounded by braces, e.g.
/// `{1 2 3}` or `{"a" "b"}`. A set with more items than the adapter's limit is written as
/// `{…N elements…}` instead, so displaying a set is bounded regardless of its size. The limit
/// defaults to [`DEFAULT_DISPLAY_LIMIT`].
///
/// Sorting is independent of the limit: an [`Unsorted`] adapter only requires `T: Render`, while
/// [`sorted`](SetDisplay::sorted) additionally requires `T: Ord`. Unsorted output follows the
/// set's iteration order, which doesn't change while the set isn't modified.
///
/// # Examples
/// ```
/// # use unordered_set::hash::HashSet;
/// let set: HashSet<u32> = (0..111).collect();
/// assert_eq!(set.to_string(), "{…111 elements…}");
///
/// let set: HashSet<u32> = (0..5).rev().collect();
/// assert_eq!(set.display().sorted().limit(5).to_string(), "{0 1 2 3 4}");
/// assert_eq!(set.display().limit(4).to_string(), "{…5 elements…}");
/// ```
pub struct SetDisplay<'a, T: Hash + Eq, B: BuildHasher, O = Unsorted> {
    set: &'a HashSet<T, B>,
    limit: usize,
    _order: PhantomData<O>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> SetDisplay<'a, T, B> {
    pub(crate) const fn new(set: &'a HashSet<T, B>) -> SetDisplay<'a, T, B> {
        SetDisplay {
            set,
            limit: DEFAULT_DISPLAY_LIMIT,
            _order: PhantomData,
        }
    }

    /// Writes the items in ascending order.
    pub const fn sorted(self) -> SetDisplay<'a, T, B, Sorted>
    where
        T: Ord,
    {
        SetDisplay {
            set: self.set,
            limit: self.limit,
            _order: PhantomData,
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher, O> SetDisplay<'_, T, B, O> {
    /// Sets the number of items above which the set is summarized by its length.
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Writes either the summary or the braces around `items`, depending on the set's length.
    fn write_items<'i, I>(&self, f: &mut Formatter<'_>, items: I) -> fmt::Result
    where
        I: FnOnce() -> Vec<&'i T>,
        T: Render + 'i,
    {
        let len = self.set.len();
        if len > self.limit {
            return write!(f, "{{…{len} elements…}}");
        }

        f.write_str("{")?;
        write_separated(f, items(), " ", |f, item| item.render(f))?;
        f.write_str("}")
    }
}

impl<T: Hash + Eq + Render, B: BuildHasher> Display for SetDisplay<'_, T, B, Unsorted> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_items(f, || self.set.iter().collect())
    }
}

impl<T: Hash + Eq + Render + Ord, B: BuildHasher> Display for SetDisplay<'_, T, B, Sorted> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_items(f, || {
            let mut items = self.set.iter().collect::<Vec<_>>();
            items.sort_unstable();
            items
        })
    }
}
