//! A module containing [`HashSet`] and associtated types.
//!
//! Some of these types provide owned, borrowed and indexed iteration over a set's elements, while
//! [`SetDisplay`] controls how a set is rendered as text. Iterators over the result of set
//! operations on two sets are provided by [`Set`](crate::traits::Set).
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod display;
mod hash_set;
mod iter;
mod tests;

pub use display::*;
pub use hash_set::*;
pub use iter::*;

#[doc(inline)]
pub use crate::hash::map::CapacityOverflow;

/// Creates a [`HashSet`] containing the provided items, with duplicates collapsed.
///
/// With no items, the element type must be inferable from context or annotated.
///
/// # Examples
/// ```
/// # use unordered_set::hash_set;
/// # use unordered_set::hash::HashSet;
/// let set = hash_set![19, 21, 1, 2, 4, 8, 4];
/// assert_eq!(set.len(), 6);
/// assert_eq!(set.to_string(), "{1 2 4 8 19 21}");
///
/// let empty: HashSet<&str> = hash_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! hash_set {
    () => {
        $crate::hash::HashSet::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::hash::HashSet::from([$($item),+])
    };
}
