//! An unordered set built on top of a hash map, where the presence of a key is membership.
//!
//! # Purpose
//! [`HashSet`](hash::HashSet) offers membership, set algebra (union, intersection, difference and
//! symmetric difference), the usual relational predicates, iteration and a bounded textual
//! rendering. It wraps exactly one [`HashMap<T, ()>`](hash::HashMap) and keeps no other state, so
//! an element is in the set if and only if it is a key of that map.
//!
//! # Method
//! The backing [`HashMap`](hash::HashMap) is a linear-probing open addressing table, written here
//! rather than borrowed from [`std`]. The set algebra is described once, by the
//! [`Set`](traits::Set) trait, as lazy iterators over two borrowed sets. The inherent methods on
//! [`HashSet`](hash::HashSet) collect those into new, independently owned sets.
//!
//! Formatting elements is decided at compile time through [`Render`](traits::Render): strings are
//! quoted, everything else uses its [`Display`](std::fmt::Display) form. Large sets are rendered as
//! a count rather than enumerated, see [`SetDisplay`](hash::set::SetDisplay).
//!
//! # Error Handling
//! None of the set operations can fail. The only fallible part is capacity arithmetic, which is
//! exposed through `try_reserve` and a strongly typed
//! [`CapacityOverflow`](hash::map::CapacityOverflow). The infallible counterparts panic with that
//! error's message instead.
//!
//! # Concurrency
//! There is no internal synchronization. A set may be shared immutably as Rust's borrowing rules
//! allow, but mixed reads and writes across threads need an external lock, such as a
//! [`RwLock`](std::sync::RwLock) held by the caller.
//!
//! # Dependencies
//! This crate depends on some derive macros for its error type, because they remove the need for
//! some very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;

pub(crate) mod util;
