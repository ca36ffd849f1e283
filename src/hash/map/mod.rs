//! A module containing [`HashMap`] and associtated types.
//!
//! The map is the backing store of [`HashSet`](crate::hash::HashSet), but is usable on its own.
//! The other included types provide owned and borrowed iteration over entries, keys or values in a
//! map.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! HashMap in place would cause a logic error.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod error;
mod hash_map;
mod iter;

pub use error::*;
pub use hash_map::*;
pub use iter::*;
