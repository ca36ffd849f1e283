//! Hash-based collections: the [`HashSet`] and the [`HashMap`] it is stored in.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
