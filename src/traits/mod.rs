//! Traits describing behavior shared across collections and their elements.
//!
//! [`Set`] is the contract every set satisfies, with set algebra defined in terms of it.
//! [`Render`] chooses how an element is written when a collection is displayed.

pub mod render;
pub mod set;

#[doc(inline)]
pub use render::Render;
#[doc(inline)]
pub use set::Set;
