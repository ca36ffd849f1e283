use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;
use std::sync::Arc;

/// A strategy for writing a value as an element of a displayed collection.
///
/// The choice is made at compile time through the implementation for each type, rather than by
/// inspecting values: textual types are written quoted and escaped, as by their [`Debug`]
/// implementation, while numbers, [`bool`] and [`char`] are written as by [`Display`]. Smart
/// pointers and references write whatever they point to.
///
/// # Examples
/// ```
/// # use std::fmt::{self, Formatter};
/// # use unordered_set::traits::Render;
/// struct Celsius(i32);
///
/// impl Render for Celsius {
///     fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
/// ```
pub trait Render {
    /// Writes `self` to `f`.
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! render_with {
    ($fmt:ident; $($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    $fmt::fmt(self, f)
                }
            }
        )*
    };
}

render_with!(Display;
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char,
);

render_with!(Debug; str, String);

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<B: Render + ToOwned + ?Sized> Render for Cow<'_, B> {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}
