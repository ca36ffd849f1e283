use std::fmt::{self, Debug, Formatter};

/// A pre-formatted string which is written verbatim by [`Debug`], without the quotes that
/// [`String`]'s own implementation adds.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writes `items` separated by `sep`, using `write_item` for each one. Nothing is written for an
/// empty iterator.
pub fn write_separated<I, F>(f: &mut Formatter<'_>, items: I, sep: &str, mut write_item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut Formatter<'_>, I::Item) -> fmt::Result,
{
    let mut first = true;
    for item in items {
        if !first {
            f.write_str(sep)?;
        }
        first = false;
        write_item(f, item)?;
    }
    Ok(())
}
