use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`], or panics with the [`Display`](std::fmt::Display) message of the error,
    /// reported at the caller's location. Used by infallible wrappers around fallible capacity
    /// methods, e.g. `reserve` over `try_reserve`.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
