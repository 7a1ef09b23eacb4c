//! The deferred result primitive.
//!
//! An [`Io`] wraps a computation that yields `Result<T, StoreError>` when
//! run. Building or composing an `Io` performs nothing; [`Io::run`]
//! consumes it, so every `Io` runs at most once.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use fcr_core::StoreError;

type Thunk<T> = Box<dyn FnOnce() -> Result<T, StoreError>>;

/// A deferred, run-once computation producing `T` or a [`StoreError`].
pub struct Io<T> {
    thunk: Thunk<T>,
}

impl<T: 'static> Io<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, StoreError> + 'static,
    {
        Io { thunk: Box::new(f) }
    }

    /// An `Io` that succeeds with `value` without doing anything.
    pub fn right(value: T) -> Self {
        Io::new(move || Ok(value))
    }

    /// An `Io` that fails with `err` without doing anything.
    pub fn left(err: StoreError) -> Self {
        Io::new(move || Err(err))
    }

    /// Performs the computation.
    ///
    /// A panic inside the computation is caught here and reported as
    /// [`StoreError::Panicked`].
    pub fn run(self) -> Result<T, StoreError> {
        let thunk = self.thunk;
        match panic::catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(result) => result,
            Err(payload) => Err(StoreError::Panicked {
                message: panic_message(payload.as_ref()),
            }),
        }
    }

    pub fn map<U, F>(self, f: F) -> Io<U>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        Io::new(move || self.run().map(f))
    }

    /// Runs `self`, then the `Io` built from its value. Stops at the first
    /// failure.
    pub fn chain<U, F>(self, f: F) -> Io<U>
    where
        U: 'static,
        F: FnOnce(T) -> Io<U> + 'static,
    {
        Io::new(move || f(self.run()?).run())
    }

    /// Recovers from a failure with the `Io` built from the error.
    pub fn or_else<F>(self, f: F) -> Io<T>
    where
        F: FnOnce(StoreError) -> Io<T> + 'static,
    {
        Io::new(move || match self.run() {
            Ok(value) => Ok(value),
            Err(err) => f(err).run(),
        })
    }

    pub fn map_err<F>(self, f: F) -> Io<T>
    where
        F: FnOnce(StoreError) -> StoreError + 'static,
    {
        Io::new(move || self.run().map_err(f))
    }
}

impl<T> fmt::Debug for Io<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Io(..)")
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
