//! The environment reader: a reusable recipe for an [`Io`].
//!
//! A [`ReaderIo`] maps an [`Env`] to an [`Io`]. It can be cloned, composed
//! and provided any number of times; each [`provide`](ReaderIo::provide)
//! builds a fresh `Io`, and nothing touches the store until that `Io` runs.

use std::fmt;
use std::sync::Arc;

use fcr_core::StoreError;

use crate::env::Env;
use crate::io::Io;

/// The result of evaluating a pipeline.
pub type Outcome<T> = Result<T, StoreError>;

/// The value of operations that only report success.
pub type Unit = ();

type ReaderFn<T> = dyn Fn(&Env) -> Io<T> + Send + Sync;

/// A function from [`Env`] to a deferred result.
pub struct ReaderIo<T> {
    f: Arc<ReaderFn<T>>,
}

impl<T> Clone for ReaderIo<T> {
    fn clone(&self) -> Self {
        ReaderIo {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for ReaderIo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReaderIo(..)")
    }
}

impl<T: 'static> ReaderIo<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Env) -> Io<T> + Send + Sync + 'static,
    {
        ReaderIo { f: Arc::new(f) }
    }

    /// Succeeds with a clone of `value` whatever the environment.
    pub fn right(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        ReaderIo::new(move |_| Io::right(value.clone()))
    }

    /// Fails with a clone of `err` whatever the environment.
    pub fn left(err: StoreError) -> Self {
        ReaderIo::new(move |_| Io::left(err.clone()))
    }

    /// Binds the environment. The returned [`Io`] has not run yet.
    pub fn provide(&self, env: &Env) -> Io<T> {
        (self.f)(env)
    }

    /// Binds the environment and runs the result.
    pub fn run(&self, env: &Env) -> Outcome<T> {
        self.provide(env).run()
    }

    pub fn map<U, F>(self, f: F) -> ReaderIo<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderIo::new(move |env| {
            let f = Arc::clone(&f);
            self.provide(env).map(move |value| f(value))
        })
    }

    /// Sequences a dependent reader built from this reader's value. Both
    /// run against the same environment; the first failure wins.
    pub fn chain<U, F>(self, f: F) -> ReaderIo<U>
    where
        U: 'static,
        F: Fn(T) -> ReaderIo<U> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderIo::new(move |env| {
            let f = Arc::clone(&f);
            let env = env.clone();
            self.provide(&env).chain(move |value| f(value).provide(&env))
        })
    }

    /// Like [`chain`](Self::chain), but keeps this reader's value and only
    /// uses the dependent reader for its effect and failure.
    pub fn chain_first<U, F>(self, f: F) -> ReaderIo<T>
    where
        U: 'static,
        F: Fn(&T) -> ReaderIo<U> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderIo::new(move |env| {
            let f = Arc::clone(&f);
            let env = env.clone();
            self.provide(&env)
                .chain(move |value| f(&value).provide(&env).map(move |_| value))
        })
    }

    /// Observes the value on success.
    pub fn tap<F>(self, f: F) -> ReaderIo<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.map(move |value| {
            f(&value);
            value
        })
    }

    /// Recovers from a failure with a reader built from the error.
    pub fn or_else<F>(self, f: F) -> ReaderIo<T>
    where
        F: Fn(StoreError) -> ReaderIo<T> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderIo::new(move |env| {
            let f = Arc::clone(&f);
            let env = env.clone();
            self.provide(&env).or_else(move |err| f(err).provide(&env))
        })
    }

    pub fn map_err<F>(self, f: F) -> ReaderIo<T>
    where
        F: Fn(StoreError) -> StoreError + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ReaderIo::new(move |env| {
            let f = Arc::clone(&f);
            self.provide(env).map_err(move |err| f(err))
        })
    }
}

/// Lifts a plain fallible function of the environment into a reader.
///
/// `f` runs exactly once per run of the provided [`Io`].
pub fn readerize<T, F>(f: F) -> ReaderIo<T>
where
    T: 'static,
    F: Fn(&Env) -> Outcome<T> + Send + Sync + 'static,
{
    let f = Arc::new(f);
    ReaderIo::new(move |env| {
        let f = Arc::clone(&f);
        let env = env.clone();
        Io::new(move || f(&env))
    })
}

/// Free-function form of [`ReaderIo::provide`].
pub fn provide<T: 'static>(reader: &ReaderIo<T>, env: &Env) -> Io<T> {
    reader.provide(env)
}

/// A reusable pipeline stage that chains `f` onto its input reader.
pub fn chain_with<A, B, F>(f: F) -> impl Fn(ReaderIo<A>) -> ReaderIo<B> + Clone + Send + Sync
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> ReaderIo<B> + Send + Sync + 'static,
{
    let f = Arc::new(f);
    move |reader: ReaderIo<A>| {
        let f = Arc::clone(&f);
        reader.chain(move |a| f(a))
    }
}

/// A reusable pipeline stage that maps `f` over its input reader.
pub fn map_with<A, B, F>(f: F) -> impl Fn(ReaderIo<A>) -> ReaderIo<B> + Clone + Send + Sync
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    let f = Arc::new(f);
    move |reader: ReaderIo<A>| {
        let f = Arc::clone(&f);
        reader.map(move |a| f(a))
    }
}

/// Left-to-right composition of two stages.
pub fn flow2<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| second(first(a))
}
