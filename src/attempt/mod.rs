//! The exception boundary: converting host faults into values.
//!
//! Everywhere else in this crate, expected failure is data
//! (`Maybe::None`, `Outcome::Error`) and faults — Rust panics — propagate
//! untouched. This module is the one place faults are caught and turned
//! into inspectable values, in two forms:
//!
//! - [`Trial<T>`] — the immediate form. [`Trial::run`] executes a
//!   possibly-panicking operation now and yields `Success(value)` or
//!   `Failure(fault)` for later matching.
//! - [`attempt`] — the deferred builder. `attempt(op).catch(handler)`
//!   (optionally `.finally(cleanup)`) records a pipeline without executing
//!   anything; [`Catching::invoke`] is the sole trigger.
//!
//! The builder is a recipe, not a result: operations are `Fn`, `invoke`
//! borrows the builder, and every call re-runs the whole chain including
//! the original operation. Nothing is memoized.
//!
//! Fault discipline: only the wrapped operation's faults are converted. A
//! fault thrown by the catch handler propagates — after the cleanup has
//! run; a cleanup fault raised while already unwinding is reported on
//! stderr and suppressed in favor of the original fault.
//!
//! # Examples
//!
//! ```rust
//! use sumrail::attempt::{Fault, attempt};
//!
//! let pipeline = attempt(|| {
//!     if true { panic!("boom") }
//!     0
//! })
//! .catch(|fault: Fault| {
//!     assert_eq!(fault.message(), "boom");
//!     -1
//! });
//!
//! assert_eq!(pipeline.invoke(), -1);
//! assert_eq!(pipeline.invoke(), -1); // the chain re-runs every time
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "maybe")]
use crate::maybe::Maybe;
#[cfg(feature = "outcome")]
use crate::outcome::Outcome;

// =============================================================================
// Fault
// =============================================================================

/// A caught fault: the payload of a panic captured at the boundary.
///
/// The common payloads (`&str` and `String` from `panic!`) are exposed
/// through [`Fault::message`]; anything else is carried opaquely and can
/// be recovered with [`Fault::into_payload`].
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The fault message, when the payload carries one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::attempt::Trial;
    ///
    /// let trial: Trial<i32> = Trial::run(|| panic!("broken pipe"));
    /// let message = trial.match_with(|_| String::new(), |fault| fault.message().to_string());
    /// assert_eq!(message, "broken pipe");
    /// ```
    #[must_use]
    pub fn message(&self) -> &str {
        if let Some(text) = self.payload.downcast_ref::<&'static str>() {
            text
        } else if let Some(text) = self.payload.downcast_ref::<String>() {
            text.as_str()
        } else {
            "opaque fault payload"
        }
    }

    /// Surrenders the raw panic payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Rethrows the fault as a panic, resuming the unwind.
    pub fn rethrow(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Fault").field(&self.message()).finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

// =============================================================================
// Trial
// =============================================================================

/// The immediate exception-boundary value: `Success(value)` or
/// `Failure(fault)`.
///
/// Distinct from [`Outcome`]: a `Trial` exists specifically to mark the
/// point where a host fault was caught and converted; its failure side
/// always carries the caught [`Fault`].
#[derive(Debug)]
pub enum Trial<T> {
    /// The operation returned normally.
    Success(T),
    /// The operation panicked; the payload was captured.
    Failure(Fault),
}

impl<T> Trial<T> {
    /// Executes a possibly-panicking operation now, capturing its outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::attempt::Trial;
    ///
    /// let fine = Trial::run(|| 1 + 1);
    /// assert!(fine.is_success());
    ///
    /// let broken: Trial<i32> = Trial::run(|| panic!("boom"));
    /// assert!(broken.is_failure());
    /// ```
    pub fn run<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Fault::new(payload)),
        }
    }

    /// Executes a possibly-panicking asynchronous operation, capturing its
    /// outcome. Faults raised while constructing the future and while
    /// polling it are both captured.
    #[cfg(feature = "async")]
    pub async fn run_async<F, Fut>(operation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        use futures::FutureExt;

        let future = match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(future) => future,
            Err(payload) => return Self::Failure(Fault::new(payload)),
        };
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Fault::new(payload)),
        }
    }

    /// Returns `true` if the operation returned normally.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if a fault was captured.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Resolves the trial: the success value, or the handler's value
    /// computed from the fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::attempt::Trial;
    ///
    /// let value = Trial::run(|| panic!("boom")).catch(|_| 7);
    /// assert_eq!(value, 7);
    /// ```
    #[inline]
    pub fn catch(self, handler: impl FnOnce(Fault) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => handler(fault),
        }
    }

    /// Exhaustive extraction: exactly one of the two handlers runs.
    #[inline]
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Fault) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(fault) => on_failure(fault),
        }
    }

    /// Transforms the success value; a captured fault passes through.
    #[inline]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Trial<U> {
        match self {
            Self::Success(value) => Trial::Success(transform(value)),
            Self::Failure(fault) => Trial::Failure(fault),
        }
    }

    /// Converts onto the railway, keeping the fault as the error payload.
    #[cfg(feature = "outcome")]
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, Fault> {
        match self {
            Self::Success(value) => Outcome::Ok(value),
            Self::Failure(fault) => Outcome::Error(fault),
        }
    }

    /// Converts to a [`Maybe`], discarding any fault.
    #[cfg(feature = "maybe")]
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }
}

// =============================================================================
// Deferred Builder
// =============================================================================

/// Wraps a possibly-panicking operation without executing it.
///
/// One-argument operations are expressed by closure capture. The returned
/// [`Attempt`] does nothing until [`Attempt::invoke`] (yielding a
/// [`Trial`]) or until a catch handler is attached and the
/// [`Catching`] pipeline is invoked.
///
/// # Examples
///
/// ```rust
/// use sumrail::attempt::attempt;
///
/// let pipeline = attempt(|| 21).catch(|_| 0);
/// assert_eq!(pipeline.invoke() * 2, 42);
/// ```
pub fn attempt<Op>(operation: Op) -> Attempt<Op> {
    Attempt { operation }
}

/// A recorded operation awaiting invocation. See [`attempt`].
#[derive(Clone)]
pub struct Attempt<Op> {
    operation: Op,
}

impl<Op> Attempt<Op> {
    /// Attaches a fault handler, still without executing anything.
    pub fn catch<H>(self, handler: H) -> Catching<Op, H> {
        Catching {
            operation: self.operation,
            handler,
        }
    }

    /// Runs the recorded operation, capturing its outcome as a [`Trial`].
    ///
    /// Every call re-runs the operation.
    pub fn invoke<T>(&self) -> Trial<T>
    where
        Op: Fn() -> T,
    {
        Trial::run(&self.operation)
    }

    /// Runs the recorded asynchronous operation, capturing its outcome as
    /// a [`Trial`]. Every call re-runs the operation.
    #[cfg(feature = "async")]
    pub async fn invoke_async<T, Fut>(&self) -> Trial<T>
    where
        Op: Fn() -> Fut,
        Fut: Future<Output = T>,
    {
        Trial::run_async(&self.operation).await
    }
}

/// An operation with an attached fault handler, awaiting invocation.
#[derive(Clone)]
pub struct Catching<Op, H> {
    operation: Op,
    handler: H,
}

impl<Op, H> Catching<Op, H> {
    /// Attaches an unconditional cleanup step, still without executing
    /// anything.
    pub fn finally<C>(self, cleanup: C) -> Finalizing<Op, H, C> {
        Finalizing {
            operation: self.operation,
            handler: self.handler,
            cleanup,
        }
    }

    /// Executes the pipeline: runs the operation; on a fault, runs the
    /// handler with it and uses the handler's return value instead.
    ///
    /// Every call re-runs the whole chain — the builder is a recipe, not
    /// a memoized result.
    pub fn invoke<T>(&self) -> T
    where
        Op: Fn() -> T,
        H: Fn(Fault) -> T,
    {
        match catch_unwind(AssertUnwindSafe(&self.operation)) {
            Ok(value) => value,
            Err(payload) => (self.handler)(Fault::new(payload)),
        }
    }

    /// Executes the pipeline with an asynchronous operation; see
    /// [`Catching::invoke`].
    #[cfg(feature = "async")]
    pub async fn invoke_async<T, Fut>(&self) -> T
    where
        Op: Fn() -> Fut,
        Fut: Future<Output = T>,
        H: Fn(Fault) -> T,
    {
        Trial::run_async(&self.operation)
            .await
            .catch(&self.handler)
    }
}

/// A complete try/catch/finally pipeline, awaiting invocation.
#[derive(Clone)]
pub struct Finalizing<Op, H, C> {
    operation: Op,
    handler: H,
    cleanup: C,
}

impl<Op, H, C> Finalizing<Op, H, C> {
    /// Executes the pipeline: runs the operation; on a fault, runs the
    /// handler with it; runs the cleanup unconditionally — whether the
    /// operation returned, the handler recovered, or the handler itself
    /// faulted; returns the operation's or handler's value.
    ///
    /// Every call re-runs the whole chain.
    ///
    /// # Panics
    ///
    /// A fault raised by the handler or the cleanup propagates after the
    /// cleanup has run; a cleanup fault raised while already unwinding is
    /// reported on stderr and suppressed in favor of the original fault.
    pub fn invoke<T>(&self) -> T
    where
        Op: Fn() -> T,
        H: Fn(Fault) -> T,
        C: Fn(),
    {
        let settled = match catch_unwind(AssertUnwindSafe(&self.operation)) {
            Ok(value) => Ok(value),
            Err(payload) => {
                catch_unwind(AssertUnwindSafe(|| (self.handler)(Fault::new(payload))))
            }
        };
        self.settle(settled)
    }

    /// Executes the pipeline with an asynchronous operation; see
    /// [`Finalizing::invoke`].
    #[cfg(feature = "async")]
    pub async fn invoke_async<T, Fut>(&self) -> T
    where
        Op: Fn() -> Fut,
        Fut: Future<Output = T>,
        H: Fn(Fault) -> T,
        C: Fn(),
    {
        let settled = match Trial::run_async(&self.operation).await {
            Trial::Success(value) => Ok(value),
            Trial::Failure(fault) => {
                catch_unwind(AssertUnwindSafe(|| (self.handler)(fault)))
            }
        };
        self.settle(settled)
    }

    fn settle<T>(&self, settled: Result<T, Box<dyn Any + Send + 'static>>) -> T
    where
        C: Fn(),
    {
        let cleanup_result = catch_unwind(AssertUnwindSafe(&self.cleanup));
        match (settled, cleanup_result) {
            (Ok(value), Ok(())) => value,
            (Err(fault), Ok(())) => resume_unwind(fault),
            (Ok(_), Err(cleanup_fault)) => resume_unwind(cleanup_fault),
            (Err(fault), Err(_cleanup_fault)) => {
                eprintln!(
                    "sumrail::attempt: cleanup faulted while unwinding; \
                     suppressing the cleanup fault in favor of the original fault"
                );
                resume_unwind(fault)
            }
        }
    }
}
