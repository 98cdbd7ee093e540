//! Success/failure values as a closed two-slot union.
//!
//! [`Outcome<T, E>`] is either `Ok(value)` or `Error(error)`. Unlike
//! [`Maybe`](crate::maybe::Maybe), the failure side carries a
//! caller-chosen payload, which makes the railway style possible: a chain
//! of [`Outcome::bind`] calls rides the success track and switches to the
//! failure track at the first error, never invoking the remaining binders.
//!
//! The aggregating counterpart is [`Outcome::collect_all`]: instead of
//! stopping at the first failure it visits every element and gathers all
//! failures, an intentional asymmetry with `bind`.
//!
//! # Examples
//!
//! ```rust
//! use sumrail::outcome::Outcome;
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse::<i32>()
//!         .map_or_else(|_| Outcome::error(format!("bad number: {text}")), Outcome::ok)
//! }
//!
//! let result = parse("21").map(|n| n * 2).reduce(0);
//! assert_eq!(result, 42);
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.is_error());
//! ```

use std::fmt;

#[cfg(feature = "async")]
mod future;

#[cfg(feature = "async")]
pub use future::OutcomeFutureExt;

#[cfg(feature = "maybe")]
use crate::maybe::Maybe;

/// The result of a computation: either `Ok(value)` or `Error(error)`.
///
/// Exactly one variant is active at all times; both carry a payload. All
/// combinators consume `self` and return new containers; an `Outcome` is
/// immutable once constructed.
///
/// The error type is caller-chosen — often a fault description, but any
/// type works.
///
/// # Examples
///
/// ```rust
/// use sumrail::outcome::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::ok(42);
/// let failed: Outcome<i32, String> = Outcome::error("boom".to_string());
///
/// assert_eq!(ok.map(|n| n + 1), Outcome::ok(43));
/// assert_eq!(failed.map(|n| n + 1), Outcome::error("boom".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The success payload.
    Ok(T),
    /// The failure payload.
    Error(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// assert!(Outcome::<i32, String>::ok(42).is_ok());
    /// ```
    #[inline]
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Wraps a failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// assert!(Outcome::<i32, String>::error("boom".to_string()).is_error());
    /// ```
    #[inline]
    #[must_use]
    pub const fn error(error: E) -> Self {
        Self::Error(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the success payload only; a failure passes through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// let ok: Outcome<i32, String> = Outcome::ok(2);
    /// assert_eq!(ok.map(|n| n * 10), Outcome::ok(20));
    /// ```
    #[inline]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(transform(value)),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Transforms the failure payload only; a success passes through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::error("late".to_string());
    /// assert_eq!(
    ///     failed.map_error(|e| e.len()),
    ///     Outcome::<i32, usize>::error(4),
    /// );
    /// ```
    #[inline]
    pub fn map_error<F>(self, transform: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(transform(error)),
        }
    }

    /// Sequences an `Outcome`-producing function without nesting.
    ///
    /// First failure wins: on `Error` the binder is never invoked and the
    /// error propagates unchanged, so chains short-circuit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// fn positive(n: i32) -> Outcome<i32, String> {
    ///     if n > 0 { Outcome::ok(n) } else { Outcome::error("not positive".to_string()) }
    /// }
    ///
    /// assert_eq!(Outcome::<i32, String>::ok(3).bind(positive), Outcome::ok(3));
    /// assert!(Outcome::<i32, String>::ok(-3).bind(positive).is_error());
    /// ```
    #[inline]
    pub fn bind<U>(self, binder: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => binder(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Extracts the success payload, or returns the eager alternate on
    /// failure (discarding the error).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, String>::ok(3).reduce(0), 3);
    /// assert_eq!(Outcome::<i32, String>::error("e".to_string()).reduce(0), 0);
    /// ```
    #[inline]
    pub fn reduce(self, alternate: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => alternate,
        }
    }

    /// Extracts the success payload, or computes the alternate on failure
    /// (discarding the error).
    #[inline]
    pub fn reduce_with(self, alternate: impl FnOnce() -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => alternate(),
        }
    }

    /// Extracts the success payload, or computes the alternate from the
    /// error payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// let failed: Outcome<usize, String> = Outcome::error("boom".to_string());
    /// assert_eq!(failed.reduce_with_error(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn reduce_with_error(self, alternate: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => alternate(error),
        }
    }

    /// Exhaustive extraction: exactly one of the two handlers runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// let text = Outcome::<i32, String>::ok(3)
    ///     .match_with(|n| format!("ok {n}"), |e| format!("failed: {e}"));
    /// assert_eq!(text, "ok 3");
    /// ```
    #[inline]
    pub fn match_with<R>(
        self,
        when_ok: impl FnOnce(T) -> R,
        when_error: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::Ok(value) => when_ok(value),
            Self::Error(error) => when_error(error),
        }
    }

    /// Terminal side effects: runs exactly one of the two handlers and
    /// discards the container.
    #[inline]
    pub fn effect(self, when_ok: impl FnOnce(T), when_error: impl FnOnce(E)) {
        match self {
            Self::Ok(value) => when_ok(value),
            Self::Error(error) => when_error(error),
        }
    }

    /// Chainable side effects: runs exactly one of the two handlers and
    /// returns the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// let mut seen_errors = 0;
    /// let value = Outcome::<i32, String>::ok(5)
    ///     .tap(|_| {}, |_| seen_errors += 1)
    ///     .map(|n| n * 2);
    /// assert_eq!(value, Outcome::ok(10));
    /// assert_eq!(seen_errors, 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap(self, when_ok: impl FnOnce(&T), when_error: impl FnOnce(&E)) -> Self {
        match &self {
            Self::Ok(value) => when_ok(value),
            Self::Error(error) => when_error(error),
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success payload, consuming the `Outcome`.
    ///
    /// Misuse fails fast: callers are expected to check
    /// [`Outcome::is_ok`] first; there is no sentinel return.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Error` value.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => panic!("called `Outcome::unwrap()` on an `Error` value"),
        }
    }

    /// Returns the failure payload, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value.
    #[inline]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Ok(_) => panic!("called `Outcome::unwrap_error()` on an `Ok` value"),
            Self::Error(error) => error,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// The success payload as a [`Maybe`], discarding any error.
    #[cfg(feature = "maybe")]
    #[inline]
    pub fn ok_value(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Error(_) => Maybe::None,
        }
    }

    /// The failure payload as a [`Maybe`], discarding any success.
    #[cfg(feature = "maybe")]
    #[inline]
    pub fn error_value(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Error(error) => Maybe::Some(error),
        }
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Visits every element, gathering all successes and all failures.
    ///
    /// This is the deliberate departure from [`Outcome::bind`]'s
    /// first-failure-wins rule: no element is skipped, both lists preserve
    /// input order, and the whole is `Ok` only when the failure list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::outcome::Outcome;
    ///
    /// let all_ok = Outcome::collect_all([
    ///     Outcome::<i32, String>::ok(1),
    ///     Outcome::ok(2),
    ///     Outcome::ok(3),
    /// ]);
    /// assert_eq!(all_ok, Outcome::ok(vec![1, 2, 3]));
    ///
    /// let mixed = Outcome::collect_all([
    ///     Outcome::<i32, String>::error("first".to_string()),
    ///     Outcome::ok(2),
    ///     Outcome::error("second".to_string()),
    /// ]);
    /// assert_eq!(
    ///     mixed,
    ///     Outcome::error(vec!["first".to_string(), "second".to_string()]),
    /// );
    /// ```
    pub fn collect_all<I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Self::Ok(value) => values.push(value),
                Self::Error(error) => errors.push(error),
            }
        }
        if errors.is_empty() {
            Outcome::Ok(values)
        } else {
            Outcome::Error(errors)
        }
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Error(error) => write!(formatter, "Error({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Outcome::Ok(v)` and `Err(e)` becomes
    /// `Outcome::Error(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
