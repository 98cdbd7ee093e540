//! Optional values as a closed two-slot union.
//!
//! This module provides [`Maybe<T>`], a container that is either
//! `Some(value)` or `None`. It is deliberately separate from
//! `std::option::Option` so that the combinator algebra of this crate
//! (map, bind, filter, reduce, `match_with`, effect, tap) can live on it
//! uniformly with [`Outcome`](crate::outcome::Outcome), together with the
//! async-aware mirror of every combinator.
//!
//! The exclusivity invariant is structural: a Rust enum holds exactly one
//! variant, so `is_some() XOR is_none()` always holds and `None` never
//! stores a value.
//!
//! # Null-collapsing construction
//!
//! Lifting a host "nullable" (`Option<T>`) collapses the absent case into
//! `Maybe::None`; there is no way to build a `Maybe::Some` holding an
//! absent marker:
//!
//! ```rust
//! use sumrail::maybe::Maybe;
//!
//! assert!(Maybe::from_nullable(Some(42)).is_some());
//! assert!(Maybe::<i32>::from_nullable(None).is_none());
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sumrail::maybe::Maybe;
//!
//! let doubled = Maybe::some(21)
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 0)
//!     .reduce(0);
//! assert_eq!(doubled, 42);
//! ```

use std::fmt;

#[cfg(feature = "async")]
mod future;

#[cfg(feature = "async")]
pub use future::MaybeFutureExt;

#[cfg(feature = "outcome")]
use crate::outcome::Outcome;

/// An optional value: either `Some(value)` or `None`.
///
/// All combinators consume `self` and return new containers; a `Maybe` is
/// immutable once constructed.
///
/// # Examples
///
/// ```rust
/// use sumrail::maybe::Maybe;
///
/// let present = Maybe::some(5);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert_eq!(present.map(|n| n + 1), Maybe::some(6));
/// assert_eq!(absent.map(|n| n + 1), Maybe::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// The absence of a value.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert!(Maybe::some(42).is_some());
    /// ```
    #[inline]
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Lifts a host nullable into a `Maybe`, collapsing the null case.
    ///
    /// `Option::None` becomes `Maybe::None`; a present marker is never
    /// stored inside `Some`. This collapse is deliberate and part of the
    /// construction contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some("x")), Maybe::some("x"));
    /// assert_eq!(Maybe::<&str>::from_nullable(None), Maybe::none());
    /// ```
    #[inline]
    #[must_use]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// let value = Maybe::some(String::from("text"));
    /// assert_eq!(value.as_ref().map(|s| s.len()), Maybe::some(4));
    /// assert!(value.is_some());
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the contained value, if any.
    ///
    /// The transform is never invoked on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|n| n * 10), Maybe::some(20));
    /// assert_eq!(Maybe::<i32>::none().map(|n| n * 10), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(transform(value)),
            Self::None => Maybe::None,
        }
    }

    /// Sequences a `Maybe`-producing function without nesting.
    ///
    /// On `None` the binder is never invoked and the result stays `None`,
    /// so chains of `bind` short-circuit on the first absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(7).bind(half).bind(half), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U>(self, binder: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => binder(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only when the predicate accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0), Maybe::some(4));
    /// assert_eq!(Maybe::some(3).filter(|n| n % 2 == 0), Maybe::none());
    /// ```
    #[inline]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Extracts the value, or returns the eager alternate on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).reduce(0), 3);
    /// assert_eq!(Maybe::<i32>::none().reduce(0), 0);
    /// ```
    #[inline]
    pub fn reduce(self, alternate: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => alternate,
        }
    }

    /// Extracts the value, or computes the alternate on `None`.
    ///
    /// The alternate is only computed when needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::<i32>::none().reduce_with(|| 7), 7);
    /// ```
    #[inline]
    pub fn reduce_with(self, alternate: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => alternate(),
        }
    }

    /// Exhaustive extraction: exactly one of the two handlers runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// let text = Maybe::some(3).match_with(
    ///     |n| format!("got {n}"),
    ///     || "nothing".to_string(),
    /// );
    /// assert_eq!(text, "got 3");
    /// ```
    #[inline]
    pub fn match_with<R>(
        self,
        when_some: impl FnOnce(T) -> R,
        when_none: impl FnOnce() -> R,
    ) -> R {
        match self {
            Self::Some(value) => when_some(value),
            Self::None => when_none(),
        }
    }

    /// Terminal side effects: runs exactly one of the two handlers and
    /// discards the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// let mut seen = 0;
    /// Maybe::some(5).effect(|n| seen = n, || {});
    /// assert_eq!(seen, 5);
    /// ```
    #[inline]
    pub fn effect(self, when_some: impl FnOnce(T), when_none: impl FnOnce()) {
        match self {
            Self::Some(value) => when_some(value),
            Self::None => when_none(),
        }
    }

    /// Chainable side effects: runs exactly one of the two handlers and
    /// returns the container unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// let mut log = Vec::new();
    /// let value = Maybe::some(5)
    ///     .tap(|n| log.push(*n), || {})
    ///     .map(|n| n + 1);
    /// assert_eq!(value, Maybe::some(6));
    /// assert_eq!(log, vec![5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn tap(self, when_some: impl FnOnce(&T), when_none: impl FnOnce()) -> Self {
        match &self {
            Self::Some(value) => when_some(value),
            Self::None => when_none(),
        }
        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// Misuse fails fast: callers are expected to check [`Maybe::is_some`]
    /// first; there is no sentinel return.
    ///
    /// # Panics
    ///
    /// Panics if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    // =========================================================================
    // Railway Conversions
    // =========================================================================

    /// Switches onto the railway: `Some` becomes `Ok`, `None` becomes the
    /// given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::maybe::Maybe;
    /// use sumrail::outcome::Outcome;
    ///
    /// assert_eq!(Maybe::some(1).ok_or("missing"), Outcome::ok(1));
    /// assert_eq!(Maybe::<i32>::none().ok_or("missing"), Outcome::error("missing"));
    /// ```
    #[cfg(feature = "outcome")]
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Error(error),
        }
    }

    /// Like [`Maybe::ok_or`], computing the error only when needed.
    #[cfg(feature = "outcome")]
    #[inline]
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Error(error()),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// The default `Maybe` is absent.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// The null-collapsing lift; see [`Maybe::from_nullable`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone, Copy);
