//! Suspension-aware combinators for [`Maybe`].
//!
//! Deferred values are the host's futures; this crate does not own a
//! future type. "Lift" is [`futures::future::ready`] and "await" is
//! `.await`. Two method families keep a chain at exactly one future layer
//! no matter how each step is written:
//!
//! - `*_async` methods on [`Maybe`] itself take future-returning handlers
//!   and await them internally.
//! - [`MaybeFutureExt`] is blanket-implemented for every
//!   `Future<Output = Maybe<T>>` and offers the whole combinator set with
//!   both synchronous and future-returning handlers, awaiting the outer
//!   future first.
//!
//! Together the four groups (`Maybe::map`, `Maybe::map_async`, `fut.map`,
//! `fut.map_async`) cover every sync/async combination of container and
//! handler, and each call yields at most one `impl Future` — never a
//! future of a future.
//!
//! Suspension points are exactly the outer container await and each
//! handler await; there is no hidden suspension elsewhere.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sumrail::maybe::{Maybe, MaybeFutureExt};
//!
//! let result = Maybe::some(2)
//!     .map_async(|n| async move { n * 10 })   // Maybe -> Future<Maybe>
//!     .map(|n| n + 1)                          // still one future layer
//!     .await;
//! assert_eq!(result, Maybe::some(21));
//! ```

use std::future::Future;

use super::Maybe;
use crate::schedule::{CancellationToken, ExecutionOrder, run_all};

// =============================================================================
// Async Combinators on Maybe
// =============================================================================

impl<T> Maybe<T> {
    /// Transforms the contained value with a future-returning function.
    ///
    /// The handler's future is awaited internally, so the result is a
    /// single future of `Maybe<U>`. The handler is never invoked on
    /// `None`.
    pub fn map_async<U, F, Fut>(self, transform: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self {
                Self::Some(value) => Maybe::Some(transform(value).await),
                Self::None => Maybe::None,
            }
        }
    }

    /// Sequences a future-returning binder without nesting futures or
    /// containers.
    ///
    /// On `None` the binder is never invoked.
    pub fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move {
            match self {
                Self::Some(value) => binder(value).await,
                Self::None => Maybe::None,
            }
        }
    }

    /// Keeps the value only when the asynchronous predicate accepts it.
    ///
    /// The predicate receives its own clone of the value so the original
    /// can be returned after the suspension point.
    pub fn filter_async<F, Fut>(self, predicate: F) -> impl Future<Output = Self>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move {
            match self {
                Self::Some(value) => {
                    if predicate(value.clone()).await {
                        Self::Some(value)
                    } else {
                        Self::None
                    }
                }
                Self::None => Self::None,
            }
        }
    }

    /// Extracts the value, or awaits the computed alternate on `None`.
    pub fn reduce_with_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move {
            match self {
                Self::Some(value) => value,
                Self::None => alternate().await,
            }
        }
    }

    /// Exhaustive extraction with future-returning handlers.
    pub fn match_async<R, SomeFn, SomeFut, NoneFn, NoneFut>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = R>
    where
        SomeFn: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = R>,
        NoneFn: FnOnce() -> NoneFut,
        NoneFut: Future<Output = R>,
    {
        async move {
            match self {
                Self::Some(value) => when_some(value).await,
                Self::None => when_none().await,
            }
        }
    }

    /// Terminal side effects with future-returning handlers.
    pub fn effect_async<SomeFn, SomeFut, NoneFn, NoneFut>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = ()>
    where
        SomeFn: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = ()>,
        NoneFn: FnOnce() -> NoneFut,
        NoneFut: Future<Output = ()>,
    {
        async move {
            match self {
                Self::Some(value) => when_some(value).await,
                Self::None => when_none().await,
            }
        }
    }

    /// Chainable side effects with future-returning handlers: runs exactly
    /// one handler, then yields the container unchanged.
    ///
    /// The handler receives its own clone of the value.
    #[must_use = "tap_async returns the original container"]
    pub fn tap_async<SomeFn, SomeFut, NoneFn, NoneFut>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = Self>
    where
        T: Clone,
        SomeFn: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = ()>,
        NoneFn: FnOnce() -> NoneFut,
        NoneFut: Future<Output = ()>,
    {
        async move {
            match &self {
                Self::Some(value) => when_some(value.clone()).await,
                Self::None => when_none().await,
            }
            self
        }
    }

    /// Fans a batch of effect callbacks over the contained value under an
    /// execution-order policy with cooperative cancellation.
    ///
    /// On `Some`, each callback receives its own clone of the value and is
    /// scheduled by [`run_all`]; on `None` no callback runs. Cancellation
    /// never fails the call — it completes with `()` and zero observable
    /// side effects (see [`crate::schedule`]).
    pub fn effect_all_async<F, Fut>(
        self,
        order: ExecutionOrder,
        token: &CancellationToken,
        actions: Vec<F>,
    ) -> impl Future<Output = ()>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        let token = token.clone();
        async move {
            if let Self::Some(value) = self {
                let thunks: Vec<_> = actions
                    .into_iter()
                    .map(|action| {
                        let value = value.clone();
                        move || action(value)
                    })
                    .collect();
                run_all(order, &token, thunks).await;
            }
        }
    }
}

// =============================================================================
// Combinators on Futures of Maybe
// =============================================================================

/// Combinators on a deferred `Maybe`.
///
/// Blanket-implemented for every `Future<Output = Maybe<T>>`, so a chain
/// started with any `*_async` call keeps the full combinator set without
/// an intermediate `.await`. Every method awaits the outer future, runs
/// the handler, awaits the handler's future when there is one, and
/// re-wraps in exactly one future layer.
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// [`Maybe::map`] on a deferred container.
    fn map<U, F>(self, transform: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(transform) }
    }

    /// [`Maybe::map_async`] on a deferred container.
    fn map_async<U, F, Fut>(self, transform: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(transform).await }
    }

    /// [`Maybe::bind`] on a deferred container.
    fn bind<U, F>(self, binder: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        async move { self.await.bind(binder) }
    }

    /// [`Maybe::bind_async`] on a deferred container.
    fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move { self.await.bind_async(binder).await }
    }

    /// [`Maybe::filter`] on a deferred container.
    fn filter<F>(self, predicate: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> bool,
    {
        async move { self.await.filter(predicate) }
    }

    /// [`Maybe::filter_async`] on a deferred container.
    fn filter_async<F, Fut>(self, predicate: F) -> impl Future<Output = Maybe<T>>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.filter_async(predicate).await }
    }

    /// [`Maybe::reduce`] on a deferred container.
    fn reduce(self, alternate: T) -> impl Future<Output = T> {
        async move { self.await.reduce(alternate) }
    }

    /// [`Maybe::reduce_with`] on a deferred container.
    fn reduce_with<F>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.reduce_with(alternate) }
    }

    /// [`Maybe::reduce_with_async`] on a deferred container.
    fn reduce_with_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.reduce_with_async(alternate).await }
    }

    /// [`Maybe::match_with`] on a deferred container.
    fn match_with<R, SomeFn, NoneFn>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = R>
    where
        SomeFn: FnOnce(T) -> R,
        NoneFn: FnOnce() -> R,
    {
        async move { self.await.match_with(when_some, when_none) }
    }

    /// [`Maybe::match_async`] on a deferred container.
    fn match_async<R, SomeFn, SomeFut, NoneFn, NoneFut>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = R>
    where
        SomeFn: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = R>,
        NoneFn: FnOnce() -> NoneFut,
        NoneFut: Future<Output = R>,
    {
        async move { self.await.match_async(when_some, when_none).await }
    }

    /// [`Maybe::effect`] on a deferred container.
    fn effect<SomeFn, NoneFn>(self, when_some: SomeFn, when_none: NoneFn) -> impl Future<Output = ()>
    where
        SomeFn: FnOnce(T),
        NoneFn: FnOnce(),
    {
        async move { self.await.effect(when_some, when_none) }
    }

    /// [`Maybe::effect_async`] on a deferred container.
    fn effect_async<SomeFn, SomeFut, NoneFn, NoneFut>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = ()>
    where
        SomeFn: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = ()>,
        NoneFn: FnOnce() -> NoneFut,
        NoneFut: Future<Output = ()>,
    {
        async move { self.await.effect_async(when_some, when_none).await }
    }

    /// [`Maybe::tap`] on a deferred container.
    fn tap<SomeFn, NoneFn>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = Maybe<T>>
    where
        SomeFn: FnOnce(&T),
        NoneFn: FnOnce(),
    {
        async move { self.await.tap(when_some, when_none) }
    }

    /// [`Maybe::tap_async`] on a deferred container.
    fn tap_async<SomeFn, SomeFut, NoneFn, NoneFut>(
        self,
        when_some: SomeFn,
        when_none: NoneFn,
    ) -> impl Future<Output = Maybe<T>>
    where
        T: Clone,
        SomeFn: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = ()>,
        NoneFn: FnOnce() -> NoneFut,
        NoneFut: Future<Output = ()>,
    {
        async move { self.await.tap_async(when_some, when_none).await }
    }

    /// [`Maybe::effect_all_async`] on a deferred container.
    fn effect_all_async<F, Fut>(
        self,
        order: ExecutionOrder,
        token: &CancellationToken,
        actions: Vec<F>,
    ) -> impl Future<Output = ()>
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        let token = token.clone();
        async move { self.await.effect_all_async(order, &token, actions).await }
    }

    /// [`Maybe::unwrap`] on a deferred container.
    ///
    /// # Panics
    ///
    /// Panics if the awaited container is `None`.
    fn unwrap(self) -> impl Future<Output = T> {
        async move { self.await.unwrap() }
    }
}

impl<T, F> MaybeFutureExt<T> for F where F: Future<Output = Maybe<T>> {}
