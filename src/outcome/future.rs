//! Suspension-aware combinators for [`Outcome`].
//!
//! The mirror of [`crate::maybe::future`] for the success/failure algebra:
//! `*_async` methods on [`Outcome`] take future-returning handlers and
//! await them internally, and [`OutcomeFutureExt`] is blanket-implemented
//! for every `Future<Output = Outcome<T, E>>` with both synchronous and
//! future-returning handler sets. Each call yields at most one future
//! layer; chains never produce a future of a future.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sumrail::outcome::{Outcome, OutcomeFutureExt};
//!
//! let result = Outcome::<i32, String>::ok(2)
//!     .map_async(|n| async move { n * 10 })
//!     .bind(|n| if n > 0 { Outcome::ok(n) } else { Outcome::error("neg".into()) })
//!     .await;
//! assert_eq!(result, Outcome::ok(20));
//! ```

use std::future::Future;

use super::Outcome;
use crate::schedule::{CancellationToken, ExecutionOrder, run_all};

// =============================================================================
// Async Combinators on Outcome
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Transforms the success payload with a future-returning function;
    /// a failure passes through without invoking the handler.
    pub fn map_async<U, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move {
            match self {
                Self::Ok(value) => Outcome::Ok(transform(value).await),
                Self::Error(error) => Outcome::Error(error),
            }
        }
    }

    /// Transforms the failure payload with a future-returning function;
    /// a success passes through without invoking the handler.
    pub fn map_error_async<G, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<T, G>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        async move {
            match self {
                Self::Ok(value) => Outcome::Ok(value),
                Self::Error(error) => Outcome::Error(transform(error).await),
            }
        }
    }

    /// Sequences a future-returning binder without nesting futures or
    /// containers. First failure wins; the binder is never invoked on
    /// `Error`.
    pub fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move {
            match self {
                Self::Ok(value) => binder(value).await,
                Self::Error(error) => Outcome::Error(error),
            }
        }
    }

    /// Extracts the success payload, or awaits the computed alternate
    /// (discarding the error).
    pub fn reduce_with_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move {
            match self {
                Self::Ok(value) => value,
                Self::Error(_) => alternate().await,
            }
        }
    }

    /// Extracts the success payload, or awaits the alternate computed from
    /// the error payload.
    pub fn reduce_with_error_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        async move {
            match self {
                Self::Ok(value) => value,
                Self::Error(error) => alternate(error).await,
            }
        }
    }

    /// Exhaustive extraction with future-returning handlers.
    pub fn match_async<R, OkFn, OkFut, ErrFn, ErrFut>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = R>
    where
        OkFn: FnOnce(T) -> OkFut,
        OkFut: Future<Output = R>,
        ErrFn: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = R>,
    {
        async move {
            match self {
                Self::Ok(value) => when_ok(value).await,
                Self::Error(error) => when_error(error).await,
            }
        }
    }

    /// Terminal side effects with future-returning handlers.
    pub fn effect_async<OkFn, OkFut, ErrFn, ErrFut>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = ()>
    where
        OkFn: FnOnce(T) -> OkFut,
        OkFut: Future<Output = ()>,
        ErrFn: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = ()>,
    {
        async move {
            match self {
                Self::Ok(value) => when_ok(value).await,
                Self::Error(error) => when_error(error).await,
            }
        }
    }

    /// Chainable side effects with future-returning handlers: runs exactly
    /// one handler, then yields the container unchanged.
    ///
    /// Each handler receives its own clone of the payload.
    #[must_use = "tap_async returns the original container"]
    pub fn tap_async<OkFn, OkFut, ErrFn, ErrFut>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = Self>
    where
        T: Clone,
        E: Clone,
        OkFn: FnOnce(T) -> OkFut,
        OkFut: Future<Output = ()>,
        ErrFn: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = ()>,
    {
        async move {
            match &self {
                Self::Ok(value) => when_ok(value.clone()).await,
                Self::Error(error) => when_error(error.clone()).await,
            }
            self
        }
    }

    /// Fans a batch of effect callbacks over the success payload under an
    /// execution-order policy with cooperative cancellation.
    ///
    /// On `Ok`, each callback receives its own clone of the payload and is
    /// scheduled by [`run_all`]; on `Error` no callback runs. Cancellation
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
            if let Self::Ok(value) = self {
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
// Combinators on Futures of Outcome
// =============================================================================

/// Combinators on a deferred `Outcome`.
///
/// Blanket-implemented for every `Future<Output = Outcome<T, E>>`. Every
/// method awaits the outer future, runs the handler, awaits the handler's
/// future when there is one, and re-wraps in exactly one future layer.
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// [`Outcome::map`] on a deferred container.
    fn map<U, F>(self, transform: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(transform) }
    }

    /// [`Outcome::map_async`] on a deferred container.
    fn map_async<U, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(transform).await }
    }

    /// [`Outcome::map_error`] on a deferred container.
    fn map_error<G, F>(self, transform: F) -> impl Future<Output = Outcome<T, G>>
    where
        F: FnOnce(E) -> G,
    {
        async move { self.await.map_error(transform) }
    }

    /// [`Outcome::map_error_async`] on a deferred container.
    fn map_error_async<G, F, Fut>(self, transform: F) -> impl Future<Output = Outcome<T, G>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        async move { self.await.map_error_async(transform).await }
    }

    /// [`Outcome::bind`] on a deferred container.
    fn bind<U, F>(self, binder: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        async move { self.await.bind(binder) }
    }

    /// [`Outcome::bind_async`] on a deferred container.
    fn bind_async<U, F, Fut>(self, binder: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move { self.await.bind_async(binder).await }
    }

    /// [`Outcome::reduce`] on a deferred container.
    fn reduce(self, alternate: T) -> impl Future<Output = T> {
        async move { self.await.reduce(alternate) }
    }

    /// [`Outcome::reduce_with`] on a deferred container.
    fn reduce_with<F>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.reduce_with(alternate) }
    }

    /// [`Outcome::reduce_with_error`] on a deferred container.
    fn reduce_with_error<F>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> T,
    {
        async move { self.await.reduce_with_error(alternate) }
    }

    /// [`Outcome::reduce_with_async`] on a deferred container.
    fn reduce_with_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.reduce_with_async(alternate).await }
    }

    /// [`Outcome::reduce_with_error_async`] on a deferred container.
    fn reduce_with_error_async<F, Fut>(self, alternate: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.reduce_with_error_async(alternate).await }
    }

    /// [`Outcome::match_with`] on a deferred container.
    fn match_with<R, OkFn, ErrFn>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = R>
    where
        OkFn: FnOnce(T) -> R,
        ErrFn: FnOnce(E) -> R,
    {
        async move { self.await.match_with(when_ok, when_error) }
    }

    /// [`Outcome::match_async`] on a deferred container.
    fn match_async<R, OkFn, OkFut, ErrFn, ErrFut>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = R>
    where
        OkFn: FnOnce(T) -> OkFut,
        OkFut: Future<Output = R>,
        ErrFn: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = R>,
    {
        async move { self.await.match_async(when_ok, when_error).await }
    }

    /// [`Outcome::effect`] on a deferred container.
    fn effect<OkFn, ErrFn>(self, when_ok: OkFn, when_error: ErrFn) -> impl Future<Output = ()>
    where
        OkFn: FnOnce(T),
        ErrFn: FnOnce(E),
    {
        async move { self.await.effect(when_ok, when_error) }
    }

    /// [`Outcome::effect_async`] on a deferred container.
    fn effect_async<OkFn, OkFut, ErrFn, ErrFut>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = ()>
    where
        OkFn: FnOnce(T) -> OkFut,
        OkFut: Future<Output = ()>,
        ErrFn: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = ()>,
    {
        async move { self.await.effect_async(when_ok, when_error).await }
    }

    /// [`Outcome::tap`] on a deferred container.
    fn tap<OkFn, ErrFn>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = Outcome<T, E>>
    where
        OkFn: FnOnce(&T),
        ErrFn: FnOnce(&E),
    {
        async move { self.await.tap(when_ok, when_error) }
    }

    /// [`Outcome::tap_async`] on a deferred container.
    fn tap_async<OkFn, OkFut, ErrFn, ErrFut>(
        self,
        when_ok: OkFn,
        when_error: ErrFn,
    ) -> impl Future<Output = Outcome<T, E>>
    where
        T: Clone,
        E: Clone,
        OkFn: FnOnce(T) -> OkFut,
        OkFut: Future<Output = ()>,
        ErrFn: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = ()>,
    {
        async move { self.await.tap_async(when_ok, when_error).await }
    }

    /// [`Outcome::effect_all_async`] on a deferred container.
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

    /// [`Outcome::unwrap`] on a deferred container.
    ///
    /// # Panics
    ///
    /// Panics if the awaited container is an `Error`.
    fn unwrap(self) -> impl Future<Output = T> {
        async move { self.await.unwrap() }
    }

    /// [`Outcome::unwrap_error`] on a deferred container.
    ///
    /// # Panics
    ///
    /// Panics if the awaited container is an `Ok`.
    fn unwrap_error(self) -> impl Future<Output = E> {
        async move { self.await.unwrap_error() }
    }
}

impl<T, E, F> OutcomeFutureExt<T, E> for F where F: Future<Output = Outcome<T, E>> {}
