//! Execution-order policies and cooperative cancellation for effect
//! combinators.
//!
//! Multi-callback effect combinators
//! ([`Maybe::effect_all_async`](crate::maybe::Maybe::effect_all_async),
//! [`Outcome::effect_all_async`](crate::outcome::Outcome::effect_all_async))
//! accept an [`ExecutionOrder`] and a [`CancellationToken`] and delegate to
//! the single scheduler in this module, [`run_all`].
//!
//! This is not a runtime: "parallel" means fan-out of independent callbacks
//! on the host executor with join-all semantics, and cancellation is
//! cooperative only — a shared flag checked at documented boundaries, never
//! preemption.
//!
//! Cancellation is not an error. A cancelled call completes successfully
//! with `()`, having performed zero observable side effects.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sumrail::schedule::{run_all, CancellationToken, ExecutionOrder};
//!
//! let token = CancellationToken::new();
//! run_all(ExecutionOrder::Sequential, &token, vec![
//!     || async { println!("first"); },
//! ]).await;
//! ```

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::join_all;

// =============================================================================
// ExecutionOrder
// =============================================================================

/// How a set of independent effect callbacks is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionOrder {
    /// Callbacks run one at a time, in declaration order. The cancellation
    /// token is checked immediately before each callback; once set, that
    /// callback and all subsequent ones are skipped. A callback that has
    /// begun running is never interrupted mid-flight.
    #[default]
    Sequential,
    /// All callbacks are launched together. The token is checked exactly
    /// once, at dispatch: if already set, none run; if unset, all run with
    /// no ordering guarantee between their completions.
    Parallel,
}

// =============================================================================
// CancellationToken
// =============================================================================

/// A shared cooperative cancellation flag.
///
/// Cloning is cheap and shares the underlying flag, so a token handed to a
/// combinator observes a later [`CancellationToken::cancel`] from any
/// clone. Checks happen only at the boundaries documented on
/// [`ExecutionOrder`]; there is no preemption.
///
/// # Examples
///
/// ```rust
/// use sumrail::schedule::CancellationToken;
///
/// let token = CancellationToken::new();
/// let shared = token.clone();
/// assert!(!shared.is_cancelled());
///
/// token.cancel();
/// assert!(shared.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a fresh, unset token.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag. Idempotent.
    #[inline]
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Reads the flag.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Drives a batch of zero-arg effect thunks under the given order policy.
///
/// This is the one scheduler every multi-callback effect combinator in the
/// crate delegates to.
///
/// - [`ExecutionOrder::Sequential`]: thunks run one at a time in input
///   order, with a cancellation check immediately before each one.
/// - [`ExecutionOrder::Parallel`]: the cancellation check happens once at
///   dispatch; the thunks are then fanned out via
///   [`futures::future::join_all`] and this call resumes only when every
///   launched thunk has completed. `join_all` drives all branches to
///   completion; a panicking thunk propagates its panic when polled, which
///   is the host primitive's behavior and is not altered here.
///
/// Cancellation never fails the call: the result is `()` either way.
///
/// Callbacks of differing shapes can share a batch by boxing, e.g.
/// `Box<dyn FnOnce() -> futures::future::BoxFuture<'static, ()>>`.
pub async fn run_all<F, Fut>(order: ExecutionOrder, token: &CancellationToken, actions: Vec<F>)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    match order {
        ExecutionOrder::Sequential => {
            for action in actions {
                if token.is_cancelled() {
                    return;
                }
                action().await;
            }
        }
        ExecutionOrder::Parallel => {
            if token.is_cancelled() {
                return;
            }
            join_all(actions.into_iter().map(|action| action())).await;
        }
    }
}

static_assertions::assert_impl_all!(CancellationToken: Send, Sync, Clone);
static_assertions::assert_impl_all!(ExecutionOrder: Send, Sync, Copy);
