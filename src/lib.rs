//! # sumrail
//!
//! Closed tagged unions, Option/Result algebras, and railway-oriented
//! error handling with async-aware combinators.
//!
//! ## Overview
//!
//! This library retrofits algebraic sum types and railway-style error
//! handling onto everyday Rust code:
//!
//! - **Tagged Unions**: `Union2..Union9`, closed containers of exactly one
//!   typed slot with exhaustive `match_with`/`effect` dispatch
//! - **Option Algebra**: `Maybe<T>` with map, bind, filter, reduce,
//!   `match_with`, effect, and tap combinators
//! - **Result Algebra**: `Outcome<T, E>` with the same combinator set plus
//!   `map_error`, `reduce_with_error`, and the aggregating `collect_all`
//! - **Async Composition**: an async-suffixed mirror of every combinator,
//!   on the containers and on futures of them, guaranteed to never produce
//!   a nested future
//! - **Effect Scheduling**: sequential/parallel execution-order policies
//!   with cooperative cancellation for multi-callback effects
//! - **Exception Boundary**: a deferred try/catch/finally builder and the
//!   immediate `Trial` form converting panics into inspectable values
//!
//! ## Feature Flags
//!
//! - `union`: the `Union2..Union9` family
//! - `maybe`: the `Maybe<T>` algebra
//! - `outcome`: the `Outcome<T, E>` algebra
//! - `attempt`: the exception boundary
//! - `compose`: plain-value pipeline helpers
//! - `async`: async combinators and effect scheduling
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sumrail::prelude::*;
//!
//! let shipped = Maybe::some(3)
//!     .filter(|n| *n > 0)
//!     .ok_or("not positive")
//!     .map(|n| n * 2)
//!     .reduce(0);
//! assert_eq!(shipped, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sumrail::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "union")]
    pub use crate::union::{Union2, Union3, Union4, Union5, Union6, Union7, Union8, Union9};

    #[cfg(feature = "maybe")]
    pub use crate::maybe::Maybe;

    #[cfg(feature = "async")]
    pub use crate::maybe::MaybeFutureExt;

    #[cfg(feature = "outcome")]
    pub use crate::outcome::Outcome;

    #[cfg(feature = "async")]
    pub use crate::outcome::OutcomeFutureExt;

    #[cfg(feature = "async")]
    pub use crate::schedule::{CancellationToken, ExecutionOrder};

    #[cfg(feature = "attempt")]
    pub use crate::attempt::{Attempt, Fault, Trial, attempt};

    #[cfg(feature = "compose")]
    pub use crate::compose::{constant, identity, ignore, pipe, tap};
}

#[cfg(feature = "union")]
pub mod union;

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "async")]
pub mod schedule;

#[cfg(feature = "attempt")]
pub mod attempt;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
