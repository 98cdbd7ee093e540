//! Closed tagged unions of two to nine alternatives.
//!
//! A `UnionN<T1..TN>` holds exactly one value out of N declared slots.
//! The discriminant is the enum tag itself, so exactly one slot is active
//! at all times and an out-of-range discriminant is unrepresentable.
//!
//! Dispatch is exhaustive by construction: [`Union2::match_with`] and its
//! siblings take exactly one handler per slot and contain no default arm,
//! so forgetting a case is a type error at the call site, not a runtime
//! surprise.
//!
//! All nine arities are generated from a single macro, the same way the
//! per-arity families elsewhere in the functional ecosystem are produced,
//! rather than hand-writing nine near-identical types.
//!
//! # Examples
//!
//! ```rust
//! use sumrail::union::Union3;
//!
//! let value: Union3<i32, String, bool> = Union3::second("hello".to_string());
//!
//! let description = value.match_with(
//!     |number| format!("number: {number}"),
//!     |text| format!("text: {text}"),
//!     |flag| format!("flag: {flag}"),
//! );
//! assert_eq!(description, "text: hello");
//! ```

macro_rules! define_union {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal =>
        $(($variant:ident, $slot:literal, $ty:ident, $handler:ident)),+ $(,)?
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
            pub enum $name<$($ty),+> {
                $(
                    #[doc = "The value occupying slot " $slot " of " $arity "."]
                    $variant($ty),
                )+
            }

            impl<$($ty),+> $name<$($ty),+> {
                $(
                    #[doc = "Constructs a `" $name "` with slot " $slot " active."]
                    #[inline]
                    #[must_use]
                    pub const fn [<$variant:lower>](value: $ty) -> Self {
                        Self::$variant(value)
                    }

                    #[doc = "Returns `true` when slot " $slot " is the active slot."]
                    #[inline]
                    #[must_use]
                    pub const fn [<is_ $variant:lower>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }
                )+

                /// One-based index of the active slot.
                ///
                /// Always in `1..=N` for a `UnionN`; the tag is carried by the
                /// enum itself, so no other value can be observed.
                #[inline]
                #[must_use]
                pub const fn slot(&self) -> usize {
                    match self {
                        $(Self::$variant(_) => $slot,)+
                    }
                }

                /// Exhaustive dispatch: invokes exactly the handler for the
                /// active slot and returns its result.
                ///
                /// One handler per slot is required at the call site; there is
                /// no default arm and no fallthrough.
                #[inline]
                pub fn match_with<R>(self, $($handler: impl FnOnce($ty) -> R),+) -> R {
                    match self {
                        $(Self::$variant(value) => $handler(value),)+
                    }
                }

                /// Exhaustive side-effecting dispatch: invokes exactly the
                /// handler for the active slot and discards its result.
                #[inline]
                pub fn effect(self, $($handler: impl FnOnce($ty)),+) {
                    match self {
                        $(Self::$variant(value) => $handler(value),)+
                    }
                }
            }

            #[cfg(feature = "async")]
            impl<$($ty),+> $name<$($ty),+> {
                /// Exhaustive dispatch with future-returning handlers.
                ///
                /// The future produced by the matching handler is awaited
                /// internally, so the call yields exactly one future layer
                /// regardless of how the handlers are written.
                pub fn match_async<R, $([<$variant Fn>], [<$variant Fut>]),+>(
                    self,
                    $($handler: [<$variant Fn>]),+
                ) -> impl std::future::Future<Output = R>
                where
                    $(
                        [<$variant Fn>]: FnOnce($ty) -> [<$variant Fut>],
                        [<$variant Fut>]: std::future::Future<Output = R>,
                    )+
                {
                    async move {
                        match self {
                            $(Self::$variant(value) => $handler(value).await,)+
                        }
                    }
                }

                /// Exhaustive side-effecting dispatch with future-returning
                /// handlers.
                pub fn effect_async<$([<$variant Fn>], [<$variant Fut>]),+>(
                    self,
                    $($handler: [<$variant Fn>]),+
                ) -> impl std::future::Future<Output = ()>
                where
                    $(
                        [<$variant Fn>]: FnOnce($ty) -> [<$variant Fut>],
                        [<$variant Fut>]: std::future::Future<Output = ()>,
                    )+
                {
                    async move {
                        match self {
                            $(Self::$variant(value) => $handler(value).await,)+
                        }
                    }
                }
            }
        }
    };
}

define_union!(
    /// A closed union of two alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumrail::union::Union2;
    ///
    /// let value: Union2<i32, String> = Union2::first(42);
    /// assert!(value.is_first());
    /// assert_eq!(value.slot(), 1);
    /// assert_eq!(value.match_with(|n| n * 2, |s| s.len() as i32), 84);
    /// ```
    Union2, 2 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
);

define_union!(
    /// A closed union of three alternatives.
    Union3, 3 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
    (Third, 3, T3, on_third),
);

define_union!(
    /// A closed union of four alternatives.
    Union4, 4 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
    (Third, 3, T3, on_third),
    (Fourth, 4, T4, on_fourth),
);

define_union!(
    /// A closed union of five alternatives.
    Union5, 5 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
    (Third, 3, T3, on_third),
    (Fourth, 4, T4, on_fourth),
    (Fifth, 5, T5, on_fifth),
);

define_union!(
    /// A closed union of six alternatives.
    Union6, 6 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
    (Third, 3, T3, on_third),
    (Fourth, 4, T4, on_fourth),
    (Fifth, 5, T5, on_fifth),
    (Sixth, 6, T6, on_sixth),
);

define_union!(
    /// A closed union of seven alternatives.
    Union7, 7 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
    (Third, 3, T3, on_third),
    (Fourth, 4, T4, on_fourth),
    (Fifth, 5, T5, on_fifth),
    (Sixth, 6, T6, on_sixth),
    (Seventh, 7, T7, on_seventh),
);

define_union!(
    /// A closed union of eight alternatives.
    Union8, 8 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
    (Third, 3, T3, on_third),
    (Fourth, 4, T4, on_fourth),
    (Fifth, 5, T5, on_fifth),
    (Sixth, 6, T6, on_sixth),
    (Seventh, 7, T7, on_seventh),
    (Eighth, 8, T8, on_eighth),
);

define_union!(
    /// A closed union of nine alternatives.
    Union9, 9 =>
    (First, 1, T1, on_first),
    (Second, 2, T2, on_second),
    (Third, 3, T3, on_third),
    (Fourth, 4, T4, on_fourth),
    (Fifth, 5, T5, on_fifth),
    (Sixth, 6, T6, on_sixth),
    (Seventh, 7, T7, on_seventh),
    (Eighth, 8, T8, on_eighth),
    (Ninth, 9, T9, on_ninth),
);

static_assertions::assert_impl_all!(Union2<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Union9<u8, u8, u8, u8, u8, u8, u8, u8, u8>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn union2_dispatches_active_slot() {
        let value: Union2<i32, String> = Union2::second("text".to_string());
        assert_eq!(value.slot(), 2);
        assert_eq!(value.match_with(|_| "first", |_| "second"), "second");
    }

    #[rstest]
    fn union9_constructs_every_slot() {
        let value: Union9<u8, u8, u8, u8, u8, u8, u8, u8, u8> = Union9::ninth(9);
        assert!(value.is_ninth());
        assert_eq!(value.slot(), 9);
    }
}
