//! Combining per-rule values into one token value type.
//!
//! Each rule produces its own value type. A lexer picks a single value
//! type `V` for all of its tokens, and `V` decides how the winning rule's
//! value is stored by implementing [`Embed<C, T>`](Embed) for every rule
//! category `C` with value type `T`.
//!
//! Three shapes cover the combination policies:
//!
//! | `V`                     | Rule values                 | Stored as                  |
//! |-------------------------|-----------------------------|----------------------------|
//! | `()`                    | anything                    | discarded                  |
//! | `Option<T>`             | `T` or `Option<T>`          | `Some(value)` / as-is      |
//! | enum from `token_value!`| one type per category      | variant chosen by category |
//!
//! Only the winning rule's value is ever embedded, and the no-match token
//! carries [`TokenValue::vacant`].

/// A type usable as the value of every token a lexer produces.
pub trait TokenValue {
    /// The value carried when no rule value was produced.
    fn vacant() -> Self;
}

/// Injection of the value of rule category `C` into a token value.
pub trait Embed<const C: usize, T>: TokenValue {
    /// Wrap the value produced by the rule at category `C`.
    fn embed(value: T) -> Self;
}

impl TokenValue for () {
    #[inline]
    fn vacant() -> Self {}
}

/// Value-less tokens accept, and drop, every rule value.
impl<const C: usize, T> Embed<C, T> for () {
    #[inline]
    fn embed(_: T) -> Self {}
}

impl<T> TokenValue for Option<T> {
    #[inline]
    fn vacant() -> Self {
        None
    }
}

impl<const C: usize, T> Embed<C, T> for Option<T> {
    #[inline]
    fn embed(value: T) -> Self {
        Some(value)
    }
}

/// Rules that may decline to produce a value pass their option through.
impl<const C: usize, T> Embed<C, Option<T>> for Option<T> {
    #[inline]
    fn embed(value: Option<T>) -> Self {
        value
    }
}

/// Declare a token value enum with one variant per valued rule category.
///
/// Each entry `Variant(Type) = C` stores the value of the rule at
/// category `C`. Categories listed under `vacant [..]` belong to rules
/// without a value; their tokens carry the `Vacant` variant, which is
/// also the value of the no-match token.
///
/// ```
/// use lexis_core::{token_value, Embed, TokenValue};
///
/// token_value! {
///     #[derive(Debug, PartialEq)]
///     pub enum Value {
///         Number(i64) = 0,
///         Word(String) = 1,
///     }
///     vacant [2]
/// }
///
/// assert_eq!(<Value as Embed<0, i64>>::embed(7), Value::Number(7));
/// assert_eq!(<Value as Embed<2, ()>>::embed(()), Value::Vacant);
/// assert_eq!(Value::vacant(), Value::Vacant);
/// ```
#[macro_export]
macro_rules! token_value {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident ( $ty:ty ) = $category:literal ),* $(,)?
        }
        $( vacant [ $( $vacant:literal ),* $(,)? ] )?
    ) => {
        $(#[$meta])*
        $vis enum $name {
            /// No value: no rule matched, or the winning rule has none.
            Vacant,
            $( $(#[$variant_meta])* $variant($ty), )*
        }

        impl $name {
            /// Category of the rule whose value this is, if any.
            #[allow(dead_code, reason = "not every lexer inspects the source category")]
            pub fn category(&self) -> ::core::option::Option<usize> {
                match self {
                    Self::Vacant => ::core::option::Option::None,
                    $( Self::$variant(_) => ::core::option::Option::Some($category), )*
                }
            }
        }

        impl $crate::TokenValue for $name {
            #[inline]
            fn vacant() -> Self {
                Self::Vacant
            }
        }

        $(
            impl $crate::Embed<$category, $ty> for $name {
                #[inline]
                fn embed(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*

        $( $(
            impl $crate::Embed<$vacant, ()> for $name {
                #[inline]
                fn embed((): ()) -> Self {
                    Self::Vacant
                }
            }
        )* )?
    };
}
