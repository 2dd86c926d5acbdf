//! Code generation for the `hetero` crate.
//!
//! Rust cannot abstract over the arity of a native tuple, so every implementation that has to
//! look inside `(T0, T1, ...)` is generated here once per arity, up to [`MAX_ARITY`]. The
//! functions in this crate are pure: they take an upper bound and return the token stream of the
//! implementations for every arity from zero up to that bound. The `hetero-macro` crate exposes
//! them as function-like procedural macros.

use {
    lazy_static::lazy_static,
    proc_macro2::{Literal, Span, TokenStream},
    quote::quote,
    syn::Ident,
    thiserror::Error,
};

mod slots;
mod tuples;
mod unary;

pub use slots::slot_impls;
pub use tuples::tuple_impls;
pub use unary::{unary, unary_conversion_impls};

/// The largest tuple arity for which implementations are generated.
pub const MAX_ARITY: usize = 16;

/// An error raised while generating code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The requested arity is larger than [`MAX_ARITY`].
    #[error("cannot generate implementations for arity {requested}: the maximum is {max}")]
    ArityTooLarge {
        /// The arity asked for.
        requested: usize,
        /// The largest supported arity.
        max: usize,
    },
}

/// Reject arities the generated code is not designed for.
pub fn check_arity(requested: usize) -> Result<usize, CodegenError> {
    if requested > MAX_ARITY {
        Err(CodegenError::ArityTooLarge {
            requested,
            max: MAX_ARITY,
        })
    } else {
        Ok(requested)
    }
}

/// The path under which generated code refers to the `hetero` crate.
///
/// Inside `hetero` itself this resolves through `extern crate self as hetero`.
pub(crate) fn krate() -> Ident {
    lazy_static! {
        static ref CRATE_NAME: String = match proc_macro_crate::crate_name("hetero") {
            Ok(proc_macro_crate::FoundCrate::Name(name)) => name,
            Ok(proc_macro_crate::FoundCrate::Itself) | Err(_) => "hetero".to_owned(),
        };
    }
    Ident::new(&CRATE_NAME, Span::call_site())
}

/// Numbered identifiers `{prefix}0`, `{prefix}1`, ... up to (excluding) `arity`.
pub(crate) fn idents(prefix: &str, arity: usize) -> Vec<Ident> {
    (0..arity)
        .map(|i| Ident::new(&format!("{}{}", prefix, i), Span::call_site()))
        .collect()
}

/// The inductive list `(x0, (x1, (..., ())))` built from a sequence of type or value tokens.
pub(crate) fn cons_list<T: quote::ToTokens>(items: &[T]) -> TokenStream {
    items
        .iter()
        .rev()
        .fold(quote!(()), |rest, item| quote!((#item, #rest)))
}

pub(crate) fn usize_literal(n: usize) -> Literal {
    Literal::usize_unsuffixed(n)
}
