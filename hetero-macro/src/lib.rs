//! Procedural macros used by the `hetero` crate to generate its per-arity implementations.
//!
//! Each macro takes a single integer literal, the largest arity (or number) to generate for.

extern crate proc_macro;

use {
    hetero_codegen::CodegenError,
    proc_macro::TokenStream,
    syn::{parse_macro_input, LitInt},
};

/// Generate `Tuple`, `List` and `Coerce` for native tuples up to the given arity.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as LitInt);
    expand(bound, hetero_codegen::tuple_impls)
}

/// Generate the flat layout's `Compose`, `Field` and `Decompose` implementations up to the given
/// arity.
#[proc_macro]
pub fn impl_slots(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as LitInt);
    expand(bound, hetero_codegen::slot_impls)
}

/// Generate `ToUnary`/`ToConstant` conversions for every number up to the given bound.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as LitInt);
    expand(bound, hetero_codegen::unary_conversion_impls)
}

fn expand(
    bound: LitInt,
    generate: fn(usize) -> Result<proc_macro2::TokenStream, CodegenError>,
) -> TokenStream {
    bound
        .base10_parse::<usize>()
        .and_then(|max| generate(max).map_err(|err| syn::Error::new(bound.span(), err)))
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
