//! Unary type-level numbers and their conversions from `const usize`.

use {
    proc_macro2::TokenStream,
    quote::{quote, ToTokens},
};

use crate::{check_arity, krate, usize_literal, CodegenError};

/// The unary type-level number `S<S<...<Z>>>` for `n`.
pub fn unary(n: usize) -> TokenStream {
    let krate = krate();
    let mut tokens = TokenStream::new();
    for _ in 0..n {
        quote!(#krate::unary::S<).to_tokens(&mut tokens);
    }
    quote!(#krate::unary::Z).to_tokens(&mut tokens);
    for _ in 0..n {
        quote!(>).to_tokens(&mut tokens);
    }
    tokens
}

/// `ToUnary` and `ToConstant` implementations linking `Number<N>` and its unary representation,
/// for every `N` from zero up to and including `max`.
pub fn unary_conversion_impls(max: usize) -> Result<TokenStream, CodegenError> {
    let max = check_arity(max)?;
    let krate = krate();
    let mut tokens = TokenStream::new();
    for n in 0..=max {
        let literal = usize_literal(n);
        let unary = unary(n);
        quote! {
            impl #krate::unary::ToUnary for #krate::unary::Number<#literal> {
                type AsUnary = #unary;
            }

            impl #krate::unary::ToConstant for #unary {
                type AsConstant = #krate::unary::Number<#literal>;
            }
        }
        .to_tokens(&mut tokens);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_bare() {
        assert_eq!(unary(0).to_string(), quote!(hetero::unary::Z).to_string());
    }

    #[test]
    fn two_is_nested_twice() {
        assert_eq!(
            unary(2).to_string(),
            quote!(hetero::unary::S<hetero::unary::S<hetero::unary::Z> >).to_string()
        );
    }

    #[test]
    fn conversions_cover_the_whole_range() {
        let tokens = unary_conversion_impls(3).unwrap().to_string();
        let count = tokens.matches("impl hetero :: unary :: ToUnary").count();
        assert_eq!(count, 4);
    }

    #[test]
    fn conversions_reject_large_bounds() {
        assert!(unary_conversion_impls(1000).is_err());
    }
}
