//! Conversions between native tuples, their inductive lists, and coercible value tuples.

use {
    proc_macro2::TokenStream,
    quote::{quote, ToTokens},
};

use crate::{check_arity, cons_list, idents, krate, CodegenError};

/// `Tuple`, `List` and `Coerce` implementations for every arity up to and including `max`.
pub fn tuple_impls(max: usize) -> Result<TokenStream, CodegenError> {
    let max = check_arity(max)?;
    let mut tokens = TokenStream::new();
    for arity in 0..=max {
        tuple_impl(arity).to_tokens(&mut tokens);
    }
    Ok(tokens)
}

fn tuple_impl(arity: usize) -> TokenStream {
    let krate = krate();
    let types = idents("T", arity);
    let sources = idents("V", arity);
    let values = idents("t", arity);
    let list_type = cons_list(&types);
    let list_value = cons_list(&values);

    quote! {
        impl<#(#types),*> #krate::tuple::Tuple for (#(#types,)*) {
            type AsList = #list_type;

            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let (#(#values,)*) = self;
                #list_value
            }

            #[allow(clippy::unused_unit)]
            fn from_list(list: Self::AsList) -> Self {
                let #list_value = list;
                (#(#values,)*)
            }
        }

        impl<#(#types),*> #krate::tuple::List for #list_type {
            type AsTuple = (#(#types,)*);
        }

        impl<#(#types,)* #(#sources,)*> #krate::tuple::Coerce<(#(#types,)*)> for (#(#sources,)*)
        where
            #(#sources: ::core::convert::Into<#types>,)*
        {
            #[allow(clippy::unused_unit)]
            fn coerce(self) -> (#(#types,)*) {
                let (#(#values,)*) = self;
                (#(#values.into(),)*)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_list_type() {
        let tokens = tuple_impl(2).to_string();
        assert!(tokens.contains(&quote!(type AsList = (T0, (T1, ()));).to_string()));
        assert!(tokens.contains(&quote!(type AsTuple = (T0, T1,);).to_string()));
    }

    #[test]
    fn unit_has_empty_list() {
        let tokens = tuple_impl(0).to_string();
        assert!(tokens.contains(&quote!(type AsList = ();).to_string()));
    }

    #[test]
    fn coercion_bounds_every_component() {
        let tokens = tuple_impl(3).to_string();
        for (source, target) in idents("V", 3).iter().zip(idents("T", 3)) {
            let bound = quote!(#source: ::core::convert::Into<#target>).to_string();
            assert!(tokens.contains(&bound), "missing bound {}", bound);
        }
    }

    #[test]
    fn all_arities_generated() {
        let tokens = tuple_impls(4).unwrap().to_string();
        assert_eq!(tokens.matches(":: tuple :: Tuple for").count(), 5);
    }
}
