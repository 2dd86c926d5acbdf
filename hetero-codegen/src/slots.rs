//! The flat layout's storage: position-tagged slot tuples and their accessor table.

use {
    proc_macro2::TokenStream,
    quote::{quote, ToTokens},
    syn::Index,
};

use crate::{check_arity, idents, krate, unary, CodegenError};

/// `Compose`, `Field` and `Decompose` implementations for every arity up to and including `max`.
///
/// For arity `n` this emits `n` `Field` implementations, one per position, so the total grows
/// quadratically with `max`.
pub fn slot_impls(max: usize) -> Result<TokenStream, CodegenError> {
    let max = check_arity(max)?;
    let mut tokens = TokenStream::new();
    for arity in 0..=max {
        compose_impl(arity).to_tokens(&mut tokens);
        for position in 0..arity {
            field_impl(arity, position).to_tokens(&mut tokens);
        }
        decompose_impls(arity).to_tokens(&mut tokens);
    }
    Ok(tokens)
}

/// The slot tuple `(Slot<_0, T0>, Slot<_1, T1>, ...)` for the given element types.
fn slots_type(types: &[syn::Ident]) -> TokenStream {
    let krate = krate();
    let slots = types.iter().enumerate().map(|(position, ty)| {
        let tag = unary(position);
        quote!(#krate::slot::Slot<#tag, #ty>)
    });
    quote!((#(#slots,)*))
}

fn compose_impl(arity: usize) -> TokenStream {
    let krate = krate();
    let types = idents("T", arity);
    let values = idents("t", arity);
    let slots = slots_type(&types);

    quote! {
        impl<#(#types),*> #krate::flat::Compose for (#(#types,)*) {
            type Slots = #slots;

            #[allow(clippy::unused_unit)]
            fn into_slots(self) -> Self::Slots {
                let (#(#values,)*) = self;
                (#(#krate::slot::Slot::new(#values),)*)
            }

            #[allow(clippy::unused_unit)]
            fn from_slots(slots: Self::Slots) -> Self {
                let (#(#values,)*) = slots;
                (#(#values.into_inner(),)*)
            }
        }
    }
}

fn field_impl(arity: usize, position: usize) -> TokenStream {
    let krate = krate();
    let types = idents("T", arity);
    let slots = slots_type(&types);
    let tag = unary(position);
    let element = &types[position];
    let index = Index::from(position);

    quote! {
        impl<#(#types),*> #krate::flat::Field<#tag> for #slots {
            type Element = #element;

            fn field(&self) -> &#krate::slot::Slot<#tag, #element> {
                &self.#index
            }

            fn field_mut(&mut self) -> &mut #krate::slot::Slot<#tag, #element> {
                &mut self.#index
            }

            fn into_field(self) -> #krate::slot::Slot<#tag, #element> {
                self.#index
            }
        }
    }
}

fn decompose_impls(arity: usize) -> TokenStream {
    let krate = krate();
    let types = idents("T", arity);
    let values = idents("s", arity);
    let slots = slots_type(&types);

    quote! {
        impl<'a, #(#types: 'a),*> #krate::layout::Decompose<'a, #krate::layout::Ref> for #slots {
            type Output = (#(&'a #types,)*);

            #[allow(clippy::unused_unit)]
            fn decompose(
                this: <Self as #krate::layout::By<'a, #krate::layout::Ref>>::Type,
            ) -> Self::Output {
                let (#(#values,)*) = #krate::call_by::to_ref::<Self>(this);
                (#(#values.get(),)*)
            }
        }

        impl<'a, #(#types: 'a),*> #krate::layout::Decompose<'a, #krate::layout::Mut> for #slots {
            type Output = (#(&'a mut #types,)*);

            #[allow(clippy::unused_unit)]
            fn decompose(
                this: <Self as #krate::layout::By<'a, #krate::layout::Mut>>::Type,
            ) -> Self::Output {
                let (#(#values,)*) = #krate::call_by::to_mut::<Self>(this);
                (#(#values.get_mut(),)*)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_tagged_by_position() {
        let types = idents("T", 2);
        let slots = slots_type(&types).to_string();
        let first = unary(0);
        let second = unary(1);
        assert_eq!(
            slots,
            quote!((hetero::slot::Slot<#first, T0>, hetero::slot::Slot<#second, T1>,)).to_string()
        );
    }

    #[test]
    fn field_reads_its_own_position() {
        let tokens = field_impl(3, 2).to_string();
        assert!(tokens.contains(&quote!(type Element = T2;).to_string()));
        assert!(tokens.contains(&quote!(&self.2).to_string()));
    }

    #[test]
    fn field_count_is_triangular() {
        let tokens = slot_impls(4).unwrap().to_string();
        assert_eq!(tokens.matches(":: flat :: Field <").count(), 1 + 2 + 3 + 4);
        assert_eq!(tokens.matches(":: flat :: Compose for").count(), 5);
    }

    #[test]
    fn large_bounds_are_rejected() {
        assert!(slot_impls(crate::MAX_ARITY + 1).is_err());
    }
}
