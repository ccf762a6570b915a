use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::DeriveInput;

mod attrs;
mod bindings;
mod docs;
mod generator;

// ── driver ────────────────────────────────────────────────────────────────
fn emit_or_compile_errors(tokens: impl ToTokens, errors: Vec<syn::Error>) -> TokenStream2 {
  if errors.is_empty() {
    quote! { #tokens }
  } else {
    let es = errors.into_iter().map(|e| e.to_compile_error());
    quote! { #( #es )* }
  }
}

pub(super) fn expand(input: DeriveInput) -> TokenStream2 {
  use generator::Generator;

  let mut errors = Vec::new();
  let declared = bindings::collect(&input, &mut errors);
  if !errors.is_empty() {
    return emit_or_compile_errors(quote! {}, errors);
  }

  let tokens = Generator::new(&input.ident, &input.vis, &declared).build();
  emit_or_compile_errors(tokens, errors)
}
