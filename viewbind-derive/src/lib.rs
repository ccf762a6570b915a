//! Derive macro backing the `viewbind` crate.
//!
//! Use through `viewbind` (which re-exports `BindViews`); this crate is not
//! meant to be depended on directly.
//!
//! `#[derive(BindViews)]` on a struct with one or more `#[bind(<view id>)]`
//! fields expands to a companion unit struct named `<Struct>Binder` in the
//! same module, implementing `viewbind::Binder<Struct>` by assigning each
//! bound field from the struct's own view lookup, plus a
//! `viewbind::BindTarget` impl linking the struct to its binder.

extern crate proc_macro;
use proc_macro::TokenStream;

mod bind;

#[proc_macro_derive(BindViews, attributes(bind))]
pub fn bind_views(input: TokenStream) -> TokenStream {
  bind::expand(syn::parse_macro_input!(input as syn::DeriveInput)).into()
}
