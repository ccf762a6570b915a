use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Visibility};

use crate::bind::bindings::Binding;
use crate::bind::docs;

const BINDER_SUFFIX: &str = "Binder";

pub(crate) struct Generator<'a> {
  struct_name: &'a Ident,
  vis: &'a Visibility,
  bindings: &'a [Binding],
}

impl<'a> Generator<'a> {
  pub(super) fn new(struct_name: &'a Ident, vis: &'a Visibility, bindings: &'a [Binding]) -> Self {
    Self { struct_name, vis, bindings }
  }

  // <Struct> + fixed suffix, in the struct's own module.
  fn binder_ident(&self) -> Ident {
    format_ident!("{}{}", self.struct_name, BINDER_SUFFIX)
  }

  // One assignment per declaration: resolve the child view through the
  // target's own lookup primitive, then convert into the declared field type.
  // Whether the id exists and the conversion fits is the caller's contract.
  fn assignment(&self, b: &Binding) -> TokenStream {
    let field = &b.ident;
    let id = b.id;
    quote! {
      target.#field = ::viewbind::ViewFinder::find_view_by_id(target, ::viewbind::ViewId(#id)).into();
    }
  }

  pub(super) fn build(self) -> TokenStream {
    let struct_name = self.struct_name;
    let binder = self.binder_ident();
    let vis = self.vis;
    let doc_lines = docs::binding_table(struct_name, self.bindings);
    let assignments = self.bindings.iter().map(|b| self.assignment(b));

    quote! {
      #( #[doc = #doc_lines] )*
      #vis struct #binder;

      #[automatically_derived]
      impl ::core::default::Default for #binder {
        fn default() -> Self {
          #binder
        }
      }

      #[automatically_derived]
      impl ::viewbind::Binder<#struct_name> for #binder {
        fn bind(&self, target: &mut #struct_name) {
          #( #assignments )*
        }
      }

      #[automatically_derived]
      impl ::viewbind::BindTarget for #struct_name {
        type Binder = #binder;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Generator;
  use crate::bind::bindings::Binding;
  use syn::parse_quote;

  #[test]
  fn binder_name_appends_fixed_suffix() {
    let name: syn::Ident = parse_quote!(MainScreen);
    let vis: syn::Visibility = parse_quote!(pub);
    let bindings = vec![Binding { ident: parse_quote!(text_view), ty: parse_quote!(TextView), id: 1001 }];
    let out = Generator::new(&name, &vis, &bindings).build().to_string();
    assert!(out.contains("pub struct MainScreenBinder"), "{out}");
  }

  #[test]
  fn binder_visibility_follows_the_struct() {
    let name: syn::Ident = parse_quote!(Hidden);
    let vis: syn::Visibility = syn::Visibility::Inherited;
    let bindings = vec![Binding { ident: parse_quote!(v), ty: parse_quote!(W), id: 1 }];
    let out = Generator::new(&name, &vis, &bindings).build().to_string();
    assert!(out.contains("struct HiddenBinder"), "{out}");
    assert!(!out.contains("pub struct HiddenBinder"), "{out}");
  }
}
