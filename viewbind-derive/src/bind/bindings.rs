use syn::{Data, DeriveInput, Fields, Ident, Type, spanned::Spanned};

use crate::bind::attrs;

// One binding declaration: a named field annotated with #[bind(id)]. The
// declared type is carried only for the generated documentation table.
#[derive(Clone)]
pub(super) struct Binding {
  pub ident: Ident,
  pub ty: Type,
  pub id: i32,
}

// Extract every binding declaration from the derive target, validating the
// shapes the generator cannot express. Declarations are returned sorted by
// field name so emission order (and build output) is reproducible.
pub(super) fn collect(input: &DeriveInput, errors: &mut Vec<syn::Error>) -> Vec<Binding> {
  for a in &input.attrs {
    if attrs::is_bind(a) {
      errors.push(syn::Error::new(a.span(), "#[bind] can only be applied to fields"));
    }
  }

  if !input.generics.params.is_empty() {
    errors.push(syn::Error::new(
      input.generics.span(),
      "BindViews does not support generic controllers; the binder registry is keyed by concrete type",
    ));
  }

  let named = match &input.data {
    Data::Struct(s) => match &s.fields {
      Fields::Named(n) => &n.named,
      _ => {
        errors.push(syn::Error::new(input.span(), "BindViews requires a struct with named fields"));
        return Vec::new();
      }
    },
    _ => {
      errors.push(syn::Error::new(input.span(), "BindViews requires a struct with named fields"));
      return Vec::new();
    }
  };

  let mut out = Vec::new();
  for field in named {
    let ident = match &field.ident {
      Some(id) => id.clone(),
      None => continue,
    };
    match attrs::parse_bind_attr(&field.attrs) {
      Some(Ok(bind)) => out.push(Binding { ident, ty: field.ty.clone(), id: bind.id }),
      Some(Err(e)) => errors.push(e),
      None => {}
    }
  }

  if out.is_empty() && errors.is_empty() {
    errors.push(syn::Error::new(
      input.span(),
      "no bound fields; annotate at least one field with #[bind(<view id>)]",
    ));
  }

  out.sort_by(|a, b| a.ident.to_string().cmp(&b.ident.to_string()));
  out
}
