use syn::{Attribute, LitInt, Result as SynResult, spanned::Spanned};

// One parsed #[bind(<view id>)] marker.
#[derive(Copy, Clone)]
pub(super) struct Bind {
  pub id: i32,
}

pub(super) fn is_bind(attr: &Attribute) -> bool {
  attr.path().is_ident("bind")
}

// Parse the single #[bind] attribute on a field, if any. A second occurrence
// or a malformed argument list is an error.
pub(super) fn parse_bind_attr(attrs: &[Attribute]) -> Option<SynResult<Bind>> {
  let mut found: Option<SynResult<Bind>> = None;
  for a in attrs {
    if !is_bind(a) {
      continue;
    }
    if found.is_some() {
      return Some(Err(syn::Error::new(a.span(), "duplicate #[bind] attribute on this field")));
    }
    found = Some(a.parse_args_with(|input: syn::parse::ParseStream| {
      let lit: LitInt = input.parse().map_err(|_| {
        syn::Error::new(a.span(), "expected a single integer view id, e.g. #[bind(1001)]")
      })?;
      let id = lit.base10_parse::<i32>()?;
      if !input.is_empty() {
        return Err(syn::Error::new(a.span(), "#[bind] takes exactly one view id"));
      }
      Ok(Bind { id })
    }));
  }
  found
}
