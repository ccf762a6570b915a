use quote::ToTokens;

use crate::bind::bindings::Binding;

// ── binding table (for docs) ──────────────────────────────────────────────
// The generated binder carries its declarations in its doc comments, one
// markdown row per bound field, in emission order.
pub(super) fn binding_table(struct_name: &syn::Ident, bindings: &[Binding]) -> Vec<String> {
  let mut lines = Vec::with_capacity(bindings.len() + 4);
  lines.push(format!("Generated view binder for [`{struct_name}`]."));
  lines.push(String::new());
  lines.push("| field | view id | declared type |".to_owned());
  lines.push("|-------|---------|---------------|".to_owned());
  for b in bindings {
    let ty = b.ty.to_token_stream().to_string().replace(' ', "");
    lines.push(format!("| `{}` | `{}` | `{}` |", b.ident, b.id, ty));
  }
  lines
}
