//! viewbind — compile-time view binding for controller structs
//!
//! Attach `#[bind(<view id>)]` to fields of a struct deriving [`BindViews`] and
//! the macro generates a companion binder type (`<Struct>Binder`, same module,
//! same visibility) that populates every bound field from the struct's own view
//! lookup. At run time an application-owned [`BinderRegistry`] dispatches
//! binders by concrete type, constructing each one at most once.
//!
//! - One marker per field: `#[bind(1001)]`. Multiple bound fields per struct
//!   are supported; unannotated fields are never touched.
//! - The controller supplies the lookup primitive by implementing
//!   [`ViewFinder`]; the generated binder converts the returned view into the
//!   field's declared type with `Into`. Whether the id resolves and the type
//!   fits is the caller's contract, unchecked at generation time.
//! - The registry replaces runtime name lookup with an explicit registration
//!   table: call [`BinderRegistry::register`] per controller type at startup,
//!   then [`BinderRegistry::bind_dyn`] for type-erased dispatch — or skip
//!   registration entirely and use the typed [`BinderRegistry::bind`].
//! - Missing binders are an explicit outcome, not a swallowed error:
//!   `bind_dyn` on an unregistered type returns [`BindOutcome::NotRequired`]
//!   and leaves the instance untouched.
//!
//! Misuse of the derive (non-struct targets, generics, duplicate or malformed
//! markers, zero bound fields) is rejected at compile time.
//!
//! ```
//! use viewbind::{BindViews, BinderRegistry, ViewFinder, ViewId};
//!
//! #[derive(Clone, Debug, PartialEq, Default)]
//! struct TextView {
//!   text: &'static str,
//! }
//!
//! #[derive(BindViews, Default)]
//! struct MainScreen {
//!   #[bind(1001)]
//!   text_view: TextView,
//! }
//!
//! impl ViewFinder for MainScreen {
//!   type View = TextView;
//!   fn find_view_by_id(&self, id: ViewId) -> TextView {
//!     match id.0 {
//!       1001 => TextView { text: "Hello viewbind" },
//!       _ => TextView::default(),
//!     }
//!   }
//! }
//!
//! let registry = BinderRegistry::new();
//! let mut screen = MainScreen::default();
//! registry.bind(&mut screen);
//! assert_eq!(screen.text_view.text, "Hello viewbind");
//! ```

use core::fmt;

mod registry;

pub use registry::{BindError, BindOutcome, BinderRegistry};
pub use viewbind_derive::BindViews;

/// Integer identifier of a child view, as carried by `#[bind(..)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub i32);

impl From<i32> for ViewId {
  fn from(raw: i32) -> Self {
    ViewId(raw)
  }
}

impl fmt::Display for ViewId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// The host framework's lookup primitive: resolve a child view by identifier.
///
/// Every controller type exposes this; generated binders call it on the target
/// being bound and convert the result into each bound field's declared type.
pub trait ViewFinder {
  type View;

  fn find_view_by_id(&self, id: ViewId) -> Self::View;
}

/// The shared binder contract: one implementor per controller type, generated
/// by [`BindViews`], performing that type's field assignments against a live
/// instance. The dispatcher depends only on this trait (via [`BindTarget`]),
/// never on concrete binder types.
pub trait Binder<T>: Send + Sync {
  fn bind(&self, target: &mut T);
}

/// Generated link from a controller type to its binder. This is the naming
/// convention made type-level: `BindViews` on `C` emits `CBinder` and
/// `impl BindTarget for C { type Binder = CBinder; }`.
///
/// Hand-written impls are equally valid for controllers whose binding logic
/// falls outside what the derive expresses.
pub trait BindTarget: Sized + 'static {
  type Binder: Binder<Self> + Default + 'static;
}
