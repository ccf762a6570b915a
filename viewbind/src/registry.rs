use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{BindTarget, Binder};

/// What a dispatch attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
  /// A binder existed (cached or freshly constructed) and ran.
  Bound,
  /// No binder is registered for this concrete type; the target was left
  /// untouched. The expected case for controllers with no bound fields.
  NotRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
  /// A registered binder refused the target: the cache entry for this
  /// `TypeId` was built for a different concrete type. Only reachable when
  /// registration itself is buggy; never the missing-binder case.
  #[error("binder for `{expected}` received a target of a different concrete type")]
  TargetMismatch { expected: &'static str },
}

// Object-safe face of a `Binder<T>` so instances of different controller
// types can share one cache.
trait ErasedBinder: Send + Sync {
  fn controller_name(&self) -> &'static str;
  fn bind_erased(&self, target: &mut dyn Any) -> Result<(), BindError>;
}

struct Typed<T: BindTarget> {
  binder: T::Binder,
}

impl<T: BindTarget> Typed<T> {
  fn construct() -> Arc<dyn ErasedBinder> {
    log::debug!("constructing binder for {}", type_name::<T>());
    Arc::new(Typed::<T> { binder: T::Binder::default() })
  }
}

impl<T: BindTarget> ErasedBinder for Typed<T> {
  fn controller_name(&self) -> &'static str {
    type_name::<T>()
  }

  fn bind_erased(&self, target: &mut dyn Any) -> Result<(), BindError> {
    let target = target
      .downcast_mut::<T>()
      .ok_or(BindError::TargetMismatch { expected: type_name::<T>() })?;
    self.binder.bind(target);
    Ok(())
  }
}

#[derive(Default)]
struct Inner {
  // Startup-populated table: concrete controller type → binder factory.
  factories: HashMap<TypeId, Registration>,
  // Lazily built; at most one binder instance per concrete type, ever.
  cache: HashMap<TypeId, Arc<dyn ErasedBinder>>,
}

#[derive(Clone, Copy)]
struct Registration {
  controller_name: &'static str,
  construct: fn() -> Arc<dyn ErasedBinder>,
}

/// Dispatches generated binders against live controller instances.
///
/// Owned by the application, constructed once at process start, passed by
/// reference wherever binding happens; there is no implicit global instance.
/// Internally a lock guards the check-then-insert on the cache so concurrent
/// first-time binds for one type still construct exactly one binder.
#[derive(Default)]
pub struct BinderRegistry {
  inner: Mutex<Inner>,
}

impl BinderRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    // Binders are stateless; a panic mid-bind leaves nothing to protect.
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Adds `T` to the registration table so [`bind_dyn`](Self::bind_dyn) can
  /// reach its binder. Idempotent; constructs nothing.
  pub fn register<T: BindTarget>(&self) {
    let mut inner = self.lock();
    inner.factories.entry(TypeId::of::<T>()).or_insert_with(|| {
      log::debug!("registered binder factory for {}", type_name::<T>());
      Registration { controller_name: type_name::<T>(), construct: Typed::<T>::construct }
    });
  }

  /// Whether `T` is present in the registration table.
  pub fn is_registered<T: BindTarget>(&self) -> bool {
    self.lock().factories.contains_key(&TypeId::of::<T>())
  }

  /// Typed dispatch: runs `T`'s binder against `target`, constructing and
  /// caching it on first use. `T: BindTarget` proves a binder exists, so this
  /// path has no missing-binder case and needs no prior
  /// [`register`](Self::register) call.
  pub fn bind<T: BindTarget>(&self, target: &mut T) {
    let binder = {
      let mut inner = self.lock();
      match inner.cache.get(&TypeId::of::<T>()) {
        Some(b) => Arc::clone(b),
        None => {
          let b = Typed::<T>::construct();
          inner.cache.insert(TypeId::of::<T>(), Arc::clone(&b));
          b
        }
      }
    };
    // Invoked outside the lock. The downcast cannot fail here: the cache is
    // keyed by TypeId and this entry was built for T.
    if let Err(err) = binder.bind_erased(target) {
      log::error!("cache entry for {} is corrupt: {err}", type_name::<T>());
    }
  }

  /// Type-erased dispatch for heterogeneous controller collections.
  ///
  /// Resolves the target's concrete type, reuses its cached binder or
  /// constructs one from the registration table, and runs it. A type absent
  /// from the table yields [`BindOutcome::NotRequired`] and leaves the target
  /// untouched — the deliberate lenient default for controllers with nothing
  /// to bind.
  pub fn bind_dyn(&self, target: &mut dyn Any) -> Result<BindOutcome, BindError> {
    let tid = (*target).type_id();
    let binder = {
      let mut inner = self.lock();
      match inner.cache.get(&tid) {
        Some(b) => Some(Arc::clone(b)),
        None => match inner.factories.get(&tid).copied() {
          Some(reg) => {
            let b = (reg.construct)();
            inner.cache.insert(tid, Arc::clone(&b));
            Some(b)
          }
          None => None,
        },
      }
    };
    match binder {
      Some(b) => {
        b.bind_erased(target)?;
        Ok(BindOutcome::Bound)
      }
      None => {
        log::debug!("no binder registered for {tid:?}; nothing to bind");
        Ok(BindOutcome::NotRequired)
      }
    }
  }

  /// Names of all controller types in the registration table, for diagnostics.
  pub fn registered_types(&self) -> Vec<&'static str> {
    self.lock().factories.values().map(|r| r.controller_name).collect()
  }

  /// Names of all controller types with a constructed binder, for diagnostics.
  pub fn bound_types(&self) -> Vec<&'static str> {
    self.lock().cache.values().map(|b| b.controller_name()).collect()
  }
}
