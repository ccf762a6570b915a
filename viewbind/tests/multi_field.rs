#![allow(dead_code)]

use std::cell::RefCell;

use viewbind::{BindViews, BinderRegistry, ViewFinder, ViewId};

#[derive(Clone, Debug, PartialEq, Default)]
struct Widget {
  id: i32,
}

// Three markers on one struct: every declaration must bind, not just the
// first one the generator happens to see.
#[derive(BindViews, Default)]
struct Form {
  #[bind(10)]
  submit: Widget,
  #[bind(20)]
  cancel: Widget,
  #[bind(30)]
  status: Widget,
  lookups: RefCell<Vec<i32>>,
}

impl ViewFinder for Form {
  type View = Widget;

  fn find_view_by_id(&self, id: ViewId) -> Widget {
    self.lookups.borrow_mut().push(id.0);
    Widget { id: id.0 }
  }
}

#[test]
fn every_declared_field_is_bound() {
  let mut form = Form::default();
  BinderRegistry::new().bind(&mut form);
  assert_eq!(form.submit, Widget { id: 10 });
  assert_eq!(form.cancel, Widget { id: 20 });
  assert_eq!(form.status, Widget { id: 30 });
}

#[test]
fn lookups_run_in_field_name_order() {
  let mut form = Form::default();
  BinderRegistry::new().bind(&mut form);
  // cancel < status < submit: emission order is the field-name total order,
  // independent of declaration order, so build output stays reproducible.
  assert_eq!(*form.lookups.borrow(), vec![20, 30, 10]);
}
