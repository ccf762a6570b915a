#![allow(dead_code)]

use viewbind::{BindViews, Binder, BinderRegistry, ViewFinder, ViewId};

#[derive(Clone, Debug, PartialEq, Default)]
struct TextView {
  text: &'static str,
}

#[derive(BindViews, Default)]
struct MainScreen {
  #[bind(1001)]
  text_view: TextView,
  // No marker: the binder must never touch this.
  visits: u32,
}

impl ViewFinder for MainScreen {
  type View = TextView;

  fn find_view_by_id(&self, id: ViewId) -> TextView {
    match id.0 {
      1001 => TextView { text: "sentinel" },
      _ => TextView::default(),
    }
  }
}

#[test]
fn binder_name_follows_suffix_convention() {
  // MainScreen → MainScreenBinder, generated into this module.
  let name = std::any::type_name::<MainScreenBinder>();
  assert!(name.ends_with("MainScreenBinder"), "{name}");
}

#[test]
fn bound_field_receives_the_looked_up_view() {
  let mut screen = MainScreen::default();
  MainScreenBinder.bind(&mut screen);
  assert_eq!(screen.text_view, TextView { text: "sentinel" });
}

#[test]
fn unbound_fields_are_untouched() {
  let mut screen = MainScreen { visits: 7, ..MainScreen::default() };
  MainScreenBinder.bind(&mut screen);
  assert_eq!(screen.visits, 7);
}

#[test]
fn binding_is_idempotent() {
  let registry = BinderRegistry::new();
  let mut once = MainScreen::default();
  let mut twice = MainScreen::default();
  registry.bind(&mut once);
  registry.bind(&mut twice);
  registry.bind(&mut twice);
  assert_eq!(once.text_view, twice.text_view);
  assert_eq!(once.visits, twice.visits);
}

// ── field type differing from the lookup's view type ──────────────────────

#[derive(Clone, Debug, PartialEq, Default)]
struct Handle {
  raw: i32,
}

#[derive(Debug, PartialEq, Default)]
struct Label {
  source: i32,
}

impl From<Handle> for Label {
  fn from(h: Handle) -> Self {
    Label { source: h.raw }
  }
}

#[derive(BindViews, Default)]
struct Card {
  #[bind(0x7f0a_0001)]
  label: Label,
}

impl ViewFinder for Card {
  type View = Handle;

  fn find_view_by_id(&self, id: ViewId) -> Handle {
    Handle { raw: id.0 }
  }
}

#[test]
fn view_converts_into_the_declared_field_type() {
  let mut card = Card::default();
  BinderRegistry::new().bind(&mut card);
  assert_eq!(card.label, Label { source: 0x7f0a_0001 });
}
