//! The classic demo: a screen with one bound text view, dispatched both
//! through the typed entry point and through the startup registration table.

use viewbind::{BindOutcome, BindViews, BinderRegistry, ViewFinder, ViewId};

#[derive(Clone, Debug, Default)]
struct TextView {
  text: String,
}

#[derive(BindViews, Default)]
struct MainScreen {
  #[bind(1001)]
  text_view: TextView,
}

impl ViewFinder for MainScreen {
  type View = TextView;

  fn find_view_by_id(&self, id: ViewId) -> TextView {
    TextView { text: format!("view #{id} from the hierarchy") }
  }
}

#[derive(Default, Debug)]
struct AboutScreen {
  opened: bool,
}

fn main() {
  env_logger::init();

  // Constructed once at startup and handed to whatever drives the UI.
  let registry = BinderRegistry::new();
  registry.register::<MainScreen>();

  let mut screen = MainScreen::default();
  registry.bind(&mut screen);
  println!("bound: {}", screen.text_view.text);

  // A screen with no bound fields is simply not required to have a binder.
  let mut about = AboutScreen { opened: true };
  match registry.bind_dyn(&mut about) {
    Ok(BindOutcome::NotRequired) => println!("about screen: nothing to bind"),
    other => println!("about screen: {other:?}"),
  }
}
