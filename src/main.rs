//! webshell: a single-site browser shell.
//!
//! Entry point: loads settings, installs logging and opens the shell window.
//! When built without the `gui` feature, runs a console demo of the shell's
//! behavior against in-process event sources.

use tracing_subscriber::EnvFilter;
use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Settings are loaded before logging exists, so a load failure is reported
/// once the subscriber is installed.
fn load_settings() -> SettingsEngine {
    let mut engine = SettingsEngine::new(None);
    let loaded = engine.load_or_init();
    init_tracing(&engine.get_settings().developer.log_filter);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, path = engine.get_config_path(), "using default settings");
    }
    engine
}

#[cfg(feature = "gui")]
fn main() {
    let app = webshell::app::App::new(load_settings());
    if let Err(e) = webshell::ui::webview_app::run(app) {
        tracing::error!(error = %e, "webshell failed to start");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use webshell::app::App;
    use webshell::platform::sources::{BackSignalSlot, ContentView, ReachabilityHub};
    use webshell::types::shell::{ContentEvent, NavigationState};

    struct PrintingView(Rc<Cell<u32>>);

    impl ContentView for PrintingView {
        fn go_back(&self) {
            self.0.set(self.0.get() + 1);
            println!("  <- content view navigated back");
        }
        fn go_forward(&self) {
            println!("  -> content view navigated forward");
        }
    }

    let mut app = App::new(load_settings());

    println!();
    println!("  webshell v{} demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    let fetches = Rc::new(RefCell::new(Vec::new()));
    let requested = fetches.clone();
    let hub = ReachabilityHub::new(move |id| requested.borrow_mut().push(id));
    let back_slot = BackSignalSlot::new();
    let backs = Rc::new(Cell::new(0));

    app.startup(&hub, &back_slot).expect("fresh shell activates");
    app.shell
        .attach_content_view(Box::new(PrintingView(backs.clone())));

    section("Scenario A: initial render");
    show(&app);

    section("Initial fetch is indeterminate");
    let first_fetch = fetches.borrow()[0];
    hub.resolve_fetch(first_fetch, None);
    show(&app);

    section("Scenario C: load, navigate, back");
    app.shell.handle_content_event(ContentEvent::LoadStart);
    app.shell
        .handle_content_event(ContentEvent::NavigationStateChanged(NavigationState {
            can_go_back: true,
            can_go_forward: false,
        }));
    app.shell.handle_content_event(ContentEvent::LoadEnd);
    show(&app);
    println!("  back signal consumed: {}", back_slot.dispatch());

    section("Scenario B: connectivity lost");
    app.shell.handle_content_event(ContentEvent::LoadStart);
    hub.notify(Some(false));
    show(&app);

    section("Scenario D: connectivity restored");
    hub.notify(Some(true));
    show(&app);

    section("Unmount");
    app.shutdown();
    println!("  reachability listeners: {}", hub.listener_count());
    println!("  back handler registered: {}", back_slot.is_registered());
    println!("  back signal consumed: {}", back_slot.dispatch());
    println!("  total back navigations: {}", backs.get());
    println!();
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("-----------------------------------------------------------");
    println!("  {}", name);
    println!("-----------------------------------------------------------");
}

#[cfg(not(feature = "gui"))]
fn show(app: &webshell::app::App) {
    println!("  state:  {:?}", app.shell.state());
    println!("  render: {:?}", app.shell.render());
    println!();
}
