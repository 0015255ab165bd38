//! Desktop host for the shell using `wry` + `tao`.
//!
//! Architecture:
//! - Three child webviews of one window: the content view (the target site),
//!   the offline screen, and a small transparent loading overlay. Which of them
//!   exist is reconciled from `BrowserShell::render()` after every event.
//! - The content view is dropped while offline and rebuilt when connectivity
//!   returns. Its page-load events carry a mount generation so events from a
//!   dropped view are ignored.
//! - Reachability comes from the network monitor thread through the event
//!   loop proxy into a `ReachabilityHub`.
//! - The back signal comes from `BACK_SIGNAL_JS` over IPC, or from the
//!   window's BrowserBack key. An unconsumed signal exits the app.
//!
//! Child webviews on Linux require X11 (wry limitation of `build_as_child`).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tao::event::{ElementState, Event, KeyEvent, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::keyboard::KeyCode;
use tao::window::{Window, WindowBuilder};
use wry::dpi::{PhysicalPosition, PhysicalSize};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::app::App;
use crate::managers::history_tracker::HistoryTracker;
use crate::platform::sources::{BackSignalSlot, ContentView, ReachabilityHub};
use crate::services::reachability_probe::{MonitorReport, NetworkMonitor, ReachabilityProbe};
use crate::shell::BrowserShell;
use crate::types::shell::RenderTree;
use crate::ui::host_logic::{self, ContentMount, LoadPhase, PageLoad};
use crate::ui::pages::{self, IpcMessage, BACK_SIGNAL_JS};

/// Logical edge length of the loading overlay.
const OVERLAY_SIDE: f64 = 96.0;

#[derive(Debug)]
enum UserEvent {
    Monitor(MonitorReport),
    PageLoad(PageLoad),
    BackSignal,
}

/// `ContentView` backed by a live webview.
struct WebViewContent {
    webview: Rc<WebView>,
    history: Rc<RefCell<HistoryTracker>>,
}

impl ContentView for WebViewContent {
    fn go_back(&self) {
        self.history.borrow_mut().request_back();
        if let Err(e) = self.webview.evaluate_script("history.back()") {
            tracing::warn!(error = %e, "history.back() failed");
        }
    }

    fn go_forward(&self) {
        self.history.borrow_mut().request_forward();
        if let Err(e) = self.webview.evaluate_script("history.forward()") {
            tracing::warn!(error = %e, "history.forward() failed");
        }
    }
}

struct MountedContent {
    tracking: ContentMount,
    webview: Rc<WebView>,
}

struct Host {
    window: Window,
    proxy: EventLoopProxy<UserEvent>,
    devtools: bool,
    mounts: u64,
    content: Option<MountedContent>,
    offline: Option<WebView>,
    overlay: Option<WebView>,
}

impl Host {
    fn full_bounds(&self) -> Rect {
        let size = self.window.inner_size();
        Rect {
            position: PhysicalPosition::new(0, 0).into(),
            size: PhysicalSize::new(size.width, size.height).into(),
        }
    }

    fn overlay_bounds(&self) -> Rect {
        let size = self.window.inner_size();
        let side = (OVERLAY_SIDE * self.window.scale_factor()).round() as u32;
        let side = side.min(size.width).min(size.height);
        Rect {
            position: PhysicalPosition::new(
                ((size.width - side) / 2) as i32,
                ((size.height - side) / 2) as i32,
            )
            .into(),
            size: PhysicalSize::new(side, side).into(),
        }
    }

    /// Brings the set of live webviews in line with the render tree.
    fn reconcile(&mut self, shell: &BrowserShell) -> wry::Result<()> {
        match shell.render() {
            RenderTree::Offline(screen) => {
                if self.content.take().is_some() {
                    shell.detach_content_view();
                    tracing::info!("content view unmounted");
                }
                self.overlay = None;
                if self.offline.is_none() {
                    let webview = WebViewBuilder::new()
                        .with_html(pages::offline_html(&screen))
                        .with_bounds(self.full_bounds())
                        .with_initialization_script(BACK_SIGNAL_JS)
                        .with_ipc_handler(ipc_forwarder(self.proxy.clone()))
                        .build_as_child(&self.window)?;
                    self.offline = Some(webview);
                }
            }
            RenderTree::Content {
                source,
                loading_overlay,
            } => {
                self.offline = None;
                if self.content.is_none() {
                    let mounted = self.mount_content(source)?;
                    shell.attach_content_view(Box::new(WebViewContent {
                        webview: mounted.webview.clone(),
                        history: mounted.tracking.history.clone(),
                    }));
                    self.content = Some(mounted);
                    // Rebuilt so it stacks above the new content view.
                    self.overlay = None;
                }
                match &self.overlay {
                    Some(overlay) => overlay.set_visible(loading_overlay)?,
                    None => {
                        let overlay = WebViewBuilder::new()
                            .with_html(pages::loading_overlay_html())
                            .with_transparent(true)
                            .with_visible(loading_overlay)
                            .with_bounds(self.overlay_bounds())
                            .build_as_child(&self.window)?;
                        self.overlay = Some(overlay);
                    }
                }
            }
        }
        Ok(())
    }

    fn mount_content(&mut self, source: &str) -> wry::Result<MountedContent> {
        self.mounts += 1;
        let mount = self.mounts;
        let load_proxy = self.proxy.clone();

        let webview = WebViewBuilder::new()
            .with_url(source)
            .with_bounds(self.full_bounds())
            .with_initialization_script(BACK_SIGNAL_JS)
            .with_ipc_handler(ipc_forwarder(self.proxy.clone()))
            .with_on_page_load_handler(move |event, url| {
                let phase = match event {
                    PageLoadEvent::Started => LoadPhase::Started,
                    PageLoadEvent::Finished => LoadPhase::Finished,
                };
                let load = PageLoad { mount, phase, url };
                let _ = load_proxy.send_event(UserEvent::PageLoad(load));
            })
            .with_devtools(self.devtools)
            .build_as_child(&self.window)?;

        tracing::info!(mount, source, "content view mounted");
        Ok(MountedContent {
            tracking: ContentMount::new(mount),
            webview: Rc::new(webview),
        })
    }

    fn layout(&self) {
        let results = [
            self.content.as_ref().map(|c| c.webview.set_bounds(self.full_bounds())),
            self.offline.as_ref().map(|o| o.set_bounds(self.full_bounds())),
            self.overlay.as_ref().map(|o| o.set_bounds(self.overlay_bounds())),
        ];
        for result in results.into_iter().flatten() {
            if let Err(e) = result {
                tracing::warn!(error = %e, "failed to resize webview");
            }
        }
    }

    fn tracking(&self) -> Option<&ContentMount> {
        self.content.as_ref().map(|c| &c.tracking)
    }
}

fn ipc_forwarder(
    proxy: EventLoopProxy<UserEvent>,
) -> impl Fn(wry::http::Request<String>) + 'static {
    move |request: wry::http::Request<String>| match pages::parse_ipc(request.body()) {
        Some(IpcMessage::Back) => {
            let _ = proxy.send_event(UserEvent::BackSignal);
        }
        None => tracing::debug!(body = %request.body(), "ignoring IPC message"),
    }
}

// ─── Main entry point ───

pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    let settings = app.settings().clone();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&settings.window.title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            settings.window.width,
            settings.window.height,
        ))
        .build(&event_loop)?;

    let monitor_proxy = proxy.clone();
    let mut monitor = NetworkMonitor::spawn(
        ReachabilityProbe::from_settings(&settings.reachability)?,
        Duration::from_secs(settings.reachability.poll_interval_secs),
        move |report| {
            let _ = monitor_proxy.send_event(UserEvent::Monitor(report));
        },
    )?;

    let fetcher = monitor.handle();
    let hub = ReachabilityHub::new(move |request_id| {
        if let Err(e) = fetcher.request_fetch(request_id) {
            tracing::warn!(error = %e, request_id, "reachability fetch not sent");
        }
    });
    let back_slot = BackSignalSlot::new();

    app.startup(&hub, &back_slot)?;

    let mut host = Host {
        window,
        proxy,
        devtools: settings.developer.devtools,
        mounts: 0,
        content: None,
        offline: None,
        overlay: None,
    };
    host.reconcile(&app.shell)?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let mut back_signal = false;
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                app.shutdown();
                monitor.shutdown();
                *control_flow = ControlFlow::Exit;
                return;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => host.layout(),

            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: KeyCode::BrowserBack,
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    },
                ..
            } => back_signal = true,

            Event::UserEvent(user_event) => match user_event {
                UserEvent::Monitor(MonitorReport::Fetched { request_id, status }) => {
                    hub.resolve_fetch(request_id, status)
                }
                UserEvent::Monitor(MonitorReport::Changed(status)) => hub.notify(status),
                UserEvent::PageLoad(load) => {
                    host_logic::handle_page_load(&app.shell, host.tracking(), &load)
                }
                UserEvent::BackSignal => back_signal = true,
            },

            _ => return,
        }

        if back_signal && !back_slot.dispatch() {
            tracing::info!("back signal not consumed, exiting");
            app.shutdown();
            monitor.shutdown();
            *control_flow = ControlFlow::Exit;
            return;
        }

        if let Err(e) = host.reconcile(&app.shell) {
            tracing::error!(error = %e, "failed to update webviews");
        }
    })
}
