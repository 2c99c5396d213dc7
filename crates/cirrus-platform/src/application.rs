//! Application bootstrap
//!
//! The [`Application`] owns the UID manager, the notifier registry and the
//! widget registry, and drives the toolkit's event loop for the main
//! window. Toolkit window events are forwarded into
//! [`NotifierRegistry::dispatch`] as `(sender, kind, info1, info2)`
//! notifications tagged with the main window's UID.

use crate::window::{WindowBuilder, WindowConfig};
use crate::PlatformError;
use cirrus_core::event::EventKind;
use cirrus_core::notifier::NotifierRegistry;
use cirrus_core::uid::{Uid, UidManager};
use cirrus_widgets::WidgetRegistry;
use std::sync::Arc;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

/// Application builder
pub struct ApplicationBuilder {
    window: WindowConfig,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            window: WindowConfig::default(),
        }
    }

    /// Set application (and main window) title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set main window configuration
    pub fn window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Build the application
    pub fn build(self) -> Result<Application, PlatformError> {
        Application::new(self.window)
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application structure
pub struct Application {
    uids: Arc<UidManager>,
    notifiers: NotifierRegistry,
    widgets: WidgetRegistry,
    main_window: WindowConfig,
    main_window_uid: Uid,
}

impl Application {
    /// Create an application with a fresh UID manager; the main window
    /// claims the first UID.
    pub fn new(main_window: WindowConfig) -> Result<Self, PlatformError> {
        let uids = Arc::new(UidManager::new());
        let main_window_uid = uids.get_id()?;
        Ok(Self {
            uids,
            notifiers: NotifierRegistry::new(),
            widgets: WidgetRegistry::new(),
            main_window,
            main_window_uid,
        })
    }

    /// The application's UID manager, shareable with worker threads.
    pub fn uids(&self) -> Arc<UidManager> {
        Arc::clone(&self.uids)
    }

    pub fn notifiers(&self) -> &NotifierRegistry {
        &self.notifiers
    }

    pub fn notifiers_mut(&mut self) -> &mut NotifierRegistry {
        &mut self.notifiers
    }

    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.widgets
    }

    /// UID the main window's events are tagged with
    pub fn main_window_uid(&self) -> Uid {
        self.main_window_uid
    }

    /// Create the main window and run the toolkit's event loop until the
    /// window is closed.
    pub fn run(self) -> Result<(), PlatformError> {
        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoop(e.to_string()))?;
        let window =
            WindowBuilder::from_config(self.main_window.clone()).build_native(&event_loop)?;
        let main_window_id = window.id();

        tracing::info!(
            uid = %self.main_window_uid,
            title = %self.main_window.title,
            "main window created"
        );

        event_loop
            .run(move |event, elwt| {
                elwt.set_control_flow(ControlFlow::Wait);
                if let Event::WindowEvent { window_id, event } = event {
                    if window_id != main_window_id {
                        return;
                    }
                    match event {
                        WindowEvent::Resized(size) => {
                            self.notifiers.dispatch(
                                self.main_window_uid,
                                EventKind::WindowResized,
                                size.width as u64,
                                size.height as u64,
                            );
                        }
                        WindowEvent::CloseRequested => {
                            self.notifiers.dispatch(
                                self.main_window_uid,
                                EventKind::WindowClosed,
                                0,
                                0,
                            );
                            elwt.exit();
                        }
                        _ => {}
                    }
                }
            })
            .map_err(|e| PlatformError::EventLoop(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_widgets::{Label, Widget};
    use pretty_assertions::assert_eq;

    #[test]
    fn the_main_window_claims_the_first_uid() {
        let app = Application::new(WindowConfig::default()).unwrap();
        assert_eq!(app.main_window_uid(), Uid(1));
        assert_eq!(app.uids().get_id().unwrap(), Uid(2));
    }

    #[test]
    fn widgets_allocate_from_the_application_manager() {
        let mut app = ApplicationBuilder::new().title("t").build().unwrap();
        let uids = app.uids();

        let label = Label::new(&uids, "hello").unwrap();
        let label_uid = label.uid();
        assert_ne!(label_uid, app.main_window_uid());

        app.widgets_mut().insert(Box::new(label)).unwrap();
        assert!(app.widgets().get(label_uid).is_some());
    }

    #[test]
    fn builder_title_overrides_the_window_config() {
        let app = ApplicationBuilder::new().title("Mail Browser").build().unwrap();
        assert_eq!(app.main_window.title, "Mail Browser");
    }
}
