//! Window configuration and creation

use crate::PlatformError;
use cirrus_core::config;
use cirrus_core::types::{Point, Size};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::EventLoopWindowTarget;

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window size
    pub size: Size,
    /// Initial window position
    pub position: Option<Point>,
    /// Whether the window is resizable
    pub resizable: bool,
    /// Whether the window has decorations (title bar, borders)
    pub decorated: bool,
    /// Whether the window is visible
    pub visible: bool,
    /// Minimum window size
    pub min_size: Option<Size>,
    /// Maximum window size
    pub max_size: Option<Size>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        let defaults = &config().window;
        Self {
            title: defaults.title.clone(),
            size: Size::new(defaults.width, defaults.height),
            position: None,
            resizable: defaults.resizable,
            decorated: true,
            visible: true,
            min_size: Some(Size::new(200.0, 150.0)),
            max_size: None,
        }
    }
}

/// Builder producing a native window from a [`WindowConfig`]
#[derive(Debug, Clone, Default)]
pub struct WindowBuilder {
    config: WindowConfig,
}

impl WindowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Set window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set initial window size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.config.size = Size::new(width, height);
        self
    }

    /// Set initial window position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.config.position = Some(Point::new(x, y));
        self
    }

    /// Set whether the window is resizable
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.config.resizable = resizable;
        self
    }

    /// Set whether the window has decorations
    pub fn with_decorations(mut self, decorated: bool) -> Self {
        self.config.decorated = decorated;
        self
    }

    /// Set initial visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.config.visible = visible;
        self
    }

    /// Set minimum inner size
    pub fn with_min_size(mut self, width: f32, height: f32) -> Self {
        self.config.min_size = Some(Size::new(width, height));
        self
    }

    /// Set maximum inner size
    pub fn with_max_size(mut self, width: f32, height: f32) -> Self {
        self.config.max_size = Some(Size::new(width, height));
        self
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Create the native window on the toolkit's event loop.
    pub fn build_native(
        self,
        target: &EventLoopWindowTarget<()>,
    ) -> Result<winit::window::Window, PlatformError> {
        let mut builder = winit::window::WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.size.width as f64,
                self.config.size.height as f64,
            ))
            .with_resizable(self.config.resizable)
            .with_decorations(self.config.decorated)
            .with_visible(self.config.visible);

        if let Some(position) = self.config.position {
            builder = builder.with_position(LogicalPosition::new(
                position.x as f64,
                position.y as f64,
            ));
        }
        if let Some(min) = self.config.min_size {
            builder = builder
                .with_min_inner_size(LogicalSize::new(min.width as f64, min.height as f64));
        }
        if let Some(max) = self.config.max_size {
            builder = builder
                .with_max_inner_size(LogicalSize::new(max.width as f64, max.height as f64));
        }

        builder
            .build(target)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_come_from_the_installed_config() {
        let config = WindowConfig::default();
        assert!(!config.title.is_empty());
        assert!(config.size.width > 0.0);
        assert!(config.decorated);
    }

    #[test]
    fn builder_overrides_accumulate() {
        let builder = WindowBuilder::new()
            .with_title("Inspector")
            .with_size(320.0, 240.0)
            .with_resizable(false)
            .with_position(10.0, 20.0);

        let config = builder.config();
        assert_eq!(config.title, "Inspector");
        assert_eq!(config.size, Size::new(320.0, 240.0));
        assert!(!config.resizable);
        assert_eq!(config.position, Some(Point::new(10.0, 20.0)));
    }
}
