//! Frameless window example.
//!
//! Opens an undecorated window that can be dragged by its body and resized
//! from its edges and corners. Press `M` to toggle maximize (moving and
//! resizing are disabled while maximized) and `Escape` to quit.
//!
//! An optional TOML file with manipulation settings can be passed:
//!
//! ```toml
//! resize_threshold = 8
//! resize_enabled = true
//! drag_enabled = true
//! ```
//!
//! Run with: cargo run -p horizon-frameless --example frameless_window [config.toml]

use std::sync::Arc;

use horizon_frameless::{FramelessWindow, ManipulationConfig, SizeConstraints};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

struct FramelessApp {
    config: ManipulationConfig,
    frameless: Option<FramelessWindow>,
}

impl FramelessApp {
    fn new(config: ManipulationConfig) -> Self {
        Self {
            config,
            frameless: None,
        }
    }
}

impl ApplicationHandler for FramelessApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.frameless.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Frameless (Horizon)")
            .with_decorations(false)
            .with_inner_size(winit::dpi::LogicalSize::new(640, 420));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        let mut frameless = FramelessWindow::new(window, self.config);
        if let Err(e) =
            frameless.set_constraints(SizeConstraints::unconstrained().with_min_size(240, 160))
        {
            eprintln!("Constraint error: {e}");
        }
        println!("Manipulation backend: {:?}", frameless.backend());

        self.frameless = Some(frameless);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(frameless) = self.frameless.as_mut() else {
            return;
        };

        if frameless.handle_window_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    Key::Character(ref c) if c.eq_ignore_ascii_case("m") => {
                        let maximized = !frameless.window().is_maximized();
                        frameless.window().set_maximized(maximized);
                        frameless.set_resizable(!maximized);
                        frameless.set_draggable(!maximized);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "horizon_frameless=debug,horizon_frameless_core=debug".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ManipulationConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => ManipulationConfig::new()
            .with_resize_enabled(true)
            .with_drag_enabled(true),
    };

    let event_loop = EventLoop::new()?;
    let mut app = FramelessApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
