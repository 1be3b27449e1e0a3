// ABOUTME: Main application entry point.
// ABOUTME: Opens the demo window and feeds resize events into the responsive grid.

mod scene;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

use scene::GridView;
use ugrid_core::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use ugrid_core::{Config, SampleKind};
use ugrid_layout::{ResizeEvents, Size};
use ugrid_renderer::Renderer;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    config: Config,
    sample: SampleKind,
    events: ResizeEvents,
    view: Rc<RefCell<GridView>>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let sample = config.sample;
        let view = Rc::new(RefCell::new(GridView::new(config.settings(sample).clone())?));

        let mut events = ResizeEvents::new();
        let subscriber = Rc::clone(&view);
        events.subscribe(move |size| subscriber.borrow_mut().on_resize(size));

        Ok(Self {
            window: None,
            renderer: None,
            config,
            sample,
            events,
            view,
        })
    }

    fn scale_factor(&self) -> f64 {
        self.window.as_ref().map(|w| w.scale_factor()).unwrap_or(1.0)
    }

    fn publish_size(&mut self, physical: PhysicalSize<u32>) {
        let logical: LogicalSize<f64> = physical.to_logical(self.scale_factor());
        if !self.events.publish(Size::new(logical.width, logical.height)) {
            tracing::trace!("Window not laid out yet, keeping previous grid");
        }
        self.request_redraw_if_dirty();
    }

    fn request_redraw_if_dirty(&mut self) {
        if self.view.borrow_mut().take_dirty() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn switch_sample(&mut self) {
        let next = self.sample.next();
        match GridView::new(self.config.settings(next).clone()) {
            Ok(view) => {
                *self.view.borrow_mut() = view;
                self.sample = next;
                tracing::info!("Showing sample: {}", next.label());
                if let Some(window) = &self.window {
                    window.set_title(&format!("Uniform Grid - {}", next.label()));
                }
            }
            Err(e) => {
                tracing::error!("Cannot build sample {}: {}", next.label(), e);
                return;
            }
        }

        // Replay the current size so the new grid lays itself out
        if let Some(size) = self.events.last_published() {
            self.events.publish(size);
        }
        self.request_redraw_if_dirty();
    }

    fn render(&mut self) {
        let scale = self.scale_factor() as f32;
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let shapes = scene::to_physical(self.view.borrow().shapes(), scale);
        if let Err(e) = renderer.render(&shapes) {
            tracing::warn!("Render failed: {}", e);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title(format!("Uniform Grid - {}", self.sample.label()))
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let background = self.config.background.to_array();
        let renderer = match pollster::block_on(Renderer::new(Arc::clone(&window), background)) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!("Failed to create renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let physical_size = window.inner_size();
        tracing::info!(
            "Window created: {}x{} physical pixels, scale factor: {}",
            physical_size.width,
            physical_size.height,
            window.scale_factor()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.publish_size(physical_size);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
                self.publish_size(new_size);
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Tab) => self.switch_sample(),
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn load_config() -> Config {
    let Some(path) = Config::default_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match Config::load(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting uniform-grid");

    let config = load_config();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
