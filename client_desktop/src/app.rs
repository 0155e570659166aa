//! Desktop application implementing winit ApplicationHandler
//!
//! Runs the fixed-tick game loop, forwards keys to the session and draws
//! the field plus the egui overlay.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use game_core::{MenuOutcome, Params, Session};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::input::map_key;
use crate::overlay::Overlay;
use crate::renderer::Renderer;
use crate::scheduler::TickScheduler;

pub struct PongApp {
    session: Session,
    scheduler: TickScheduler,

    // Rendering
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    overlay: Option<Overlay>,

    // Set when startup fails inside the event loop
    error: Option<anyhow::Error>,
}

impl PongApp {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            scheduler: TickScheduler::from_millis(Params::TICK_MS, Instant::now()),
            window: None,
            renderer: None,
            overlay: None,
            error: None,
        }
    }

    /// Startup failure recorded while the loop was running, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let map = self.session.map;
        let window_attrs = Window::default_attributes()
            .with_title("Pong Game")
            .with_inner_size(LogicalSize::new(map.width as f64, map.height as f64))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), map.width, map.height))
            .context("Failed to initialise renderer")?;
        let overlay = Overlay::new(&window, renderer.device(), renderer.format());

        log::info!(
            "Window ready ({}x{} physical)",
            renderer.context.size.0,
            renderer.context.size.1
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.overlay = Some(overlay);
        self.scheduler.rearm(Instant::now());
        log::debug!("Tick interval {:?}", self.scheduler.interval());

        Ok(())
    }

    fn tick(&mut self) {
        if !self.session.tick() {
            return;
        }

        if self.session.events.any_goal() {
            log::debug!("Ball served from centre, score {}", self.session.score);
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer), Some(overlay)) =
            (&self.window, &mut self.renderer, &mut self.overlay)
        else {
            return;
        };

        let frame = overlay.run(window, &self.session);

        if let Err(e) = renderer.draw(&self.session, overlay, &frame) {
            log::error!("Render error: {e}");
        }

        if let Some(action) = frame.action {
            if self.session.apply_menu(action) == MenuOutcome::Exit {
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for PongApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.initialize(event_loop) {
            log::error!("{e:#}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui sees every event for hover and clicks; game keys are handled regardless
        if let (Some(window), Some(overlay)) = (&self.window, &mut self.overlay) {
            overlay.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let key = map_key(event.physical_key);
                match event.state {
                    ElementState::Pressed => self.session.key_down(key, event.repeat),
                    ElementState::Released => self.session.key_up(key),
                }
            }

            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.scheduler.is_due(now) {
            self.tick();
            self.scheduler.rearm(now);

            // Redraw every tick, paused or not, so the menu stays live
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.scheduler.next_tick()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Overlay and GPU resources go before the window they draw into
        self.overlay = None;
        self.renderer = None;
        self.window = None;
        log::info!("Final score {}", self.session.score);
    }
}
