//! Pong - two players, one keyboard
//!
//! Controls:
//!   W / S          - Left paddle
//!   Up / Down      - Right paddle
//!   Escape         - Pause menu (Reset / Quit)

mod app;
mod camera;
mod input;
mod mesh;
mod overlay;
mod renderer;
mod scene;
mod scheduler;

use anyhow::{Context, Result};
use app::PongApp;
use game_core::Session;
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;

    let mut app = PongApp::new(Session::default());
    event_loop.run_app(&mut app)?;

    if let Some(err) = app.take_error() {
        return Err(err);
    }
    Ok(())
}
