pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::overlay::{Overlay, OverlayFrame};
use crate::scene::SceneInstances;
use game_core::Session;
use init::WgpuContext;
use pipeline::ShapePipeline;
pub use init::RenderError;
use resources::GameBuffers;
use wgpu::*;
use winit::window::Window;

const CIRCLE_SEGMENTS: u16 = 32;

/// Draws paddles and ball from the session each frame. Holds only GPU
/// resources; all game data is read from the session passed to `draw`.
pub struct Renderer {
    pub context: WgpuContext,

    pub shapes: ShapePipeline,

    // Resources
    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    // Skips instance uploads while nothing moves (e.g. paused)
    pub last_instance_data: Option<SceneInstances>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, field_width: f32, field_height: f32) -> Result<Self, RenderError> {
        let context = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(field_width, field_height);

        let buffers = resources::create_buffers(&context.device, &camera);
        let shapes = ShapePipeline::new(&context.device, context.config.format, &buffers.camera);

        // Meshes
        let (rect_vertices, rect_indices) = create_rectangle();
        let rect_mesh = Mesh::new(&context.device, "Rectangle", &rect_vertices, &rect_indices);
        let (circle_vertices, circle_indices) = create_circle(CIRCLE_SEGMENTS);
        let circle_mesh = Mesh::new(&context.device, "Circle", &circle_vertices, &circle_indices);

        Ok(Self {
            context,
            shapes,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            last_instance_data: None,
        })
    }

    pub fn device(&self) -> &Device {
        &self.context.device
    }

    pub fn format(&self) -> TextureFormat {
        self.context.config.format
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    pub fn draw(
        &mut self,
        session: &Session,
        overlay: &mut Overlay,
        overlay_frame: &OverlayFrame,
    ) -> Result<(), RenderError> {
        draw::draw_frame(self, session, overlay, overlay_frame)
    }
}
