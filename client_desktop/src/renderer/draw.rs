use super::{RenderError, Renderer};
use crate::overlay::{Overlay, OverlayFrame};
use crate::scene::SceneInstances;
use game_core::Session;
use wgpu::*;

pub fn draw_frame(
    renderer: &mut Renderer,
    session: &Session,
    overlay: &mut Overlay,
    overlay_frame: &OverlayFrame,
) -> Result<(), RenderError> {
    overlay.update_textures(&renderer.context.device, &renderer.context.queue, overlay_frame);
    let result = render(renderer, session, overlay, overlay_frame);
    overlay.free_textures(overlay_frame);
    result
}

fn render(
    renderer: &mut Renderer,
    session: &Session,
    overlay: &mut Overlay,
    overlay_frame: &OverlayFrame,
) -> Result<(), RenderError> {
    let output = match renderer.context.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one uses the fresh configuration
            renderer.context.reconfigure();
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("Surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .context
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, session);
    render_shapes(renderer, &mut encoder, &view);

    let size = [renderer.context.config.width, renderer.context.config.height];
    let overlay_buffers = overlay.paint(
        &renderer.context.device,
        &renderer.context.queue,
        &mut encoder,
        &view,
        size,
        overlay_frame,
    );

    renderer.context.queue.submit(
        overlay_buffers
            .into_iter()
            .chain(std::iter::once(encoder.finish())),
    );
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, session: &Session) {
    let current = SceneInstances::from_session(session);
    if renderer.last_instance_data == Some(current) {
        return;
    }

    let queue = &renderer.context.queue;
    queue.write_buffer(
        &renderer.buffers.left_paddle,
        0,
        bytemuck::cast_slice(&[current.left_paddle]),
    );
    queue.write_buffer(
        &renderer.buffers.right_paddle,
        0,
        bytemuck::cast_slice(&[current.right_paddle]),
    );
    queue.write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[current.ball]));
    renderer.last_instance_data = Some(current);
}

fn render_shapes(renderer: &Renderer, encoder: &mut CommandEncoder, view: &TextureView) {
    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(Color::BLACK),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    draw_objects(renderer, &mut pass);
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    let (rect, circle) = &renderer.meshes;

    renderer.shapes.bind(pass);

    // Rects (Paddles)
    pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
    pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);

    pass.set_vertex_buffer(1, renderer.buffers.left_paddle.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..1);

    pass.set_vertex_buffer(1, renderer.buffers.right_paddle.slice(..));
    pass.draw_indexed(0..rect.index_count, 0, 0..1);

    // Circle (Ball)
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..circle.index_count, 0, 0..1);
}
