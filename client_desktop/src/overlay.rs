//! egui layer: score text and the pause menu.

use game_core::{MenuAction, Session};
use winit::event::WindowEvent;
use winit::window::Window;

const SCORE_Y: f32 = 30.0;
const SCORE_SIZE: f32 = 24.0;
const MENU_SIZE: [f32; 2] = [200.0, 100.0];

/// Tessellated egui output for one frame, plus any menu button pressed
pub struct OverlayFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
    pub action: Option<MenuAction>,
}

pub struct Overlay {
    ctx: egui::Context,
    winit_state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Overlay {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let winit_state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, None, 1, false);

        Self {
            ctx,
            winit_state,
            renderer,
        }
    }

    /// Feed a window event to egui. Game keys are handled regardless, so
    /// egui's consumed flag is not reported back.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.winit_state.on_window_event(window, event);
    }

    /// Build this frame's UI from the session
    pub fn run(&mut self, window: &Window, session: &Session) -> OverlayFrame {
        let raw_input = self.winit_state.take_egui_input(window);
        let score = session.score.to_string();
        let menu_visible = session.menu_visible();

        let mut action = None;
        let full_output = self.ctx.run(raw_input, |ctx| {
            action = build_ui(ctx, &score, menu_visible);
        });

        self.winit_state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        OverlayFrame {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
            action,
        }
    }

    /// Upload new or changed egui textures (font atlas). Runs even when the
    /// frame itself is skipped, since egui sends each delta only once.
    pub fn update_textures(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, frame: &OverlayFrame) {
        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
    }

    /// Record the egui pass on top of whatever is already in `view`.
    /// Returns extra command buffers egui wants submitted before `encoder`.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        frame: &OverlayFrame,
    ) -> Vec<wgpu::CommandBuffer> {
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: frame.pixels_per_point,
        };

        let user_buffers = self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &frame.paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass, &frame.paint_jobs, &screen_descriptor);
        }

        user_buffers
    }

    /// Release textures egui no longer needs, once the frame is submitted
    pub fn free_textures(&mut self, frame: &OverlayFrame) {
        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

/// Score label at the top centre, plus the pause menu while paused
fn build_ui(ctx: &egui::Context, score: &str, menu_visible: bool) -> Option<MenuAction> {
    let screen_rect = ctx.screen_rect();
    ctx.layer_painter(egui::LayerId::background()).text(
        egui::pos2(screen_rect.center().x, screen_rect.top() + SCORE_Y),
        egui::Align2::CENTER_CENTER,
        score,
        egui::FontId::monospace(SCORE_SIZE),
        egui::Color32::WHITE,
    );

    if !menu_visible {
        return None;
    }

    let mut action = None;
    egui::Window::new("Pause Menu")
        .collapsible(false)
        .resizable(false)
        .fixed_size(MENU_SIZE)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                if ui.button("Reset").clicked() {
                    action = Some(MenuAction::Reset);
                }
                ui.add_space(10.0);
                if ui.button("Quit").clicked() {
                    action = Some(MenuAction::Quit);
                }
            });
        });
    action
}
