use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    const ATTRIBUTES: [VertexAttribute; 2] =
        wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4];

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub left_paddle: Buffer,
    pub right_paddle: Buffer,
    pub ball: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    // Instance buffers
    let instance_buffer = |label: &str| {
        device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<InstanceData>() as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };

    GameBuffers {
        camera: camera_buffer,
        left_paddle: instance_buffer("Left Paddle Instance Buffer"),
        right_paddle: instance_buffer("Right Paddle Instance Buffer"),
        ball: instance_buffer("Ball Instance Buffer"),
    }
}
