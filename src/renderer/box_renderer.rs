//! Instanced unit-cube renderer.
//!
//! Instances live in a storage buffer indexed by `instance_index`, the cube
//! itself in a small vertex/index buffer pair. Opaque instances (including
//! wireframes) are drawn first with depth writes; translucent ones follow,
//! sorted far to near, with depth writes off.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::util::DeviceExt;

use super::pipeline_util;
use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTarget;
use crate::scene::RenderItem;

/// Wireframe line width in pixels.
const EDGE_WIDTH_PX: f32 = 1.5;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Per-instance GPU data. Layout matches `BoxInstance` in `box.wgsl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BoxInstance {
    /// Unit cube to world transform, column-major.
    pub model: [[f32; 4]; 4],
    /// Display-space RGBA.
    pub color: [f32; 4],
    /// `x`: wireframe flag, `y`: edge width in pixels.
    pub params: [f32; 4],
}

impl BoxInstance {
    fn from_item(item: &RenderItem) -> Self {
        Self {
            model: item.model.to_cols_array_2d(),
            color: item.color,
            params: [
                if item.wireframe { 1.0 } else { 0.0 },
                EDGE_WIDTH_PX,
                0.0,
                0.0,
            ],
        }
    }
}

/// Instances in draw order: opaque first, then translucent far to near.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// All instances for the frame.
    pub instances: Vec<BoxInstance>,
    /// How many leading instances go through the opaque pass.
    pub opaque_count: u32,
}

impl DrawList {
    /// Order `items` for a camera at `eye`.
    #[must_use]
    pub fn build(items: &[RenderItem], eye: Vec3) -> Self {
        let (translucent, opaque): (Vec<&RenderItem>, Vec<&RenderItem>) =
            items.iter().partition(|item| item.is_transparent());

        let mut translucent: Vec<(f32, &RenderItem)> = translucent
            .into_iter()
            .map(|item| (item.center.distance_squared(eye), item))
            .collect();
        translucent.sort_by(|a, b| b.0.total_cmp(&a.0));

        let opaque_count = opaque.len() as u32;
        let instances = opaque
            .into_iter()
            .chain(translucent.into_iter().map(|(_, item)| item))
            .map(BoxInstance::from_item)
            .collect();

        Self {
            instances,
            opaque_count,
        }
    }

    /// Total instance count.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Whether nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Draws the frame's render set into the surface.
pub struct BoxRenderer {
    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: DynamicBuffer,
    instance_layout: wgpu::BindGroupLayout,
    instance_bind_group: wgpu::BindGroup,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth: DepthTarget,
    opaque_count: u32,
    instance_count: u32,
}

impl BoxRenderer {
    /// Create pipelines and buffers for `context`'s surface.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let (vertices, indices) = cube_mesh();

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Box Vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Box Indices"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let mut instance_buffer = DynamicBuffer::new(
            device,
            "Box Instances",
            64 * size_of::<BoxInstance>(),
            wgpu::BufferUsages::STORAGE,
        );
        let _ = instance_buffer.write(
            device,
            &context.queue,
            &[BoxInstance::zeroed()],
        );
        let instance_layout =
            pipeline_util::storage_layout(device, "Box Instance Layout");
        let instance_bind_group = pipeline_util::single_buffer_bind_group(
            device,
            &instance_layout,
            instance_buffer.buffer(),
            "Box Instance Bind Group",
        );

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            pipeline_util::uniform_layout(device, "Camera Layout");
        let camera_bind_group = pipeline_util::single_buffer_bind_group(
            device,
            &camera_layout,
            &camera_buffer,
            "Camera Bind Group",
        );

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Box Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/box.wgsl").into(),
                ),
            });
        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Box Pipeline Layout"),
                bind_group_layouts: &[&instance_layout, &camera_layout],
                push_constant_ranges: &[],
            });

        let opaque_pipeline =
            create_pipeline(context, &shader, &pipeline_layout, false);
        let translucent_pipeline =
            create_pipeline(context, &shader, &pipeline_layout, true);

        let (width, height) = context.size();
        Self {
            opaque_pipeline,
            translucent_pipeline,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            instance_buffer,
            instance_layout,
            instance_bind_group,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            depth: DepthTarget::new(device, width, height),
            opaque_count: 0,
            instance_count: 0,
        }
    }

    /// Recreate the depth target for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = DepthTarget::new(device, width, height);
    }

    /// Upload the camera and this frame's instances.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        camera: &Camera,
        items: &[RenderItem],
    ) {
        self.camera_uniform.update_view_proj(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        let list = DrawList::build(items, camera.eye);
        let reallocated = if list.is_empty() {
            self.instance_buffer.write(
                &context.device,
                &context.queue,
                &[BoxInstance::zeroed()],
            )
        } else {
            self.instance_buffer.write(
                &context.device,
                &context.queue,
                &list.instances,
            )
        };
        if reallocated {
            self.instance_bind_group = pipeline_util::single_buffer_bind_group(
                &context.device,
                &self.instance_layout,
                self.instance_buffer.buffer(),
                "Box Instance Bind Group",
            );
        }
        self.opaque_count = list.opaque_count;
        self.instance_count = list.len();
    }

    /// Clear to `background` and draw the prepared instances into `view`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        background: [f32; 3],
    ) {
        let [r, g, b] = background.map(f64::from);
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Box Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a: 1.0 }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                },
            ),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.instance_count == 0 {
            return;
        }
        pass.set_bind_group(0, &self.instance_bind_group, &[]);
        pass.set_bind_group(1, &self.camera_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint16,
        );

        if self.opaque_count > 0 {
            pass.set_pipeline(&self.opaque_pipeline);
            pass.draw_indexed(0..self.index_count, 0, 0..self.opaque_count);
        }
        if self.instance_count > self.opaque_count {
            pass.set_pipeline(&self.translucent_pipeline);
            pass.draw_indexed(
                0..self.index_count,
                0,
                self.opaque_count..self.instance_count,
            );
        }
    }
}

fn create_pipeline(
    context: &RenderContext,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    translucent: bool,
) -> wgpu::RenderPipeline {
    let label = if translucent {
        "Box Translucent Pipeline"
    } else {
        "Box Opaque Pipeline"
    };
    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: size_of::<Vertex>()
                        as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &pipeline_util::color_target(
                    context.format(),
                    translucent,
                ),
                compilation_options: Default::default(),
            }),
            // Wireframes need their back edges, and shells their far faces.
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(pipeline_util::depth_stencil_state(
                !translucent,
            )),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

/// Unit cube centred on the origin: four vertices per face so each face
/// carries its own normal.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for axis in 0..3 {
        for sign in [-1.0_f32, 1.0] {
            let mut normal = [0.0; 3];
            normal[axis] = sign;
            let u = (axis + 1) % 3;
            let v = (axis + 2) % 3;
            let base = vertices.len() as u16;
            for (du, dv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)]
            {
                let mut position = [0.0; 3];
                position[axis] = 0.5 * sign;
                position[u] = du;
                position[v] = dv;
                vertices.push(Vertex { position, normal });
            }
            indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base,
                base + 2,
                base + 3,
            ]);
        }
    }
    (vertices, indices)
}
