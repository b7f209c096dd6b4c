//! GPU resource management: device/surface setup, growable buffers and
//! the depth target.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment sized to the surface.
pub mod texture;
