//! Growable GPU buffers.
//!
//! The render set changes size whenever the reveal toggle flips or a box is
//! focused, so instance data lives in a buffer that reallocates on demand.

/// Smallest allocation, in bytes.
const MIN_CAPACITY: usize = 256;

/// A GPU buffer that grows (2x) when a write exceeds its capacity.
/// Never shrinks.
pub struct DynamicBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: usize,
    usage: wgpu::BufferUsages,
    label: &'static str,
}

impl DynamicBuffer {
    /// Empty buffer with room for at least `initial_capacity` bytes.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &'static str,
        initial_capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = initial_capacity.max(MIN_CAPACITY);
        Self {
            buffer: allocate(device, label, capacity, usage),
            capacity,
            len: 0,
            usage,
            label,
        }
    }

    /// Upload `data`, reallocating first if it does not fit.
    ///
    /// Returns `true` if the underlying buffer was replaced.
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let reallocated = bytes.len() > self.capacity;
        if reallocated {
            self.capacity = grown_capacity(self.capacity, bytes.len());
            log::debug!(
                "growing {} to {} bytes",
                self.label,
                self.capacity
            );
            self.buffer =
                allocate(device, self.label, self.capacity, self.usage);
        }
        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.len = bytes.len();
        reallocated
    }

    /// The wgpu buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Bytes written by the last [`write`](Self::write).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the last write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn allocate(
    device: &wgpu::Device,
    label: &str,
    capacity: usize,
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: capacity as u64,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn grown_capacity(current: usize, needed: usize) -> usize {
    (needed * 2).max(current + MIN_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_at_least_doubles_the_request() {
        assert_eq!(grown_capacity(256, 300), 600);
        assert_eq!(grown_capacity(4096, 4100), 8200);
    }

    #[test]
    fn growth_never_stalls_on_small_overflows() {
        assert!(grown_capacity(1000, 100) >= 1000 + MIN_CAPACITY);
    }
}
