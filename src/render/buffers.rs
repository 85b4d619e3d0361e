use crate::error::ConfigError;

/// Floats per position
pub const POSITION_STRIDE: usize = 3;
/// Floats per RGB color
pub const COLOR_STRIDE: usize = 3;
/// Floats per column-major 4x4 instance matrix
pub const MATRIX_STRIDE: usize = 16;

/// Flat float array with a fixed per-entity stride and an upload flag
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBuffer {
    data: Vec<f32>,
    stride: usize,
    dirty: bool,
}

impl AttributeBuffer {
    /// Zeroed buffer for `count` entities; fails when the float count overflows
    pub fn new(count: usize, stride: usize) -> Result<Self, ConfigError> {
        let len = count
            .checked_mul(stride)
            .ok_or(ConfigError::TooManyEntities { count, max: usize::MAX / stride })?;
        Ok(Self {
            data: vec![0.0; len],
            stride,
            dirty: false,
        })
    }

    /// Number of entities the buffer holds
    pub fn count(&self) -> usize {
        self.data.len() / self.stride
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// One stride-sized chunk per entity, in index order
    pub fn chunks_mut(&mut self) -> std::slice::ChunksExactMut<'_, f32> {
        self.data.chunks_exact_mut(self.stride)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the flag; the host calls this after uploading
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Host-facing attribute arrays for a point cloud
#[derive(Debug, Clone, PartialEq)]
pub struct PointBuffers {
    pub positions: AttributeBuffer,
    pub colors: AttributeBuffer,
}

impl PointBuffers {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            positions: AttributeBuffer::new(count, POSITION_STRIDE)?,
            colors: AttributeBuffer::new(count, COLOR_STRIDE)?,
        })
    }

    pub fn count(&self) -> usize {
        self.positions.count()
    }
}

/// Host-facing per-instance arrays for an instanced mesh
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBuffers {
    pub matrices: AttributeBuffer,
    pub colors: AttributeBuffer,
}

impl InstanceBuffers {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            matrices: AttributeBuffer::new(count, MATRIX_STRIDE)?,
            colors: AttributeBuffer::new(count, COLOR_STRIDE)?,
        })
    }

    pub fn count(&self) -> usize {
        self.matrices.count()
    }
}
