/// Square row-major grid of heights, `index = y * lod + x`.
/// Coordinate math uses f64; heights are stored as f32 for texture upload.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    pub lod: usize,
    pub data: Vec<f32>,
}

impl HeightGrid {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.lod + x]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}
