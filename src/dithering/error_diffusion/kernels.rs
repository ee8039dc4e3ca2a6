//! Named diffusion kernels, row-major with row 0 on the current scan row.
//!
//! Weights at and before the current pixel in row 0 are zero: error only
//! travels to pixels the scan has not visited yet. Every table sums to at
//! most one; a kernel summing past one amplifies the running error instead
//! of conserving it.

/// Floyd-Steinberg matrix
pub const FLOYD_STEINBERG: &[&[f32]] = &[
    &[0.0, 0.0, 7.0 / 16.0],
    &[3.0 / 16.0, 5.0 / 16.0, 1.0 / 16.0],
];

/// Jarvis-Judice-Ninke matrix
pub const JARVIS_JUDICE_NINKE: &[&[f32]] = &[
    &[0.0, 0.0, 0.0, 7.0 / 48.0, 5.0 / 48.0],
    &[3.0 / 48.0, 5.0 / 48.0, 7.0 / 48.0, 5.0 / 48.0, 3.0 / 48.0],
    &[1.0 / 48.0, 3.0 / 48.0, 5.0 / 48.0, 3.0 / 48.0, 1.0 / 48.0],
];

/// Stucki matrix
pub const STUCKI: &[&[f32]] = &[
    &[0.0, 0.0, 0.0, 8.0 / 42.0, 4.0 / 42.0],
    &[2.0 / 42.0, 4.0 / 42.0, 8.0 / 42.0, 4.0 / 42.0, 2.0 / 42.0],
    &[1.0 / 42.0, 2.0 / 42.0, 4.0 / 42.0, 2.0 / 42.0, 1.0 / 42.0],
];

/// Atkinson matrix, deliberately diffuses only 6/8 of the residual
pub const ATKINSON: &[&[f32]] = &[
    &[0.0, 0.0, 1.0 / 8.0, 1.0 / 8.0],
    &[1.0 / 8.0, 1.0 / 8.0, 1.0 / 8.0, 0.0],
    &[0.0, 1.0 / 8.0, 0.0, 0.0],
];

/// Burkes matrix
pub const BURKES: &[&[f32]] = &[
    &[0.0, 0.0, 0.0, 8.0 / 32.0, 4.0 / 32.0],
    &[2.0 / 32.0, 4.0 / 32.0, 8.0 / 32.0, 4.0 / 32.0, 2.0 / 32.0],
];

/// Sierra matrix
pub const SIERRA: &[&[f32]] = &[
    &[0.0, 0.0, 0.0, 5.0 / 32.0, 3.0 / 32.0],
    &[2.0 / 32.0, 4.0 / 32.0, 5.0 / 32.0, 4.0 / 32.0, 2.0 / 32.0],
    &[0.0, 2.0 / 32.0, 3.0 / 32.0, 2.0 / 32.0, 0.0],
];

/// Two-row variant of the Sierra matrix
pub const TWO_ROW_SIERRA: &[&[f32]] = &[
    &[0.0, 0.0, 0.0, 4.0 / 16.0, 3.0 / 16.0],
    &[1.0 / 32.0, 2.0 / 32.0, 3.0 / 32.0, 2.0 / 32.0, 1.0 / 32.0],
];

/// Single-row-heavy variant of the Sierra matrix
pub const SIERRA_LITE: &[&[f32]] = &[&[0.0, 0.0, 2.0 / 4.0], &[1.0 / 4.0, 1.0 / 4.0, 0.0]];

/// An immutable error diffusion weight matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionKernel {
    rows: Vec<Vec<f32>>,
}

impl DiffusionKernel {
    pub fn from_rows(rows: &[&[f32]]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// Horizontal offset that lands the first strictly positive weight of the
    /// kernel on the pixel immediately after the current scan position.
    ///
    /// Returns `0` for a kernel with no positive weight, which disables
    /// diffusion entirely. Structural metadata, computed once per draw.
    pub fn alignment(&self) -> i32 {
        for row in &self.rows {
            for (j, &weight) in row.iter().enumerate() {
                if weight > 0.0 {
                    return -(j as i32) + 1;
                }
            }
        }
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelType {
    FloydSteinberg,
    JarvisJudiceNinke,
    Stucki,
    Atkinson,
    Burkes,
    Sierra,
    TwoRowSierra,
    SierraLite,
}

impl KernelType {
    pub fn kernel(&self) -> DiffusionKernel {
        DiffusionKernel::from_rows(match self {
            Self::FloydSteinberg => FLOYD_STEINBERG,
            Self::JarvisJudiceNinke => JARVIS_JUDICE_NINKE,
            Self::Stucki => STUCKI,
            Self::Atkinson => ATKINSON,
            Self::Burkes => BURKES,
            Self::Sierra => SIERRA,
            Self::TwoRowSierra => TWO_ROW_SIERRA,
            Self::SierraLite => SIERRA_LITE,
        })
    }
}
