use serde::Deserialize;
use std::fmt;

/// 3×3 齊次座標轉換，依名稱 m11..m33 (列優先) 存放
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TransformRecord {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
}

pub const IDENTITY_TRANSFORM: TransformRecord = TransformRecord {
    m11: 1.0,
    m12: 0.0,
    m13: 0.0,
    m21: 0.0,
    m22: 1.0,
    m23: 0.0,
    m31: 0.0,
    m32: 0.0,
    m33: 1.0,
};

impl TransformRecord {
    pub fn cells(&self) -> [f64; 9] {
        [
            self.m11, self.m12, self.m13, self.m21, self.m22, self.m23, self.m31, self.m32,
            self.m33,
        ]
    }
}

/// Pixel (or user unit) size of the subject being transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// 2D affine matrix `(a, b, c, d, e, f)`:
/// `(x, y) -> (a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix(f64, f64, f64, f64, f64, f64);

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self(a, b, c, d, e, f)
    }

    pub fn a(&self) -> f64 {
        self.0
    }

    pub fn b(&self) -> f64 {
        self.1
    }

    pub fn c(&self) -> f64 {
        self.2
    }

    pub fn d(&self) -> f64 {
        self.3
    }

    pub fn e(&self) -> f64 {
        self.4
    }

    pub fn f(&self) -> f64 {
        self.5
    }

    pub fn components(&self) -> [f64; 6] {
        [self.0, self.1, self.2, self.3, self.4, self.5]
    }

    pub fn determinant(&self) -> f64 {
        self.0 * self.3 - self.1 * self.2
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.0 * x + self.2 * y + self.4,
            self.1 * x + self.3 * y + self.5,
        )
    }
}

/// SVG `matrix(a, b, c, d, e, f)` form
impl fmt::Display for AffineMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix({}, {}, {}, {}, {}, {})",
            self.0, self.1, self.2, self.3, self.4, self.5
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Identity,
    NonIdentity,
}

impl Classification {
    /// "Yes" 代表有轉換 (非單位矩陣)，"No" 代表沒有
    pub fn answer(&self) -> &'static str {
        match self {
            Classification::Identity => "No",
            Classification::NonIdentity => "Yes",
        }
    }
}
