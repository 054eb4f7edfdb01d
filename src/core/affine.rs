use crate::core::{AffineMatrix, Extent, TransformRecord};

/// 線性部分直接取用，平移量以主體尺寸的比例表示
pub fn build_affine(record: &TransformRecord, extent: Extent) -> AffineMatrix {
    AffineMatrix::new(
        record.m11,
        record.m12,
        record.m21,
        record.m22,
        f64::from(extent.width) * record.m31,
        f64::from(extent.height) * record.m32,
    )
}

/// Inverse mapping, or `None` when the linear part is singular.
pub fn invert(matrix: &AffineMatrix) -> Option<AffineMatrix> {
    let det = matrix.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }

    let a = matrix.d() / det;
    let b = -matrix.b() / det;
    let c = -matrix.c() / det;
    let d = matrix.a() / det;
    let e = -(a * matrix.e() + c * matrix.f());
    let f = -(b * matrix.e() + d * matrix.f());

    Some(AffineMatrix::new(a, b, c, d, e, f))
}
