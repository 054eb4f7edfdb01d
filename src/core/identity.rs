use crate::core::{Classification, TransformRecord};
use crate::domain::model::IDENTITY_TRANSFORM;

/// 逐格精確比較，沒有容許誤差
pub fn classify(record: &TransformRecord) -> Classification {
    if record.cells() == IDENTITY_TRANSFORM.cells() {
        Classification::Identity
    } else {
        Classification::NonIdentity
    }
}
