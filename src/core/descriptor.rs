use crate::core::{Storage, TransformRecord};
use crate::utils::error::{Result, TransformError};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// 讀取並解析轉換描述檔 (JSON)
pub fn load_descriptor<S: Storage>(storage: &S, path: &Path) -> Result<TransformRecord> {
    tracing::debug!("Loading transform descriptor: {}", path.display());
    let data = storage.read_file(path)?;
    parse_descriptor(&data, path)
}

/// 依欄位名稱取出九個數值；缺欄位或型別錯誤立即失敗。
/// 兩層都必須是 JSON 物件，陣列形式 (依位置) 一律拒絕
pub fn parse_descriptor(data: &[u8], path: &Path) -> Result<TransformRecord> {
    let malformed = |reason: String| TransformError::MalformedDescriptorError {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_slice(data).map_err(|e| malformed(e.to_string()))?;

    let top = value
        .as_object()
        .ok_or_else(|| malformed("top-level value must be a JSON object".to_string()))?;
    let transform = top
        .get("transform")
        .ok_or_else(|| malformed("missing field `transform`".to_string()))?;
    if !transform.is_object() {
        return Err(malformed("`transform` must be a JSON object".to_string()));
    }

    let record =
        TransformRecord::deserialize(transform).map_err(|e| malformed(e.to_string()))?;

    tracing::debug!("Transform cells: {:?}", record.cells());
    Ok(record)
}
