//! # 要約
//!
//! パイプライン成功時の唯一の出力。

use serde::{Deserialize, Serialize};

/// 記事の短い説明
///
/// `summary` 系では `{{Short description|...}}` マーカーの中身、
/// `extract` 系では上流が生成したプレーンテキストの抜粋をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub short_description: String,
}

impl Summary {
    pub fn new(short_description: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
        }
    }
}
