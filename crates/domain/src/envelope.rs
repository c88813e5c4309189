//! # 上流 API のエンベロープ型
//!
//! MediaWiki action API（`formatversion=2`）が返す JSON のうち、
//! パイプラインが参照する部分をデコードする型。
//!
//! ## 設計方針
//!
//! - すべてのフィールドに `#[serde(default)]` を付け、欠落を許容する
//! - デコード成功は `pages` / `revisions` が空でないことを保証しない。
//!   利用側は [`ContentEnvelope::first_revision`] などのアクセサ経由で
//!   `Option` として受け取り、明示的に検証する
//! - 型が異なる値（`pageid` に文字列など）はデコードエラーとして扱い、
//!   パイプライン側で `MalformedPayload` に分類する

use serde::Deserialize;

// =========================================================================
// 共通部分
// =========================================================================

/// タイトル正規化の記録（`Yoshua_Bengio` → `Yoshua Bengio` など）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Normalization {
    #[serde(rename = "fromencoded")]
    pub from_encoded: bool,
    pub from:         String,
    pub to:           String,
}

/// 警告メッセージ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WarningText {
    pub warnings: String,
}

/// モジュール別の警告（`main` と `revisions`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Warnings {
    pub main:      WarningText,
    pub revisions: WarningText,
}

/// 継続トークン
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Continuation {
    pub rvcontinue:     String,
    #[serde(rename = "continue")]
    pub continue_token: String,
}

// =========================================================================
// prop=revisions（content 操作）
// =========================================================================

/// リビジョン本文
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Revision {
    #[serde(rename = "contentformat")]
    pub content_format: String,
    #[serde(rename = "contentmodel")]
    pub content_model:  String,
    pub content:        String,
}

/// リビジョン付きページ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevisionPage {
    /// 存在しないページでは上流が省略する
    #[serde(rename = "pageid")]
    pub page_id:   Option<u64>,
    pub ns:        i64,
    pub title:     String,
    pub missing:   bool,
    pub revisions: Vec<Revision>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevisionQuery {
    pub normalized: Vec<Normalization>,
    pub pages:      Vec<RevisionPage>,
}

/// content 操作のエンベロープ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContentEnvelope {
    #[serde(rename = "continue")]
    pub continuation: Continuation,
    pub warnings:     Warnings,
    pub query:        RevisionQuery,
}

impl ContentEnvelope {
    /// 先頭ページの先頭リビジョンを返す
    ///
    /// `pages` または `pages[0].revisions` が空の場合は `None`。
    pub fn first_revision(&self) -> Option<&Revision> {
        self.query.pages.first()?.revisions.first()
    }
}

// =========================================================================
// prop=extracts（extract 操作）
// =========================================================================

/// 抜粋付きページ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractPage {
    #[serde(rename = "pageid")]
    pub page_id: Option<u64>,
    pub ns:      i64,
    pub title:   String,
    pub missing: bool,
    /// 本文を持たないページでは上流が省略する
    pub extract: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractQuery {
    pub normalized: Vec<Normalization>,
    pub pages:      Vec<ExtractPage>,
}

/// extract 操作のエンベロープ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractEnvelope {
    #[serde(rename = "batchcomplete")]
    pub batch_complete: bool,
    pub query:          ExtractQuery,
}

impl ExtractEnvelope {
    /// 先頭ページを返す（`pages` が空なら `None`）
    pub fn first_page(&self) -> Option<&ExtractPage> {
        self.query.pages.first()
    }
}
