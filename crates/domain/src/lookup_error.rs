//! # パイプラインの型付きエラー
//!
//! 上流呼び出しから要約抽出までの各段階の失敗を 1 つの型に集約する。
//!
//! ## エラー種別とステータスヒントの対応
//!
//! | 種別 | 発生条件 | ステータスヒント |
//! |------|---------|-----------------|
//! | `UpstreamUnreachable` | DNS / 接続失敗 | 400 |
//! | `BodyReadFailure` | レスポンスボディの読み取り失敗 | 400 |
//! | `UpstreamRejected` | 上流ステータスが 299 超 | 500 |
//! | `MalformedPayload` | JSON デコード失敗 | 500 |
//! | `MissingRevisions` | ページまたはリビジョンが空 | 404 |
//! | `MissingPage` | ページが空（extract） | 404 |
//! | `MissingShortDescription` | マーカーなし | 206（本文全体をメッセージに載せる） |
//!
//! ステータスヒントは呼び出し側（ルーティング層）への分類ヒントであり、
//! それ自体はネットワークレスポンスではない。

use serde::Serialize;
use strum::IntoStaticStr;
use thiserror::Error;

use crate::policy;

/// エラー種別
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LookupErrorKind {
    /// 上流に到達できない（DNS、接続リセットなど）
    UpstreamUnreachable,
    /// レスポンスボディの読み取りに失敗した
    BodyReadFailure,
    /// 上流が 2xx 以外を返した
    UpstreamRejected,
    /// JSON としてデコードできない
    MalformedPayload,
    /// 構造は正しいがページまたはリビジョンが空
    MissingRevisions,
    /// 構造は正しいがページが空
    MissingPage,
    /// 本文に `{{Short description|...}}` がない（部分成功）
    MissingShortDescription,
}

impl LookupErrorKind {
    /// 種別に対応するステータスヒント
    pub fn status_hint(self) -> u16 {
        match self {
            Self::UpstreamUnreachable | Self::BodyReadFailure => 400,
            Self::UpstreamRejected => policy::UPSTREAM_REJECTED_STATUS,
            Self::MalformedPayload => 500,
            Self::MissingRevisions | Self::MissingPage => 404,
            Self::MissingShortDescription => policy::PARTIAL_CONTENT_STATUS,
        }
    }
}

/// パイプラインが返す型付きエラー
///
/// `status_hint` は常に `kind` から導出されるため、フィールドは非公開とし
/// [`LookupError::new`] 経由でのみ生成する。
///
/// JSON 形状は `{"kind": "...", "code": 404, "error": "..."}`。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{kind} ({status_hint}): {message}")]
pub struct LookupError {
    kind:        LookupErrorKind,
    #[serde(rename = "code")]
    status_hint: u16,
    #[serde(rename = "error")]
    message:     String,
}

impl LookupError {
    pub fn new(kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status_hint: kind.status_hint(),
            message: message.into(),
        }
    }

    /// 上流に到達できない（400）
    pub fn upstream_unreachable(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::UpstreamUnreachable, message)
    }

    /// ボディ読み取り失敗（400）
    pub fn body_read_failure(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::BodyReadFailure, message)
    }

    /// JSON デコード失敗（500）
    ///
    /// デコーダの詳細は呼び出し側でログに残し、メッセージは固定値とする。
    pub fn malformed_payload() -> Self {
        Self::new(
            LookupErrorKind::MalformedPayload,
            "error unmarshaling wiki fetch response",
        )
    }

    /// ページまたはリビジョンが空（404）
    pub fn missing_revisions() -> Self {
        Self::new(
            LookupErrorKind::MissingRevisions,
            "Missing page revisions in json response body",
        )
    }

    /// ページが空（404）
    pub fn missing_page() -> Self {
        Self::new(
            LookupErrorKind::MissingPage,
            "Missing page in json response body",
        )
    }

    pub fn kind(&self) -> LookupErrorKind {
        self.kind
    }

    pub fn status_hint(&self) -> u16 {
        self.status_hint
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
