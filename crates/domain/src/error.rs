//! # ドメイン層エラー定義
//!
//! ドメイン値（記事名・ロケール）の生成時に発生するエラー型。
//!
//! パイプライン実行中のエラーは [`LookupError`](crate::LookupError) で表現し、
//! こちらは入力の組み立て段階（ルーティング層がパスパラメータを
//! [`LookupRequest`](crate::lookup::LookupRequest) に変換する段階）でのみ使う。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// - 必須フィールドが未入力（空文字列・空白のみ）
    /// - 文字数制限の超過
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
