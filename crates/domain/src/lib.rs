//! # wikinames ドメイン層
//!
//! 百科事典 API から記事の要約を取り出すためのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! lookup → infra → domain
//! ```
//!
//! ドメイン層は HTTP クライアントや環境変数に一切依存しない。
//! 上流レスポンスの解釈（エンベロープのデコード、短い説明の抽出、
//! エラー分類のポリシー）はすべてここに置き、純粋関数としてテストする。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン値の生成時に発生するエラー
//! - [`lookup`] - 検索リクエスト（記事名・ロケール）
//! - [`envelope`] - 上流 JSON のエンベロープ型
//! - [`summary`] - 成功時の出力
//! - [`lookup_error`] - パイプラインが返す型付きエラー
//! - [`policy`] - 暫定的なエラー分類ポリシー
//! - [`short_description`] - `{{Short description|...}}` マーカーの抽出
//!
//! ## 使用例
//!
//! ```rust
//! use wikinames_domain::{lookup::LookupRequest, short_description::extract_short_description};
//!
//! let request = LookupRequest::new("Yoshua_Bengio", None).unwrap();
//! assert_eq!(request.locale().as_str(), "en");
//!
//! let found = extract_short_description("{{Short description|Canadian computer scientist}}");
//! assert_eq!(found, Some("Canadian computer scientist"));
//! ```

#[macro_use]
mod macros;

pub mod envelope;
pub mod error;
pub mod lookup;
pub mod lookup_error;
pub mod policy;
pub mod short_description;
pub mod summary;

pub use error::DomainError;
pub use lookup_error::{LookupError, LookupErrorKind};
pub use summary::Summary;
