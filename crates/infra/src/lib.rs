//! # wikinames インフラ層
//!
//! 上流の百科事典 API への HTTP 通信を担当する。
//!
//! ## モジュール構成
//!
//! - [`error`] - 通信レベルのエラー（SpanTrace 付き）
//! - [`upstream`] - 上流クライアントのトレイトと reqwest 実装
//! - `mock` - テスト用のスクリプト化クライアント（`test-utils` feature）
//!
//! ## 設計方針
//!
//! - クライアントは GET を 1 回発行し、ステータスとボディのバイト列を返すだけ
//! - ステータスコードの解釈は呼び出し側（パイプライン）の責務
//! - ボディは常にクライアント内で最後まで読み切り、接続を解放する

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod upstream;

pub use error::{UpstreamError, UpstreamErrorKind};
pub use upstream::{ReqwestUpstreamClient, UpstreamClient, UpstreamResponse};
