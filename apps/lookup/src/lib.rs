//! # wikinames lookup
//!
//! 百科事典 API から記事の短い説明を取り出すパイプライン。
//!
//! ## モジュール構成
//!
//! - `config`: 環境変数からの設定読み込み（エントリポイント用）
//! - `endpoint`: 操作ごとの上流 URL の組み立て
//! - `usecase`: fetch → validate → extract → classify のパイプライン
//!
//! ルーティング、レスポンスキャッシュ、サーバーのライフサイクルはこのクレートの外側にあり、
//! [`usecase::SummaryUseCaseImpl`] の `fetch_summary` / `fetch_extract` を呼び出すだけとする。

pub mod config;
pub mod endpoint;
pub mod usecase;
