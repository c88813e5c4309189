//! # wikinames 共有ユーティリティ
//!
//! domain / infra / lookup の各クレートから利用される共通ユーティリティ。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は feature で切り替え、最小限に抑える

pub mod observability;
