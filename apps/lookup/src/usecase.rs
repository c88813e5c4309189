//! # ユースケース層
//!
//! 上流クライアントを注入して使うパイプラインを提供する。

pub mod summary;

pub use summary::SummaryUseCaseImpl;
