//! # 上流通信エラー定義
//!
//! 上流 API との通信で発生するトランスポートレベルのエラーを表現する。
//! ステータスコードは扱わない（パイプラインの責務）。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`UpstreamError`]: エラー種別（[`UpstreamErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`UpstreamErrorKind`]: 送信失敗かボディ読み取り失敗か
//!
//! convenience constructor でエラーを生成すると、その時点のスパン情報
//! （`fetch_summary` など）が自動的にキャプチャされる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// 上流通信で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct UpstreamError {
    kind:       UpstreamErrorKind,
    span_trace: SpanTrace,
}

/// 上流通信エラーの種別
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamErrorKind {
    /// レスポンスヘッダーを受け取る前の失敗
    ///
    /// DNS 解決、接続、TLS ハンドシェイク、送信中の接続リセットなど。
    #[error("上流への送信に失敗しました: {0}")]
    Transport(String),

    /// ボディ読み取りの失敗
    ///
    /// ヘッダーは受信したが、ボディのストリームが途中で切れた場合など。
    #[error("レスポンスボディの読み取りに失敗しました: {0}")]
    BodyRead(String),
}

impl UpstreamError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &UpstreamErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 種別に付随するメッセージ（元になったエラーの文字列表現）
    pub fn detail(&self) -> &str {
        match &self.kind {
            UpstreamErrorKind::Transport(msg) | UpstreamErrorKind::BodyRead(msg) => msg,
        }
    }

    /// 送信失敗エラーを生成する
    pub fn transport(msg: impl Into<String>) -> Self {
        Self {
            kind:       UpstreamErrorKind::Transport(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// ボディ読み取り失敗エラーを生成する
    pub fn body_read(msg: impl Into<String>) -> Self {
        Self {
            kind:       UpstreamErrorKind::BodyRead(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for UpstreamError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_transportでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_fetch", name = "Yoshua_Bengio");
            let _enter = span.enter();

            let err = UpstreamError::transport("dns error");

            assert_eq!(
                err.kind(),
                &UpstreamErrorKind::Transport("dns error".to_string())
            );
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_fetch"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_body_readでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_drain");
            let _enter = span.enter();

            let err = UpstreamError::body_read("connection reset");

            assert_eq!(
                err.kind(),
                &UpstreamErrorKind::BodyRead("connection reset".to_string())
            );
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_drain"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_displayは種別のメッセージを返す() {
        let err = UpstreamError::transport("dns error");

        assert_eq!(err.to_string(), "上流への送信に失敗しました: dns error");
        assert_eq!(err.detail(), "dns error");
    }

    #[test]
    fn test_debugに種別とspan_traceが含まれる() {
        let err = UpstreamError::body_read("eof");

        let debug = format!("{err:?}");

        assert!(debug.contains("BodyRead"), "{debug}");
        assert!(debug.contains("span_trace"), "{debug}");
    }
}
