//! # 要約取得ユースケース
//!
//! 上流 API の JSON（または上流の失敗）を、要約文字列か型付きエラーのどちらかに変換する。
//!
//! ```text
//! fetch_summary ─┐
//!                ├─ fetch_content ─┐
//! fetch_extract ─┴─────────────────┴─ fetch_envelope
//!                                       1. 上流 GET（送信失敗 → 400）
//!                                       2. ボディ読み切り（失敗 → 400）
//!                                       3. ステータス検証（299 超 → 500）
//!                                       4. JSON デコード（失敗 → 500）
//! ```
//!
//! 各リクエストは独立しており、共有する可変状態はない。
//! リトライは行わず、1 回の上流失敗は 1 つの型付きエラーになる。

use std::sync::Arc;

use serde::de::DeserializeOwned;
use wikinames_domain::{
    LookupError,
    Summary,
    envelope::{ContentEnvelope, ExtractEnvelope},
    lookup::LookupRequest,
    policy,
    short_description::extract_short_description,
};
use wikinames_infra::{UpstreamClient, UpstreamError, UpstreamErrorKind};

use crate::endpoint::{Operation, WikiEndpoints};

/// 要約取得ユースケース
pub struct SummaryUseCaseImpl {
    upstream:  Arc<dyn UpstreamClient>,
    endpoints: WikiEndpoints,
}

impl SummaryUseCaseImpl {
    pub fn new(upstream: Arc<dyn UpstreamClient>, endpoints: WikiEndpoints) -> Self {
        Self {
            upstream,
            endpoints,
        }
    }

    /// 最新リビジョンの本文を含むエンベロープを取得する
    ///
    /// 構造の検証（ページやリビジョンの有無）は行わない。
    #[tracing::instrument(skip_all, fields(name = %request.name()))]
    pub async fn fetch_content(
        &self,
        request: &LookupRequest,
    ) -> Result<ContentEnvelope, LookupError> {
        let url = self.endpoints.build_url(request, Operation::Content);
        self.fetch_envelope(&url).await
    }

    /// 本文の `{{Short description|...}}` から短い説明を取得する
    ///
    /// 1. `fetch_content` のエラーはそのまま返す
    /// 2. ページまたはリビジョンが空なら `MissingRevisions`（404）
    /// 3. マーカーがなければ本文全体を載せた `MissingShortDescription`（206）
    #[tracing::instrument(skip_all, fields(name = %request.name()))]
    pub async fn fetch_summary(&self, request: &LookupRequest) -> Result<Summary, LookupError> {
        let envelope = self.fetch_content(request).await?;

        let Some(revision) = envelope.first_revision() else {
            tracing::warn!(
                error.category = "upstream_payload",
                error.kind = "missing_revisions",
                "レスポンスにページのリビジョンがありません"
            );
            return Err(LookupError::missing_revisions());
        };

        match extract_short_description(&revision.content) {
            Some(text) => Ok(Summary::new(text)),
            None => {
                tracing::warn!(
                    error.category = "upstream_payload",
                    error.kind = "missing_short_description",
                    content_len = revision.content.len(),
                    "本文に Short description がないため本文全体を返します"
                );
                Err(policy::missing_short_description(revision.content.as_str()))
            }
        }
    }

    /// 記事冒頭のプレーンテキスト抜粋を取得する
    ///
    /// ページが空なら `MissingPage`（404）。抜粋は加工せずにそのまま返す。
    #[tracing::instrument(skip_all, fields(name = %request.name(), locale = %request.locale()))]
    pub async fn fetch_extract(&self, request: &LookupRequest) -> Result<Summary, LookupError> {
        let url = self.endpoints.build_url(request, Operation::Extract);
        let envelope: ExtractEnvelope = self.fetch_envelope(&url).await?;

        let Some(page) = envelope.first_page() else {
            tracing::warn!(
                error.category = "upstream_payload",
                error.kind = "missing_page",
                "レスポンスにページがありません"
            );
            return Err(LookupError::missing_page());
        };

        Ok(Summary::new(page.extract.clone().unwrap_or_default()))
    }

    /// 上流を呼び出し、ステータスを検証してエンベロープにデコードする
    async fn fetch_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let response = self
            .upstream
            .get(url)
            .await
            .map_err(classify_upstream_error)?;

        if let Err(err) = policy::check_upstream_status(response.status) {
            tracing::error!(
                error.category = "external_service",
                error.kind = "upstream_rejected",
                status = response.status,
                "上流がエラーステータスを返しました"
            );
            return Err(err);
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::error!(
                error.category = "external_service",
                error.kind = "malformed_payload",
                "上流レスポンスの JSON デコードに失敗しました: {}",
                e
            );
            LookupError::malformed_payload()
        })
    }
}

/// 上流通信エラーを型付きエラーに変換する
fn classify_upstream_error(err: UpstreamError) -> LookupError {
    tracing::error!(
        error.category = "external_service",
        error.kind = "upstream_transport",
        span_trace = %err.span_trace(),
        "上流との通信に失敗しました: {}",
        err
    );
    match err.kind() {
        UpstreamErrorKind::Transport(_) => LookupError::upstream_unreachable(err.detail()),
        UpstreamErrorKind::BodyRead(_) => LookupError::body_read_failure(err.detail()),
    }
}
