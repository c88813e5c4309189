//! # 上流クライアント
//!
//! 完成済みの絶対 URL に GET を 1 回発行し、ステータスとボディを返す。
//!
//! - リトライしない。タイムアウトはトランスポートの既定値に従う
//! - ボディはクライアント内で最後まで読み切る。呼び出し側が後段の検証や
//!   デコードで失敗しても接続が残らない
//! - ステータスコードは解釈しない

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::UpstreamError;

/// 上流レスポンス（読み切り済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body:   Bytes,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// 上流クライアントトレイト
///
/// テスト時にスクリプト化したダブルへ差し替えられるようトレイトで定義。
/// 実装はステートレスで、並行に呼び出してよい。
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// `url` に GET を発行し、ボディを読み切って返す
    ///
    /// # エラー
    ///
    /// - 送信失敗: [`UpstreamErrorKind::Transport`](crate::UpstreamErrorKind::Transport)
    /// - ボディ読み取り失敗: [`UpstreamErrorKind::BodyRead`](crate::UpstreamErrorKind::BodyRead)
    async fn get(&self, url: &str) -> Result<UpstreamResponse, UpstreamError>;
}

/// reqwest による上流クライアント実装
#[derive(Debug, Clone)]
pub struct ReqwestUpstreamClient {
    client: reqwest::Client,
}

impl ReqwestUpstreamClient {
    /// 新しいクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `user_agent`: 送信する User-Agent（Wikimedia API は識別可能な値を求める）
    pub fn new(user_agent: &str) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| UpstreamError::transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for ReqwestUpstreamClient {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::transport(e.to_string()))?;

        drain(response).await
    }
}

/// レスポンスのボディを最後まで読み、ステータスと合わせて返す
async fn drain(response: reqwest::Response) -> Result<UpstreamResponse, UpstreamError> {
    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| UpstreamError::body_read(e.to_string()))?;

    tracing::debug!(status, body_len = body.len(), "上流レスポンスを受信しました");

    Ok(UpstreamResponse { status, body })
}
