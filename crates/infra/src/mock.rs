//! # テスト用スクリプト化クライアント
//!
//! URL ごとにあらかじめ決めた結果を返す [`UpstreamClient`] のダブル。
//! ネットワークなしでパイプラインをテストするために使う。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! wikinames-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    error::UpstreamError,
    upstream::{UpstreamClient, UpstreamResponse},
};

/// スクリプト化された 1 回分の結果
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// ステータスとボディを返す
    Respond { status: u16, body: Bytes },
    /// 送信失敗
    TransportFailure(String),
    /// ボディ読み取り失敗
    BodyReadFailure(String),
}

/// URL ごとに結果を返すクライアント
///
/// 未登録の URL には送信失敗を返す。呼び出された URL は順に記録される。
#[derive(Clone, Default)]
pub struct ScriptedUpstreamClient {
    outcomes:  Arc<Mutex<HashMap<String, ScriptedOutcome>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl ScriptedUpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// `url` に対してステータスとボディを返すよう登録する
    pub fn respond(self, url: impl Into<String>, status: u16, body: impl Into<Bytes>) -> Self {
        self.script(
            url,
            ScriptedOutcome::Respond {
                status,
                body: body.into(),
            },
        )
    }

    /// `url` に対して送信失敗を返すよう登録する
    pub fn fail_transport(self, url: impl Into<String>, msg: impl Into<String>) -> Self {
        self.script(url, ScriptedOutcome::TransportFailure(msg.into()))
    }

    /// `url` に対してボディ読み取り失敗を返すよう登録する
    pub fn fail_body_read(self, url: impl Into<String>, msg: impl Into<String>) -> Self {
        self.script(url, ScriptedOutcome::BodyReadFailure(msg.into()))
    }

    pub fn script(self, url: impl Into<String>, outcome: ScriptedOutcome) -> Self {
        self.outcomes.lock().unwrap().insert(url.into(), outcome);
        self
    }

    /// これまでに呼び出された URL
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for ScriptedUpstreamClient {
    async fn get(&self, url: &str) -> Result<UpstreamResponse, UpstreamError> {
        self.requested.lock().unwrap().push(url.to_string());

        let outcome = self.outcomes.lock().unwrap().get(url).cloned();
        match outcome {
            Some(ScriptedOutcome::Respond { status, body }) => Ok(UpstreamResponse { status, body }),
            Some(ScriptedOutcome::TransportFailure(msg)) => Err(UpstreamError::transport(msg)),
            Some(ScriptedOutcome::BodyReadFailure(msg)) => Err(UpstreamError::body_read(msg)),
            None => Err(UpstreamError::transport(format!(
                "no scripted response for {url}"
            ))),
        }
    }
}
