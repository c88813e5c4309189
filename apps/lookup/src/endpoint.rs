//! # 上流エンドポイント
//!
//! 操作ごとの URL テンプレートにリクエストの値を埋め込む純粋関数。
//!
//! | 操作 | サブドメイン | 取得するもの |
//! |------|-------------|-------------|
//! | `Content` | `en` 固定 | 最新リビジョンの生ウィキテキスト |
//! | `Extract` | リクエストのロケール | 冒頭 2 文のプレーンテキスト抜粋 |
//!
//! `exsentences` は略語のピリオドも文末として数えるため、
//! 抜粋が途中で切れることがある（上流の既知の制約）。

use wikinames_domain::lookup::LookupRequest;

/// 既定の API ホスト（ロケールのサブドメインを除いた部分）
pub const DEFAULT_API_HOST: &str = "wikipedia.org";

/// 上流 API の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `prop=revisions`（`summary` 系で使用）
    Content,
    /// `prop=extracts`（`extract` 系で使用）
    Extract,
}

/// 上流エンドポイントの組み立て
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiEndpoints {
    host: String,
}

impl Default for WikiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST)
    }
}

impl WikiEndpoints {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// 操作に対応する URL を組み立てる
    ///
    /// 記事名とロケールは URL エンコードして埋め込む。
    /// 記事名はどちらのテンプレートでも `titles` パラメータとして 1 回だけ現れる。
    pub fn build_url(&self, request: &LookupRequest, operation: Operation) -> String {
        let name = urlencoding::encode(request.name().as_str());
        match operation {
            Operation::Content => format!(
                "https://en.{}/w/api.php?action=query&prop=revisions&titles={}&rvlimit=1&formatversion=2&format=json&rvprop=content",
                self.host, name
            ),
            Operation::Extract => format!(
                "https://{}.{}/w/api.php?action=query&format=json&prop=extracts&titles={}&formatversion=2&exsentences=2&exlimit=1&explaintext=1",
                urlencoding::encode(request.locale().as_str()),
                self.host,
                name
            ),
        }
    }
}
