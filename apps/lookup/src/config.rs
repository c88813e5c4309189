//! # lookup 設定
//!
//! 環境変数からエントリポイントの設定を読み込む。
//! パイプライン本体は環境変数に依存せず、ここで組み立てた値を注入される。

use std::env;

use crate::endpoint::DEFAULT_API_HOST;

/// lookup の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// API ホスト（`WIKI_API_HOST`、既定: `wikipedia.org`）
    pub api_host:   String,
    /// 上流に送る User-Agent（`WIKI_USER_AGENT`、既定: `wikinames/<version>`）
    pub user_agent: String,
}

impl LookupConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// 値の取得方法を差し替えて読み込む
    ///
    /// 空文字列は未設定として扱う。
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        Self {
            api_host:   non_empty("WIKI_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            user_agent: non_empty("WIKI_USER_AGENT").unwrap_or_else(default_user_agent),
        }
    }
}

fn default_user_agent() -> String {
    format!("wikinames/{}", env!("CARGO_PKG_VERSION"))
}
