//! # wikinames CLI
//!
//! 要約取得パイプラインを 1 回だけ実行する薄いエントリポイント。
//! ルーティング層の代わりに引数を [`LookupRequest`] に変換し、結果を JSON で出力する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `WIKI_API_HOST` | No | API ホスト（デフォルト: `wikipedia.org`） |
//! | `WIKI_USER_AGENT` | No | User-Agent（デフォルト: `wikinames/<version>`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,wikinames=debug`） |
//!
//! ## 使い方
//!
//! ```bash
//! cargo run -p wikinames-lookup -- summary Yoshua_Bengio
//! cargo run -p wikinames-lookup -- extract 東京 ja
//! ```
//!
//! 成功時は `{"short_description": "..."}` を stdout に出力して終了コード 0、
//! 失敗時は `{"kind": "...", "code": 404, "error": "..."}` を stdout に出力して終了コード 1。
//! ログは stderr に出力する。

use std::{process::ExitCode, sync::Arc};

use clap::{Parser, Subcommand};
use wikinames_domain::lookup::LookupRequest;
use wikinames_infra::ReqwestUpstreamClient;
use wikinames_lookup::{config::LookupConfig, endpoint::WikiEndpoints, usecase::SummaryUseCaseImpl};
use wikinames_shared::observability::{TracingConfig, init_tracing};

#[derive(Debug, Parser)]
#[command(name = "wikinames", version, about = "Wikipedia の記事から短い説明を取り出す")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 本文の Short description を取得する（英語版のみ）
    Summary {
        /// 記事名（例: `Yoshua_Bengio`）
        name: String,
    },
    /// 記事冒頭のプレーンテキスト抜粋を取得する
    Extract {
        /// 記事名
        name:   String,
        /// ロケール（省略時は `en`）
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("wikinames");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    let cli = Cli::parse();
    let config = LookupConfig::from_env();

    let upstream = Arc::new(ReqwestUpstreamClient::new(&config.user_agent)?);
    let usecase = SummaryUseCaseImpl::new(upstream, WikiEndpoints::new(config.api_host));

    let result = match cli.command {
        Command::Summary { name } => {
            let request = LookupRequest::new(name, None)?;
            usecase.fetch_summary(&request).await
        }
        Command::Extract { name, locale } => {
            let request = LookupRequest::new(name, locale.as_deref())?;
            usecase.fetch_extract(&request).await
        }
    };

    match result {
        Ok(summary) => {
            println!("{}", serde_json::to_string(&summary)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::info!(kind = %err.kind(), status_hint = err.status_hint(), "要約を取得できませんでした");
            println!("{}", serde_json::to_string(&err)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
