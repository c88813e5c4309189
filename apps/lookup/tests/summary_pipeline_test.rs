//! # 要約取得パイプラインの統合テスト
//!
//! 実際の上流レスポンスに近いフィクスチャを使い、公開 API 経由で
//! パイプライン全体（URL 組み立て → 取得 → 検証 → 抽出）を検証する。
//!
//! - 代表的なシナリオ（Yoshua_Bengio）で短い説明が取れる
//! - 存在しない記事は 404 に分類される
//! - 同じユースケースを並行に呼び出しても結果が混ざらない

use std::sync::Arc;

use pretty_assertions::assert_eq;
use wikinames_domain::{LookupErrorKind, Summary, lookup::LookupRequest};
use wikinames_infra::mock::ScriptedUpstreamClient;
use wikinames_lookup::{
    endpoint::{Operation, WikiEndpoints},
    usecase::SummaryUseCaseImpl,
};

const BENGIO_CONTENT: &str = include_str!("fixtures/yoshua_bengio_content.json");
const BENGIO_EXTRACT: &str = include_str!("fixtures/yoshua_bengio_extract.json");
const MISSING_PAGE: &str = include_str!("fixtures/missing_page_content.json");

fn url_for(name: &str, locale: Option<&str>, operation: Operation) -> String {
    let request = LookupRequest::new(name, locale).unwrap();
    WikiEndpoints::default().build_url(&request, operation)
}

fn usecase(client: ScriptedUpstreamClient) -> SummaryUseCaseImpl {
    SummaryUseCaseImpl::new(Arc::new(client), WikiEndpoints::default())
}

#[tokio::test]
async fn test_yoshua_bengioの短い説明を取得する() {
    let client = ScriptedUpstreamClient::new().respond(
        url_for("Yoshua_Bengio", None, Operation::Content),
        200,
        BENGIO_CONTENT,
    );
    let request = LookupRequest::new("Yoshua_Bengio", Some("en")).unwrap();

    let result = usecase(client).fetch_summary(&request).await;

    assert_eq!(result, Ok(Summary::new("Canadian computer scientist")));
}

#[tokio::test]
async fn test_yoshua_bengioの抜粋を取得する() {
    let client = ScriptedUpstreamClient::new().respond(
        url_for("Yoshua_Bengio", Some("en"), Operation::Extract),
        200,
        BENGIO_EXTRACT,
    );
    let request = LookupRequest::new("Yoshua_Bengio", None).unwrap();

    let summary = usecase(client).fetch_extract(&request).await.unwrap();

    assert!(
        summary
            .short_description
            .starts_with("Yoshua Bengio  (born March 5, 1964) is a Canadian computer scientist"),
        "{}",
        summary.short_description
    );
}

#[tokio::test]
async fn test_存在しない記事はリビジョンなしの404になる() {
    let name = "No such article xyz";
    let client = ScriptedUpstreamClient::new().respond(
        url_for(name, None, Operation::Content),
        200,
        MISSING_PAGE,
    );
    let request = LookupRequest::new(name, None).unwrap();

    let err = usecase(client).fetch_summary(&request).await.unwrap_err();

    assert_eq!(err.kind(), LookupErrorKind::MissingRevisions);
    assert_eq!(err.status_hint(), 404);
    assert_eq!(err.message(), "Missing page revisions in json response body");
}

#[tokio::test]
async fn test_エラーはjsonで呼び出し側に渡せる() {
    let client = ScriptedUpstreamClient::new().respond(
        url_for("Page", None, Operation::Content),
        403,
        "",
    );
    let request = LookupRequest::new("Page", None).unwrap();

    let err = usecase(client).fetch_summary(&request).await.unwrap_err();

    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!({
            "kind": "upstream_rejected",
            "code": 500,
            "error": "invalid response body: 403"
        })
    );
}

#[tokio::test]
async fn test_並行呼び出しで結果が混ざらない() {
    let client = ScriptedUpstreamClient::new()
        .respond(
            url_for("Yoshua_Bengio", None, Operation::Content),
            200,
            BENGIO_CONTENT,
        )
        .respond(
            url_for("Yoshua_Bengio", None, Operation::Extract),
            200,
            BENGIO_EXTRACT,
        )
        .fail_transport(url_for("Offline", None, Operation::Content), "connection refused");
    let usecase = Arc::new(usecase(client.clone()));
    let bengio = LookupRequest::new("Yoshua_Bengio", None).unwrap();
    let offline = LookupRequest::new("Offline", None).unwrap();

    let (summary, extract, failure) = tokio::join!(
        usecase.fetch_summary(&bengio),
        usecase.fetch_extract(&bengio),
        usecase.fetch_summary(&offline),
    );

    assert_eq!(summary, Ok(Summary::new("Canadian computer scientist")));
    assert!(extract.is_ok());
    let failure = failure.unwrap_err();
    assert_eq!(failure.kind(), LookupErrorKind::UpstreamUnreachable);
    assert_eq!(failure.status_hint(), 400);
    assert_eq!(client.requested_urls().len(), 3);
}
