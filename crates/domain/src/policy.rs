//! # エラー分類ポリシー（暫定）
//!
//! 以下の 2 つはプロダクト判断として意図的に採用している挙動で、見直し対象。
//! パイプラインの骨格に手を入れずに差し替えられるよう、ここに集約する。
//!
//! 1. 上流の 2xx 以外のステータスをすべて 500 に正規化する。
//!    403 と 400 を区別しない（上流のエラー形式は予告なく変わりうるため）。
//! 2. 本文に `{{Short description|...}}` がない場合、206 とともに
//!    本文全体をエラーメッセージとして返す。下流はそれでも何かを表示できる。
//!    マーカーの表記は言語ごとに翻訳されていないため、英語以外の記事では
//!    ほぼ常にこちらに落ちる。多言語の要約は extract 操作で代替する。

use crate::{LookupError, LookupErrorKind};

/// 上流が 2xx 以外を返したときのステータスヒント
pub const UPSTREAM_REJECTED_STATUS: u16 = 500;

/// 短い説明が見つからなかったときのステータスヒント（Partial Content）
pub const PARTIAL_CONTENT_STATUS: u16 = 206;

/// 上流ステータスを検証する
///
/// 299 を超えるステータスはコードに関わらず [`LookupErrorKind::UpstreamRejected`] になる。
/// メッセージにはステータスコードをそのまま含める。
pub fn check_upstream_status(status: u16) -> Result<(), LookupError> {
    if status > 299 {
        return Err(LookupError::new(
            LookupErrorKind::UpstreamRejected,
            format!("invalid response body: {status}"),
        ));
    }
    Ok(())
}

/// マーカーが見つからなかったときのフォールバック
///
/// 本文を加工せずそのままメッセージに載せる。
pub fn missing_short_description(content: impl Into<String>) -> LookupError {
    LookupError::new(LookupErrorKind::MissingShortDescription, content)
}
