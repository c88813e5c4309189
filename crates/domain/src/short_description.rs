//! # 短い説明マーカーの抽出
//!
//! ウィキテキスト中の `{{Short description|<text>}}` から `<text>` を取り出す。
//! 構造化フィールドではなく自由文に対するパターンマッチのため、
//! コンパイル済みの正規表現を 1 回だけ適用する。

use std::sync::LazyLock;

use regex::Regex;

/// 非貪欲・最初の一致。`<text>` は 1 文字以上で、`}}` で終わる。
static SHORT_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{Short description\|(.+?)\}\}")
        .expect("short description pattern is a valid regex")
});

/// 本文から短い説明を取り出す
///
/// マーカーが存在しない場合は `None`。
pub fn extract_short_description(content: &str) -> Option<&str> {
    SHORT_DESCRIPTION
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
