//! # 検索リクエスト
//!
//! ルーティング層がパスパラメータ（`:name`, `:locale`）から組み立て、
//! パイプラインへ渡す入力値。リクエストごとに生成し、変更しない。

use serde::{Deserialize, Serialize};

/// ロケール未指定時に使う言語サブドメイン
pub const DEFAULT_LOCALE: &str = "en";

define_validated_string! {
    /// 記事名（値オブジェクト）
    ///
    /// MediaWiki のタイトル上限に合わせ、255 文字以内。
    /// URL エンコードは URL 組み立て時に行うため、ここでは生の値を保持する。
    pub struct ArticleName {
        label: "記事名",
        max_length: 255,
    }
}

define_validated_string! {
    /// ロケール（言語サブドメイン、例: `en`, `ja`, `zh-min-nan`）
    pub struct Locale {
        label: "ロケール",
        max_length: 32,
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

/// 検索リクエスト
///
/// デシリアライズ時も各フィールドは `new()` と同じ検証を通る。
/// `locale` が欠けている場合は [`DEFAULT_LOCALE`] になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    name:   ArticleName,
    #[serde(default)]
    locale: Locale,
}

impl LookupRequest {
    /// 記事名とロケールからリクエストを作成する
    ///
    /// `locale` が `None` の場合は [`DEFAULT_LOCALE`] を使う。
    /// `Some("")` のように明示的に空を渡した場合はバリデーションエラーになる。
    pub fn new(
        name: impl Into<String>,
        locale: Option<&str>,
    ) -> Result<Self, crate::DomainError> {
        let name = ArticleName::new(name)?;
        let locale = match locale {
            Some(value) => Locale::new(value)?,
            None => Locale::default(),
        };
        Ok(Self { name, locale })
    }

    pub fn name(&self) -> &ArticleName {
        &self.name
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::DomainError;

    #[test]
    fn test_ロケール未指定でenになる() {
        let request = LookupRequest::new("Yoshua_Bengio", None).unwrap();

        assert_eq!(request.name().as_str(), "Yoshua_Bengio");
        assert_eq!(request.locale().as_str(), "en");
    }

    #[test]
    fn test_ロケール指定でその値を保持する() {
        let request = LookupRequest::new("東京", Some("ja")).unwrap();

        assert_eq!(request.name().as_str(), "東京");
        assert_eq!(request.locale().as_str(), "ja");
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("   ", "空白のみ")]
    #[case("\t\n", "制御文字の空白のみ")]
    fn test_記事名が空ならバリデーションエラー(
        #[case] name: &str,
        #[case] _description: &str,
    ) {
        let result = LookupRequest::new(name, None);

        assert_eq!(
            result,
            Err(DomainError::Validation("記事名は必須です".to_string()))
        );
    }

    #[test]
    fn test_明示的な空ロケールはバリデーションエラー() {
        let result = LookupRequest::new("Rust", Some(" "));

        assert_eq!(
            result,
            Err(DomainError::Validation("ロケールは必須です".to_string()))
        );
    }

    #[test]
    fn test_記事名は255文字以内を受け入れる() {
        assert!(ArticleName::new("a".repeat(255)).is_ok());
    }

    #[test]
    fn test_記事名は255文字超を拒否する() {
        assert!(ArticleName::new("a".repeat(256)).is_err());
    }

    #[test]
    fn test_記事名は前後の空白をトリミングする() {
        let name = ArticleName::new("  Alan Turing  ").unwrap();

        assert_eq!(name.as_str(), "Alan Turing");
        assert_eq!(name.to_string(), "Alan Turing");
    }

    #[rstest]
    #[case(r#"{"name": "", "locale": "en"}"#, "記事名は必須です")]
    #[case(r#"{"name": "   ", "locale": "en"}"#, "記事名は必須です")]
    #[case(r#"{"name": "Rust", "locale": ""}"#, "ロケールは必須です")]
    #[case(r#"{"name": "Rust", "locale": " \t"}"#, "ロケールは必須です")]
    fn test_jsonからの復元でも空の値を拒否する(#[case] json: &str, #[case] message: &str) {
        let err = serde_json::from_str::<LookupRequest>(json).unwrap_err();

        assert!(err.to_string().contains(message), "{err}");
    }

    #[test]
    fn test_jsonからの復元で長すぎる記事名を拒否する() {
        let json = format!(r#"{{"name": "{}"}}"#, "a".repeat(256));

        assert!(serde_json::from_str::<LookupRequest>(&json).is_err());
    }

    #[test]
    fn test_jsonからの復元でトリミングとロケール既定値を適用する() {
        let request: LookupRequest =
            serde_json::from_str(r#"{"name": "  Yoshua_Bengio "}"#).unwrap();

        assert_eq!(request, LookupRequest::new("Yoshua_Bengio", None).unwrap());
    }
}
