use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Yandex Translate v1.5 JSON API
#[derive(Clone)]
pub struct YandexTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl YandexTranslator {
    pub fn new(
        api_key: String,
        api_url: String,
        timeout: Option<Duration>,
    ) -> Result<Self, TranslateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            api_url,
        })
    }
}

#[async_trait]
impl Translator for YandexTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let lang = format!("{from}-{to}");
        let params = form_params(text, &lang, &self.api_key);

        let response = self.client.post(&self.api_url).form(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "yandex response");

        parse_response(status, &body, from, to)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Yandex Translate".to_string(),
        }
    }
}

/// Form body of a `translate` request, `lang` being `"{from}-{to}"`
fn form_params<'a>(text: &'a str, lang: &'a str, key: &'a str) -> [(&'static str, &'a str); 4] {
    [
        ("format", "plain"),
        ("lang", lang),
        ("text", text),
        ("key", key),
    ]
}

#[derive(Debug, Deserialize)]
struct YandexResponse {
    code: u16,
    #[serde(default)]
    text: Vec<String>,
    #[serde(default)]
    message: Option<String>,
}

fn parse_response(
    status: StatusCode,
    body: &str,
    from: LanguageCode,
    to: LanguageCode,
) -> Result<Translation, TranslateError> {
    let result: YandexResponse = serde_json::from_str(body).map_err(|e| {
        if status.is_success() {
            TranslateError::ApiError(format!("Failed to parse response: {e}"))
        } else {
            TranslateError::ApiError(format!("HTTP {status}"))
        }
    })?;

    match result.code {
        200 => Ok(Translation {
            text: result.text.join(" "),
        }),
        401 | 402 => Err(TranslateError::AuthenticationError),
        404 => Err(TranslateError::RateLimitExceeded),
        501 => Err(TranslateError::UnsupportedLanguagePair { from, to }),
        code => Err(TranslateError::ApiError(format!(
            "code {code}: {}",
            result.message.unwrap_or_default()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(status: StatusCode, body: &str) -> Result<Translation, TranslateError> {
        parse_response(status, body, "en".to_string(), "vi".to_string())
    }

    #[test]
    fn test_fragments_are_joined_with_space() {
        let translation = parse(
            StatusCode::OK,
            r#"{"code":200,"lang":"en-vi","text":["con","mèo"]}"#,
        )
        .unwrap();

        assert_eq!(translation.text, "con mèo");
    }

    #[test]
    fn test_form_params_order_and_values() {
        assert_eq!(
            form_params("cat", "en-vi", "k"),
            [
                ("format", "plain"),
                ("lang", "en-vi"),
                ("text", "cat"),
                ("key", "k"),
            ]
        );
    }

    #[test]
    fn test_form_params_keep_text_verbatim() {
        let params = form_params("ice cream & co", "en-vi", "trnsl.1.1");
        assert_eq!(params[2], ("text", "ice cream & co"));
        assert_eq!(params[3], ("key", "trnsl.1.1"));
    }

    #[test]
    fn test_missing_text_gives_empty_translation() {
        let translation = parse(StatusCode::OK, r#"{"code":200,"lang":"en-vi"}"#).unwrap();
        assert!(translation.text.is_empty());
    }

    #[test]
    fn test_invalid_key() {
        let err = parse(
            StatusCode::FORBIDDEN,
            r#"{"code":401,"message":"API key is invalid"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TranslateError::AuthenticationError));
    }

    #[test]
    fn test_daily_limit() {
        let err = parse(
            StatusCode::FORBIDDEN,
            r#"{"code":404,"message":"Exceeded the daily limit"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TranslateError::RateLimitExceeded));
    }

    #[test]
    fn test_unsupported_direction() {
        let err = parse(
            StatusCode::BAD_REQUEST,
            r#"{"code":501,"message":"The specified translation direction is not supported"}"#,
        )
        .unwrap_err();
        match err {
            TranslateError::UnsupportedLanguagePair { from, to } => {
                assert_eq!(from, "en");
                assert_eq!(to, "vi");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_other_codes_keep_message() {
        let err = parse(
            StatusCode::PAYLOAD_TOO_LARGE,
            r#"{"code":413,"message":"Exceeded the maximum text size"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "API error: code 413: Exceeded the maximum text size"
        );
    }

    #[test]
    fn test_non_json_error_page_reports_status() {
        let err = parse(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "API error: HTTP 502 Bad Gateway");
    }

    #[test]
    fn test_non_json_success_is_a_parse_error() {
        let err = parse(StatusCode::OK, "not json").unwrap_err();
        assert!(err.to_string().starts_with("API error: Failed to parse response"));
    }

    #[tokio::test]
    async fn test_empty_key_fails_without_request() {
        let translator =
            YandexTranslator::new(String::new(), "http://127.0.0.1:1".to_string(), None).unwrap();

        let err = translator
            .translate("cat", "en".to_string(), "vi".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::AuthenticationError));
    }
}
