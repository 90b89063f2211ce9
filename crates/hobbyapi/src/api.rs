use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::models::ApiResponse;
use crate::types::ChallengeClient;
use crate::utils::is_http_url;

/// Performs the GET, reads the whole body and decodes it.
///
/// The HTTP client and connection are dropped before returning on every
/// path. A non-success status is reported as a network error since no
/// usable body was produced.
pub async fn fetch_challenge(client: &ChallengeClient) -> Result<ApiResponse, ApiError> {
    let url = parse_endpoint(client.endpoint())?;
    debug!(%url, user_agent = client.user_agent(), "requesting challenge");

    let http_client = Client::builder().user_agent(client.user_agent()).build()?;
    let response_text = http_client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    debug!(bytes = response_text.len(), "challenge body received");

    parse_response(&response_text)
}

pub fn parse_response(body: &str) -> Result<ApiResponse, ApiError> {
    let value: Value = serde_json::from_str(body)?;

    if !value.is_object() {
        return Err(ApiError::Parse(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }

    let response: ApiResponse = serde_json::from_value(value)?;
    info!(
        hobbies = response.hobbies.len(),
        has_token = response.challenge_token.is_some(),
        "challenge decoded"
    );

    Ok(response)
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ApiError> {
    if !is_http_url(endpoint) {
        return Err(ApiError::url_format(
            endpoint,
            "expected an http:// or https:// URL",
        ));
    }

    Url::parse(endpoint).map_err(|err| ApiError::url_format(endpoint, err))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hobbies_and_token() {
        let response =
            parse_response(r#"{"hobbies":["reading","chess"],"challengeToken":"abc123"}"#)
                .unwrap();

        assert_eq!(response.hobbies, vec!["reading", "chess"]);
        assert_eq!(response.challenge_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn rejects_top_level_array() {
        // serde would happily read a struct out of a sequence
        let err = parse_response(r#"[["reading"], "abc"]"#).unwrap_err();
        match err {
            ApiError::Parse(reason) => assert!(reason.contains("an array")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_hobbies() {
        let err = parse_response(r#"{"challengeToken":"abc"}"#).unwrap_err();
        match err {
            ApiError::Parse(reason) => assert!(reason.contains("hobbies")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_hobbies_of_wrong_type() {
        assert!(matches!(
            parse_response(r#"{"hobbies":"chess"}"#),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn rejects_non_string_token() {
        assert!(matches!(
            parse_response(r#"{"hobbies":[],"challengeToken":42}"#),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn endpoint_must_be_http() {
        assert!(matches!(
            parse_endpoint("ftp://coderbyte.com/file"),
            Err(ApiError::UrlFormat { .. })
        ));
        assert!(matches!(
            parse_endpoint("http://"),
            Err(ApiError::UrlFormat { .. })
        ));
        assert!(parse_endpoint("https://coderbyte.com/api/challenges/json/rest-get-simple").is_ok());
    }
}
