use serde_json::Value;

use crate::upstream::UpstreamError;

/// Raw feed entries. The feed is either a bare array or `{"data": [...]}`.
pub fn parse_feed(body: &str) -> Result<Vec<Value>, UpstreamError> {
    match serde_json::from_str(body)? {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(UpstreamError::UnexpectedShape),
        },
        _ => Err(UpstreamError::UnexpectedShape),
    }
}

pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<Vec<Value>, UpstreamError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    parse_feed(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array() {
        let entries = parse_feed("[[1.0, 2.0, 3.0], \"bad\"]").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn wrapped_in_data() {
        let entries = parse_feed(r#"{"data": [[1.0, 2.0, 3.0]], "generated": 0}"#).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn other_shapes_are_rejected() {
        assert!(matches!(parse_feed(r#"{"items": []}"#), Err(UpstreamError::UnexpectedShape)));
        assert!(matches!(parse_feed(r#"{"data": 3}"#), Err(UpstreamError::UnexpectedShape)));
        assert!(matches!(parse_feed("42"), Err(UpstreamError::UnexpectedShape)));
        assert!(matches!(parse_feed("[1, 2"), Err(UpstreamError::Json(_))));
    }
}
