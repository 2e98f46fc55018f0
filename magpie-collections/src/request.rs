//! Shared GraphQL request construction.

use serde_json::Value;
use url::Url;

use magpie_fetch::{ApiRequest, FetchError, PageParams};

use crate::operations::{feature_switches, GRAPHQL_BASE};

/// Builds a GraphQL GET request for one candidate query id.
///
/// The URL shape is `{base}/{queryId}/{operation}` with url-encoded
/// `variables` and `features` JSON query parameters.
pub fn graphql_get(
    query_id: &str,
    operation: &str,
    variables: &Value,
) -> Result<ApiRequest, FetchError> {
    let url_text = format!("{GRAPHQL_BASE}/{query_id}/{operation}");
    let mut url = Url::parse(&url_text)
        .map_err(|e| FetchError::Provider(format!("Invalid request URL {url_text}: {e}")))?;

    url.query_pairs_mut()
        .append_pair("variables", &variables.to_string())
        .append_pair("features", &feature_switches().to_string());

    Ok(ApiRequest::get(url))
}

/// Merges pagination parameters into an operation's base variables.
///
/// `count` and `cursor` are attached only when present; some server
/// variants reject an explicit count, and the page fetcher strips it by
/// re-entering here with `count: None`.
pub fn page_variables(base: &Value, params: &PageParams) -> Value {
    let mut variables = base.as_object().cloned().unwrap_or_default();
    if let Some(count) = params.count {
        variables.insert("count".to_string(), Value::from(count));
    }
    if let Some(cursor) = &params.cursor {
        variables.insert("cursor".to_string(), Value::from(cursor.as_str()));
    }
    Value::Object(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_shape() {
        let variables = json!({"count": 20});
        let request = graphql_get("qid123", "Bookmarks", &variables).unwrap();

        assert!(request
            .url
            .as_str()
            .starts_with("https://x.com/i/api/graphql/qid123/Bookmarks?"));
        let query = request.url.query().unwrap();
        assert!(query.contains("variables="));
        assert!(query.contains("features="));
    }

    #[test]
    fn test_page_variables_attach_only_present_params() {
        let base = json!({"includePromotedContent": false});

        let with_both = page_variables(
            &base,
            &PageParams {
                count: Some(20),
                cursor: Some("c1".to_string()),
            },
        );
        assert_eq!(with_both["count"], 20);
        assert_eq!(with_both["cursor"], "c1");

        let bare = page_variables(&base, &PageParams::default());
        assert!(bare.get("count").is_none());
        assert!(bare.get("cursor").is_none());
        assert_eq!(bare["includePromotedContent"], false);
    }
}
