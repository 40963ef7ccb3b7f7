use super::common::{is_false, null_as_default, null_values_as_default};
use super::Operator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One search hit. The record layout differs per category and source,
/// so hits are kept as raw JSON objects.
pub type SearchRecord = Map<String, Value>;

/// Request body for `/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Terms to search for
    pub terms: Vec<String>,

    /// Record types to search (email, username, password, domain, ...)
    pub types: Vec<String>,

    /// Source to search; empty searches all sources
    #[serde(default)]
    pub source: String,

    /// Treat terms as wildcard patterns
    #[serde(default, skip_serializing_if = "is_false")]
    pub wildcard: bool,

    /// Treat terms as regular expressions
    #[serde(default, skip_serializing_if = "is_false")]
    pub regex: bool,

    /// Operator joining multiple terms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,

    /// Lower bound of the date range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    /// Upper bound of the date range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,

    /// Page to fetch (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Opaque pagination cursor echoed back from a previous [`SearchResponse::pages`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Value>,

    /// Results per page
    #[serde(default, rename = "pagesize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Response from `/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Hits grouped by record category
    #[serde(
        default,
        deserialize_with = "null_values_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub results: HashMap<String, Vec<SearchRecord>>,

    /// Pagination state; pass it back as [`SearchRequest::pages`] to continue
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub pages: Map<String, Value>,

    /// Number of hits returned
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: i64,

    /// Server-side processing time in milliseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub took: i64,
}

impl SearchResponse {
    /// Returns true if there are no hits in any category
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.values().all(Vec::is_empty)
    }

    /// Total number of hits across all categories in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.values().map(Vec::len).sum()
    }

    /// Hits for one category
    #[must_use]
    pub fn category(&self, name: &str) -> &[SearchRecord] {
        self.results.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over every hit with its category
    pub fn records(&self) -> impl Iterator<Item = (&str, &SearchRecord)> {
        self.results
            .iter()
            .flat_map(|(category, records)| records.iter().map(move |r| (category.as_str(), r)))
    }

    /// Pagination cursor as a JSON value, ready for [`SearchRequest::pages`].
    /// Returns `None` when the response carried no pagination state.
    #[must_use]
    pub fn next_pages(&self) -> Option<Value> {
        if self.pages.is_empty() {
            None
        } else {
            Some(Value::Object(self.pages.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_always_sends_source() {
        let request = SearchRequest {
            terms: vec!["alice".to_string()],
            types: vec!["username".to_string()],
            ..SearchRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"terms": ["alice"], "types": ["username"], "source": ""})
        );
    }

    #[test]
    fn test_search_request_pagination_fields() {
        let request = SearchRequest {
            terms: vec!["alice".to_string()],
            page: Some(2),
            page_size: Some(50),
            pages: Some(json!({"email": 3})),
            ..SearchRequest::default()
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["page"], 2);
        assert_eq!(body["pagesize"], 50);
        assert_eq!(body["pages"], json!({"email": 3}));
        assert!(body.get("wildcard").is_none());
    }

    #[test]
    fn test_search_response_schema_less_records() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": {
                "email": [
                    {"email": "alice@example.com", "password": "hunter2", "source": "combo"},
                    {"email": "alice@example.org", "extra": {"nested": [1, 2]}}
                ],
                "username": []
            },
            "pages": {"email": {"current": 1, "total": 4}},
            "size": 2,
            "took": 18,
            "unexpected": true
        }))
        .unwrap();

        assert_eq!(response.len(), 2);
        assert!(!response.is_empty());
        assert_eq!(response.category("email")[0]["password"], "hunter2");
        assert!(response.category("domain").is_empty());
        assert_eq!(response.records().count(), 2);
        assert_eq!(
            response.next_pages(),
            Some(json!({"email": {"current": 1, "total": 4}}))
        );
    }

    #[test]
    fn test_search_response_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"size": 0, "took": 1}"#).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.len(), 0);
        assert!(response.next_pages().is_none());
    }

    #[test]
    fn test_search_response_null_category_and_scalars() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": {
                "email": null,
                "username": [{"username": "alice"}]
            },
            "pages": null,
            "size": null,
            "took": -1
        }))
        .unwrap();

        assert!(response.category("email").is_empty());
        assert_eq!(response.len(), 1);
        assert_eq!(response.size, 0);
        assert_eq!(response.took, -1);
        assert!(response.next_pages().is_none());
    }
}
