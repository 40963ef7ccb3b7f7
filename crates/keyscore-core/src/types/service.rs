use super::common::{null_as_default, null_values_as_default};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response from `/health`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status as reported by the API
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// A data source that results can be filtered by
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SourceInfo {
    /// Identifier used in the `source` request field
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,

    /// Human readable name
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,

    /// Record types this source can be queried for
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_types: Vec<String>,

    /// Sub-sources keyed by identifier
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub sub_sources: HashMap<String, String>,

    /// Sources this one aggregates, for composite sources
    #[serde(default, deserialize_with = "null_as_default")]
    pub composite_of: Vec<String>,
}

impl SourceInfo {
    /// Returns true if this source aggregates other sources
    #[must_use]
    pub fn is_composite(&self) -> bool {
        !self.composite_of.is_empty()
    }

    /// Returns true if this source can be queried for the given record type
    #[must_use]
    pub fn allows(&self, record_type: &str) -> bool {
        self.allowed_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(record_type))
    }
}

/// Response from `/sources`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesResponse {
    /// Sources keyed by identifier
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub sources: HashMap<String, SourceInfo>,
}

impl SourcesResponse {
    /// Look up a source by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SourceInfo> {
        self.sources.get(key)
    }

    /// Source keys in sorted order
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.sources.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sources_response_pascal_case() {
        let response: SourcesResponse = serde_json::from_value(json!({
            "sources": {
                "stealer": {
                    "Key": "stealer",
                    "DisplayName": "Stealer Logs",
                    "AllowedTypes": ["email", "url"],
                    "SubSources": {"redline": "RedLine"},
                    "CompositeOf": null
                },
                "all": {
                    "Key": "all",
                    "DisplayName": "Everything",
                    "CompositeOf": ["stealer", "combo"]
                }
            }
        }))
        .unwrap();

        assert_eq!(response.keys(), vec!["all", "stealer"]);
        let stealer = response.get("stealer").unwrap();
        assert_eq!(stealer.display_name, "Stealer Logs");
        assert!(stealer.allows("EMAIL"));
        assert!(!stealer.allows("hash"));
        assert!(!stealer.is_composite());
        assert_eq!(stealer.sub_sources["redline"], "RedLine");
        assert!(response.get("all").unwrap().is_composite());
    }

    #[test]
    fn test_health_response() {
        let health: HealthResponse =
            serde_json::from_str(r#"{"status": "ok", "uptime": 1234}"#).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[test]
    fn test_health_null_status() {
        let health: HealthResponse = serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert!(health.status.is_empty());
    }

    #[test]
    fn test_source_null_fields() {
        let response: SourcesResponse = serde_json::from_value(json!({
            "sources": {
                "combo": {
                    "Key": null,
                    "DisplayName": null,
                    "AllowedTypes": null,
                    "SubSources": {"x": null}
                },
                "retired": null
            }
        }))
        .unwrap();

        let combo = response.get("combo").unwrap();
        assert!(combo.key.is_empty());
        assert!(combo.display_name.is_empty());
        assert!(combo.allowed_types.is_empty());
        assert_eq!(combo.sub_sources["x"], "");
        assert!(response.get("retired").unwrap().key.is_empty());
    }
}
