use super::common::{is_false, null_as_default, null_values_as_default};
use super::Operator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request body for `/count` and `/count/detailed`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountRequest {
    /// Terms to count matches for
    pub terms: Vec<String>,

    /// Record types to restrict the count to (email, username, domain, ...)
    pub types: Vec<String>,

    /// Only count records from this source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

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
}

impl CountRequest {
    /// Create a request counting the given terms across all types
    #[must_use]
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Restrict the count to the given record types
    #[must_use]
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the count to one source
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Treat terms as wildcard patterns
    #[must_use]
    pub fn wildcard(mut self, wildcard: bool) -> Self {
        self.wildcard = wildcard;
        self
    }

    /// Treat terms as regular expressions
    #[must_use]
    pub fn regex(mut self, regex: bool) -> Self {
        self.regex = regex;
        self
    }

    /// Set the operator joining multiple terms
    #[must_use]
    pub fn operator(mut self, operator: impl Into<Operator>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// Set the lower bound of the date range
    #[must_use]
    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    /// Set the upper bound of the date range
    #[must_use]
    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }
}

/// Response from `/count`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Number of matching records
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
}

/// Response from `/count/detailed`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailedCountResponse {
    /// Matches per record category
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub counts: HashMap<String, i64>,

    /// Matches across all categories
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,

    /// Server-side processing time in milliseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub took: i64,
}

impl DetailedCountResponse {
    /// Count for one category, zero if the category is absent
    #[must_use]
    pub fn count_for(&self, category: &str) -> i64 {
        self.counts.get(category).copied().unwrap_or_default()
    }

    /// Categories sorted by descending count
    #[must_use]
    pub fn top_categories(&self) -> Vec<(&str, i64)> {
        let mut categories: Vec<_> = self
            .counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        categories
    }
}
