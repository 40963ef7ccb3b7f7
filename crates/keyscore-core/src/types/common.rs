use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Boolean operator joining multiple search terms
///
/// Serialized verbatim, so values the constructors don't cover can still be sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operator(pub String);

impl Operator {
    /// All terms must match
    #[must_use]
    pub fn and() -> Self {
        Self("AND".to_string())
    }

    /// Any term may match
    #[must_use]
    pub fn or() -> Self {
        Self("OR".to_string())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Deserialize a field that the API sometimes sends as `null`, mapping
/// `null` to the type's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a map whose entries may be `null`. A `null` map and every
/// `null` entry read as the default.
pub(crate) fn null_values_as_default<'de, D, V>(
    deserializer: D,
) -> Result<HashMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    let entries = Option::<HashMap<String, Option<V>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}
