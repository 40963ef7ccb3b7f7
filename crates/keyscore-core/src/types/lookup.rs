use super::common::{null_as_default, null_values_as_default};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request body for `/hashlookup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLookupRequest {
    /// Hashes to resolve
    pub terms: Vec<String>,
}

impl HashLookupRequest {
    /// Create a request for the given hashes
    #[must_use]
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

/// A cracked or known hash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashRecord {
    /// The hash as stored
    #[serde(default)]
    pub hash: Option<String>,

    /// Hash algorithm (md5, sha1, ntlm, ...)
    #[serde(default, rename = "type")]
    pub hash_type: Option<String>,

    /// Recovered plaintext
    #[serde(default)]
    pub plaintext: Option<String>,

    /// Where the hash was seen
    #[serde(default)]
    pub source: Option<String>,

    /// When the hash was first seen
    #[serde(default)]
    pub first_seen: Option<String>,
}

impl HashRecord {
    /// Returns true if the plaintext is known
    #[must_use]
    pub fn is_cracked(&self) -> bool {
        self.plaintext.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Response from `/hashlookup`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashLookupResponse {
    /// Server-side processing time in milliseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub took: i64,

    /// Number of results
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: i64,

    /// Records keyed by the queried term
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub results: HashMap<String, HashRecord>,
}

impl HashLookupResponse {
    /// Record for a queried hash
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&HashRecord> {
        self.results.get(term)
    }

    /// Returns true if no hash was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Request body for `/iplookup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpLookupRequest {
    /// IP addresses to resolve
    pub terms: Vec<String>,
}

impl IpLookupRequest {
    /// Create a request for the given addresses
    #[must_use]
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

/// Geolocation and network ownership for one IP address
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpInfo {
    /// Autonomous system, e.g. "AS15169 Google LLC"
    #[serde(default, rename = "as")]
    pub asn: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// Full country name
    #[serde(default)]
    pub country: Option<String>,

    /// Two-letter country code
    #[serde(default)]
    pub country_code: Option<String>,

    /// Internet Service Provider
    #[serde(default)]
    pub isp: Option<String>,

    /// Latitude coordinate
    #[serde(default)]
    pub lat: Option<f64>,

    /// Longitude coordinate
    #[serde(default)]
    pub lon: Option<f64>,

    /// Organization that owns the address
    #[serde(default)]
    pub org: Option<String>,

    /// Region code
    #[serde(default)]
    pub region: Option<String>,

    /// Region name
    #[serde(default)]
    pub region_name: Option<String>,

    /// Lookup status reported by the geolocation backend
    #[serde(default)]
    pub status: Option<String>,

    /// IANA time zone
    #[serde(default)]
    pub timezone: Option<String>,

    /// Postal code
    #[serde(default)]
    pub zip: Option<String>,
}

impl IpInfo {
    /// Returns the coordinates as a tuple if available
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Response from `/iplookup`
///
/// Resolved addresses land in `results`, addresses the API could not resolve
/// land in `errors` with a per-term message. Both maps are kept as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpLookupResponse {
    /// Server-side processing time in milliseconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub took: i64,

    /// Number of results
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: i64,

    /// Lookup results keyed by the queried address
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub results: HashMap<String, IpInfo>,

    /// Per-term error messages keyed by the queried address
    #[serde(default, deserialize_with = "null_values_as_default")]
    pub errors: HashMap<String, String>,
}

impl IpLookupResponse {
    /// Lookup result for a queried address
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&IpInfo> {
        self.results.get(term)
    }

    /// Error message for a queried address
    #[must_use]
    pub fn error_for(&self, term: &str) -> Option<&str> {
        self.errors.get(term).map(String::as_str)
    }

    /// Returns true if any term failed
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
