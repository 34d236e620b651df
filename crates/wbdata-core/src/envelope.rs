//! Paged response envelope for the remote API.
//!
//! Every page of a result set arrives as a 2-element JSON array: metadata
//! first, records second:
//!
//! ```json
//! [ {"page": 1, "pages": 3, "total": 2524, "per_page": "1000"},
//!   [ {"id": "NY.GDP.MKTP.CD", ...}, ... ] ]
//! ```
//!
//! The API is inconsistent about numeric types (`per_page` above is a
//! string), so the metadata fields accept either a JSON number or a string
//! of digits.

use serde::{Deserialize, Deserializer, de};

use crate::error::{FetchError, Result};

/// A single record object from a result page.
///
/// Records are kept as raw JSON maps; which fields are present depends on
/// the endpoint and is the caller's concern.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Pagination metadata reported at the head of every page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// The page this envelope carries (1-based).
    #[serde(deserialize_with = "number_or_string")]
    pub page: u64,
    /// Total number of pages in the result set.
    #[serde(deserialize_with = "number_or_string")]
    pub pages: u64,
    /// Total number of records across all pages.
    #[serde(deserialize_with = "number_or_string")]
    pub total: u64,
}

/// One decoded page: metadata plus that page's records.
#[derive(Debug, Deserialize)]
pub struct PagedResponse(PageMeta, Vec<Record>);

impl PagedResponse {
    /// Decode a raw response body into an envelope.
    ///
    /// # Errors
    /// Returns [`FetchError::Parse`] if the body is not valid JSON or does
    /// not have the 2-element `[metadata, records]` shape.
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Pagination metadata for this page.
    #[must_use]
    pub fn meta(&self) -> &PageMeta {
        &self.0
    }

    /// Consume the envelope, yielding this page's records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.1
    }
}

/// Accept a `u64` encoded either as a JSON number or a string of digits.
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid integer: {s:?}"))),
    }
}
