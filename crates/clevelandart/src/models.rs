// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier accepted by the artwork lookup endpoint.
///
/// The service resolves both forms on the same path; the variant only
/// decides what text lands in the path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtworkId {
    /// Numeric primary key (e.g. `151904`).
    Numeric(u64),
    /// Human-readable catalog number (e.g. `1927.1984`).
    Accession(String),
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtworkId::Numeric(id) => write!(f, "{id}"),
            ArtworkId::Accession(number) => f.write_str(number),
        }
    }
}

impl From<u64> for ArtworkId {
    fn from(id: u64) -> Self {
        ArtworkId::Numeric(id)
    }
}

impl From<&str> for ArtworkId {
    fn from(number: &str) -> Self {
        ArtworkId::Accession(number.to_string())
    }
}

impl From<String> for ArtworkId {
    fn from(number: String) -> Self {
        ArtworkId::Accession(number)
    }
}

impl FromStr for ArtworkId {
    type Err = std::convert::Infallible;

    /// Canonical decimal input is a primary key, anything else (including
    /// digits with leading zeros) is kept verbatim as an accession number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u64>() {
            if id.to_string() == s {
                return Ok(ArtworkId::Numeric(id));
            }
        }
        Ok(ArtworkId::Accession(s.to_string()))
    }
}

/// A single artwork record from the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Numeric primary key.
    pub id: u64,
    #[serde(default)]
    pub accession_number: Option<String>,
    #[serde(default)]
    pub share_license_status: Option<String>,
    /// Short label text (title, creator, date, medium).
    #[serde(default)]
    pub tombstone: Option<String>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_in_original_language: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub series_in_original_language: Option<String>,
    /// Free-form creation date as displayed (e.g. "c. 1500").
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub creation_date_earliest: Option<i32>,
    #[serde(default)]
    pub creation_date_latest: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub creators: Vec<Creator>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub culture: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Collection web page for this artwork.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(rename = "type", default)]
    pub artwork_type: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
}

impl Artwork {
    /// URL of the web-sized image, if the record has one.
    pub fn web_image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.web.as_ref())
            .map(|rendition| rendition.url.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Creator {
    #[serde(default)]
    pub description: Option<String>,
    /// Role on the work (e.g. "artist", "maker").
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
}

/// Available image renditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Images {
    #[serde(default)]
    pub web: Option<ImageRendition>,
    #[serde(default)]
    pub print: Option<ImageRendition>,
    #[serde(default)]
    pub full: Option<ImageRendition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRendition {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// The service sends `null` for some empty lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wrapper around a single-record response.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtworkEnvelope {
    pub data: Artwork,
}

/// Search response: collection metadata plus one page of records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkSearchResult {
    pub info: SearchInfo,
    #[serde(default)]
    pub data: Vec<Artwork>,
}

impl ArtworkSearchResult {
    /// The `limit` the service says it applied, as a number or a numeric string.
    pub fn echoed_limit(&self) -> Option<i64> {
        match self.info.parameters.get("limit")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInfo {
    /// Number of records matching the query across all pages.
    pub total: u64,
    /// Parameters echoed back by the service. Value types vary, so they are kept untyped.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// A decoded value alongside the response body it was decoded from.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,
    pub raw: String,
}

impl<T> Fetched<T> {
    /// Parse the raw body as untyped JSON, for fields the typed projection drops.
    pub fn raw_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.raw)
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            value: f(self.value),
            raw: self.raw,
        }
    }
}
