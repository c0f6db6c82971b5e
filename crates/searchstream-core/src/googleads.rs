//! Google Ads `searchStream` wire types.
//!
//! Field names and encodings follow the real API response so that clients
//! written against it can consume the mock unchanged.

use serde::{Deserialize, Serialize};

/// Status tag for malformed request bodies and unusable queries.
pub const WRONG_REQUEST: &str = "WRONG_REQUEST";
/// Status tag for missing or empty auth headers.
pub const WRONG_HEADERS: &str = "WRONG_HEADERS";

// ============================================================================
// Request Types
// ============================================================================

/// `searchStream` request body. The query is free text; only the dates in it
/// are looked at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStreamRequest {
    pub query: String,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStreamResponse {
    pub results: Vec<SearchResult>,
    pub field_mask: String,
    pub request_id: String,
}

/// One report row: a campaign with its metrics for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub campaign: Campaign,
    pub metrics: Metrics,
    pub segments: Segments,
    pub customer: Customer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// `customers/{customer_id}/campaigns/{campaign_id}`
    pub resource_name: String,
    pub advertising_channel_type: ChannelType,
    pub name: String,
    /// Mirrors the customer id, not the campaign id.
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelType {
    Display,
    Search,
}

/// int64 metrics travel as decimal strings, as the real API encodes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(with = "int64_string")]
    pub clicks: u64,
    #[serde(with = "int64_string")]
    pub cost_micros: u64,
    #[serde(with = "int64_string")]
    pub impressions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segments {
    /// `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// `customers/{customer_id}`
    pub resource_name: String,
    pub currency_code: String,
}

// ============================================================================
// Error Envelope
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status of the reply. Kept off the wire.
    #[serde(skip)]
    pub code: u16,
    pub message: String,
    pub status: String,
}

mod int64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u64>().map_err(de::Error::custom)
    }
}
