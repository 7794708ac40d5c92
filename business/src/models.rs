//! Wire types for the points API.
//!
//! Each list endpoint answers with its own envelope (`users`, `data`, `logs`),
//! so every endpoint gets an explicit response type instead of a shared one.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// A backend timestamp.
///
/// The backend sends RFC 3339 strings. Anything else is kept verbatim so it can
/// still be shown (as an invalid date) instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    At(DateTime<FixedOffset>),
    Invalid(String),
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        DateTime::parse_from_rfc3339(raw)
            .map(Self::At)
            .unwrap_or_else(|_| Self::Invalid(raw.to_owned()))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::Invalid(String::new())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Accepts `"42"` or `42` and keeps it as a string.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => text,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Uint(n)) => n.to_string(),
        None => String::new(),
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Point value attached to a file resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_url: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub provider: String,
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Timestamp,
    #[serde(default)]
    pub points: i64,
}

/// One row of the append-only points history.
///
/// `points` is signed: positive for credits, negative for debits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsLogEntry {
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub file_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub created_at: Timestamp,
    /// `file_access`, `admin_grant`, or whatever else the backend records.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// `GET /getUsersList`
#[derive(Debug, Clone, Deserialize)]
pub struct UsersListResponse {
    pub users: Vec<User>,
}

/// `GET /getPointsList`
#[derive(Debug, Clone, Deserialize)]
pub struct PointsListResponse {
    pub data: Vec<PointConfig>,
}

/// `GET /getPointsLog`
#[derive(Debug, Clone, Deserialize)]
pub struct PointsLogResponse {
    pub logs: Vec<PointsLogEntry>,
}

/// Error body the backend sends with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<u16>,
}

/// `POST /configurePoints`
///
/// `points` is `None` when the form input was not a number; it serializes as
/// `null`, which is what a browser sends for `NaN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurePointsRequest {
    pub file_url: String,
    pub points: Option<i64>,
    pub description: String,
}

/// `POST /adminGrantPoints`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantPointsRequest {
    pub username: String,
    pub points: Option<i64>,
    pub description: String,
}

/// Optional filters for `GET /getPointsLog`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsLogQuery {
    pub username: Option<String>,
    pub limit: Option<u32>,
}
