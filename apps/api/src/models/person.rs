use serde::Serialize;
use serde_json::Value;

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub username: String,
    pub name: String,
    pub professional_headline: String,
    pub picture: String,
}

/// Normalized biography for a single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonProfile {
    pub name: String,
    pub professional_headline: String,
    pub summary_of_bio: String,
    pub location: String,
    /// Upstream value as-is; `""` only when the key is missing.
    pub picture: Value,
    /// Upstream links as-is; `[]` only when the key is missing.
    pub links: Value,
}
