// Wire models for the DNA Center intent API
//
// Only the fields the cleanup flow needs are modelled; everything else
// in the payload is ignored by serde.

use serde::Deserialize;

/// Standard `{ "response": [...] }` envelope used by intent API list calls.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

/// Body of a successful `POST /dna/system/api/v1/auth/token`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "Token")]
    pub token: String,
}

/// A reserved IP sub-pool (`GET /dna/intent/api/v1/reserve-ip-subpool`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPoolRecord {
    pub id: String,
    #[serde(default)]
    pub group_name: Option<String>,
}

/// A global IP pool (`GET /dna/intent/api/v1/global-pool`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPoolRecord {
    pub id: String,
    #[serde(default)]
    pub ip_pool_name: Option<String>,
}

/// A site hierarchy entry (`GET /dna/intent/api/v1/sites`).
///
/// `site_type` is one of `area`, `building` or `floor`. The global root
/// may come back without a `nameHierarchy`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_hierarchy: Option<String>,
    #[serde(rename = "type", default)]
    pub site_type: Option<String>,
}
