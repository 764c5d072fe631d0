//! Wire types exchanged with the catalog REST backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog record as the server returns it. Dates stay ISO
/// `YYYY-MM-DD` strings on the wire; validation parses them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub catalog_id: u32,
    pub catalog_name: String,
    pub catalog_description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

/// Body for POST /api/catalogs and PUT /api/catalogs/{id}.
/// The server assigns `catalog_id`; status must already be lowercase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogPayload {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
}

/// Response of GET /api/catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub data: Vec<Catalog>,
    #[serde(default)]
    pub total_catalogs: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

/// The `data` object of a successful POST /api/login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginUser {
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Allowed catalog status values. Input is case-insensitive; the wire
/// form is lowercase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    Active,
    Inactive,
}

impl CatalogStatus {
    pub const ALLOWED: [&'static str; 2] = ["active", "inactive"];

    /// "active, inactive", as it appears in validation messages.
    pub fn allowed_list() -> String {
        Self::ALLOWED.join(", ")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Active => "active",
            CatalogStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for CatalogStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(CatalogStatus::Active),
            "inactive" => Ok(CatalogStatus::Inactive),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Active".parse::<CatalogStatus>(), Ok(CatalogStatus::Active));
        assert_eq!(
            " INACTIVE ".parse::<CatalogStatus>(),
            Ok(CatalogStatus::Inactive)
        );
        assert!("upcoming".parse::<CatalogStatus>().is_err());
        assert!("".parse::<CatalogStatus>().is_err());
    }

    #[test]
    fn status_wire_form_is_lowercase() {
        assert_eq!(CatalogStatus::Active.to_string(), "active");
        assert_eq!(CatalogStatus::allowed_list(), "active, inactive");
    }

    #[test]
    fn list_response_tolerates_missing_fields() {
        let resp: ListResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.total_catalogs, 0);
    }

    #[test]
    fn catalog_round_trips() {
        let raw = r#"{
            "catalog_id": 7,
            "catalog_name": "Summer Sale",
            "catalog_description": "Seasonal items",
            "start_date": "2030-06-01",
            "end_date": "2030-08-31",
            "status": "active"
        }"#;
        let c: Catalog = serde_json::from_str(raw).unwrap();
        assert_eq!(c.catalog_id, 7);
        assert_eq!(c.status, "active");
    }
}
