use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted account row. `id` is assigned by the store on creation
/// and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub tags: Option<String>,
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload: everything but the store-assigned fields.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub status: Option<String>,
    pub tags: Option<String>,
    pub owner: Option<String>,
}

/// Update payload. Fields left out of the request body are retained
/// on the stored row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
    pub owner: Option<String>,
}
