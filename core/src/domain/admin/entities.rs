use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Privileged operator record, distinct from end-user records.
///
/// `sandi` is stored and compared in plaintext; see DESIGN.md for the open
/// question around hardening it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub sandi: String,
    pub nama_lengkap: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}
