use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "Laki-laki")]
    LakiLaki,
    #[serde(rename = "Perempuan")]
    Perempuan,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::LakiLaki => "Laki-laki",
            Gender::Perempuan => "Perempuan",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Laki-laki" => Some(Gender::LakiLaki),
            "Perempuan" => Some(Gender::Perempuan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub nama_lengkap: String,
    pub email: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub jenis_kelamin: Option<Gender>,
    pub created_at: DateTime<Utc>,
}
