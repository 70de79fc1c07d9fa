use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::Status;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchVolunteeringRequest {
    pub id: i32,
    pub section_id: i32,
    pub volunteer_id: i32,
    pub role_id: i32,
    pub match_id: i32,
    pub status: Status,
    pub creation_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVolunteeringRequest {
    pub section_id: i32,
    pub volunteer_id: i32,
    pub role_id: i32,
    pub match_id: i32,
    pub status: Status,
}

/// A request joined with the names needed to display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub request: MatchVolunteeringRequest,
    pub volunteer_name: String,
    pub role_name: String,
}
