use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    errors::AppError,
    models::{
        Match, MatchVolunteeringRequest, NewVolunteeringRequest, RequestDetail, Role, Season,
        Section, Volunteer, VolunteeringRole,
    },
};

/// Every read and write the assignment engine and the admin surface need.
///
/// Implemented over Postgres by [`PgStore`](crate::db::PgStore) and in process
/// by [`MemoryStore`](crate::db::MemoryStore).
#[async_trait]
pub trait VolunteerStore: Send + Sync {
    /// All seasons with exactly these years. More than one row means the
    /// data is misconfigured; callers decide what to do with it.
    async fn seasons_by_years(&self, start: i32, stop: i32) -> Result<Vec<Season>, AppError>;

    async fn section_by_id(&self, id: i32) -> Result<Option<Section>, AppError>;

    /// Sections named in `names`, except the one with `exclude_id`.
    async fn sections_by_name_excluding(
        &self,
        names: &[&str],
        exclude_id: i32,
    ) -> Result<Vec<Section>, AppError>;

    /// Volunteers matching season, section set and role, ordered by points
    /// ascending (ties by id) and truncated to `limit`.
    async fn candidate_volunteers(
        &self,
        season_id: i32,
        section_ids: &[i32],
        role: Role,
        limit: i64,
    ) -> Result<Vec<Volunteer>, AppError>;

    async fn count_volunteering_roles(&self) -> Result<i64, AppError>;

    /// Roles with the given senior flag, in id order.
    async fn volunteering_roles_by_tier(
        &self,
        senior: bool,
    ) -> Result<Vec<VolunteeringRole>, AppError>;

    /// Persists the whole batch or nothing at all.
    async fn create_requests(
        &self,
        batch: Vec<NewVolunteeringRequest>,
    ) -> Result<Vec<MatchVolunteeringRequest>, AppError>;

    async fn match_by_id(&self, id: i32) -> Result<Option<Match>, AppError>;

    /// Matches of a season kicking off at or after `since`, ordered by
    /// kickoff then section.
    async fn matches_since(
        &self,
        season_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<Match>, AppError>;

    /// Requests of a match ordered by role.
    async fn requests_for_match(&self, match_id: i32) -> Result<Vec<RequestDetail>, AppError>;
}
