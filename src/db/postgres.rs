use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    db::{
        VolunteerStore, matches::get as match_get, request::get as request_get,
        request::post as request_post, season::get as season_get, section::get as section_get,
        volunteer::get as volunteer_get, volunteering_role::get as role_get,
    },
    errors::AppError,
    models::{
        Match, MatchVolunteeringRequest, NewVolunteeringRequest, RequestDetail, Role, Season,
        Section, Volunteer, VolunteeringRole,
    },
};

#[derive(Clone)]
pub struct PgStore {
    postgres: PgPool,
}

impl PgStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl VolunteerStore for PgStore {
    async fn seasons_by_years(&self, start: i32, stop: i32) -> Result<Vec<Season>, AppError> {
        season_get::get_seasons_by_years(start, stop, &self.postgres).await
    }

    async fn section_by_id(&self, id: i32) -> Result<Option<Section>, AppError> {
        section_get::get_section_by_id(id, &self.postgres).await
    }

    async fn sections_by_name_excluding(
        &self,
        names: &[&str],
        exclude_id: i32,
    ) -> Result<Vec<Section>, AppError> {
        section_get::get_sections_by_name_excluding(names, exclude_id, &self.postgres).await
    }

    async fn candidate_volunteers(
        &self,
        season_id: i32,
        section_ids: &[i32],
        role: Role,
        limit: i64,
    ) -> Result<Vec<Volunteer>, AppError> {
        volunteer_get::get_candidate_volunteers(season_id, section_ids, role, limit, &self.postgres)
            .await
    }

    async fn count_volunteering_roles(&self) -> Result<i64, AppError> {
        role_get::count_volunteering_roles(&self.postgres).await
    }

    async fn volunteering_roles_by_tier(
        &self,
        senior: bool,
    ) -> Result<Vec<VolunteeringRole>, AppError> {
        role_get::get_volunteering_roles_by_tier(senior, &self.postgres).await
    }

    async fn create_requests(
        &self,
        batch: Vec<NewVolunteeringRequest>,
    ) -> Result<Vec<MatchVolunteeringRequest>, AppError> {
        request_post::create_requests(batch, &self.postgres).await
    }

    async fn match_by_id(&self, id: i32) -> Result<Option<Match>, AppError> {
        match_get::get_match_by_id(id, &self.postgres).await
    }

    async fn matches_since(
        &self,
        season_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<Match>, AppError> {
        match_get::get_matches_since(season_id, since, &self.postgres).await
    }

    async fn requests_for_match(&self, match_id: i32) -> Result<Vec<RequestDetail>, AppError> {
        request_get::get_requests_for_match(match_id, &self.postgres).await
    }
}
