use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    db::VolunteerStore,
    errors::AppError,
    models::{
        Match, MatchVolunteeringRequest, NewVolunteeringRequest, RequestDetail, Role, Season,
        Section, Volunteer, VolunteeringRole,
    },
};

#[derive(Default)]
struct Tables {
    seasons: Vec<Season>,
    sections: Vec<Section>,
    volunteers: Vec<Volunteer>,
    matches: Vec<Match>,
    volunteering_roles: Vec<VolunteeringRole>,
    requests: Vec<MatchVolunteeringRequest>,
    next_id: i32,
    fail_insert_at: Option<usize>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-process store with the same query semantics as the Postgres one.
///
/// Used by the test-suite and handy for local runs without a database.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_season(&self, start: i32, stop: i32) -> Season {
        let mut tables = self.tables.lock().await;
        let season = Season {
            id: tables.next_id(),
            start,
            stop,
        };
        tables.seasons.push(season.clone());
        season
    }

    pub async fn add_section(&self, name: &str, senior: bool) -> Section {
        let mut tables = self.tables.lock().await;
        let section = Section {
            id: tables.next_id(),
            name: name.to_string(),
            senior,
        };
        tables.sections.push(section.clone());
        section
    }

    /// Stores `volunteer` under a fresh id, ignoring the one it carries.
    pub async fn add_volunteer(&self, mut volunteer: Volunteer) -> Volunteer {
        let mut tables = self.tables.lock().await;
        volunteer.id = tables.next_id();
        tables.volunteers.push(volunteer.clone());
        volunteer
    }

    pub async fn add_player(
        &self,
        name: &str,
        section: &Section,
        season: &Season,
        points: i32,
    ) -> Volunteer {
        self.add_volunteer(Volunteer {
            id: 0,
            first_name: name.to_string(),
            last_name: section.name.clone(),
            email: format!("{}@example.org", name.to_lowercase()),
            phone: String::new(),
            birthdate: None,
            role: Some(Role::Player),
            section_id: Some(section.id),
            season_id: Some(season.id),
            points,
        })
        .await
    }

    pub async fn add_match(
        &self,
        competitor: &str,
        season: &Season,
        section: &Section,
        starting_datetime: DateTime<Utc>,
        home: bool,
    ) -> Match {
        let mut tables = self.tables.lock().await;
        let game = Match {
            id: tables.next_id(),
            competitor: competitor.to_string(),
            season_id: season.id,
            section_id: section.id,
            starting_datetime,
            home,
        };
        tables.matches.push(game.clone());
        game
    }

    pub async fn add_volunteering_role(
        &self,
        name: &str,
        reward: i32,
        senior: bool,
    ) -> VolunteeringRole {
        let mut tables = self.tables.lock().await;
        let role = VolunteeringRole {
            id: tables.next_id(),
            name: name.to_string(),
            reward,
            senior,
        };
        tables.volunteering_roles.push(role.clone());
        role
    }

    /// Makes the `index`-th insert (0-based) of the next batches fail.
    pub async fn fail_insert_at(&self, index: Option<usize>) {
        self.tables.lock().await.fail_insert_at = index;
    }

    /// Every persisted request, in insertion order.
    pub async fn requests(&self) -> Vec<MatchVolunteeringRequest> {
        self.tables.lock().await.requests.clone()
    }
}

#[async_trait]
impl VolunteerStore for MemoryStore {
    async fn seasons_by_years(&self, start: i32, stop: i32) -> Result<Vec<Season>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .seasons
            .iter()
            .filter(|s| s.start == start && s.stop == stop)
            .cloned()
            .collect())
    }

    async fn section_by_id(&self, id: i32) -> Result<Option<Section>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.sections.iter().find(|s| s.id == id).cloned())
    }

    async fn sections_by_name_excluding(
        &self,
        names: &[&str],
        exclude_id: i32,
    ) -> Result<Vec<Section>, AppError> {
        let tables = self.tables.lock().await;
        let mut sections: Vec<Section> = tables
            .sections
            .iter()
            .filter(|s| s.id != exclude_id && names.contains(&s.name.as_str()))
            .cloned()
            .collect();
        sections.sort_by_key(|s| s.id);
        Ok(sections)
    }

    async fn candidate_volunteers(
        &self,
        season_id: i32,
        section_ids: &[i32],
        role: Role,
        limit: i64,
    ) -> Result<Vec<Volunteer>, AppError> {
        let limit = usize::try_from(limit)
            .map_err(|_| AppError::BadRequest(format!("Invalid limit: {}", limit)))?;

        let tables = self.tables.lock().await;
        let mut volunteers: Vec<Volunteer> = tables
            .volunteers
            .iter()
            .filter(|v| {
                v.season_id == Some(season_id)
                    && v.role == Some(role)
                    && v.section_id.is_some_and(|id| section_ids.contains(&id))
            })
            .cloned()
            .collect();
        volunteers.sort_by_key(|v| (v.points, v.id));
        volunteers.truncate(limit);
        Ok(volunteers)
    }

    async fn count_volunteering_roles(&self) -> Result<i64, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.volunteering_roles.len() as i64)
    }

    async fn volunteering_roles_by_tier(
        &self,
        senior: bool,
    ) -> Result<Vec<VolunteeringRole>, AppError> {
        let tables = self.tables.lock().await;
        let mut roles: Vec<VolunteeringRole> = tables
            .volunteering_roles
            .iter()
            .filter(|r| r.senior == senior)
            .cloned()
            .collect();
        roles.sort_by_key(|r| r.id);
        Ok(roles)
    }

    async fn create_requests(
        &self,
        batch: Vec<NewVolunteeringRequest>,
    ) -> Result<Vec<MatchVolunteeringRequest>, AppError> {
        let mut tables = self.tables.lock().await;
        let now = Utc::now();

        // Staged rows only reach the table once the whole batch went through.
        let mut staged = Vec::with_capacity(batch.len());
        for (index, request) in batch.into_iter().enumerate() {
            if tables.fail_insert_at == Some(index) {
                return Err(AppError::DatabaseError(format!(
                    "Failed to create request: insert {} rejected",
                    index
                )));
            }
            staged.push(MatchVolunteeringRequest {
                id: 0,
                section_id: request.section_id,
                volunteer_id: request.volunteer_id,
                role_id: request.role_id,
                match_id: request.match_id,
                status: request.status,
                creation_date: now,
                update_date: now,
            });
        }

        for row in staged.iter_mut() {
            row.id = tables.next_id();
        }
        tables.requests.extend(staged.iter().cloned());

        Ok(staged)
    }

    async fn match_by_id(&self, id: i32) -> Result<Option<Match>, AppError> {
        let tables = self.tables.lock().await;
        Ok(tables.matches.iter().find(|m| m.id == id).cloned())
    }

    async fn matches_since(
        &self,
        season_id: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<Match>, AppError> {
        let tables = self.tables.lock().await;
        let mut matches: Vec<Match> = tables
            .matches
            .iter()
            .filter(|m| m.season_id == season_id && m.starting_datetime >= since)
            .cloned()
            .collect();
        matches.sort_by_key(|m| (m.starting_datetime, m.section_id));
        Ok(matches)
    }

    async fn requests_for_match(&self, match_id: i32) -> Result<Vec<RequestDetail>, AppError> {
        let tables = self.tables.lock().await;
        let mut details: Vec<RequestDetail> = tables
            .requests
            .iter()
            .filter(|r| r.match_id == match_id)
            .filter_map(|r| {
                let volunteer = tables.volunteers.iter().find(|v| v.id == r.volunteer_id)?;
                let role = tables.volunteering_roles.iter().find(|vr| vr.id == r.role_id)?;
                Some(RequestDetail {
                    request: r.clone(),
                    volunteer_name: volunteer.full_name(),
                    role_name: role.name.clone(),
                })
            })
            .collect();
        details.sort_by_key(|d| (d.request.role_id, d.request.id));
        Ok(details)
    }
}
