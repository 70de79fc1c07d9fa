use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::{
    clock::Clock,
    db::VolunteerStore,
    errors::AppError,
    models::{
        Match, MatchVolunteeringRequest, NewVolunteeringRequest, Role, Season, Status,
        section::VOLUNTEER_ELIGIBLE_SECTIONS, season::season_years_at,
    },
};

/// Resolves the season running at the clock's current time. Exactly one
/// season must carry the computed years.
pub async fn current_season(
    store: &dyn VolunteerStore,
    clock: &dyn Clock,
) -> Result<Season, AppError> {
    let (start, stop) = season_years_at(clock.now());
    let mut seasons = store.seasons_by_years(start, stop).await?;

    if seasons.len() != 1 {
        return Err(AppError::SeasonLookup {
            start,
            stop,
            found: seasons.len(),
        });
    }

    Ok(seasons.remove(0))
}

/// Drafts one volunteer per duty of a home match and persists the requests.
///
/// Candidates are players of the current season from the eligible sections,
/// minus the match's own section. The least-rewarded ones form a shortlist
/// (as long as the whole role catalog) which is shuffled before duties are
/// handed out in role order. Away matches are skipped and yield no requests.
///
/// Volunteers already holding an accepted request on the same weekend are
/// not filtered out.
pub async fn generate_volunteering_requests<R>(
    store: &dyn VolunteerStore,
    clock: &dyn Clock,
    game: &Match,
    rng: &mut R,
) -> Result<Vec<MatchVolunteeringRequest>, AppError>
where
    R: Rng + ?Sized,
{
    if !game.home {
        tracing::debug!("Skipping away match {} ({})", game.id, game.display_name());
        return Ok(Vec::new());
    }

    let season = current_season(store, clock).await?;

    let section = store
        .section_by_id(game.section_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Section {} not found", game.section_id)))?;

    let eligible_sections = store
        .sections_by_name_excluding(&VOLUNTEER_ELIGIBLE_SECTIONS, section.id)
        .await?;
    let section_ids: Vec<i32> = eligible_sections.iter().map(|s| s.id).collect();

    // Sized on every role, not just this tier, so the shuffle has room.
    let max_roles = store.count_volunteering_roles().await?;

    let mut shortlist = store
        .candidate_volunteers(season.id, &section_ids, Role::Player, max_roles)
        .await?;
    shortlist.shuffle(rng);

    let needed_roles = store.volunteering_roles_by_tier(section.senior).await?;

    tracing::debug!(
        "Match {}: season {}, {} eligible sections, {} shortlisted, {} roles needed",
        game.id,
        season,
        section_ids.len(),
        shortlist.len(),
        needed_roles.len()
    );

    if shortlist.len() < needed_roles.len() {
        return Err(AppError::InsufficientCandidates {
            match_id: game.id,
            needed: needed_roles.len(),
            available: shortlist.len(),
        });
    }

    let batch: Vec<NewVolunteeringRequest> = needed_roles
        .iter()
        .zip(shortlist.iter())
        .map(|(role, volunteer)| NewVolunteeringRequest {
            section_id: section.id,
            volunteer_id: volunteer.id,
            role_id: role.id,
            match_id: game.id,
            status: Status::Sent,
        })
        .collect();

    let created = store.create_requests(batch).await?;

    tracing::info!(
        "Created {} volunteering requests for match {} ({})",
        created.len(),
        game.id,
        game.display_name()
    );

    Ok(created)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub match_id: i32,
    pub created: Option<usize>,
    pub error: Option<String>,
}

/// Runs the generation for each selected match, one after the other. A
/// failing match is reported in its outcome and does not stop the others.
pub async fn generate_for_matches<R>(
    store: &dyn VolunteerStore,
    clock: &dyn Clock,
    match_ids: &[i32],
    rng: &mut R,
) -> Vec<MatchOutcome>
where
    R: Rng + ?Sized,
{
    let mut outcomes = Vec::with_capacity(match_ids.len());

    for &match_id in match_ids {
        let result = match store.match_by_id(match_id).await {
            Ok(Some(game)) => generate_volunteering_requests(store, clock, &game, &mut *rng).await,
            Ok(None) => Err(AppError::NotFound(format!("Match {} not found", match_id))),
            Err(e) => Err(e),
        };

        let outcome = match result {
            Ok(created) => MatchOutcome {
                match_id,
                created: Some(created.len()),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Failed to generate requests for match {}: {}", match_id, e);
                MatchOutcome {
                    match_id,
                    created: None,
                    error: Some(e.to_string()),
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}
