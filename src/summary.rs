use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::{
    assignment::current_season,
    clock::Clock,
    db::VolunteerStore,
    errors::AppError,
    models::{Match, RequestDetail},
};

/// How far back the summary looks, so a weekend's matches stay listed
/// until it is over.
pub const SUMMARY_LOOKBACK_DAYS: i64 = 1;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    #[serde(flatten)]
    pub game: Match,
    pub name: String,
    pub section_name: String,
    pub convocation_datetime: DateTime<Utc>,
    pub requests: Vec<RequestDetail>,
}

pub async fn upcoming_matches(
    store: &dyn VolunteerStore,
    clock: &dyn Clock,
) -> Result<Vec<MatchSummary>, AppError> {
    let season = current_season(store, clock).await?;
    let since = clock.now() - Duration::days(SUMMARY_LOOKBACK_DAYS);

    let matches = store.matches_since(season.id, since).await?;
    let mut summaries = Vec::with_capacity(matches.len());

    for game in matches {
        let section_name = store
            .section_by_id(game.section_id)
            .await?
            .map(|section| section.name)
            .unwrap_or_default();
        let requests = store.requests_for_match(game.id).await?;

        summaries.push(MatchSummary {
            name: game.display_name(),
            section_name,
            convocation_datetime: game.convocation_datetime(),
            requests,
            game,
        });
    }

    Ok(summaries)
}
