use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Short code of the club, shown on the home side of a fixture.
pub const CLUB_CODE: &str = "THAC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i32,
    pub competitor: String,
    pub season_id: i32,
    pub section_id: i32,
    pub starting_datetime: DateTime<Utc>,
    pub home: bool,
}

impl Match {
    /// `THAC/Opponent` for home matches, `Opponent/THAC` otherwise.
    pub fn display_name(&self) -> String {
        if self.home {
            format!("{}/{}", CLUB_CODE, self.competitor)
        } else {
            format!("{}/{}", self.competitor, CLUB_CODE)
        }
    }

    /// Players are convened one hour before kickoff.
    pub fn convocation_datetime(&self) -> DateTime<Utc> {
        self.starting_datetime - Duration::hours(1)
    }
}
