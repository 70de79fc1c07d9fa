use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A duty to staff at a home match, e.g. the scoreboard or the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VolunteeringRole {
    pub id: i32,
    pub name: String,
    pub reward: i32,
    /// Whether the duty applies to senior-section matches.
    pub senior: bool,
}

impl fmt::Display for VolunteeringRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = if self.senior { "senior" } else { "young" };
        write!(f, "{} {} ({} pts)", self.name, category, self.reward)
    }
}
