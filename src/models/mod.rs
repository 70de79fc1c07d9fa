pub mod matches;
pub mod request;
pub mod season;
pub mod section;
pub mod volunteer;
pub mod volunteering_role;

pub use matches::Match;
pub use request::{MatchVolunteeringRequest, NewVolunteeringRequest, RequestDetail};
pub use season::Season;
pub use section::Section;
pub use volunteer::Volunteer;
pub use volunteering_role::VolunteeringRole;

use serde::{Deserialize, Serialize};

/// What a volunteer does for the club. Only players are drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[repr(i16)]
pub enum Role {
    Player = 1,
    Administrator = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[repr(i16)]
pub enum Status {
    Sent = 1,
    Accepted = 2,
    Rejected = 3,
    Cancelled = 4,
}
