use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Sections whose players can be drafted to volunteer at other sections' matches.
pub const VOLUNTEER_ELIGIBLE_SECTIONS: [&str; 6] = [
    "-19 F",
    "-19 M",
    "Senior F1",
    "Senior F2",
    "Senior M1",
    "Senior M2",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i32,
    pub name: String,
    pub senior: bool,
}

impl Section {
    pub fn is_volunteer_eligible(&self) -> bool {
        VOLUNTEER_ELIGIBLE_SECTIONS.contains(&self.name.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
