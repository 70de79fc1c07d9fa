#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use volunteer_scheduler::{
    clock::FixedClock,
    db::MemoryStore,
    models::{Season, Section, VolunteeringRole},
};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 15, 0, 0).unwrap()
}

/// March 2024, inside the 2023/2024 season.
pub fn march_clock() -> FixedClock {
    FixedClock(at(2024, 3, 15))
}

pub struct Club {
    pub store: MemoryStore,
    pub season: Season,
    pub u19_f: Section,
    pub u19_m: Section,
    pub senior_f1: Section,
    pub senior_m1: Section,
    pub senior_m2: Section,
    pub u15_m: Section,
    pub senior_roles: Vec<VolunteeringRole>,
    pub young_roles: Vec<VolunteeringRole>,
}

/// A club in the 2023/2024 season with the given number of senior and young
/// duties and no volunteers yet.
pub async fn club(senior_roles: usize, young_roles: usize) -> Club {
    let store = MemoryStore::new();
    let season = store.add_season(2023, 2024).await;

    let u19_f = store.add_section("-19 F", false).await;
    let u19_m = store.add_section("-19 M", false).await;
    let senior_f1 = store.add_section("Senior F1", true).await;
    let senior_m1 = store.add_section("Senior M1", true).await;
    let senior_m2 = store.add_section("Senior M2", true).await;
    let u15_m = store.add_section("-15 M", false).await;

    let mut seniors = Vec::new();
    for i in 0..senior_roles {
        seniors.push(
            store
                .add_volunteering_role(&format!("Senior duty {}", i), 2, true)
                .await,
        );
    }
    let mut youngs = Vec::new();
    for i in 0..young_roles {
        youngs.push(
            store
                .add_volunteering_role(&format!("Young duty {}", i), 1, false)
                .await,
        );
    }

    Club {
        store,
        season,
        u19_f,
        u19_m,
        senior_f1,
        senior_m1,
        senior_m2,
        u15_m,
        senior_roles: seniors,
        young_roles: youngs,
    }
}

impl Club {
    /// Adds `count` players to `section` with points `first_points`, `first_points + 1`, ...
    pub async fn add_players(&self, section: &Section, count: i32, first_points: i32) {
        for i in 0..count {
            self.store
                .add_player(
                    &format!("{}-{}", section.name, i),
                    section,
                    &self.season,
                    first_points + i,
                )
                .await;
        }
    }
}
