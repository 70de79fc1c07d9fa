mod common;

use common::{at, club, march_clock};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use volunteer_scheduler::{
    assignment::{generate_for_matches, generate_volunteering_requests},
    db::VolunteerStore,
    errors::AppError,
    models::{Role, Status, Volunteer},
};

#[tokio::test]
async fn test_away_match_creates_nothing() {
    let club = club(3, 2).await;
    club.add_players(&club.u19_f, 10, 0).await;
    let game = club
        .store
        .add_match("Lyon", &club.season, &club.senior_m1, at(2024, 3, 16), false)
        .await;

    let mut rng = StdRng::seed_from_u64(7);
    let created = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
        .await
        .unwrap();

    assert!(created.is_empty());
    assert!(club.store.requests().await.is_empty());
}

#[tokio::test]
async fn test_senior_match_gets_one_request_per_senior_role() {
    let club = club(3, 2).await;
    club.add_players(&club.u19_f, 4, 0).await;
    club.add_players(&club.u19_m, 4, 0).await;
    let game = club
        .store
        .add_match("Nantes", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    let mut rng = StdRng::seed_from_u64(1);
    let created = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
        .await
        .unwrap();

    assert_eq!(created.len(), 3);
    assert_eq!(club.store.requests().await.len(), 3);

    let role_ids: Vec<i32> = created.iter().map(|r| r.role_id).collect();
    let senior_ids: Vec<i32> = club.senior_roles.iter().map(|r| r.id).collect();
    assert_eq!(role_ids, senior_ids);

    for request in &created {
        assert_eq!(request.match_id, game.id);
        assert_eq!(request.section_id, club.senior_m1.id);
        assert_eq!(request.status, Status::Sent);
    }

    let volunteers: HashSet<i32> = created.iter().map(|r| r.volunteer_id).collect();
    assert_eq!(volunteers.len(), created.len());
}

#[tokio::test]
async fn test_young_match_uses_young_roles() {
    let club = club(3, 2).await;
    club.add_players(&club.senior_f1, 6, 0).await;
    let game = club
        .store
        .add_match("Tours", &club.season, &club.u19_m, at(2024, 3, 17), true)
        .await;

    let mut rng = StdRng::seed_from_u64(3);
    let created = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
        .await
        .unwrap();

    let role_ids: Vec<i32> = created.iter().map(|r| r.role_id).collect();
    let young_ids: Vec<i32> = club.young_roles.iter().map(|r| r.id).collect();
    assert_eq!(role_ids, young_ids);
}

#[tokio::test]
async fn test_match_section_does_not_volunteer_at_its_own_match() {
    let club = club(2, 0).await;
    // Own section has the lowest points and would otherwise be picked first.
    club.add_players(&club.senior_m1, 5, 0).await;
    club.add_players(&club.senior_m2, 5, 10).await;
    let game = club
        .store
        .add_match("Caen", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
            .await
            .unwrap();
    }

    let requests = club.store.requests().await;
    assert_eq!(requests.len(), 20);

    let candidates = club
        .store
        .candidate_volunteers(club.season.id, &[club.senior_m1.id], Role::Player, 100)
        .await
        .unwrap();
    let own: HashSet<i32> = candidates.iter().map(|v| v.id).collect();
    assert!(requests.iter().all(|r| !own.contains(&r.volunteer_id)));
}

#[tokio::test]
async fn test_only_current_season_players_from_eligible_sections() {
    let club = club(2, 0).await;
    let last_season = club.store.add_season(2022, 2023).await;

    // Not eligible: wrong section, wrong season, administrator.
    club.add_players(&club.u15_m, 5, 0).await;
    for i in 0..5 {
        club.store
            .add_player(&format!("old-{}", i), &club.u19_f, &last_season, 0)
            .await;
    }
    club.store
        .add_volunteer(Volunteer {
            id: 0,
            first_name: "Ada".into(),
            last_name: "Admin".into(),
            email: "ada@example.org".into(),
            phone: String::new(),
            birthdate: None,
            role: Some(Role::Administrator),
            section_id: Some(club.u19_f.id),
            season_id: Some(club.season.id),
            points: 0,
        })
        .await;

    // Eligible, but with more points than everyone above.
    club.add_players(&club.u19_f, 2, 50).await;

    let game = club
        .store
        .add_match("Brest", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    let mut rng = StdRng::seed_from_u64(11);
    let created = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
        .await
        .unwrap();

    let eligible = club
        .store
        .candidate_volunteers(club.season.id, &[club.u19_f.id], Role::Player, 100)
        .await
        .unwrap();
    let eligible: HashSet<i32> = eligible.iter().map(|v| v.id).collect();

    assert_eq!(eligible.len(), 2);
    let picked: HashSet<i32> = created.iter().map(|r| r.volunteer_id).collect();
    assert_eq!(picked, eligible);
}

#[tokio::test]
async fn test_shortlist_keeps_lowest_points_up_to_role_count() {
    // 5 roles in total, 2 of them senior: only the 5 lowest balances qualify.
    let club = club(2, 3).await;
    club.add_players(&club.u19_f, 10, 0).await;
    let game = club
        .store
        .add_match("Metz", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    let shortlist = club
        .store
        .candidate_volunteers(club.season.id, &[club.u19_f.id], Role::Player, 5)
        .await
        .unwrap();
    let allowed: HashSet<i32> = shortlist.iter().map(|v| v.id).collect();
    assert!(shortlist.iter().all(|v| v.points < 5));

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let created = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
            .await
            .unwrap();
        assert_eq!(created.len(), 2);
        assert!(created.iter().all(|r| allowed.contains(&r.volunteer_id)));
    }
}

#[tokio::test]
async fn test_shortlist_is_shuffled() {
    let club = club(1, 4).await;
    club.add_players(&club.u19_f, 5, 0).await;
    let game = club
        .store
        .add_match("Nice", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    let mut picked = HashSet::new();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let created = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
            .await
            .unwrap();
        picked.insert(created[0].volunteer_id);
    }

    assert!(picked.len() > 1, "the same volunteer was always picked");
}

#[tokio::test]
async fn test_insufficient_candidates_creates_nothing() {
    let club = club(3, 0).await;
    club.add_players(&club.u19_f, 2, 0).await;
    let game = club
        .store
        .add_match("Pau", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    let mut rng = StdRng::seed_from_u64(5);
    let result = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng).await;

    match result {
        Err(AppError::InsufficientCandidates {
            match_id,
            needed,
            available,
        }) => {
            assert_eq!(match_id, game.id);
            assert_eq!(needed, 3);
            assert_eq!(available, 2);
        }
        other => panic!("expected InsufficientCandidates, got {:?}", other),
    }
    assert!(club.store.requests().await.is_empty());
}

#[tokio::test]
async fn test_storage_failure_rolls_back_whole_batch() {
    let club = club(3, 0).await;
    club.add_players(&club.u19_f, 5, 0).await;
    let game = club
        .store
        .add_match("Albi", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    club.store.fail_insert_at(Some(2)).await;
    let mut rng = StdRng::seed_from_u64(9);
    let result = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng).await;

    assert!(matches!(result, Err(AppError::DatabaseError(_))));
    assert!(club.store.requests().await.is_empty());

    club.store.fail_insert_at(None).await;
    let created = generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
        .await
        .unwrap();
    assert_eq!(created.len(), 3);
}

#[tokio::test]
async fn test_missing_current_season_fails() {
    let club = club(1, 0).await;
    club.add_players(&club.u19_f, 3, 0).await;
    let game = club
        .store
        .add_match("Laval", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;

    // September 2024 belongs to 2024/2025, which does not exist.
    let clock = volunteer_scheduler::clock::FixedClock(at(2024, 9, 10));
    let mut rng = StdRng::seed_from_u64(2);
    let result = generate_volunteering_requests(&club.store, &clock, &game, &mut rng).await;

    assert!(matches!(
        result,
        Err(AppError::SeasonLookup {
            start: 2024,
            stop: 2025,
            found: 0
        })
    ));
    assert!(club.store.requests().await.is_empty());
}

#[tokio::test]
async fn test_batch_reports_each_match() {
    let club = club(2, 0).await;
    club.add_players(&club.u19_f, 4, 0).await;
    let home = club
        .store
        .add_match("Vannes", &club.season, &club.senior_m1, at(2024, 3, 16), true)
        .await;
    let away = club
        .store
        .add_match("Rennes", &club.season, &club.senior_m2, at(2024, 3, 16), false)
        .await;

    let mut rng = StdRng::seed_from_u64(4);
    let outcomes =
        generate_for_matches(&club.store, &march_clock(), &[home.id, away.id, 9999], &mut rng)
            .await;

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].match_id, home.id);
    assert_eq!(outcomes[0].created, Some(2));
    assert_eq!(outcomes[1].created, Some(0));
    assert!(outcomes[1].error.is_none());
    assert_eq!(outcomes[2].created, None);
    assert!(outcomes[2].error.as_deref().unwrap().contains("9999"));

    assert_eq!(club.store.requests().await.len(), 2);
}

#[tokio::test]
async fn test_requests_for_match_ordered_by_role() {
    let club = club(3, 0).await;
    club.add_players(&club.u19_f, 3, 0).await;
    let game = club
        .store
        .add_match("Sète", &club.season, &club.senior_f1, at(2024, 3, 16), true)
        .await;

    let mut rng = StdRng::seed_from_u64(8);
    generate_volunteering_requests(&club.store, &march_clock(), &game, &mut rng)
        .await
        .unwrap();

    let details = club.store.requests_for_match(game.id).await.unwrap();
    let names: Vec<&str> = details.iter().map(|d| d.role_name.as_str()).collect();
    assert_eq!(names, ["Senior duty 0", "Senior duty 1", "Senior duty 2"]);
    assert!(details.iter().all(|d| d.volunteer_name.ends_with("-19 F")));
}
