mod common;

use common::Tournament;
use warriors_app::{
    domain::{
        DisciplineId, TeamId, blindtest::GuessWrite, discipline::DisciplineKind,
        result::TeamResultRepository,
    },
    error::ServiceError,
};
use warriors_core::{ranking::ResultValue, scoring::blindtest::GuessFlags};

async fn points(t: &Tournament, team_id: TeamId, discipline_id: DisciplineId) -> ResultValue {
    t.store
        .find_team_result(team_id, discipline_id)
        .await
        .unwrap()
        .value
}

#[tokio::test]
async fn test_toggling_a_flag_is_net_zero() {
    let t = Tournament::new(2, 0).await;
    let blindtest = t.discipline(DisciplineKind::Blindtest).await;
    let round = t.app.blindtest_use_case.create_round(blindtest.id).await.unwrap();
    assert_eq!(round.order, 0);

    let team_id = t.teams[0].id;

    let guess = GuessWrite {
        id: None,
        round_id: round.id,
        team_id,
        artist: "Daft Punk".to_string(),
        song: "Around the World".to_string(),
        flags: GuessFlags::new(true, false),
        is_active: true,
    };
    let stored = t.app.blindtest_use_case.record_guess(guess.clone()).await.unwrap();
    assert_eq!(points(&t, team_id, blindtest.id).await, ResultValue::Points(1));

    let edit = GuessWrite {
        id: Some(stored.id),
        ..guess
    };
    t.app
        .blindtest_use_case
        .record_guess(GuessWrite {
            flags: GuessFlags::new(false, false),
            ..edit.clone()
        })
        .await
        .unwrap();
    assert_eq!(points(&t, team_id, blindtest.id).await, ResultValue::Points(0));

    t.app
        .blindtest_use_case
        .record_guess(GuessWrite {
            flags: GuessFlags::new(true, true),
            ..edit.clone()
        })
        .await
        .unwrap();
    assert_eq!(points(&t, team_id, blindtest.id).await, ResultValue::Points(2));

    t.app
        .blindtest_use_case
        .record_guess(GuessWrite {
            is_active: false,
            ..edit
        })
        .await
        .unwrap();
    assert_eq!(points(&t, team_id, blindtest.id).await, ResultValue::Points(0));
}

#[tokio::test]
async fn test_rounds_are_appended_in_order() {
    let t = Tournament::new(2, 0).await;
    let blindtest = t.discipline(DisciplineKind::Blindtest).await;
    for expected in 0..3 {
        let round = t.app.blindtest_use_case.create_round(blindtest.id).await.unwrap();
        assert_eq!(round.order, expected);
    }
}

#[tokio::test]
async fn test_guess_cannot_move_to_another_team() {
    let t = Tournament::new(2, 0).await;
    let blindtest = t.discipline(DisciplineKind::Blindtest).await;
    let round = t.app.blindtest_use_case.create_round(blindtest.id).await.unwrap();

    let stored = t
        .app
        .blindtest_use_case
        .record_guess(GuessWrite {
            id: None,
            round_id: round.id,
            team_id: t.teams[0].id,
            artist: "Queen".to_string(),
            song: String::new(),
            flags: GuessFlags::new(true, false),
            is_active: true,
        })
        .await
        .unwrap();

    let result = t
        .app
        .blindtest_use_case
        .record_guess(GuessWrite {
            id: Some(stored.id),
            round_id: round.id,
            team_id: t.teams[1].id,
            artist: "Queen".to_string(),
            song: String::new(),
            flags: GuessFlags::new(true, true),
            is_active: true,
        })
        .await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert_eq!(
        points(&t, t.teams[1].id, blindtest.id).await,
        ResultValue::Points(0)
    );
}

#[tokio::test]
async fn test_rounds_only_exist_for_blindtests() {
    let t = Tournament::new(2, 0).await;
    let crossfit = t.discipline(DisciplineKind::Crossfit).await;
    let result = t.app.blindtest_use_case.create_round(crossfit.id).await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}
