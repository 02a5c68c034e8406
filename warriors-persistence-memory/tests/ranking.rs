mod common;

use std::time::Duration;

use common::Tournament;
use warriors_app::{
    domain::{
        DisciplineId, TeamResultId,
        discipline::DisciplineKind,
        result::TeamResultRepository,
    },
    error::ServiceError,
};
use warriors_core::ranking::ResultValue;

async fn result_ids(t: &Tournament, discipline_id: DisciplineId) -> Vec<TeamResultId> {
    let mut ids = Vec::new();
    for team in &t.teams {
        let result = t
            .store
            .find_team_result(team.id, discipline_id)
            .await
            .unwrap();
        ids.push(result.id);
    }
    ids
}

async fn petanque_with_points(t: &Tournament, points: [i64; 4]) -> DisciplineId {
    let petanque = t.discipline(DisciplineKind::Petanque).await;
    for (team, points) in t.teams.iter().zip(points) {
        t.app
            .set_result_use_case
            .record_points(team.id, petanque.id, points)
            .await
            .unwrap();
    }
    petanque.id
}

#[tokio::test]
async fn test_hidden_scores_rank_nobody() {
    let t = Tournament::new(4, 0).await;
    let petanque = petanque_with_points(&t, [10, 10, 4, 0]).await;

    for id in result_ids(&t, petanque).await {
        assert_eq!(t.app.ranking_use_case.discipline_ranking(id).await.unwrap(), 0);
        assert_eq!(t.app.ranking_use_case.global_points(id).await.unwrap(), 0);
    }
    assert_eq!(
        t.app
            .ranking_use_case
            .team_total_points(t.teams[0].id)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_ties_share_a_rank() {
    let t = Tournament::new(4, 0).await;
    let petanque = petanque_with_points(&t, [10, 10, 4, 0]).await;
    t.app
        .discipline_reveal_score_use_case
        .set_reveal_score(petanque, true)
        .await
        .unwrap();

    let mut ranks = Vec::new();
    let mut points = Vec::new();
    for id in result_ids(&t, petanque).await {
        ranks.push(t.app.ranking_use_case.discipline_ranking(id).await.unwrap());
        points.push(t.app.ranking_use_case.global_points(id).await.unwrap());
    }
    assert_eq!(ranks, vec![1, 1, 3, 4]);
    assert_eq!(points, vec![6, 6, 3, 1]);

    t.app
        .discipline_reveal_score_use_case
        .set_reveal_score(petanque, false)
        .await
        .unwrap();
    let hidden = t
        .app
        .ranking_use_case
        .discipline_leaderboard(petanque)
        .await
        .unwrap();
    assert!(hidden.iter().all(|s| s.rank == 0 && s.global_points == 0));
}

#[tokio::test]
async fn test_faster_time_ranks_first() {
    let t = Tournament::new(4, 0).await;
    let crossfit = t.discipline(DisciplineKind::Crossfit).await;
    t.app
        .set_result_use_case
        .record_time(t.teams[1].id, crossfit.id, Duration::from_secs(95))
        .await
        .unwrap();
    t.app
        .set_result_use_case
        .record_time(t.teams[0].id, crossfit.id, Duration::from_secs(120))
        .await
        .unwrap();
    t.app
        .discipline_reveal_score_use_case
        .set_reveal_score(crossfit.id, true)
        .await
        .unwrap();

    let leaderboard = t
        .app
        .ranking_use_case
        .discipline_leaderboard(crossfit.id)
        .await
        .unwrap();
    assert_eq!(leaderboard[0].team_id, t.teams[1].id);
    assert_eq!(leaderboard[0].rank, 1);
    assert_eq!(leaderboard[0].value, ResultValue::Time(Duration::from_secs(95)));
    assert_eq!(leaderboard[1].team_id, t.teams[0].id);
    assert_eq!(leaderboard[1].rank, 2);
    assert!(leaderboard[2..].iter().all(|s| s.value == ResultValue::Unset));
}

#[tokio::test]
async fn test_edition_totals_and_team_ranking() {
    let t = Tournament::new(4, 0).await;
    let petanque = petanque_with_points(&t, [10, 10, 4, 0]).await;
    let quiz = t.discipline(DisciplineKind::GeographyQuiz).await;
    for (team, points) in t.teams.iter().zip([1, 2, 3, 4]) {
        t.app
            .set_result_use_case
            .record_points(team.id, quiz.id, points)
            .await
            .unwrap();
    }
    for discipline_id in [petanque, quiz.id] {
        t.app
            .discipline_reveal_score_use_case
            .set_reveal_score(discipline_id, true)
            .await
            .unwrap();
    }

    // petanque: 6 6 3 1, quiz: 1 3 4 6
    let mut totals = Vec::new();
    let mut ranks = Vec::new();
    for team in &t.teams {
        totals.push(t.app.ranking_use_case.team_total_points(team.id).await.unwrap());
        ranks.push(t.app.ranking_use_case.team_ranking(team.id).await.unwrap());
    }
    assert_eq!(totals, vec![7, 9, 7, 7]);
    assert_eq!(ranks, vec![2, 1, 2, 2]);

    let leaderboard = t
        .app
        .ranking_use_case
        .edition_leaderboard(t.edition.id)
        .await
        .unwrap();
    assert_eq!(leaderboard[0].team.id, t.teams[1].id);
    assert_eq!(
        leaderboard.iter().map(|s| s.rank).collect::<Vec<_>>(),
        vec![1, 2, 2, 2]
    );
}

#[tokio::test]
async fn test_manual_results_need_a_matching_discipline() {
    let t = Tournament::new(2, 0).await;
    let rugby = t.discipline(DisciplineKind::Rugby).await;
    let petanque = t.discipline(DisciplineKind::Petanque).await;

    let engine_driven = t
        .app
        .set_result_use_case
        .record_points(t.teams[0].id, rugby.id, 12)
        .await;
    assert!(matches!(engine_driven, Err(ServiceError::Validation(_))));

    let wrong_type = t
        .app
        .set_result_use_case
        .record_time(t.teams[0].id, petanque.id, Duration::from_secs(60))
        .await;
    assert!(matches!(wrong_type, Err(ServiceError::Validation(_))));

    let result = t
        .store
        .find_team_result(t.teams[0].id, petanque.id)
        .await
        .unwrap();
    assert_eq!(result.value, ResultValue::Points(0));
}
