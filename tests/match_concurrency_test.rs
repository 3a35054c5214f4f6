use futures::future::join_all;
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_match, fetch_match_data, spawn_app, spawn_app_with_postgres, TestApp};

const CALLERS: usize = 8;
const GOALS_PER_CALLER: usize = 10;

async fn register_goals_concurrently(test_app: &TestApp, match_id: i64) {
    let goal_url = format!("{}/goal", test_app.match_url(match_id));

    let callers = (0..CALLERS).map(|_| {
        let client = Client::new();
        let goal_url = goal_url.clone();
        tokio::spawn(async move {
            for _ in 0..GOALS_PER_CALLER {
                let response = client
                    .patch(&goal_url)
                    .json(&json!({ "side": "home" }))
                    .send()
                    .await
                    .expect("Failed to register goal.");
                assert_eq!(response.status().as_u16(), 200);
            }
        })
    });

    for result in join_all(callers).await {
        result.expect("Goal caller panicked");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_goals_are_never_lost() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let match_id = create_match(&client, &test_app, "Real Madrid", "Barcelona").await;

    register_goals_concurrently(&test_app, match_id).await;

    let fetched = fetch_match_data(&client, &test_app, match_id).await;
    assert_eq!(fetched["score_home"], (CALLERS * GOALS_PER_CALLER) as i64);
    assert_eq!(fetched["score_away"], 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires a running Postgres instance"]
async fn concurrent_goals_are_never_lost_in_postgres() {
    let test_app = spawn_app_with_postgres().await;
    let client = Client::new();
    let match_id = create_match(&client, &test_app, "Real Madrid", "Barcelona").await;

    register_goals_concurrently(&test_app, match_id).await;

    let fetched = fetch_match_data(&client, &test_app, match_id).await;
    assert_eq!(fetched["score_home"], (CALLERS * GOALS_PER_CALLER) as i64);
}
