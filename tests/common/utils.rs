use secrecy::ExposeSecret;
use serde_json::{json, Value};
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use std::sync::Arc;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use la_liga_backend::run;
use la_liga_backend::config::settings::{get_config, DatabaseSettings};
use la_liga_backend::db::{InMemoryMatchRepository, MatchRepository, PgMatchRepository};
use la_liga_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub address: String,
    pub db_pool: Option<PgPool>,
}

impl TestApp {
    pub fn matches_url(&self) -> String {
        format!("{}/api/matches", self.address)
    }

    pub fn match_url(&self, match_id: i64) -> String {
        format!("{}/api/matches/{}", self.address, match_id)
    }
}

/// Spawns the server backed by the in-memory repository.
pub async fn spawn_app() -> TestApp {
    let repository: Arc<dyn MatchRepository> = Arc::new(InMemoryMatchRepository::new());
    let address = spawn_server(repository);
    TestApp {
        address,
        db_pool: None
    }
}

/// Spawns the server against a fresh, migrated Postgres database.
pub async fn spawn_app_with_postgres() -> TestApp {
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database)
        .await;
    let repository: Arc<dyn MatchRepository> =
        Arc::new(PgMatchRepository::new(connection_pool.clone()));
    let address = spawn_server(repository);
    TestApp {
        address,
        db_pool: Some(connection_pool)
    }
}

fn spawn_server(repository: Arc<dyn MatchRepository>) -> String {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let server = run(listener, repository, Vec::new())
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    format!("http://127.0.0.1:{}", port)
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Creates a match through the API and returns its id.
pub async fn create_match(client: &Client, app: &TestApp, home_team: &str, away_team: &str) -> i64 {
    let response = client
        .post(app.matches_url())
        .json(&json!({
            "home_team": home_team,
            "away_team": away_team
        }))
        .send()
        .await
        .expect("Failed to execute create request.");
    assert_eq!(response.status().as_u16(), 201, "Failed to create match");

    let body: Value = response.json().await.expect("Failed to parse create response");
    body["data"]["id"].as_i64().expect("No id in create response")
}

pub async fn fetch_match(client: &Client, app: &TestApp, match_id: i64) -> reqwest::Response {
    client
        .get(app.match_url(match_id))
        .send()
        .await
        .expect("Failed to execute get request.")
}

pub async fn fetch_match_data(client: &Client, app: &TestApp, match_id: i64) -> Value {
    let response = fetch_match(client, app, match_id).await;
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse match response");
    body["data"].clone()
}
