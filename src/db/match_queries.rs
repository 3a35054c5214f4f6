use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::match_repository::MatchRepository;
use crate::errors::{require_affected, MatchError, MatchResult};
use crate::models::matches::{CardColor, Match, ReplaceMatchRequest, Side};

const MATCH_COLUMNS: &str = "id, home_team, away_team, match_date, score_home, score_away, yellow_cards, red_cards, extra_time";

/// Postgres-backed repository over the `matches` table.
#[derive(Debug, Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs `UPDATE matches SET <column> = <column> + 1` for one row.
    async fn increment_column(&self, match_id: i32, column: &'static str) -> MatchResult<()> {
        // `column` only ever comes from the fixed Side/CardColor mappings.
        let query = format!("UPDATE matches SET {column} = {column} + 1 WHERE id = $1");

        let result = sqlx::query(&query)
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        debug!("Incremented {} for match {}: {} row(s)", column, match_id, result.rows_affected());
        require_affected(result.rows_affected(), match_id)
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    async fn create(
        &self,
        home_team: &str,
        away_team: &str,
        match_date: Option<DateTime<Utc>>,
    ) -> MatchResult<Match> {
        let query = format!(
            r#"
            INSERT INTO matches (
                home_team, away_team, match_date,
                score_home, score_away, yellow_cards, red_cards, extra_time
            ) VALUES ($1, $2, $3, 0, 0, 0, 0, 0)
            RETURNING {MATCH_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Match>(&query)
            .bind(home_team)
            .bind(away_team)
            .bind(match_date)
            .fetch_one(&self.pool)
            .await?;

        info!("Created match {}: {} vs {}", created.id, created.home_team, created.away_team);
        Ok(created)
    }

    async fn get_by_id(&self, match_id: i32) -> MatchResult<Match> {
        let query = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1");

        sqlx::query_as::<_, Match>(&query)
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(MatchError::NotFound(match_id))
    }

    async fn list_all(&self) -> MatchResult<Vec<Match>> {
        let query = format!("SELECT {MATCH_COLUMNS} FROM matches ORDER BY id ASC");

        let matches = sqlx::query_as::<_, Match>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(matches)
    }

    async fn replace(&self, match_id: i32, replacement: &ReplaceMatchRequest) -> MatchResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE matches SET
                home_team = $1,
                away_team = $2,
                match_date = $3,
                score_home = $4,
                score_away = $5,
                yellow_cards = $6,
                red_cards = $7,
                extra_time = $8
            WHERE id = $9
            "#,
        )
        .bind(&replacement.home_team)
        .bind(&replacement.away_team)
        .bind(replacement.match_date)
        .bind(replacement.score_home)
        .bind(replacement.score_away)
        .bind(replacement.yellow_cards)
        .bind(replacement.red_cards)
        .bind(replacement.extra_time)
        .bind(match_id)
        .execute(&self.pool)
        .await?;

        require_affected(result.rows_affected(), match_id)
    }

    async fn delete(&self, match_id: i32) -> MatchResult<()> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        require_affected(result.rows_affected(), match_id)
    }

    async fn increment_score(&self, match_id: i32, side: Side) -> MatchResult<()> {
        self.increment_column(match_id, side.score_column()).await
    }

    async fn increment_card(&self, match_id: i32, color: CardColor) -> MatchResult<()> {
        self.increment_column(match_id, color.card_column()).await
    }

    async fn set_score(&self, match_id: i32, score_home: i32, score_away: i32) -> MatchResult<()> {
        let result = sqlx::query("UPDATE matches SET score_home = $1, score_away = $2 WHERE id = $3")
            .bind(score_home)
            .bind(score_away)
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        require_affected(result.rows_affected(), match_id)
    }

    async fn set_extra_time(&self, match_id: i32, minutes: i32) -> MatchResult<()> {
        let result = sqlx::query("UPDATE matches SET extra_time = $1 WHERE id = $2")
            .bind(minutes)
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        require_affected(result.rows_affected(), match_id)
    }
}
