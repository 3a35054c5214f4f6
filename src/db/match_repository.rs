use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MatchResult;
use crate::models::matches::{CardColor, Match, ReplaceMatchRequest, Side};

/// Store access for matches.
///
/// Every operation is a single round-trip to the store. Counter mutations
/// are applied store-side (`column = column + 1`) so concurrent callers
/// never lose updates; implementations must not fetch-then-write counters.
/// Id-scoped mutations report `MatchError::NotFound` when no row was touched.
#[async_trait]
pub trait MatchRepository: Send + Sync + 'static {
    /// Inserts a new match with every counter at 0.
    async fn create(
        &self,
        home_team: &str,
        away_team: &str,
        match_date: Option<DateTime<Utc>>,
    ) -> MatchResult<Match>;

    async fn get_by_id(&self, match_id: i32) -> MatchResult<Match>;

    /// All matches ordered by id ascending. Empty when none exist.
    async fn list_all(&self) -> MatchResult<Vec<Match>>;

    /// Full-row overwrite. Never inserts.
    async fn replace(&self, match_id: i32, replacement: &ReplaceMatchRequest) -> MatchResult<()>;

    async fn delete(&self, match_id: i32) -> MatchResult<()>;

    async fn increment_score(&self, match_id: i32, side: Side) -> MatchResult<()>;

    async fn increment_card(&self, match_id: i32, color: CardColor) -> MatchResult<()>;

    /// Overwrites both score columns in one statement.
    async fn set_score(&self, match_id: i32, score_home: i32, score_away: i32) -> MatchResult<()>;

    /// Overwrites `extra_time`. Callers reject negative minutes beforehand.
    async fn set_extra_time(&self, match_id: i32, minutes: i32) -> MatchResult<()>;
}
