use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::db::match_repository::MatchRepository;
use crate::errors::{MatchError, MatchResult};
use crate::models::matches::{CardColor, Match, ReplaceMatchRequest, Side};

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    rows: BTreeMap<i32, Match>,
}

/// Process-local repository used as a test double for the Postgres store.
///
/// Each operation runs under a single lock acquisition, which gives the
/// same per-row atomicity as a single SQL statement. Ids come from a
/// monotonic counter and are never handed out twice.
#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update_row<F>(&self, match_id: i32, apply: F) -> MatchResult<()>
    where
        F: FnOnce(&mut Match),
    {
        let mut state = self.lock();
        let row = state
            .rows
            .get_mut(&match_id)
            .ok_or(MatchError::NotFound(match_id))?;
        apply(row);
        Ok(())
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn create(
        &self,
        home_team: &str,
        away_team: &str,
        match_date: Option<DateTime<Utc>>,
    ) -> MatchResult<Match> {
        let mut state = self.lock();
        state.last_id += 1;
        let created = Match {
            id: state.last_id,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            match_date,
            score_home: 0,
            score_away: 0,
            yellow_cards: 0,
            red_cards: 0,
            extra_time: 0,
        };
        state.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, match_id: i32) -> MatchResult<Match> {
        self.lock()
            .rows
            .get(&match_id)
            .cloned()
            .ok_or(MatchError::NotFound(match_id))
    }

    async fn list_all(&self) -> MatchResult<Vec<Match>> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn replace(&self, match_id: i32, replacement: &ReplaceMatchRequest) -> MatchResult<()> {
        self.update_row(match_id, |row| {
            row.home_team = replacement.home_team.clone();
            row.away_team = replacement.away_team.clone();
            row.match_date = replacement.match_date;
            row.score_home = replacement.score_home;
            row.score_away = replacement.score_away;
            row.yellow_cards = replacement.yellow_cards;
            row.red_cards = replacement.red_cards;
            row.extra_time = replacement.extra_time;
        })
    }

    async fn delete(&self, match_id: i32) -> MatchResult<()> {
        self.lock()
            .rows
            .remove(&match_id)
            .map(|_| ())
            .ok_or(MatchError::NotFound(match_id))
    }

    async fn increment_score(&self, match_id: i32, side: Side) -> MatchResult<()> {
        self.update_row(match_id, |row| match side {
            Side::Home => row.score_home += 1,
            Side::Away => row.score_away += 1,
        })
    }

    async fn increment_card(&self, match_id: i32, color: CardColor) -> MatchResult<()> {
        self.update_row(match_id, |row| match color {
            CardColor::Yellow => row.yellow_cards += 1,
            CardColor::Red => row.red_cards += 1,
        })
    }

    async fn set_score(&self, match_id: i32, score_home: i32, score_away: i32) -> MatchResult<()> {
        self.update_row(match_id, |row| {
            row.score_home = score_home;
            row.score_away = score_away;
        })
    }

    async fn set_extra_time(&self, match_id: i32, minutes: i32) -> MatchResult<()> {
        self.update_row(match_id, |row| row.extra_time = minutes)
    }
}
