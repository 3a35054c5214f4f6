use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// One football fixture: teams, score, cards and extra time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Match {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub match_date: Option<DateTime<Utc>>,
    pub score_home: i32,
    pub score_away: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub extra_time: i32,
}

/// Body of `POST /api/matches`. Counters are always zeroed on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/matches/{id}`: every column except the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceMatchRequest {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
    pub score_home: i32,
    pub score_away: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub extra_time: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn score_column(&self) -> &'static str {
        match self {
            Side::Home => "score_home",
            Side::Away => "score_away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Yellow,
    Red,
}

impl CardColor {
    pub fn card_column(&self) -> &'static str {
        match self {
            CardColor::Yellow => "yellow_cards",
            CardColor::Red => "red_cards",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardColor::Yellow => write!(f, "yellow"),
            CardColor::Red => write!(f, "red"),
        }
    }
}

/// Body of the goal endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRequest {
    pub side: Side,
}

/// Body of `PUT /api/matches/{id}/score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub score_home: i32,
    pub score_away: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraTimeRequest {
    pub extra_time: i32,
}
