use std::sync::Arc;

use crate::db::match_repository::MatchRepository;
use crate::errors::MatchResult;
use crate::models::matches::{
    CardColor, CreateMatchRequest, Match, ReplaceMatchRequest, ScoreRequest, Side,
};
use crate::services::match_validation::MatchValidator;

/// Validates match input and forwards it to the repository.
///
/// Holds no state of its own; every call is one repository round-trip.
#[derive(Clone)]
pub struct MatchService {
    repository: Arc<dyn MatchRepository>,
}

impl MatchService {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_match(&self, request: &CreateMatchRequest) -> MatchResult<Match> {
        MatchValidator::new().validate_create_request(request)?;
        self.repository
            .create(request.home_team.trim(), request.away_team.trim(), request.match_date)
            .await
    }

    pub async fn get_match(&self, match_id: i32) -> MatchResult<Match> {
        self.repository.get_by_id(match_id).await
    }

    pub async fn list_matches(&self) -> MatchResult<Vec<Match>> {
        self.repository.list_all().await
    }

    pub async fn replace_match(&self, match_id: i32, request: &ReplaceMatchRequest) -> MatchResult<()> {
        MatchValidator::new().validate_replace_request(request)?;
        let normalized = ReplaceMatchRequest {
            home_team: request.home_team.trim().to_string(),
            away_team: request.away_team.trim().to_string(),
            ..request.clone()
        };
        self.repository.replace(match_id, &normalized).await
    }

    pub async fn delete_match(&self, match_id: i32) -> MatchResult<()> {
        self.repository.delete(match_id).await
    }

    pub async fn register_goal(&self, match_id: i32, side: Side) -> MatchResult<()> {
        self.repository.increment_score(match_id, side).await
    }

    pub async fn register_card(&self, match_id: i32, color: CardColor) -> MatchResult<()> {
        self.repository.increment_card(match_id, color).await
    }

    pub async fn set_score(&self, match_id: i32, request: &ScoreRequest) -> MatchResult<()> {
        let validator = MatchValidator::new();
        validator.validate_counter("score_home", request.score_home)?;
        validator.validate_counter("score_away", request.score_away)?;
        self.repository
            .set_score(match_id, request.score_home, request.score_away)
            .await
    }

    pub async fn set_extra_time(&self, match_id: i32, minutes: i32) -> MatchResult<()> {
        MatchValidator::new().validate_counter("extra_time", minutes)?;
        self.repository.set_extra_time(match_id, minutes).await
    }
}
