use crate::errors::{MatchError, MatchResult};
use crate::models::matches::{CreateMatchRequest, ReplaceMatchRequest};

pub const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Input checks applied before any store call.
pub struct MatchValidator;

impl MatchValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_create_request(&self, request: &CreateMatchRequest) -> MatchResult<()> {
        self.validate_team_name("home_team", &request.home_team)?;
        self.validate_team_name("away_team", &request.away_team)?;
        Ok(())
    }

    pub fn validate_replace_request(&self, request: &ReplaceMatchRequest) -> MatchResult<()> {
        self.validate_team_name("home_team", &request.home_team)?;
        self.validate_team_name("away_team", &request.away_team)?;
        self.validate_counter("score_home", request.score_home)?;
        self.validate_counter("score_away", request.score_away)?;
        self.validate_counter("yellow_cards", request.yellow_cards)?;
        self.validate_counter("red_cards", request.red_cards)?;
        self.validate_counter("extra_time", request.extra_time)?;
        Ok(())
    }

    pub fn validate_team_name(&self, field: &str, name: &str) -> MatchResult<()> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(MatchError::BadRequest(format!("{} cannot be empty", field)));
        }

        if trimmed_name.chars().count() > MAX_TEAM_NAME_LENGTH {
            return Err(MatchError::BadRequest(format!(
                "{} too long (maximum {} characters)",
                field, MAX_TEAM_NAME_LENGTH
            )));
        }

        Ok(())
    }

    /// Scores, cards and extra-time minutes are never negative.
    pub fn validate_counter(&self, field: &str, value: i32) -> MatchResult<()> {
        if value < 0 {
            return Err(MatchError::BadRequest(format!(
                "{} must be non-negative, got {}",
                field, value
            )));
        }
        Ok(())
    }
}

impl Default for MatchValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace_request() -> ReplaceMatchRequest {
        ReplaceMatchRequest {
            home_team: "Real Madrid".into(),
            away_team: "Barcelona".into(),
            match_date: None,
            score_home: 2,
            score_away: 1,
            yellow_cards: 3,
            red_cards: 0,
            extra_time: 4,
        }
    }

    #[test]
    fn blank_team_names_are_rejected() {
        let validator = MatchValidator::new();
        let request = CreateMatchRequest {
            home_team: "   ".into(),
            away_team: "Barcelona".into(),
            match_date: None,
        };

        let err = validator.validate_create_request(&request).unwrap_err();
        assert!(matches!(err, MatchError::BadRequest(ref msg) if msg.contains("home_team")));
    }

    #[test]
    fn overlong_team_names_are_rejected() {
        let validator = MatchValidator::new();
        let name = "x".repeat(MAX_TEAM_NAME_LENGTH + 1);

        assert!(validator.validate_team_name("away_team", &name).is_err());
        assert!(validator.validate_team_name("away_team", &name[1..]).is_ok());
    }

    #[test]
    fn negative_counters_are_rejected() {
        let validator = MatchValidator::new();
        assert!(validator.validate_replace_request(&replace_request()).is_ok());

        let mut request = replace_request();
        request.red_cards = -1;
        let err = validator.validate_replace_request(&request).unwrap_err();
        assert!(matches!(err, MatchError::BadRequest(ref msg) if msg.contains("red_cards")));
    }

    #[test]
    fn zero_is_a_valid_counter() {
        assert!(MatchValidator::new().validate_counter("extra_time", 0).is_ok());
        assert!(MatchValidator::new().validate_counter("extra_time", -5).is_err());
    }
}
