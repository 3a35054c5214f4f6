use actix_web::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Match {0} not found")]
    NotFound(i32),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl MatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MatchError::BadRequest(_) => StatusCode::BAD_REQUEST,
            MatchError::NotFound(_) => StatusCode::NOT_FOUND,
            MatchError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type MatchResult<T> = Result<T, MatchError>;

/// Maps the rows-affected count of an id-scoped mutation to `NotFound`.
pub fn require_affected(rows_affected: u64, match_id: i32) -> MatchResult<()> {
    if rows_affected == 0 {
        return Err(MatchError::NotFound(match_id));
    }
    Ok(())
}
