use actix_web::{web, HttpResponse, Result};

use crate::errors::MatchError;
use crate::models::common::ApiResponse;
use crate::models::matches::{
    CardColor, CreateMatchRequest, ExtraTimeRequest, GoalRequest, ReplaceMatchRequest,
    ScoreRequest,
};
use crate::services::match_service::MatchService;

/// Turns a service error into the JSON envelope with the matching status.
pub fn match_error_response(error: &MatchError) -> HttpResponse {
    let status = error.status_code();
    match error {
        MatchError::BadRequest(reason) => {
            tracing::warn!("Rejected match request: {}", reason);
            HttpResponse::build(status).json(ApiResponse::<()>::error(reason.clone()))
        }
        MatchError::NotFound(match_id) => {
            tracing::info!("Match {} not found", match_id);
            HttpResponse::build(status).json(ApiResponse::<()>::error("Match not found"))
        }
        MatchError::Store(e) => {
            tracing::error!("Store error: {}", e);
            HttpResponse::build(status)
                .json(ApiResponse::<()>::error_with_message("Store error", e.to_string()))
        }
    }
}

fn confirmation(result: Result<(), MatchError>, message: &str) -> Result<HttpResponse> {
    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message(message))),
        Err(e) => Ok(match_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Create match",
    skip(request, service),
    fields(
        home_team = %request.home_team,
        away_team = %request.away_team
    )
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match service.create_match(&request).await {
        Ok(created) => {
            tracing::info!("Successfully created match {}", created.id);
            Ok(HttpResponse::Created().json(ApiResponse::success("Match created successfully", created)))
        }
        Err(e) => Ok(match_error_response(&e)),
    }
}

#[tracing::instrument(name = "List matches", skip(service))]
pub async fn list_matches(service: web::Data<MatchService>) -> Result<HttpResponse> {
    match service.list_matches().await {
        Ok(matches) => {
            tracing::info!("Successfully retrieved {} matches", matches.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Matches retrieved successfully", matches)))
        }
        Err(e) => Ok(match_error_response(&e)),
    }
}

#[tracing::instrument(name = "Get match", skip(service), fields(match_id = %match_id))]
pub async fn get_match(match_id: i32, service: web::Data<MatchService>) -> Result<HttpResponse> {
    match service.get_match(match_id).await {
        Ok(found) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match retrieved successfully", found))),
        Err(e) => Ok(match_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Replace match",
    skip(request, service),
    fields(match_id = %match_id)
)]
pub async fn replace_match(
    match_id: i32,
    request: web::Json<ReplaceMatchRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    confirmation(
        service.replace_match(match_id, &request).await,
        "Match updated successfully",
    )
}

#[tracing::instrument(name = "Delete match", skip(service), fields(match_id = %match_id))]
pub async fn delete_match(match_id: i32, service: web::Data<MatchService>) -> Result<HttpResponse> {
    confirmation(service.delete_match(match_id).await, "Match deleted successfully")
}

#[tracing::instrument(
    name = "Register goal",
    skip(request, service),
    fields(match_id = %match_id, side = %request.side)
)]
pub async fn register_goal(
    match_id: i32,
    request: web::Json<GoalRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    confirmation(
        service.register_goal(match_id, request.side).await,
        "Goal registered successfully",
    )
}

#[tracing::instrument(name = "Set score", skip(request, service), fields(match_id = %match_id))]
pub async fn set_score(
    match_id: i32,
    request: web::Json<ScoreRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    confirmation(
        service.set_score(match_id, &request).await,
        "Score updated successfully",
    )
}

#[tracing::instrument(
    name = "Register card",
    skip(service),
    fields(match_id = %match_id, color = %color)
)]
pub async fn register_card(
    match_id: i32,
    color: CardColor,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let message = match color {
        CardColor::Yellow => "Yellow card registered successfully",
        CardColor::Red => "Red card registered successfully",
    };
    confirmation(service.register_card(match_id, color).await, message)
}

#[tracing::instrument(
    name = "Set extra time",
    skip(request, service),
    fields(match_id = %match_id, extra_time = request.extra_time)
)]
pub async fn set_extra_time(
    match_id: i32,
    request: web::Json<ExtraTimeRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    confirmation(
        service.set_extra_time(match_id, request.extra_time).await,
        "Extra time updated successfully",
    )
}
