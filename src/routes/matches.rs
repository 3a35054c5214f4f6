// src/routes/matches.rs
use actix_web::{delete, get, post, put, route, web, HttpResponse, Result};

use crate::handlers::match_handler;
use crate::models::matches::{
    CardColor, CreateMatchRequest, ExtraTimeRequest, GoalRequest, ReplaceMatchRequest,
    ScoreRequest,
};
use crate::services::match_service::MatchService;

/// Create a new match
#[post("")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, service).await
}

/// Get all matches
#[get("")]
async fn list_matches(
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::list_matches(service).await
}

/// Get specific match by ID
#[get("/{match_id}")]
async fn get_match(
    path: web::Path<i32>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, service).await
}

/// Replace every field of a match
#[put("/{match_id}")]
async fn replace_match(
    path: web::Path<i32>,
    request: web::Json<ReplaceMatchRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::replace_match(match_id, request, service).await
}

#[delete("/{match_id}")]
async fn delete_match(
    path: web::Path<i32>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::delete_match(match_id, service).await
}

/// Add one goal to the home or away side
#[route("/{match_id}/goal", method = "PATCH", method = "POST")]
async fn register_goal(
    path: web::Path<i32>,
    request: web::Json<GoalRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::register_goal(match_id, request, service).await
}

/// Overwrite both scores
#[put("/{match_id}/score")]
async fn set_score(
    path: web::Path<i32>,
    request: web::Json<ScoreRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::set_score(match_id, request, service).await
}

#[route("/{match_id}/yellow-card", method = "PATCH", method = "POST")]
async fn register_yellow_card(
    path: web::Path<i32>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::register_card(match_id, CardColor::Yellow, service).await
}

#[route("/{match_id}/red-card", method = "PATCH", method = "POST")]
async fn register_red_card(
    path: web::Path<i32>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::register_card(match_id, CardColor::Red, service).await
}

#[route("/{match_id}/extra-time", method = "PATCH", method = "POST")]
async fn set_extra_time(
    path: web::Path<i32>,
    request: web::Json<ExtraTimeRequest>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::set_extra_time(match_id, request, service).await
}
