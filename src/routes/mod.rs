use actix_web::web;

pub mod backend_health;
pub mod matches;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Match routes (no authentication, any caller may mutate any match)
    cfg.service(
        web::scope("/api/matches")
            .service(matches::create_match)
            .service(matches::list_matches)
            .service(matches::get_match)
            .service(matches::replace_match)
            .service(matches::delete_match)
            .service(matches::register_goal)
            .service(matches::set_score)
            .service(matches::register_yellow_card)
            .service(matches::register_red_card)
            .service(matches::set_extra_time)
    );
}
