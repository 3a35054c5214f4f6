pub mod backend_health_handler;
pub mod match_handler;
pub mod request_errors;
