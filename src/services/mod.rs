pub mod match_service;
pub mod match_validation;

pub use match_service::MatchService;
pub use match_validation::MatchValidator;
