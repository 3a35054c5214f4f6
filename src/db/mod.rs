pub mod match_queries;
pub mod match_repository;
pub mod memory;

pub use match_queries::PgMatchRepository;
pub use match_repository::MatchRepository;
pub use memory::InMemoryMatchRepository;
