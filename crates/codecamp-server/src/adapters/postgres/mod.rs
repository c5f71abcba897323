//! PostgreSQL Repository Implementations

mod camp_repository;

pub use camp_repository::PgCampRepository;
