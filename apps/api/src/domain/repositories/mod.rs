pub mod thing_repository;

pub use thing_repository::ThingRepository;
