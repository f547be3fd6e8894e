//! Repository implementations that need no external service

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
