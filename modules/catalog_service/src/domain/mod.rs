//! Domain layer - business logic and services

pub mod repository;
pub mod seeder;
pub mod service;

pub use repository::{CategoryRepository, ProductRepository, SchemaMigrator};
pub use seeder::Seeder;
pub use service::Service;
