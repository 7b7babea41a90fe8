// Database entities - SeaORM models
pub mod client;
pub mod trainer;
