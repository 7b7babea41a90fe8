// Stores layer - Data access and repository pattern
pub mod client_store;
pub mod trainer_store;

pub use client_store::ClientStore;
pub use trainer_store::TrainerStore;
