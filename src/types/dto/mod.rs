// API request/response models
pub mod auth;
pub mod client;
pub mod common;
