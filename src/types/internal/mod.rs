// Internal types shared between API, service and store layers
pub mod auth;
pub mod client;
pub mod context;

pub use context::RequestContext;
