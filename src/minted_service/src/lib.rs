pub mod helpers;
pub mod identity_service;
pub mod tracing;

pub use helpers::get_postgres_pool;
pub use identity_service::IdentityService;
