pub mod cookies;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

pub use cookies::{refresh_cookie, refresh_removal_cookie};
pub use error::{ApiError, ErrorResponse};
pub use extractors::{AuthenticatedUser, RequireAdmin};
pub use state::AppState;
