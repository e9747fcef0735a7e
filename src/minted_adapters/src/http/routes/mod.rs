pub mod activation;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod refresh_token;
pub mod register;
pub mod reset_password;
pub mod update_user;
pub mod user_info;

use secrecy::Secret;
use serde::{Deserialize, Serialize};

pub use activation::{ActivationRequest, activate};
pub use forgot_password::{ForgotPasswordRequest, forgot_password};
pub use login::{LoginRequest, login};
pub use logout::logout;
pub use refresh_token::{AccessTokenResponse, refresh_token};
pub use register::{RegisterRequest, register};
pub use reset_password::{ResetPasswordRequest, reset_password};
pub use update_user::{UpdateProfileRequest, UpdateRoleRequest, update_profile, update_role};
pub use user_info::{all_users, user_info};

/// Body shape shared by every endpoint that only reports an outcome.
#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Serde default for secret request fields; an absent field deserializes to
/// an empty secret and fails the presence check instead of the JSON layer.
pub(crate) fn empty_secret() -> Secret<String> {
    Secret::from(String::new())
}
