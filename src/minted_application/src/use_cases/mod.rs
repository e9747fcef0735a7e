pub mod activate;
pub mod forgot_password;
pub mod login;
pub mod refresh_session;
pub mod register;
pub mod reset_password;
pub mod update_profile;
pub mod update_role;

// Re-export for convenience
pub use activate::{ActivateError, ActivateUseCase};
pub use forgot_password::{ForgotPasswordError, ForgotPasswordUseCase};
pub use login::{LoginError, LoginUseCase};
pub use refresh_session::{RefreshSessionError, RefreshSessionUseCase};
pub use register::{RegisterError, RegisterUseCase};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
pub use update_role::{UpdateRoleError, UpdateRoleUseCase};
