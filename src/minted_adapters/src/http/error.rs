use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use minted_application::{
    ActivateError, ForgotPasswordError, LoginError, RefreshSessionError, RegisterError,
    ResetPasswordError, UpdateProfileError, UpdateRoleError,
};
use minted_core::{EmailError, PasswordError, PasswordHashError, TokenError, UserStoreError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API-level error taxonomy. Every failure that can leave the service maps
/// onto exactly one of these variants, and every variant maps onto exactly
/// one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("This email already exists")]
    DuplicateEmail,

    #[error("Password is incorrect")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Please login now!")]
    SessionExpired,

    #[error("Invalid authentication")]
    Unauthorized,

    #[error("Admin resources access denied")]
    Forbidden,

    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::WeakPassword => StatusCode::BAD_REQUEST,

            ApiError::DuplicateEmail => StatusCode::CONFLICT,

            ApiError::InvalidCredentials
            | ApiError::TokenExpired
            | ApiError::TokenInvalid
            | ApiError::SessionExpired
            | ApiError::Unauthorized => StatusCode::UNAUTHORIZED,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            ApiError::Forbidden => StatusCode::FORBIDDEN,

            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::Empty => ApiError::Validation(error.to_string()),
            PasswordError::TooShort => ApiError::WeakPassword,
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => ApiError::TokenExpired,
            TokenError::Invalid => ApiError::TokenInvalid,
            TokenError::Unexpected(e) => ApiError::Internal(e),
        }
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::DuplicateEmail,
            UserStoreError::UserNotFound => ApiError::NotFound(error.to_string()),
            UserStoreError::UnexpectedError(e) => ApiError::Internal(e),
        }
    }
}

impl From<PasswordHashError> for ApiError {
    fn from(error: PasswordHashError) -> Self {
        match error {
            PasswordHashError::Mismatch => ApiError::InvalidCredentials,
            PasswordHashError::UnexpectedError(e) => ApiError::Internal(e),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::MissingFields => ApiError::Validation(error.to_string()),
            RegisterError::InvalidEmail(e) => e.into(),
            RegisterError::DuplicateEmail => ApiError::DuplicateEmail,
            RegisterError::WeakPassword(e) => e.into(),
            RegisterError::HashError(e) => e.into(),
            RegisterError::TokenError(e) => e.into(),
            RegisterError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<ActivateError> for ApiError {
    fn from(error: ActivateError) -> Self {
        match error {
            ActivateError::TokenError(e) => e.into(),
            ActivateError::InvalidEmail(e) => e.into(),
            ActivateError::DuplicateEmail => ApiError::DuplicateEmail,
            ActivateError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UnknownEmail => ApiError::NotFound(error.to_string()),
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::TokenError(e) => e.into(),
            LoginError::UserStoreError(e) => e.into(),
            LoginError::HashError(e) => e.into(),
        }
    }
}

impl From<RefreshSessionError> for ApiError {
    fn from(error: RefreshSessionError) -> Self {
        match error {
            RefreshSessionError::SessionExpired => ApiError::SessionExpired,
            RefreshSessionError::TokenError(e) => e.into(),
        }
    }
}

impl From<ForgotPasswordError> for ApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::UnknownEmail => ApiError::NotFound(error.to_string()),
            ForgotPasswordError::TokenError(e) => e.into(),
            ForgotPasswordError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<ResetPasswordError> for ApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::WeakPassword(e) => e.into(),
            ResetPasswordError::HashError(e) => e.into(),
            ResetPasswordError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateProfileError> for ApiError {
    fn from(error: UpdateProfileError) -> Self {
        match error {
            UpdateProfileError::UserStoreError(e) => e.into(),
        }
    }
}

impl From<UpdateRoleError> for ApiError {
    fn from(error: UpdateRoleError) -> Self {
        match error {
            UpdateRoleError::UserNotFound => ApiError::NotFound(error.to_string()),
            UpdateRoleError::UserStoreError(e) => e.into(),
        }
    }
}
