//! # Minted - User Identity Service Library
//!
//! This is a facade crate that re-exports all public APIs from the identity service components.
//! Use this crate to get access to the full registration and session functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! minted = { path = "../minted" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, etc.
//! - **Port traits**: `UserStore`, `PasswordHasher`, `TokenService`, `Mailer`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `JwtTokenService`, `PostmarkMailer`, etc.
//! - **Service**: `IdentityService` - The main entry point for the identity service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use minted_core::*;
}

// Re-export most commonly used core types at the root level
pub use minted_core::{
    Email, Password, PendingRegistration, RequestIdentity, Role, SanitizedUser, SessionClaims,
    TokenError, TokenKind, User,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use minted_core::{
        Mailer, PasswordHashError, PasswordHasher, TokenService, UserStore, UserStoreError,
    };
}

// Re-export port traits at root level
pub use minted_core::{
    Mailer, PasswordHashError, PasswordHasher, TokenService, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use minted_application::*;
}

// Re-export use cases at root level
pub use minted_application::{
    ActivateUseCase, ForgotPasswordUseCase, LoginUseCase, RefreshSessionUseCase, RegisterUseCase,
    ResetPasswordUseCase, UpdateProfileUseCase, UpdateRoleUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, extractors and error mapping
    pub mod http {
        pub use minted_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use minted_adapters::persistence::*;
    }

    /// Mailer implementations
    pub mod email {
        pub use minted_adapters::email::*;
    }

    /// Token signing and password hashing
    pub mod auth {
        pub use minted_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use minted_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use minted_adapters::{
    auth::{Argon2PasswordHasher, JwtTokenService, TokenConfig},
    email::{MockMailer, PostmarkMailer},
    persistence::{InMemoryUserStore, PostgresUserStore},
};

// ============================================================================
// Identity Service (Main Entry Point)
// ============================================================================

/// Main identity service
pub use minted_service::{IdentityService, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
