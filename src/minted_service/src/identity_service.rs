use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, patch, post},
};
use minted_adapters::{
    config::AllowedOrigins,
    http::{
        AppState,
        routes::{
            activate, all_users, forgot_password, login, logout, refresh_token, register,
            reset_password, update_profile, update_role, user_info,
        },
    },
};
use minted_core::{Mailer, PasswordHasher, TokenService, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The assembled identity service: every route mounted on a single router
/// over one shared state.
pub struct IdentityService {
    router: Router,
}

impl IdentityService {
    /// Build the router over the given state.
    ///
    /// The ports are generic so production adapters and in-memory test
    /// doubles assemble through the same code path.
    pub fn new<U, H, T, M>(state: AppState<U, H, T, M>) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenService + Clone + 'static,
        M: Mailer + Clone + 'static,
    {
        let router = Router::new()
            .route("/register", post(register::<U, H, T, M>))
            .route("/activation", post(activate::<U, H, T, M>))
            .route("/login", post(login::<U, H, T, M>))
            .route("/logout", post(logout))
            .route("/refresh_token", post(refresh_token::<U, H, T, M>))
            .route("/forgot", post(forgot_password::<U, H, T, M>))
            .route("/reset", post(reset_password::<U, H, T, M>))
            .route("/info", get(user_info::<U, H, T, M>))
            .route("/all", get(all_users::<U, H, T, M>))
            .route("/update", patch(update_profile::<U, H, T, M>))
            .route("/update_role/{id}", patch(update_role::<U, H, T, M>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another
    /// application, optionally restricted to the given CORS origins.
    pub fn into_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }

        self.with_trace_layer().router
    }

    /// Run the service as a standalone server on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Identity service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
