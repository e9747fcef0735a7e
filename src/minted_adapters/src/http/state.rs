/// Shared state handed to every route.
///
/// The ports are generic so the same router serves production adapters and
/// in-memory test doubles. Adapters implement Clone via internal `Arc`s or
/// pooled connections, so cloning the whole state per request is cheap.
#[derive(Clone)]
pub struct AppState<U, H, T, M> {
    pub user_store: U,
    pub password_hasher: H,
    pub token_service: T,
    pub mailer: M,
    pub client_base_url: String,
    pub refresh_ttl_seconds: i64,
}

impl<U, H, T, M> AppState<U, H, T, M> {
    pub fn new(
        user_store: U,
        password_hasher: H,
        token_service: T,
        mailer: M,
        client_base_url: String,
        refresh_ttl_seconds: i64,
    ) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
            mailer,
            client_base_url,
            refresh_ttl_seconds,
        }
    }
}
