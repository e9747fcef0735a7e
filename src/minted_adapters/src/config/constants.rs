/// Name of the cookie carrying the refresh token.
pub const REFRESH_COOKIE_NAME: &str = "refreshtoken";

/// The refresh cookie is scoped to the refresh endpoint so browsers never
/// attach it anywhere else.
pub const REFRESH_COOKIE_PATH: &str = "/refresh_token";

// Token lifetimes per kind
pub const ACTIVATION_TOKEN_TTL_SECONDS: i64 = 5 * 60;
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;
pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

pub const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:3000";
