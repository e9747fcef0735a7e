use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::{REFRESH_COOKIE_NAME, REFRESH_COOKIE_PATH};

/// Create the cookie carrying a freshly minted refresh token.
///
/// The cookie is scoped to the refresh endpoint so the browser only sends
/// it where it is needed.
pub fn refresh_cookie(refresh_token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, refresh_token))
        .path(REFRESH_COOKIE_PATH) // only sent to the refresh endpoint
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_seconds))
        .build()
}

/// Create the cookie that instructs the browser to drop the refresh token.
///
/// Logout is client-side only: the token itself stays valid until its TTL
/// runs out, the browser just stops holding it.
pub fn refresh_removal_cookie() -> Cookie<'static> {
    let mut cookie = refresh_cookie(String::new(), 0);
    cookie.make_removal();
    cookie
}
