use axum::{Json, response::IntoResponse};
use axum_extra::extract::CookieJar;

use super::MessageResponse;
use crate::http::cookies::refresh_removal_cookie;

/// Logout only clears the cookie on the client. Nothing is revoked server
/// side, so a refresh token captured before logout keeps working until its
/// TTL runs out.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(refresh_removal_cookie());

    (
        jar,
        Json(MessageResponse {
            msg: String::from("Logged out."),
        }),
    )
}
