use crate::helpers::{TestApp, error_message, random_email, success_message, token_config};
use minted_adapters::JwtTokenService;
use minted_core::{DEFAULT_AVATAR_URL, SessionClaims, TokenKind, TokenService};
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
async fn test_info_returns_the_account_without_password_material() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;
    let access_token = app.access_token(&email, "password123").await;

    let response = app.get_info(&access_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Test User");
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["role"], "user");
    assert_eq!(body["avatar"], DEFAULT_AVATAR_URL);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_info_without_a_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/info", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid authentication");
}

#[tokio::test]
async fn test_info_reports_an_expired_token_distinctly() {
    let app = TestApp::new().await;

    // Same access secret, but the token is already past its lifetime
    let mut expired_config = token_config();
    expired_config.access.ttl_seconds = -60;
    let expired_service = JwtTokenService::new(expired_config);
    let expired_token = expired_service
        .issue(TokenKind::Access, &SessionClaims::new(Uuid::new_v4()))
        .unwrap();

    let response = app.get_info(&expired_token).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Token has expired");
}

#[tokio::test]
async fn test_info_rejects_a_tampered_token_as_invalid() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;
    let access_token = app.access_token(&email, "password123").await;

    let mut tampered = access_token.into_bytes();
    let index = tampered.len() / 2;
    tampered[index] = if tampered[index] == b'x' { b'y' } else { b'x' };
    let tampered = String::from_utf8(tampered).unwrap();

    let response = app.get_info(&tampered).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid token");
}

#[tokio::test]
async fn test_all_is_denied_for_a_regular_account() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;
    let access_token = app.access_token(&email, "password123").await;

    let response = app.get_all(&access_token).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(error_message(response).await, "Admin resources access denied");
}

#[tokio::test]
async fn test_all_lists_every_account_for_an_admin() {
    let app = TestApp::new().await;
    let admin_email = random_email();
    let user_email = random_email();

    app.create_account("Admin", &admin_email, "password123").await;
    app.create_account("Regular", &user_email, "password123").await;
    app.promote_to_admin(&admin_email).await;

    let access_token = app.access_token(&admin_email, "password123").await;

    let response = app.get_all(&access_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let users = body.as_array().expect("Body was not an array");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_update_profile_changes_name_and_avatar() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;
    let access_token = app.access_token(&email, "password123").await;

    let response = app
        .patch_update(
            &access_token,
            &serde_json::json!({
                "name": "Renamed User",
                "avatar": "https://example.com/avatar.png",
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(success_message(response).await, "Updated successfully!");

    let response = app.get_info(&access_token).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Renamed User");
    assert_eq!(body["avatar"], "https://example.com/avatar.png");
}

#[tokio::test]
async fn test_update_role_promotes_the_target_account() {
    let app = TestApp::new().await;
    let admin_email = random_email();
    let user_email = random_email();

    app.create_account("Admin", &admin_email, "password123").await;
    app.create_account("Regular", &user_email, "password123").await;
    app.promote_to_admin(&admin_email).await;

    let admin_token = app.access_token(&admin_email, "password123").await;
    let target = app.user_id(&user_email).await;

    let response = app
        .patch_update_role(&admin_token, target, &serde_json::json!({ "role": "admin" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(success_message(response).await, "Update role!");

    // The promoted account can now reach the admin route
    let promoted_token = app.access_token(&user_email, "password123").await;
    let response = app.get_all(&promoted_token).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_update_role_is_denied_for_a_regular_account() {
    let app = TestApp::new().await;
    let email = random_email();
    let other_email = random_email();

    app.create_account("Test User", &email, "password123").await;
    app.create_account("Other User", &other_email, "password123").await;

    let access_token = app.access_token(&email, "password123").await;
    let target = app.user_id(&other_email).await;

    let response = app
        .patch_update_role(&access_token, target, &serde_json::json!({ "role": "admin" }))
        .await;

    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn test_update_role_for_an_unknown_account_is_not_found() {
    let app = TestApp::new().await;
    let admin_email = random_email();

    app.create_account("Admin", &admin_email, "password123").await;
    app.promote_to_admin(&admin_email).await;

    let admin_token = app.access_token(&admin_email, "password123").await;

    let response = app
        .patch_update_role(
            &admin_token,
            Uuid::new_v4(),
            &serde_json::json!({ "role": "admin" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "User not found");
}
