use crate::helpers::{TestApp, error_message, random_email, refresh_cookie_value, success_message};
use serde_json::Value;

#[tokio::test]
async fn test_login_sets_the_refresh_cookie_and_returns_no_access_token() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "password123" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let set_cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("No Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/refresh_token"));

    let refresh_token = refresh_cookie_value(&response).expect("No refresh cookie");
    assert!(!refresh_token.is_empty());

    // The access token only exists after a refresh call; login hands out
    // nothing but the cookie
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["msg"], "Login success!");
    assert!(body.get("access_token").is_none());
}

#[tokio::test]
async fn test_login_rejects_a_wrong_password() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "wrong-password" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Password is incorrect");
}

#[tokio::test]
async fn test_login_rejects_an_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "email": random_email(),
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "This email does not exist");
}

#[tokio::test]
async fn test_login_treats_a_malformed_email_as_unknown() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "email": "not-an-email",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_login_success_message_matches_the_contract() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "password123" }))
        .await;

    assert_eq!(success_message(response).await, "Login success!");
}
