use crate::helpers::{
    TestApp, error_message, random_email, refresh_cookie_value, success_message, token_config,
};
use minted_adapters::JwtTokenService;
use minted_core::{PendingRegistration, TokenKind, TokenService, UserStore};
use secrecy::Secret;

#[tokio::test]
async fn test_activation_creates_the_account() {
    let app = TestApp::new().await;
    let email = random_email();

    let activation_token = app
        .register_and_extract_activation_token("Test User", &email, "password123")
        .await;

    let response = app
        .post_activation(&serde_json::json!({ "activation_token": activation_token }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(success_message(response).await, "Account has been activated!");

    let users = app.user_store.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name(), "Test User");
}

#[tokio::test]
async fn test_activation_round_trip_allows_login() {
    let app = TestApp::new().await;
    let email = random_email();

    app.create_account("Test User", &email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({ "email": email, "password": "password123" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_activation_rejects_a_garbage_token() {
    let app = TestApp::new().await;

    let response = app
        .post_activation(&serde_json::json!({ "activation_token": "garbage" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid token");
}

#[tokio::test]
async fn test_activation_rejects_a_token_of_another_kind() {
    let app = TestApp::new().await;

    // Same payload, but signed with the access secret instead
    let pending = PendingRegistration::new(
        "Test User".to_string(),
        Secret::from(random_email()),
        Secret::from("$argon2id$fake-hash".to_string()),
    );
    let token = app
        .token_service
        .issue(TokenKind::Access, &pending)
        .unwrap();

    let response = app
        .post_activation(&serde_json::json!({ "activation_token": token }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn test_activating_the_same_token_twice_conflicts() {
    let app = TestApp::new().await;
    let email = random_email();

    let activation_token = app
        .register_and_extract_activation_token("Test User", &email, "password123")
        .await;

    let response = app
        .post_activation(&serde_json::json!({ "activation_token": activation_token }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .post_activation(&serde_json::json!({ "activation_token": activation_token }))
        .await;
    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "This email already exists");
}

#[tokio::test]
async fn test_concurrent_activations_for_one_email_create_one_account() {
    let app = TestApp::new().await;
    let email = random_email();

    // Registration persists nothing, so the same email can hold two live
    // activation tokens at once
    let first_token = app
        .register_and_extract_activation_token("Test User", &email, "password123")
        .await;
    let second_token = app
        .register_and_extract_activation_token("Test User", &email, "password123")
        .await;

    let first_body = serde_json::json!({ "activation_token": first_token });
    let second_body = serde_json::json!({ "activation_token": second_token });
    let (first, second) = tokio::join!(
        app.post_activation(&first_body),
        app.post_activation(&second_body),
    );

    let statuses = [first.status().as_u16(), second.status().as_u16()];
    assert_eq!(
        statuses.iter().filter(|status| **status == 200).count(),
        1,
        "exactly one activation may win: {statuses:?}"
    );
    assert_eq!(
        statuses.iter().filter(|status| **status == 409).count(),
        1,
        "the loser gets a conflict: {statuses:?}"
    );

    let users = app.user_store.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_full_lifecycle_with_a_foreign_signed_activation_token() {
    let app = TestApp::new().await;

    let mailed_token = app
        .register_and_extract_activation_token("A", "a@a.com", "secret1")
        .await;

    // A token signed elsewhere never activates, whatever its payload says
    let mut foreign_config = token_config();
    foreign_config.activation.secret = Secret::from("foreign-activation-secret".to_string());
    let foreign_token = JwtTokenService::new(foreign_config)
        .issue(
            TokenKind::Activation,
            &PendingRegistration::new(
                "A".to_string(),
                Secret::from("a@a.com".to_string()),
                Secret::from("$argon2id$fake-hash".to_string()),
            ),
        )
        .unwrap();

    let response = app
        .post_activation(&serde_json::json!({ "activation_token": foreign_token }))
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app
        .post_activation(&serde_json::json!({ "activation_token": mailed_token }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app
        .post_login(&serde_json::json!({ "email": "a@a.com", "password": "secret1" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(refresh_cookie_value(&response).is_some());

    let response = app
        .post_login(&serde_json::json!({ "email": "a@a.com", "password": "wrong-secret" }))
        .await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Password is incorrect");
}
