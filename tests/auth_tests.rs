mod common;

use axum::http::StatusCode;

use quotes_backend::services::auth_service::AuthService;
use quotes_backend::utils::jwt_utils::JwtUtils;

#[tokio::test]
async fn register_and_login_roundtrip() {
    let db = common::setup_db().await;
    let cfg = common::test_config();

    let user = AuthService::register_user(
        &db,
        "marktwain".to_string(),
        "twain@example.com".to_string(),
        "riverboat".to_string(),
    )
    .await
    .unwrap();

    let login = AuthService::login_user(&db, &cfg, "marktwain".to_string(), "riverboat".to_string())
        .await
        .unwrap();
    assert_eq!(login.token_type, "Bearer");

    let token_data = JwtUtils::validate_jwt(&cfg, &login.token).unwrap();
    assert_eq!(token_data.claims.sub, user.public_id);
    assert_eq!(token_data.claims.username, "marktwain");

    // Login by email resolves the same account
    let by_email = AuthService::login_user(
        &db,
        &cfg,
        "twain@example.com".to_string(),
        "riverboat".to_string(),
    )
    .await
    .unwrap();
    let claims = JwtUtils::validate_jwt(&cfg, &by_email.token).unwrap().claims;
    assert_eq!(claims.sub, user.public_id);

    let profile = AuthService::get_profile(&db, user.public_id).await.unwrap();
    assert_eq!(profile.username, "marktwain");
    assert_eq!(profile.email, "twain@example.com");
}

#[tokio::test]
async fn duplicate_username_or_email_is_rejected() {
    let db = common::setup_db().await;

    AuthService::register_user(
        &db,
        "marktwain".to_string(),
        "twain@example.com".to_string(),
        "riverboat".to_string(),
    )
    .await
    .unwrap();

    let (status, code, _) = AuthService::register_user(
        &db,
        "marktwain".to_string(),
        "other@example.com".to_string(),
        "password".to_string(),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code, "USERNAME_TAKEN");

    let (status, code, _) = AuthService::register_user(
        &db,
        "samclemens".to_string(),
        "twain@example.com".to_string(),
        "password".to_string(),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code, "EMAIL_TAKEN");
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_both_unauthorized() {
    let db = common::setup_db().await;
    let cfg = common::test_config();

    AuthService::register_user(
        &db,
        "marktwain".to_string(),
        "twain@example.com".to_string(),
        "riverboat".to_string(),
    )
    .await
    .unwrap();

    let (status, code, _) =
        AuthService::login_user(&db, &cfg, "marktwain".to_string(), "steamboat".to_string())
            .await
            .unwrap_err();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(code, "LOGIN_FAILED");

    let (status, _, _) =
        AuthService::login_user(&db, &cfg, "nobody".to_string(), "riverboat".to_string())
            .await
            .unwrap_err();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
