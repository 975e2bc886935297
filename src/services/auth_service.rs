use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::http::StatusCode;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::config::Config;
use crate::entities::user;
use crate::models::auth_model::{LoginResponse, ProfileResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt_utils::JwtUtils;

pub struct AuthService;

impl AuthService {
    pub async fn register_user(
        db: &DatabaseConnection,
        username: String,
        email: String,
        password: String,
    ) -> Result<user::Model, (StatusCode, &'static str, String)> {
        // 1. Check duplicate
        let duplicates = UserRepository::find_duplicates(db, &username, &email)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?;

        if !duplicates.is_empty() {
            return Err(Self::handle_duplicate_error(duplicates, username, email));
        }

        // 2. Hash password
        let hashed_password = Self::hash_password(password)
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "HASH_ERR", "Failed to hash password".to_string()))?;

        // 3. Save user
        let user = UserRepository::create(db, username, email, hashed_password)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_WRITE_ERR", "Failed to save user".to_string()))?;

        Ok(user)
    }

    pub async fn login_user(
        db: &DatabaseConnection,
        cfg: &Config,
        login_id: String,
        password: String,
    ) -> Result<LoginResponse, (StatusCode, &'static str, String)> {
        let user = UserRepository::find_by_login_id(db, &login_id)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "LOGIN_FAILED",
                "Username or password didn't match".to_string(),
            ))?;

        if !Self::verify_password(&password, &user.password_hash) {
            return Err((
                StatusCode::UNAUTHORIZED,
                "LOGIN_FAILED",
                "Username or password didn't match".to_string(),
            ));
        }

        let (token, expires_at) = JwtUtils::generate_jwt(cfg, user.public_id, &user.username)
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "TOKEN_ERR", "Failed to issue token".to_string()))?;

        Ok(LoginResponse {
            token,
            token_expires_at: expires_at,
            token_type: "Bearer".to_string(),
        })
    }

    pub async fn get_profile(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<ProfileResponse, (StatusCode, &'static str, String)> {
        let user = UserRepository::find_by_public_id(db, user_id)
            .await
            .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "DB_ERR", "Database error".to_string()))?
            .ok_or((StatusCode::NOT_FOUND, "USER_NOT_FOUND", "User not found".to_string()))?;

        Ok(ProfileResponse {
            id: user.public_id,
            username: user.username,
            email: user.email,
        })
    }

    fn handle_duplicate_error(
        duplicates: Vec<user::Model>,
        username: String,
        email: String,
    ) -> (StatusCode, &'static str, String) {
        for existing in duplicates {
            if existing.username == username {
                return (
                    StatusCode::CONFLICT,
                    "USERNAME_TAKEN",
                    format!("Username '{}' is already taken", username),
                );
            }
            if existing.email == email {
                return (
                    StatusCode::CONFLICT,
                    "EMAIL_TAKEN",
                    format!("Email '{}' is already registered", email),
                );
            }
        }
        (
            StatusCode::CONFLICT,
            "DUPLICATE_USER",
            "User already exists".to_string(),
        )
    }

    fn hash_password(password: String) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        Ok(argon2
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    fn verify_password(password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
