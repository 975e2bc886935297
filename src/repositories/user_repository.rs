use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::entities::{user, user::Entity as User};

pub struct UserRepository;

impl UserRepository {
    // Find user by email or username
    pub async fn find_by_login_id(
        db: &DatabaseConnection,
        login_id: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        User::find()
            .filter(
                Condition::any()
                    .add(user::Column::Email.eq(login_id))
                    .add(user::Column::Username.eq(login_id)),
            )
            .one(db)
            .await
    }

    pub async fn find_by_public_id(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<Option<user::Model>, DbErr> {
        User::find()
            .filter(user::Column::PublicId.eq(public_id))
            .one(db)
            .await
    }

    // Check what a registration would collide with
    pub async fn find_duplicates(
        db: &DatabaseConnection,
        username: &str,
        email: &str,
    ) -> Result<Vec<user::Model>, DbErr> {
        User::find()
            .filter(
                Condition::any()
                    .add(user::Column::Email.eq(email))
                    .add(user::Column::Username.eq(username)),
            )
            .all(db)
            .await
    }

    pub async fn create(
        db: &DatabaseConnection,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<user::Model, DbErr> {
        let new_user = user::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        };

        new_user.insert(db).await
    }
}
