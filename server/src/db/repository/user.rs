//! User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate};
use shared::types::Role;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::info;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let thing = self.base.parse_id(id)?;
        let user: Option<User> = self.base.db().select(thing).await?;
        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user with a hashed password
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                data.username
            )));
        }

        let hash_pass = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: None,
            display_name: data.display_name.unwrap_or_else(|| data.username.clone()),
            username: data.username,
            hash_pass,
            role: data.role,
            is_active: true,
        };

        let created: Option<User> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Seed the admin account on first boot
    pub async fn ensure_admin(&self, username: &str, password: &str) -> RepoResult<()> {
        if self.find_by_username(username).await?.is_some() {
            return Ok(());
        }

        self.create(UserCreate {
            username: username.to_string(),
            password: password.to_string(),
            display_name: Some("Administrator".to_string()),
            role: Role::Admin,
        })
        .await?;

        info!("Seeded admin account '{}'", username);
        Ok(())
    }
}
