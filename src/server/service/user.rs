use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::validation::normalize_email,
    model::user::{CreateUserParams, RegisterParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with an argon2 password hash.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AuthError::EmailTaken)` - Email already registered
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(params.password).await?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
            })
            .await
            .map_err(|e| match e.sql_err() {
                // Concurrent registration for the same email
                Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken.into(),
                _ => AppError::from(e),
            })?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(User::from_entity(user))
    }

    /// Verifies credentials.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Otherwise
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(user))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(User::from_entity))
    }
}

/// Hashes on the blocking pool.
async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Checks `password` against a stored PHC string. Unparseable hashes never match.
async fn verify_password(password: String, stored_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&stored_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))
}
