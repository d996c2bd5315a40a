use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user profile operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            username: command.username,
            name: command.name,
            password_hash,
            session: None,
        };

        let created = self.repository.create(user).await?;
        tracing::info!(username = %created.username, "User registered");

        Ok(created)
    }

    async fn get(&self, user: &User) -> Result<User, UserError> {
        self.repository
            .find_by_username(&user.username)
            .await?
            .ok_or_else(|| UserError::NotFound(user.username.to_string()))
    }

    async fn update(&self, user: &User, command: UpdateUserCommand) -> Result<User, UserError> {
        let mut current = self.get(user).await?;

        if let Some(name) = command.name {
            current.name = name;
        }

        if let Some(password) = command.password {
            current.password_hash = self.password_hasher.hash(&password)?;
        }

        self.repository.update_profile(current).await
    }
}
