//! Persistence port for user records.
//!
//! Handlers depend on [`UserRepository`] only; `main` decides which
//! implementation backs it depending on whether the startup connection
//! succeeded.

pub mod user_repository;

#[cfg(test)]
pub mod memory;

use crate::models::{NewUser, User};
use async_trait::async_trait;

pub use user_repository::MongoUserRepository;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("user with email {0} already exists")]
    Duplicate(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Database(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Persists `user` and returns it with the storage-assigned id.
    /// A unique-email violation is reported as [`RepositoryError::Duplicate`].
    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;

    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Stands in for the store when the startup connection failed. No reconnects.
#[derive(Debug, Clone)]
pub struct UnavailableUserRepository {
    reason: String,
}

impl UnavailableUserRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> RepositoryError {
        RepositoryError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepositoryError> {
        Err(self.error())
    }

    async fn insert(&self, _user: NewUser) -> Result<User, RepositoryError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(self.error())
    }
}
