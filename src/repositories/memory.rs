//! In-memory `UserRepository` for handler and service tests.

use super::{RepositoryError, UserRepository};
use crate::models::{NewUser, User};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    fail_inserts_with: Option<String>,
    fail_lookups_with: Option<String>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_inserts(message: impl Into<String>) -> Self {
        Self {
            fail_inserts_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn failing_lookups(message: impl Into<String>) -> Self {
        Self {
            fail_lookups_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        self.users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.email == email)
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        if let Some(message) = &self.fail_lookups_with {
            return Err(RepositoryError::Database(message.clone()));
        }

        let found = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned();
        // Let a concurrent signup interleave between lookup and insert.
        tokio::task::yield_now().await;
        Ok(found)
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        if let Some(message) = &self.fail_inserts_with {
            return Err(RepositoryError::Database(message.clone()));
        }

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Duplicate(user.email));
        }
        let saved = user.into_user(Some(ObjectId::new()));
        users.push(saved.clone());
        Ok(saved)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
