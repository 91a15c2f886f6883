use super::{RepositoryError, UserRepository};
use crate::database::{self, MongoDB};
use crate::models::{NewUser, User};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;

pub struct MongoUserRepository {
    db: MongoDB,
    users: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: MongoDB) -> Self {
        let users = db.users();
        Self { db, users }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.users
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let email = user.email.clone();
        let mut document = user.into_user(None);

        let result = self.users.insert_one(&document).await.map_err(|e| {
            if database::is_duplicate_key(&e) {
                RepositoryError::Duplicate(email)
            } else {
                RepositoryError::Database(e.to_string())
            }
        })?;

        document.id = result.inserted_id.as_object_id();
        Ok(document)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.db
            .ping()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }
}
