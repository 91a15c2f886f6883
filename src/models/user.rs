use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const USERS_COLLECTION: &str = "users";

/// Stored user document. `_id` is assigned by MongoDB on insert.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    pub email: String,
    // Stored as submitted.
    #[serde(default)]
    pub password: String,
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn into_user(self, id: Option<ObjectId>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    fn new_user() -> NewUser {
        NewUser {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "p".to_string(),
        }
    }

    #[test]
    fn test_unsaved_user_omits_id() {
        let document = to_document(&new_user().into_user(None)).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("email").unwrap(), "ana@example.com");
        assert_eq!(document.get_str("password").unwrap(), "p");
    }

    #[test]
    fn test_saved_user_keeps_object_id() {
        let id = ObjectId::new();
        let document = to_document(&new_user().into_user(Some(id))).unwrap();

        assert_eq!(document.get_object_id("_id").unwrap(), id);
    }

    #[test]
    fn test_reads_documents_with_unknown_fields() {
        let id = ObjectId::new();
        let user: User = from_document(doc! {
            "_id": id,
            "name": "Ana",
            "email": "ana@example.com",
            "password": "p",
            "__v": 0,
        })
        .unwrap();

        assert_eq!(user.id, Some(id));
        assert_eq!(user.email, "ana@example.com");
    }

    #[test]
    fn test_missing_name_and_password_default_to_empty() {
        let user: User = from_document(doc! { "email": "ana@example.com" }).unwrap();

        assert_eq!(user.name, "");
        assert_eq!(user.password, "");
    }
}
