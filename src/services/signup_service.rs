use crate::models::NewUser;
use crate::repositories::{RepositoryError, UserRepository};
use crate::utils::AppError;
use serde::{Deserialize, Serialize};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "signup success!";

#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Keeps the password out of logs.
impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub message: String,
}

/// Creates a user unless one with the same email exists.
///
/// The lookup is a fast path only: two concurrent signups can both pass it,
/// and the store's unique constraint decides which insert wins. The loser
/// gets the same [`AppError::Conflict`] as a plain duplicate.
pub async fn sign_up(
    repo: &dyn UserRepository,
    request: SignupRequest,
) -> Result<SignupResponse, AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::InvalidRequest("email is required.".to_string()));
    }

    let existing = repo.find_by_email(&request.email).await.map_err(|e| {
        log::error!("❌ error in signUp: {}", e);
        AppError::from(e)
    })?;
    if existing.is_some() {
        return Err(AppError::Conflict);
    }

    let new_user = NewUser {
        name: request.name,
        email: request.email,
        password: request.password,
    };

    match repo.insert(new_user).await {
        Ok(user) => {
            log::info!(
                "✅ User created: {} ({})",
                user.email,
                user.id.map(|id| id.to_hex()).unwrap_or_default()
            );
            Ok(SignupResponse {
                message: SIGNUP_SUCCESS_MESSAGE.to_string(),
            })
        }
        Err(RepositoryError::Duplicate(email)) => {
            log::warn!("⚠️ Concurrent signup lost the race for {}", email);
            Err(AppError::Conflict)
        }
        Err(e) => {
            log::error!("❌ error in signUp: {}", e);
            Err(e.into())
        }
    }
}
