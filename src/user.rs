use crate::net::response::{ApiError, Result};
use crate::repo::user::UserRepository;
use crate::types::dto::user::{SignupRequest, UserResponse};

pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        UserService { repo }
    }

    /// Duplicate pre-check endpoints; `true` means the value is taken.
    pub async fn is_login_id_taken(&self, login_id: &str) -> Result<bool> {
        self.repo.exists_by_login_id(login_id).await
    }

    pub async fn is_email_taken(&self, email: &str) -> Result<bool> {
        self.repo.exists_by_email(email).await
    }

    pub async fn is_nickname_taken(&self, nickname: &str) -> Result<bool> {
        self.repo.exists_by_nickname(nickname).await
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<UserResponse> {
        for (field, value) in [
            ("loginId", &request.login_id),
            ("email", &request.email),
            ("password", &request.password_raw),
            ("nickname", &request.nickname),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::validation(format!("{field} is required")));
            }
        }

        // The client pre-checks these, but nothing stops a direct call.
        if self.repo.exists_by_login_id(&request.login_id).await? {
            return Err(ApiError::conflict("This login id is already taken"));
        }
        if self.repo.exists_by_email(&request.email).await? {
            return Err(ApiError::conflict("This email is already taken"));
        }
        if self.repo.exists_by_nickname(&request.nickname).await? {
            return Err(ApiError::conflict("This nickname is already taken"));
        }

        let record = self.repo.insert(request.into()).await?;
        Ok(record.into())
    }
}
