use serde::{Deserialize, Serialize};

use crate::types::model::user::{NewUser, UserRecord};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub login_id: String,
    pub email: String,
    pub password_raw: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub login_id: String,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

impl From<SignupRequest> for NewUser {
    fn from(request: SignupRequest) -> Self {
        NewUser {
            login_id: request.login_id,
            email: request.email,
            password: request.password_raw,
            nickname: request.nickname,
            profile_image: request.profile_image,
        }
    }
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        UserResponse {
            user_id: record.user_id,
            login_id: record.login_id,
            email: record.email,
            nickname: record.nickname,
            profile_image: record.profile_image,
        }
    }
}
