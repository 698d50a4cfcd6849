use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub user_id: i64,
    pub login_id: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login_id: String,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}
