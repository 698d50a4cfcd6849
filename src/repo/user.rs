use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::net::response::Result;
use crate::types::model::user::{NewUser, UserRecord};

const USER_COLUMNS: &str = "user_id, login_id, email, password, nickname, profile_image";

#[async_trait]
pub trait UserRepository {
    async fn insert(&self, user: NewUser) -> Result<UserRecord>;
    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserRecord>>;
    async fn exists_by_login_id(&self, login_id: &str) -> Result<bool>;
    async fn exists_by_email(&self, email: &str) -> Result<bool>;
    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool>;
}

pub struct PgUserRepository {
    pool: &'static Pool<Postgres>,
}

impl PgUserRepository {
    pub fn new(pool: &'static Pool<Postgres>) -> Self {
        PgUserRepository { pool }
    }

    async fn exists(&self, sql: &str, value: &str) -> Result<bool> {
        let (exists,): (bool,) = sqlx::query_as(sql).bind(value).fetch_one(self.pool).await?;
        Ok(exists)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser) -> Result<UserRecord> {
        let sql = format!(
            "insert into users (login_id, email, password, nickname, profile_image) \
             values ($1, $2, $3, $4, $5) \
             returning {USER_COLUMNS}"
        );
        let record = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(&user.login_id)
            .bind(&user.email)
            .bind(&user.password)
            .bind(&user.nickname)
            .bind(&user.profile_image)
            .fetch_one(self.pool)
            .await?;
        Ok(record)
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserRecord>> {
        let sql = format!("select {USER_COLUMNS} from users where user_id = $1");
        let record = sqlx::query_as::<_, UserRecord>(&sql)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(record)
    }

    async fn exists_by_login_id(&self, login_id: &str) -> Result<bool> {
        self.exists(
            "select exists(select 1 from users where login_id = $1)",
            login_id,
        )
        .await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        self.exists("select exists(select 1 from users where email = $1)", email)
            .await
    }

    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool> {
        self.exists(
            "select exists(select 1 from users where nickname = $1)",
            nickname,
        )
        .await
    }
}
