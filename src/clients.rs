use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};
use sqlx::{Pool, Postgres};

pub static DB_POOL: OnceLock<Pool<Postgres>> = OnceLock::new();

pub fn get_db_pool() -> Result<&'static Pool<Postgres>> {
    DB_POOL.get().ok_or(eyre!("Failed to get db"))
}
