use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::net::response::Result;
use crate::types::model::place::{NewPlace, PlaceRecord};

const PLACE_COLUMNS: &str = "place_id, name, address, phone, operation_hours, pet_policy, \
     latitude, longitude, photos, avg_rating, review_count, category";

/// Persistence boundary for places. The keyword lookups are plain
/// substring matches, case-sensitive as `LIKE` is on Postgres.
#[async_trait]
pub trait PlaceRepository {
    async fn insert(&self, place: NewPlace) -> Result<PlaceRecord>;
    async fn find_all(&self) -> Result<Vec<PlaceRecord>>;
    async fn find_by_id(&self, place_id: i64) -> Result<Option<PlaceRecord>>;
    async fn find_by_name_containing(&self, keyword: &str) -> Result<Vec<PlaceRecord>>;
    async fn find_by_address_containing(&self, keyword: &str) -> Result<Vec<PlaceRecord>>;
}

pub struct PgPlaceRepository {
    pool: &'static Pool<Postgres>,
}

impl PgPlaceRepository {
    pub fn new(pool: &'static Pool<Postgres>) -> Self {
        PgPlaceRepository { pool }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn insert(&self, place: NewPlace) -> Result<PlaceRecord> {
        let sql = format!(
            "insert into places \
             (name, address, phone, operation_hours, pet_policy, latitude, longitude, photos, category) \
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             returning {PLACE_COLUMNS}"
        );
        let record = sqlx::query_as::<_, PlaceRecord>(&sql)
            .bind(&place.name)
            .bind(&place.address)
            .bind(&place.phone)
            .bind(&place.operation_hours)
            .bind(&place.pet_policy)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(&place.photos)
            .bind(&place.category)
            .fetch_one(self.pool)
            .await?;
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<PlaceRecord>> {
        let sql = format!("select {PLACE_COLUMNS} from places order by place_id");
        let records = sqlx::query_as::<_, PlaceRecord>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(records)
    }

    async fn find_by_id(&self, place_id: i64) -> Result<Option<PlaceRecord>> {
        let sql = format!("select {PLACE_COLUMNS} from places where place_id = $1");
        let record = sqlx::query_as::<_, PlaceRecord>(&sql)
            .bind(place_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(record)
    }

    async fn find_by_name_containing(&self, keyword: &str) -> Result<Vec<PlaceRecord>> {
        let sql = format!("select {PLACE_COLUMNS} from places where name like $1 order by place_id");
        let records = sqlx::query_as::<_, PlaceRecord>(&sql)
            .bind(contains_pattern(keyword))
            .fetch_all(self.pool)
            .await?;
        Ok(records)
    }

    async fn find_by_address_containing(&self, keyword: &str) -> Result<Vec<PlaceRecord>> {
        let sql =
            format!("select {PLACE_COLUMNS} from places where address like $1 order by place_id");
        let records = sqlx::query_as::<_, PlaceRecord>(&sql)
            .bind(contains_pattern(keyword))
            .fetch_all(self.pool)
            .await?;
        Ok(records)
    }
}

/// Builds a `LIKE` pattern matching the keyword as a literal substring.
/// `%` and `_` are wildcards and `\` is the escape character, so all
/// three are escaped in the keyword itself.
fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
