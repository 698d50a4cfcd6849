use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::net::response::Result;
use crate::types::model::pet::{NewPet, PetRecord, PetUpdate};

const PET_COLUMNS: &str = "pet_id, name, gender, size, birth_date, age, weight, \
     special_notes, breed, photo_url, user_id";

#[async_trait]
pub trait PetRepository {
    async fn insert(&self, pet: NewPet) -> Result<PetRecord>;
    async fn find_by_id(&self, pet_id: i64) -> Result<Option<PetRecord>>;
    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<PetRecord>>;
    /// Replaces every mutable field, returns the updated row if it exists.
    async fn update(&self, pet_id: i64, update: PetUpdate) -> Result<Option<PetRecord>>;
    /// Returns whether a row was deleted.
    async fn delete(&self, pet_id: i64) -> Result<bool>;
}

pub struct PgPetRepository {
    pool: &'static Pool<Postgres>,
}

impl PgPetRepository {
    pub fn new(pool: &'static Pool<Postgres>) -> Self {
        PgPetRepository { pool }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn insert(&self, pet: NewPet) -> Result<PetRecord> {
        let sql = format!(
            "insert into pets \
             (name, gender, size, birth_date, age, weight, special_notes, breed, photo_url, user_id) \
             values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             returning {PET_COLUMNS}"
        );
        let record = sqlx::query_as::<_, PetRecord>(&sql)
            .bind(&pet.name)
            .bind(pet.gender.as_str())
            .bind(pet.size.as_str())
            .bind(pet.birth_date)
            .bind(pet.age)
            .bind(pet.weight)
            .bind(&pet.special_notes)
            .bind(&pet.breed)
            .bind(&pet.photo_url)
            .bind(pet.user_id)
            .fetch_one(self.pool)
            .await?;
        Ok(record)
    }

    async fn find_by_id(&self, pet_id: i64) -> Result<Option<PetRecord>> {
        let sql = format!("select {PET_COLUMNS} from pets where pet_id = $1");
        let record = sqlx::query_as::<_, PetRecord>(&sql)
            .bind(pet_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(record)
    }

    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<PetRecord>> {
        let sql = format!("select {PET_COLUMNS} from pets where user_id = $1 order by pet_id");
        let records = sqlx::query_as::<_, PetRecord>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;
        Ok(records)
    }

    async fn update(&self, pet_id: i64, update: PetUpdate) -> Result<Option<PetRecord>> {
        let sql = format!(
            "update pets set \
             name = $1, gender = $2, size = $3, birth_date = $4, age = $5, \
             weight = $6, special_notes = $7, breed = $8, photo_url = $9 \
             where pet_id = $10 \
             returning {PET_COLUMNS}"
        );
        let record = sqlx::query_as::<_, PetRecord>(&sql)
            .bind(&update.name)
            .bind(update.gender.as_str())
            .bind(update.size.as_str())
            .bind(update.birth_date)
            .bind(update.age)
            .bind(update.weight)
            .bind(&update.special_notes)
            .bind(&update.breed)
            .bind(&update.photo_url)
            .bind(pet_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(record)
    }

    async fn delete(&self, pet_id: i64) -> Result<bool> {
        let result = sqlx::query("delete from pets where pet_id = $1")
            .bind(pet_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
