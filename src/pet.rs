use crate::net::response::{ApiError, Result};
use crate::repo::pet::PetRepository;
use crate::repo::user::UserRepository;
use crate::types::dto::pet::{PetRequest, PetResponse, PetUpdateRequest};
use crate::types::model::pet::PetRecord;

pub struct PetService<P, U> {
    pets: P,
    users: U,
}

impl<P: PetRepository, U: UserRepository> PetService<P, U> {
    pub fn new(pets: P, users: U) -> Self {
        PetService { pets, users }
    }

    pub async fn register_pet(&self, request: PetRequest) -> Result<PetResponse> {
        if self.users.find_by_id(request.user_id).await?.is_none() {
            return Err(ApiError::not_found("No user with this id"));
        }
        let record = self.pets.insert(request.into()).await?;
        pet_response(record)
    }

    pub async fn get_pet_by_id(&self, pet_id: i64) -> Result<PetResponse> {
        let record = self
            .pets
            .find_by_id(pet_id)
            .await?
            .ok_or(ApiError::not_found("No pet with this id"))?;
        pet_response(record)
    }

    pub async fn get_pets_by_owner(&self, user_id: i64) -> Result<Vec<PetResponse>> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::not_found("No user with this id"));
        }
        let records = self.pets.find_by_owner(user_id).await?;
        records.into_iter().map(pet_response).collect()
    }

    /// Wholesale update, all mutable fields replaced at once.
    pub async fn update_pet(&self, pet_id: i64, request: PetUpdateRequest) -> Result<PetResponse> {
        let record = self
            .pets
            .update(pet_id, request.into())
            .await?
            .ok_or(ApiError::not_found("No pet with this id"))?;
        pet_response(record)
    }

    pub async fn delete_pet(&self, pet_id: i64) -> Result<()> {
        if !self.pets.delete(pet_id).await? {
            return Err(ApiError::not_found("No pet with this id"));
        }
        Ok(())
    }
}

fn pet_response(record: PetRecord) -> Result<PetResponse> {
    Ok(PetResponse {
        pet_id: record.pet_id,
        name: record.name,
        gender: record.gender.parse()?,
        size: record.size.parse()?,
        birth_date: record.birth_date,
        age: record.age,
        weight: record.weight,
        special_notes: record.special_notes,
        breed: record.breed,
        photo_url: record.photo_url,
        user_id: record.user_id,
    })
}
