use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::model::pet::{NewPet, PetGender, PetSize, PetUpdate};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    pub name: String,
    pub gender: PetGender,
    pub size: PetSize,
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub age: i32,
    pub weight: Option<f64>,
    pub special_notes: Option<String>,
    pub breed: Option<String>,
    pub photo_url: Option<String>,
    pub user_id: i64,
}

/// Body of a pet update. Every mutable field is present, the stored pet
/// is replaced with exactly these values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdateRequest {
    pub name: String,
    pub gender: PetGender,
    pub size: PetSize,
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub age: i32,
    pub weight: Option<f64>,
    pub special_notes: Option<String>,
    pub breed: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetResponse {
    pub pet_id: i64,
    pub name: String,
    pub gender: PetGender,
    pub size: PetSize,
    pub birth_date: Option<NaiveDate>,
    pub age: i32,
    pub weight: Option<f64>,
    pub special_notes: Option<String>,
    pub breed: Option<String>,
    pub photo_url: Option<String>,
    pub user_id: i64,
}

impl From<PetRequest> for NewPet {
    fn from(request: PetRequest) -> Self {
        NewPet {
            name: request.name,
            gender: request.gender,
            size: request.size,
            birth_date: request.birth_date,
            age: request.age,
            weight: request.weight,
            special_notes: request.special_notes,
            breed: request.breed,
            photo_url: request.photo_url,
            user_id: request.user_id,
        }
    }
}

impl From<PetUpdateRequest> for PetUpdate {
    fn from(request: PetUpdateRequest) -> Self {
        PetUpdate {
            name: request.name,
            gender: request.gender,
            size: request.size,
            birth_date: request.birth_date,
            age: request.age,
            weight: request.weight,
            special_notes: request.special_notes,
            breed: request.breed,
            photo_url: request.photo_url,
        }
    }
}
