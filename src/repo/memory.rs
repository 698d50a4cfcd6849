//! In-memory repository implementations backing the service tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::net::response::Result;
use crate::repo::pet::PetRepository;
use crate::repo::place::PlaceRepository;
use crate::repo::user::UserRepository;
use crate::types::model::pet::{NewPet, PetRecord, PetUpdate};
use crate::types::model::place::{NewPlace, PlaceRecord};
use crate::types::model::user::{NewUser, UserRecord};

pub struct MemoryPlaceRepository {
    places: Mutex<Vec<PlaceRecord>>,
    next_id: AtomicI64,
}

impl MemoryPlaceRepository {
    pub fn new() -> Self {
        MemoryPlaceRepository {
            places: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl PlaceRepository for MemoryPlaceRepository {
    async fn insert(&self, place: NewPlace) -> Result<PlaceRecord> {
        let record = PlaceRecord {
            place_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: place.name,
            address: place.address,
            phone: place.phone,
            operation_hours: place.operation_hours,
            pet_policy: place.pet_policy,
            latitude: place.latitude,
            longitude: place.longitude,
            photos: place.photos,
            avg_rating: 0.0,
            review_count: 0,
            category: place.category,
        };
        self.places.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<PlaceRecord>> {
        Ok(self.places.lock().unwrap().clone())
    }

    async fn find_by_id(&self, place_id: i64) -> Result<Option<PlaceRecord>> {
        Ok(self
            .places
            .lock()
            .unwrap()
            .iter()
            .find(|place| place.place_id == place_id)
            .cloned())
    }

    async fn find_by_name_containing(&self, keyword: &str) -> Result<Vec<PlaceRecord>> {
        Ok(self
            .places
            .lock()
            .unwrap()
            .iter()
            .filter(|place| place.name.contains(keyword))
            .cloned()
            .collect())
    }

    async fn find_by_address_containing(&self, keyword: &str) -> Result<Vec<PlaceRecord>> {
        Ok(self
            .places
            .lock()
            .unwrap()
            .iter()
            .filter(|place| place.address.contains(keyword))
            .cloned()
            .collect())
    }
}

pub struct MemoryUserRepository {
    users: Mutex<Vec<UserRecord>>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        MemoryUserRepository {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<UserRecord> {
        let record = UserRecord {
            user_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            login_id: user.login_id,
            email: user.email,
            password: user.password,
            nickname: user.nickname,
            profile_image: user.profile_image,
        };
        self.users.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, user_id: i64) -> Result<Option<UserRecord>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned())
    }

    async fn exists_by_login_id(&self, login_id: &str) -> Result<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|user| user.login_id == login_id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|user| user.email == email))
    }

    async fn exists_by_nickname(&self, nickname: &str) -> Result<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|user| user.nickname == nickname))
    }
}

pub struct MemoryPetRepository {
    pets: Mutex<Vec<PetRecord>>,
    next_id: AtomicI64,
}

impl MemoryPetRepository {
    pub fn new() -> Self {
        MemoryPetRepository {
            pets: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl PetRepository for MemoryPetRepository {
    async fn insert(&self, pet: NewPet) -> Result<PetRecord> {
        let record = PetRecord {
            pet_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: pet.name,
            gender: pet.gender.as_str().to_string(),
            size: pet.size.as_str().to_string(),
            birth_date: pet.birth_date,
            age: pet.age,
            weight: pet.weight,
            special_notes: pet.special_notes,
            breed: pet.breed,
            photo_url: pet.photo_url,
            user_id: pet.user_id,
        };
        self.pets.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, pet_id: i64) -> Result<Option<PetRecord>> {
        Ok(self
            .pets
            .lock()
            .unwrap()
            .iter()
            .find(|pet| pet.pet_id == pet_id)
            .cloned())
    }

    async fn find_by_owner(&self, user_id: i64) -> Result<Vec<PetRecord>> {
        Ok(self
            .pets
            .lock()
            .unwrap()
            .iter()
            .filter(|pet| pet.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, pet_id: i64, update: PetUpdate) -> Result<Option<PetRecord>> {
        let mut pets = self.pets.lock().unwrap();
        let Some(pet) = pets.iter_mut().find(|pet| pet.pet_id == pet_id) else {
            return Ok(None);
        };
        pet.name = update.name;
        pet.gender = update.gender.as_str().to_string();
        pet.size = update.size.as_str().to_string();
        pet.birth_date = update.birth_date;
        pet.age = update.age;
        pet.weight = update.weight;
        pet.special_notes = update.special_notes;
        pet.breed = update.breed;
        pet.photo_url = update.photo_url;
        Ok(Some(pet.clone()))
    }

    async fn delete(&self, pet_id: i64) -> Result<bool> {
        let mut pets = self.pets.lock().unwrap();
        let before = pets.len();
        pets.retain(|pet| pet.pet_id != pet_id);
        Ok(pets.len() < before)
    }
}
