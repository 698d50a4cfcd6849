use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use color_eyre::eyre::{eyre, Error};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PetGender {
    Male,
    Female,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PetSize {
    Big,
    Medium,
    Small,
}

impl PetGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetGender::Male => "MALE",
            PetGender::Female => "FEMALE",
            PetGender::Unknown => "UNKNOWN",
        }
    }
}

impl PetSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetSize::Big => "BIG",
            PetSize::Medium => "MEDIUM",
            PetSize::Small => "SMALL",
        }
    }
}

impl fmt::Display for PetGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetGender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(PetGender::Male),
            "FEMALE" => Ok(PetGender::Female),
            "UNKNOWN" => Ok(PetGender::Unknown),
            other => Err(eyre!("unknown pet gender: {other}")),
        }
    }
}

impl FromStr for PetSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BIG" => Ok(PetSize::Big),
            "MEDIUM" => Ok(PetSize::Medium),
            "SMALL" => Ok(PetSize::Small),
            other => Err(eyre!("unknown pet size: {other}")),
        }
    }
}

//Whats actually stored in the db, enums as their name strings
#[derive(Debug, Clone, FromRow)]
pub struct PetRecord {
    pub pet_id: i64,
    pub name: String,
    pub gender: String,
    pub size: String,
    pub birth_date: Option<NaiveDate>,
    pub age: i32,
    pub weight: Option<f64>,
    pub special_notes: Option<String>,
    pub breed: Option<String>,
    pub photo_url: Option<String>,
    //Owning user, never null
    pub user_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewPet {
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

/// Replacement values for every mutable field of a pet. There is no
/// partial update, a pet is always rewritten wholesale.
#[derive(Debug, Clone)]
pub struct PetUpdate {
    pub name: String,
    pub gender: PetGender,
    pub size: PetSize,
    pub birth_date: Option<NaiveDate>,
    pub age: i32,
    pub weight: Option<f64>,
    pub special_notes: Option<String>,
    pub breed: Option<String>,
    pub photo_url: Option<String>,
}
