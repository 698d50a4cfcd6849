use serde::{Deserialize, Serialize};

use crate::types::model::place::{NewPlace, PlaceRecord};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub operation_hours: Option<String>,
    pub pet_policy: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photos: Vec<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    pub place_id: i64,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub operation_hours: Option<String>,
    pub pet_policy: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photos: Vec<String>,
    pub avg_rating: f64,
    pub review_count: i64,
    pub category: Option<String>,
}

impl From<PlaceRequest> for NewPlace {
    fn from(request: PlaceRequest) -> Self {
        NewPlace {
            name: request.name,
            address: request.address,
            phone: request.phone,
            operation_hours: request.operation_hours,
            pet_policy: request.pet_policy,
            latitude: request.latitude,
            longitude: request.longitude,
            photos: request.photos,
            category: request.category,
        }
    }
}

impl From<PlaceRecord> for PlaceResponse {
    fn from(record: PlaceRecord) -> Self {
        PlaceResponse {
            place_id: record.place_id,
            name: record.name,
            address: record.address,
            phone: record.phone,
            operation_hours: record.operation_hours,
            pet_policy: record.pet_policy,
            latitude: record.latitude,
            longitude: record.longitude,
            photos: record.photos,
            avg_rating: record.avg_rating,
            review_count: record.review_count,
            category: record.category,
        }
    }
}
