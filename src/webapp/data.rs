use color_eyre::eyre::{eyre, Result};
use tracing::warn;

use crate::net::response::ApiResponse;
use crate::types::dto::place::PlaceResponse;

/// Shown when a place has no photos of its own.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1518717758536-85ae29035b6d?auto=format&fit=crop&q=80&w=1000";

/// Map fallback position for places registered without coordinates.
pub const DEFAULT_LATITUDE: f64 = 35.8364;
pub const DEFAULT_LONGITUDE: f64 = 128.7544;

/// What every view consumes: one uniform shape with no optional fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub description: String,
    pub rating: f64,
    pub review_count: i64,
    pub category: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub details: String,
}

pub fn normalize(place: PlaceResponse) -> PlaceSummary {
    PlaceSummary {
        id: place.place_id,
        name: place.name,
        image: place
            .photos
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
        description: place.address.clone(),
        rating: place.avg_rating,
        review_count: place.review_count,
        category: place.category,
        lat: place.latitude.unwrap_or(DEFAULT_LATITUDE),
        lng: place.longitude.unwrap_or(DEFAULT_LONGITUDE),
        address: place.address,
        phone: place.phone.unwrap_or_default(),
        hours: place.operation_hours.unwrap_or_default(),
        details: place.pet_policy.unwrap_or_default(),
    }
}

/// One fetch of the whole place list on load. No retry, no timeout beyond
/// what reqwest applies on its own.
pub async fn fetch_places(client: &reqwest::Client, base_url: &str) -> Result<Vec<PlaceSummary>> {
    let envelope: ApiResponse<Vec<PlaceResponse>> = client
        .get(format!("{base_url}/api/places"))
        .send()
        .await?
        .json()
        .await?;
    if !envelope.success {
        return Err(eyre!(envelope
            .message
            .unwrap_or_else(|| "places request failed".to_string())));
    }
    Ok(envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .map(normalize)
        .collect())
}

/// Failure leaves the list empty; the views render with whatever loaded.
pub async fn load_places(client: &reqwest::Client, base_url: &str) -> Vec<PlaceSummary> {
    match fetch_places(client, base_url).await {
        Ok(places) => places,
        Err(e) => {
            warn!("failed to load places: {e}");
            Vec::new()
        }
    }
}
