use crate::net::response::{ApiError, Result};
use crate::repo::place::PlaceRepository;
use crate::types::dto::place::{PlaceRequest, PlaceResponse};

pub struct PlaceService<R> {
    repo: R,
}

impl<R: PlaceRepository> PlaceService<R> {
    pub fn new(repo: R) -> Self {
        PlaceService { repo }
    }

    pub async fn create_place(&self, request: PlaceRequest) -> Result<PlaceResponse> {
        let record = self.repo.insert(request.into()).await?;
        Ok(record.into())
    }

    pub async fn get_all_places(&self) -> Result<Vec<PlaceResponse>> {
        let records = self.repo.find_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_place_by_id(&self, place_id: i64) -> Result<PlaceResponse> {
        let record = self
            .repo
            .find_by_id(place_id)
            .await?
            .ok_or(ApiError::not_found("No place with this id"))?;
        Ok(record.into())
    }

    /// Matches the keyword against place names; only when that yields
    /// nothing does it fall back to addresses. Either/or, never a union.
    pub async fn search_places(&self, keyword: &str) -> Result<Vec<PlaceResponse>> {
        let mut records = self.repo.find_by_name_containing(keyword).await?;
        if records.is_empty() {
            records = self.repo.find_by_address_containing(keyword).await?;
        }
        Ok(records.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::memory::MemoryPlaceRepository;

    fn place(name: &str, address: &str) -> PlaceRequest {
        PlaceRequest {
            name: name.to_string(),
            address: address.to_string(),
            phone: None,
            operation_hours: None,
            pet_policy: None,
            latitude: None,
            longitude: None,
            photos: Vec::new(),
            category: None,
        }
    }

    async fn service_with(places: &[(&str, &str)]) -> PlaceService<MemoryPlaceRepository> {
        let service = PlaceService::new(MemoryPlaceRepository::new());
        for (name, address) in places.iter().copied() {
            service.create_place(place(name, address)).await.unwrap();
        }
        service
    }

    #[tokio::test]
    async fn search_returns_name_matches_when_any_exist() {
        let service = service_with(&[
            ("Happy Paws Cafe", "12 River St"),
            ("Cafe Mellow", "3 Paws Ave"),
            ("Sunny Park", "77 Cafe Blvd"),
        ])
        .await;

        let found = service.search_places("Cafe").await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Happy Paws Cafe", "Cafe Mellow"]);
    }

    #[tokio::test]
    async fn search_never_unions_name_and_address_matches() {
        // "Paws" hits one place by name and a different one by address;
        // only the name match may surface.
        let service = service_with(&[
            ("Happy Paws Cafe", "12 River St"),
            ("Cafe Mellow", "3 Paws Ave"),
        ])
        .await;

        let found = service.search_places("Paws").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Happy Paws Cafe");
    }

    #[tokio::test]
    async fn search_falls_back_to_addresses_when_no_name_matches() {
        let service = service_with(&[
            ("Happy Paws Cafe", "12 River St"),
            ("Sunny Park", "8 River Walk"),
            ("Cafe Mellow", "3 Paws Ave"),
        ])
        .await;

        let found = service.search_places("River").await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Happy Paws Cafe", "Sunny Park"]);
    }

    #[tokio::test]
    async fn search_is_case_sensitive() {
        let service = service_with(&[("Happy Paws Cafe", "12 River St")]).await;
        assert!(service.search_places("cafe").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_with_no_matches_anywhere_is_empty() {
        let service = service_with(&[("Happy Paws Cafe", "12 River St")]).await;
        assert!(service.search_places("Aquarium").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_id_returns_full_current_state() {
        let service = PlaceService::new(MemoryPlaceRepository::new());
        let mut request = place("Happy Paws Cafe", "12 River St");
        request.phone = Some("053-111-2222".to_string());
        request.photos = vec!["https://example.com/a.jpg".to_string()];
        let created = service.create_place(request).await.unwrap();

        let fetched = service.get_place_by_id(created.place_id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.phone.as_deref(), Some("053-111-2222"));
        assert_eq!(fetched.photos.len(), 1);
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_not_found() {
        let service = PlaceService::new(MemoryPlaceRepository::new());
        let err = service.get_place_by_id(999).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_all_places_lists_everything() {
        let service = service_with(&[("A", "a"), ("B", "b"), ("C", "c")]).await;
        assert_eq!(service.get_all_places().await.unwrap().len(), 3);
    }
}
