use sqlx::FromRow;

//Whats actually stored in the db
#[derive(Debug, Clone, FromRow)]
pub struct PlaceRecord {
    pub place_id: i64,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub operation_hours: Option<String>,
    pub pet_policy: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photos: Vec<String>,
    //Derived from reviews, read as stored
    pub avg_rating: f64,
    pub review_count: i64,
    pub category: Option<String>,
}

//Fields supplied at registration, before an id exists
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub operation_hours: Option<String>,
    pub pet_policy: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photos: Vec<String>,
    pub category: Option<String>,
}
