use std::net::SocketAddr;

use axum::{
    extract::{Path, Query},
    routing::{get, post},
    Json, Router,
};
use petplaces_server::clients::{get_db_pool, DB_POOL};
use petplaces_server::net::response::{ApiResponse, Result};
use petplaces_server::pet::PetService;
use petplaces_server::place::PlaceService;
use petplaces_server::repo::pet::PgPetRepository;
use petplaces_server::repo::place::PgPlaceRepository;
use petplaces_server::repo::user::PgUserRepository;
use petplaces_server::types::dto::pet::{PetRequest, PetResponse, PetUpdateRequest};
use petplaces_server::types::dto::place::{PlaceRequest, PlaceResponse};
use petplaces_server::types::dto::user::{SignupRequest, UserResponse};
use petplaces_server::user::UserService;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    init_db().await?;

    // build our application with a route
    let app = Router::new()
        .route("/api/places", get(list_places).post(create_place))
        .route("/api/places/search", get(search_places))
        .route("/api/places/:id", get(get_place_by_id))
        .route("/api/users/signup", post(signup))
        .route("/api/users/check-id", get(check_login_id))
        .route("/api/users/check-email", get(check_email))
        .route("/api/users/check-nickname", get(check_nickname))
        .route("/api/users/:id/pets", get(list_pets_by_owner))
        .route("/api/pets", post(register_pet))
        .route(
            "/api/pets/:id",
            get(get_pet_by_id).put(update_pet).delete(delete_pet),
        )
        .layer(CorsLayer::permissive());

    let port: u16 = std::env::var("PETPLACES_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()?;
    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;

    info!("Running on port {port}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

async fn init_db() -> color_eyre::Result<()> {
    let db_uri = std::env::var("DATABASE_URL")?;
    info!("Connecting to db");
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_uri)
        .await?;
    DB_POOL.set(db_pool).unwrap();
    info!("Connected");
    Ok(())
}

fn place_service() -> Result<PlaceService<PgPlaceRepository>> {
    Ok(PlaceService::new(PgPlaceRepository::new(get_db_pool()?)))
}

fn user_service() -> Result<UserService<PgUserRepository>> {
    Ok(UserService::new(PgUserRepository::new(get_db_pool()?)))
}

fn pet_service() -> Result<PetService<PgPetRepository, PgUserRepository>> {
    let pool = get_db_pool()?;
    Ok(PetService::new(
        PgPetRepository::new(pool),
        PgUserRepository::new(pool),
    ))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    keyword: String,
}

#[derive(Debug, Deserialize)]
struct CheckIdQuery {
    #[serde(rename = "loginId")]
    login_id: String,
}

#[derive(Debug, Deserialize)]
struct CheckEmailQuery {
    email: String,
}

#[derive(Debug, Deserialize)]
struct CheckNicknameQuery {
    nickname: String,
}

#[instrument]
async fn list_places() -> Result<Json<ApiResponse<Vec<PlaceResponse>>>> {
    let places = place_service()?.get_all_places().await?;
    Ok(Json(ApiResponse::ok(places)))
}

#[instrument]
async fn search_places(
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<PlaceResponse>>>> {
    let places = place_service()?.search_places(&query.keyword).await?;
    Ok(Json(ApiResponse::ok(places)))
}

#[instrument]
async fn get_place_by_id(Path(place_id): Path<i64>) -> Result<Json<ApiResponse<PlaceResponse>>> {
    let place = place_service()?.get_place_by_id(place_id).await?;
    Ok(Json(ApiResponse::ok(place)))
}

#[instrument(skip(request))]
async fn create_place(
    Json(request): Json<PlaceRequest>,
) -> Result<Json<ApiResponse<PlaceResponse>>> {
    let place = place_service()?.create_place(request).await?;
    Ok(Json(ApiResponse::ok(place)))
}

#[instrument(skip(request))]
async fn signup(Json(request): Json<SignupRequest>) -> Result<Json<ApiResponse<UserResponse>>> {
    let user = user_service()?.signup(request).await?;
    Ok(Json(ApiResponse::ok(user)))
}

#[instrument]
async fn check_login_id(Query(query): Query<CheckIdQuery>) -> Result<Json<ApiResponse<bool>>> {
    let taken = user_service()?.is_login_id_taken(&query.login_id).await?;
    Ok(Json(ApiResponse::ok(taken)))
}

#[instrument]
async fn check_email(Query(query): Query<CheckEmailQuery>) -> Result<Json<ApiResponse<bool>>> {
    let taken = user_service()?.is_email_taken(&query.email).await?;
    Ok(Json(ApiResponse::ok(taken)))
}

#[instrument]
async fn check_nickname(
    Query(query): Query<CheckNicknameQuery>,
) -> Result<Json<ApiResponse<bool>>> {
    let taken = user_service()?.is_nickname_taken(&query.nickname).await?;
    Ok(Json(ApiResponse::ok(taken)))
}

#[instrument(skip(request))]
async fn register_pet(Json(request): Json<PetRequest>) -> Result<Json<ApiResponse<PetResponse>>> {
    let pet = pet_service()?.register_pet(request).await?;
    Ok(Json(ApiResponse::ok(pet)))
}

#[instrument]
async fn get_pet_by_id(Path(pet_id): Path<i64>) -> Result<Json<ApiResponse<PetResponse>>> {
    let pet = pet_service()?.get_pet_by_id(pet_id).await?;
    Ok(Json(ApiResponse::ok(pet)))
}

#[instrument]
async fn list_pets_by_owner(
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<PetResponse>>>> {
    let pets = pet_service()?.get_pets_by_owner(user_id).await?;
    Ok(Json(ApiResponse::ok(pets)))
}

#[instrument(skip(request))]
async fn update_pet(
    Path(pet_id): Path<i64>,
    Json(request): Json<PetUpdateRequest>,
) -> Result<Json<ApiResponse<PetResponse>>> {
    let pet = pet_service()?.update_pet(pet_id, request).await?;
    Ok(Json(ApiResponse::ok(pet)))
}

#[instrument]
async fn delete_pet(Path(pet_id): Path<i64>) -> Result<Json<ApiResponse<()>>> {
    pet_service()?.delete_pet(pet_id).await?;
    Ok(Json(ApiResponse::message("Pet deleted")))
}
