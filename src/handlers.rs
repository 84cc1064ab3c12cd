//! HTTP handlers for the animal endpoints.
//!
//! The four near-identical controllers of the ancestry collapse to this one
//! module: each handler validates at most one invariant, makes exactly one
//! storage call, and maps the outcome to a status code.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
};
use sea_orm::DatabaseConnection;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::errors::ApiError;
use crate::models::{Animal, AnimalCreate};
use crate::store;

/// Base path the animal routes are nested under; also the prefix of the
/// `Location` header returned on create.
pub const ANIMALS_PATH: &str = "/api/v1/animals";

/// Mounts the five animal endpoints with their OpenAPI docs.
pub fn router(db: &DatabaseConnection) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(get_all_handler))
        .routes(routes!(get_one_handler))
        .routes(routes!(create_one_handler))
        .routes(routes!(update_one_handler))
        .routes(routes!(delete_one_handler))
        .with_state(db.clone())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = StatusCode::OK, description = "All animals currently in the shelter", body = [Animal]),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "list_animals",
    summary = "List every animal available for adoption",
    description = "Returns all animals in the shelter, in no guaranteed order."
)]
pub async fn get_all_handler(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    let animals = store::list(&db).await?;
    Ok(Json(animals))
}

#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = i32, Path, description = "Identifier of the animal")),
    responses(
        (status = StatusCode::OK, description = "The requested animal", body = Animal),
        (status = StatusCode::NOT_FOUND, description = "No animal with this id; check the animalId"),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "get_animal",
    summary = "Get the details of one animal",
    description = "Retrieves a single animal by its database-assigned id."
)]
pub async fn get_one_handler(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<Json<Animal>, ApiError> {
    let animal = store::find_by_id(&db, id).await?;
    Ok(Json(animal))
}

#[utoipa::path(
    post,
    path = "/",
    request_body = AnimalCreate,
    responses(
        (status = StatusCode::CREATED, description = "Animal created; Location points at the new record", body = Animal),
        (status = StatusCode::BAD_REQUEST, description = "Malformed request body"),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "create_animal",
    summary = "Register a new animal in the shelter",
    description = "Creates an animal record. Leave `animalId` out of the body - the database \
                   assigns one, and any id supplied by the caller is ignored."
)]
pub async fn create_one_handler(
    State(db): State<DatabaseConnection>,
    payload: Result<Json<AnimalCreate>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<Animal>), ApiError> {
    let Json(data) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let created = store::insert(&db, data).await?;
    let headers = location_of(created.animal_id);
    Ok((StatusCode::CREATED, headers, Json(created)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = i32, Path, description = "Identifier of the animal to edit")),
    request_body = Animal,
    responses(
        (status = StatusCode::OK, description = "Animal updated; returns the edited record", body = Animal),
        (status = StatusCode::BAD_REQUEST, description = "Malformed body, or animalId does not match the path id"),
        (status = StatusCode::NOT_FOUND, description = "No animal with this id exists"),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "update_animal",
    summary = "Edit an animal's record",
    description = "Replaces the stored record wholesale with the body, which must be the full \
                   animal with `animalId` equal to the path id. Fields left out of the body \
                   become null - this is an overwrite, not a merge."
)]
pub async fn update_one_handler(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    payload: Result<Json<Animal>, JsonRejection>,
) -> Result<Json<Animal>, ApiError> {
    let Json(animal) = payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    if animal.animal_id != id {
        return Err(ApiError::bad_request(format!(
            "animalId {} in the body does not match id {} in the path",
            animal.animal_id, id
        )));
    }
    let updated = store::replace(&db, id, animal).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = i32, Path, description = "Identifier of the animal to remove")),
    responses(
        (status = StatusCode::NO_CONTENT, description = "Animal deleted"),
        (status = StatusCode::NOT_FOUND, description = "No animal with this id exists"),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error")
    ),
    operation_id = "delete_animal",
    summary = "Remove an animal that has been adopted",
    description = "Deletes the animal's record permanently. There is no soft delete."
)]
pub async fn delete_one_handler(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    store::remove(&db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn location_of(id: i32) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, format!("{ANIMALS_PATH}/{id}").parse().unwrap());
    headers
}
