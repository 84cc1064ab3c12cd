//! Storage accessor for the `animals` table.
//!
//! Thin façade between the HTTP handlers and Sea-ORM: each function performs
//! exactly one database operation, and the commit is that operation's own
//! implicit commit. There is no unit of work, no retry, and no multi-row
//! transaction. Outcomes come back as explicit [`ApiError`] results for the
//! caller to check.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, SqlErr};

use crate::entity::{ActiveModel, Entity};
use crate::errors::ApiError;
use crate::models::{Animal, AnimalCreate};

const RESOURCE: &str = "Animal";

/// Returns every animal in the shelter, in no guaranteed order.
///
/// # Errors
///
/// Any persistence failure surfaces as `ApiError::Database`.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Animal>, ApiError> {
    let models = Entity::find().all(db).await?;
    Ok(models.into_iter().map(Animal::from).collect())
}

/// Looks up one animal by its identifier.
///
/// # Errors
///
/// `ApiError::NotFound` when no row matches.
pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Animal, ApiError> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found(RESOURCE, Some(id.to_string())))?;
    Ok(Animal::from(model))
}

/// Inserts a new animal and returns it with the database-assigned
/// identifier populated. Callers cannot supply an identifier: the insert
/// payload has none.
///
/// # Errors
///
/// `ApiError::Conflict` on a key violation, `ApiError::Database` otherwise.
pub async fn insert(db: &DatabaseConnection, data: AnimalCreate) -> Result<Animal, ApiError> {
    let active: ActiveModel = data.into();
    let model = active.insert(db).await.map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            ApiError::conflict(format!("Duplicate animal: {detail}"))
        }
        _ => ApiError::from(err),
    })?;
    Ok(Animal::from(model))
}

/// Overwrites every column of the row identified by `id` with `animal`'s
/// values. This is a full replace, not a merge. The caller guarantees
/// `animal.animal_id == id` before this layer is reached.
///
/// Existence is only verified by the UPDATE itself: if the row was removed
/// since the caller last saw it, the statement affects zero rows and Sea-ORM
/// reports `RecordNotUpdated`. That conflict is surfaced as `NotFound` -
/// the record no longer exists as far as this service can tell.
///
/// # Errors
///
/// `ApiError::NotFound` when the row is absent at commit time,
/// `ApiError::Database` for any other persistence failure.
pub async fn replace(db: &DatabaseConnection, id: i32, animal: Animal) -> Result<Animal, ApiError> {
    let active: ActiveModel = animal.into();
    match active.update(db).await {
        Ok(model) => Ok(Animal::from(model)),
        Err(DbErr::RecordNotUpdated) => Err(ApiError::not_found(RESOURCE, Some(id.to_string()))),
        Err(err) => Err(err.into()),
    }
}

/// Deletes the row identified by `id`.
///
/// # Errors
///
/// `ApiError::NotFound` when no row was deleted.
pub async fn remove(db: &DatabaseConnection, id: i32) -> Result<(), ApiError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    match res.rows_affected {
        0 => Err(ApiError::not_found(RESOURCE, Some(id.to_string()))),
        _ => Ok(()),
    }
}
