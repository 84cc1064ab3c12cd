//! API models for the animal resource.
//!
//! `Animal` is the full record served over the wire (and accepted on update);
//! `AnimalCreate` is the insert payload, which carries no identifier because
//! the database assigns one. Wire field names are camelCase.

use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity;

/// One shelter animal, exactly as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    /// Database-assigned identifier, immutable after creation.
    #[schema(example = 1)]
    pub animal_id: i32,
    #[schema(example = "Cat")]
    pub animal_type: Option<String>,
    #[schema(example = "Felix")]
    pub name: Option<String>,
    #[schema(example = "Domestic short hair")]
    pub breed: Option<String>,
    #[schema(example = "male")]
    pub sex: Option<String>,
    #[schema(example = "Brown tabby")]
    pub color: Option<String>,
    /// Free-form age description, e.g. "3 years".
    #[schema(example = "3 years")]
    pub age: Option<String>,
    #[schema(example = 15)]
    pub weight: Option<i32>,
    #[schema(example = "A true scaredy cat")]
    pub description: Option<String>,
}

/// Insert payload. Any `animalId` key in the request body is dropped during
/// deserialization; the identifier comes from the database.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalCreate {
    #[schema(example = "Cat")]
    pub animal_type: Option<String>,
    #[schema(example = "Felix")]
    pub name: Option<String>,
    #[schema(example = "Domestic short hair")]
    pub breed: Option<String>,
    #[schema(example = "male")]
    pub sex: Option<String>,
    #[schema(example = "Brown tabby")]
    pub color: Option<String>,
    #[schema(example = "3 years")]
    pub age: Option<String>,
    #[schema(example = 15)]
    pub weight: Option<i32>,
    #[schema(example = "A true scaredy cat")]
    pub description: Option<String>,
}

impl From<entity::Model> for Animal {
    fn from(model: entity::Model) -> Self {
        Self {
            animal_id: model.animal_id,
            animal_type: model.animal_type,
            name: model.name,
            breed: model.breed,
            sex: model.sex,
            color: model.color,
            age: model.age,
            weight: model.weight,
            description: model.description,
        }
    }
}

impl From<AnimalCreate> for entity::ActiveModel {
    fn from(create: AnimalCreate) -> Self {
        Self {
            animal_id: ActiveValue::NotSet,
            animal_type: ActiveValue::Set(create.animal_type),
            name: ActiveValue::Set(create.name),
            breed: ActiveValue::Set(create.breed),
            sex: ActiveValue::Set(create.sex),
            color: ActiveValue::Set(create.color),
            age: ActiveValue::Set(create.age),
            weight: ActiveValue::Set(create.weight),
            description: ActiveValue::Set(create.description),
        }
    }
}

/// Full-record form used by replace: every column is `Set`, including the
/// key, so the resulting UPDATE overwrites the row rather than merging.
impl From<Animal> for entity::ActiveModel {
    fn from(animal: Animal) -> Self {
        Self {
            animal_id: ActiveValue::Set(animal.animal_id),
            animal_type: ActiveValue::Set(animal.animal_type),
            name: ActiveValue::Set(animal.name),
            breed: ActiveValue::Set(animal.breed),
            sex: ActiveValue::Set(animal.sex),
            color: ActiveValue::Set(animal.color),
            age: ActiveValue::Set(animal.age),
            weight: ActiveValue::Set(animal.weight),
            description: ActiveValue::Set(animal.description),
        }
    }
}
